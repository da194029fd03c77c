//! File discovery for finding photos in a folder.

use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProcessingConfig;
use crate::error::{PipelineError, PipelineResult};

/// Extension given to every output file.
const OUTPUT_EXTENSION: &str = "jpg";

/// Discovers photos in a folder and names their outputs.
pub struct FileDiscovery {
    config: ProcessingConfig,
}

/// Why an entry was not selected for processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a file, or the name doesn't end in a supported extension
    Unsupported,
    /// An output of a previous run
    Generated,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unsupported => write!(f, "not a JPEG"),
            SkipReason::Generated => write!(f, "previous output"),
        }
    }
}

/// A folder entry that will not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl SkippedEntry {
    /// Just the filename portion of the path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Result of scanning a path.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Photos to process, sorted by path
    pub images: Vec<PathBuf>,
    /// Everything else, in the same order
    pub skipped: Vec<SkippedEntry>,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Discover photos at a path.
    ///
    /// If path is a file, it is selected or skipped on its own.
    /// If path is a directory, its direct children are classified; the
    /// folder is not searched recursively.
    pub fn discover(&self, path: &Path) -> PipelineResult<Discovery> {
        if !path.exists() {
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        let mut discovery = Discovery::default();

        if path.is_file() {
            self.classify(path, true, &mut discovery);
            return Ok(discovery);
        }

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => {
                    self.classify(entry.path(), entry.file_type().is_file(), &mut discovery)
                }
                Err(e) if e.depth() == 0 => {
                    tracing::error!("Cannot read folder {:?}: {}", path, e);
                    return Err(PipelineError::FileNotFound(path.to_path_buf()));
                }
                Err(e) => tracing::warn!("Skipping unreadable entry: {}", e),
            }
        }

        Ok(discovery)
    }

    fn classify(&self, path: &Path, is_file: bool, discovery: &mut Discovery) {
        let reason = match self.stem(path) {
            Some(stem) if is_file => {
                if self.config.skip_generated && stem.ends_with(&self.config.output_suffix) {
                    Some(SkipReason::Generated)
                } else {
                    None
                }
            }
            _ => Some(SkipReason::Unsupported),
        };

        match reason {
            None => discovery.images.push(path.to_path_buf()),
            Some(reason) => discovery.skipped.push(SkippedEntry {
                path: path.to_path_buf(),
                reason,
            }),
        }
    }

    /// File name without its supported extension, or `None` when the name
    /// doesn't end in one. Matching is case-sensitive.
    fn stem<'a>(&self, path: &'a Path) -> Option<&'a str> {
        let name = path.file_name()?.to_str()?;
        self.config.extensions.iter().find_map(|ext| {
            name.strip_suffix(ext.as_str())
                .and_then(|rest| rest.strip_suffix('.'))
        })
    }

    /// Output path for a photo: `<stem><suffix>.jpg` next to the input.
    pub fn output_path(&self, path: &Path) -> PathBuf {
        let stem = match self.stem(path) {
            Some(stem) => stem.to_string(),
            None => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        path.with_file_name(format!(
            "{stem}{}.{OUTPUT_EXTENSION}",
            self.config.output_suffix
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery() -> FileDiscovery {
        FileDiscovery::new(ProcessingConfig::default())
    }

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_extension_matching_is_case_sensitive() {
        let discovery = discovery();

        assert_eq!(discovery.stem(Path::new("test.jpg")), Some("test"));
        assert_eq!(discovery.stem(Path::new("test.jpeg")), Some("test"));
        assert_eq!(discovery.stem(Path::new("test.JPG")), None);
        assert_eq!(discovery.stem(Path::new("test.png")), None);
        assert_eq!(discovery.stem(Path::new("test.txt")), None);
        assert_eq!(discovery.stem(Path::new("testjpg")), None);
    }

    #[test]
    fn test_output_path_strips_extension() {
        let discovery = discovery();
        assert_eq!(
            discovery.output_path(Path::new("/photos/beach.jpg")),
            PathBuf::from("/photos/beach_blur_with_text.jpg")
        );
        assert_eq!(
            discovery.output_path(Path::new("/photos/beach.jpeg")),
            PathBuf::from("/photos/beach_blur_with_text.jpg")
        );
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let discovery = discovery();
        assert_eq!(
            discovery.output_path(Path::new("a.jpg.b.jpg")),
            PathBuf::from("a.jpg.b_blur_with_text.jpg")
        );
    }

    #[test]
    fn test_discover_sorts_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "a.jpeg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "a_blur_with_text.jpg");
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();
        touch(&dir.path().join("nested.jpg"), "deep.jpg");

        let found = discovery().discover(dir.path()).unwrap();

        assert_eq!(
            found.images,
            vec![dir.path().join("a.jpeg"), dir.path().join("b.jpg")]
        );
        let skipped: Vec<(String, SkipReason)> = found
            .skipped
            .iter()
            .map(|s| (s.file_name(), s.reason))
            .collect();
        assert_eq!(
            skipped,
            vec![
                ("a_blur_with_text.jpg".to_string(), SkipReason::Generated),
                ("nested.jpg".to_string(), SkipReason::Unsupported),
                ("notes.txt".to_string(), SkipReason::Unsupported),
            ]
        );
    }

    #[test]
    fn test_generated_outputs_kept_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a_blur_with_text.jpg");

        let config = ProcessingConfig {
            skip_generated: false,
            ..ProcessingConfig::default()
        };
        let found = FileDiscovery::new(config).discover(dir.path()).unwrap();
        assert_eq!(found.images.len(), 1);
    }

    #[test]
    fn test_discover_single_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.jpg");

        let found = discovery().discover(&dir.path().join("one.jpg")).unwrap();
        assert_eq!(found.images, vec![dir.path().join("one.jpg")]);
        assert!(found.skipped.is_empty());
    }

    #[test]
    fn test_discover_missing_path() {
        let result = discovery().discover(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(PipelineError::FileNotFound(_))));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Unsupported.to_string(), "not a JPEG");
        assert_eq!(SkipReason::Generated.to_string(), "previous output");
    }
}
