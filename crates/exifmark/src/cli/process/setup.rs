//! Processor setup: input and font checks before any photo is touched.

use std::path::Path;

use exifmark_core::{Config, ImageProcessor};

/// Validate the input and font, and build the processor.
pub fn setup_processor(input: &Path, config: &Config) -> anyhow::Result<ImageProcessor> {
    if !input.exists() {
        anyhow::bail!(
            "Input path does not exist: {:?}\n\n  Hint: Check the folder path and try again.",
            input
        );
    }

    let processor = ImageProcessor::new(config);

    let font = processor.font_path();
    if !font.is_file() {
        anyhow::bail!(
            "Font file not found: {:?}\n\n  Hint: Set `render.font_path` in {} or place the font in the working directory.",
            font,
            Config::default_path().display()
        );
    }
    tracing::debug!("Using font {:?}", font);

    Ok(processor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_input_is_fatal() {
        let err = setup_processor(Path::new("/nonexistent/photos"), &Config::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("Input path does not exist"));
    }

    #[test]
    fn test_missing_font_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.font_path = PathBuf::from("/nonexistent/font.otf");

        let err = setup_processor(dir.path(), &config).err().unwrap();
        assert!(err.to_string().contains("Font file not found"));
    }

    #[test]
    fn test_existing_font_passes() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("font.otf");
        std::fs::write(&font, b"not parsed until a photo is processed").unwrap();
        let mut config = Config::default();
        config.render.font_path = font;

        assert!(setup_processor(dir.path(), &config).is_ok());
    }
}
