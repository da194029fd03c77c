//! Exifmark CLI - blur photos and overlay their EXIF capture settings.
//!
//! Every JPEG in the folder gets a blurred copy with its camera, lens, focal
//! length, aperture, ISO, and shutter speed drawn over a translucent panel,
//! saved next to it as `<name>_blur_with_text.jpg`.
//!
//! # Usage
//!
//! ```bash
//! # Process a folder
//! exifmark ./photos/
//!
//! # Debug logging, JSON formatted
//! exifmark ./photos/ -v --json-logs
//!
//! # View configuration
//! exifmark config show
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Exifmark - blur photos and overlay their EXIF capture settings.
#[derive(Parser, Debug)]
#[command(name = "exifmark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    /// Folder of JPEG photos to process (a single photo also works)
    #[arg(required = true)]
    folder: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "EXIFMARK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

/// Load the explicit config file, or the default one if present.
///
/// An explicit file that fails to load is an error; a broken default file
/// only produces a warning.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<exifmark_core::Config> {
    if let Some(path) = explicit {
        return exifmark_core::Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    // Logging isn't initialized yet, so use eprintln for config warnings.
    Ok(exifmark_core::Config::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config: {e}\n  \
             Using default configuration. Check your config file with `exifmark config path`."
        );
        exifmark_core::Config::default()
    }))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Exifmark v{}", exifmark_core::VERSION);

    match cli.command {
        Some(Commands::Config(args)) => {
            cli::config::execute(args, &config, cli.config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let Some(folder) = cli.folder else {
                anyhow::bail!("Missing <FOLDER> argument");
            };
            let stats = cli::process::execute(&folder, &config)?;
            if stats.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                tracing::warn!("{} photo(s) failed", stats.failed);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_folder() {
        let cli = Cli::try_parse_from(["exifmark", "./photos"]).unwrap();
        assert_eq!(cli.folder, Some(PathBuf::from("./photos")));
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_folder_is_required() {
        assert!(Cli::try_parse_from(["exifmark"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "exifmark",
            "./photos",
            "-v",
            "--json-logs",
            "--config",
            "/tmp/exifmark.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.json_logs);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/exifmark.toml")));
    }

    #[test]
    fn test_config_subcommand_without_folder() {
        let cli = Cli::try_parse_from(["exifmark", "config", "init", "--force"]).unwrap();
        assert!(cli.folder.is_none());
        match cli.command {
            Some(Commands::Config(args)) => assert!(matches!(
                args.command,
                cli::config::ConfigCommand::Init { force: true }
            )),
            other => panic!("Expected config command, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_config_must_load() {
        let err = load_config(Some(Path::new("/nonexistent/exifmark.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_explicit_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exifmark.toml");
        std::fs::write(&path, "[render]\njpeg_quality = 90\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.render.jpeg_quality, 90);
    }
}
