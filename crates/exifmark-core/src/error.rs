//! Error types for the exifmark pipeline.
//!
//! Errors are organized by stage and carry the offending file path so the
//! batch driver can log a per-file failure and move on to the next image.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for exifmark operations.
#[derive(Error, Debug)]
pub enum ExifmarkError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input file or folder does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a readable JPEG
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// A required EXIF tag is absent or unusable
    #[error("Missing metadata in {path}: {tag}")]
    MissingMetadata { path: PathBuf, tag: String },

    /// Font loading or drawing failed
    #[error("Render error for {path}: {message}")]
    Render { path: PathBuf, message: String },

    /// Writing the output image failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Image dimensions exceed limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },
}

/// Convenience type alias for exifmark results.
pub type Result<T> = std::result::Result<T, ExifmarkError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
