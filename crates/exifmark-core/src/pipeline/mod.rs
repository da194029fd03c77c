//! Image processing pipeline components.
//!
//! This module contains all the stages of the per-photo pipeline:
//! - **discovery**: Find photos in a folder and name their outputs
//! - **validate**: Pre-processing validation
//! - **decode**: Decode JPEG bytes with dimension limits
//! - **metadata**: Extract the required EXIF tags
//! - **processor**: Orchestrates the full pipeline

pub mod decode;
pub mod discovery;
pub mod metadata;
pub mod processor;
pub mod validate;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{Discovery, FileDiscovery, SkipReason, SkippedEntry};
pub use metadata::MetadataExtractor;
pub use processor::ImageProcessor;
pub use validate::Validator;
