//! Exifmark Core - EXIF overlay library.
//!
//! Exifmark reads the capture metadata embedded in a JPEG, blurs the photo,
//! and draws the metadata onto it over a translucent panel.
//!
//! # Architecture
//!
//! One linear pipeline per photo:
//!
//! ```text
//! Read → Extract Metadata → Format → Blur → Layout → Draw → Encode
//! ```
//!
//! Formatting and layout are pure and testable without images or fonts;
//! text measurement and drawing go through [`render::TextRenderer`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use exifmark_core::{Config, ImageProcessor};
//!
//! fn main() -> exifmark_core::Result<()> {
//!     let config = Config::load()?;
//!     let processor = ImageProcessor::new(&config);
//!
//!     let result = processor.process("./photo.jpg".as_ref())?;
//!     println!("Wrote {:?}", result.output);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, ExifmarkError, PipelineError, PipelineResult, Result};
pub use format::{FormattedStrings, ShutterSpeed};
pub use layout::{plan_layout, LayoutOptions, LayoutPlan, Palette, TextMeasure};
pub use pipeline::{Discovery, FileDiscovery, ImageProcessor, MetadataExtractor, SkipReason};
pub use render::{GlyphRenderer, TextRenderer};
pub use types::{ExifRecord, ProcessedImage, ProcessingStats, Ratio};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
