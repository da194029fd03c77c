//! Sub-configuration structs and their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File selection and output naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// File name extensions selected for processing (matched case-sensitively)
    pub extensions: Vec<String>,

    /// Appended to the input stem to form the output file name
    pub output_suffix: String,

    /// Skip inputs that are themselves outputs of a previous run
    pub skip_generated: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["jpg".to_string(), "jpeg".to_string()],
            output_suffix: "_blur_with_text".to_string(),
            skip_generated: true,
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 20000,
        }
    }
}

/// Blur, text layout, and encoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// TrueType/OpenType font used for the overlay (supports `~`)
    pub font_path: PathBuf,

    /// Gaussian blur sigma applied to the whole photo
    pub blur_radius: f32,

    /// JPEG quality of the written output (1-100)
    pub jpeg_quality: u8,

    /// Extra pixels between lines of a text block
    pub line_spacing: f32,

    /// Equipment block font size relative to the base size
    pub equipment_scale: f32,

    /// Vertical multiplier applied to the centered y of the capture block
    pub capture_offset: f32,

    /// Vertical multiplier applied to the centered y of the equipment block
    pub equipment_offset: f32,

    /// Factor applied per step while shrinking text to fit the width
    pub shrink_factor: f32,

    /// Upper bound on shrink steps
    pub max_shrink_steps: u32,

    /// Font size below which shrinking stops
    pub min_font_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("OpenRunde-Semibold.otf"),
            blur_radius: 50.0,
            jpeg_quality: 75,
            line_spacing: 30.0,
            equipment_scale: 0.7,
            capture_offset: 0.4,
            equipment_offset: 1.7,
            shrink_factor: 0.9,
            max_shrink_steps: 64,
            min_font_size: 4.0,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
