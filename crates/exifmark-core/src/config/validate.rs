//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.extensions must not be empty".into(),
            ));
        }
        if self.processing.output_suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.output_suffix must not be empty".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }

        let render = &self.render;
        let floats = [
            ("blur_radius", render.blur_radius),
            ("line_spacing", render.line_spacing),
            ("equipment_scale", render.equipment_scale),
            ("capture_offset", render.capture_offset),
            ("equipment_offset", render.equipment_offset),
            ("shrink_factor", render.shrink_factor),
            ("min_font_size", render.min_font_size),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "render.{name} must be a finite number"
            )));
        }
        if !(1..=100).contains(&render.jpeg_quality) {
            return Err(ConfigError::ValidationError(
                "render.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        if render.blur_radius < 0.0 {
            return Err(ConfigError::ValidationError(
                "render.blur_radius must be >= 0".into(),
            ));
        }
        if render.line_spacing < 0.0 {
            return Err(ConfigError::ValidationError(
                "render.line_spacing must be >= 0".into(),
            ));
        }
        if render.shrink_factor <= 0.0 || render.shrink_factor >= 1.0 {
            return Err(ConfigError::ValidationError(
                "render.shrink_factor must be between 0.0 and 1.0 (exclusive)".into(),
            ));
        }
        if render.equipment_scale <= 0.0 {
            return Err(ConfigError::ValidationError(
                "render.equipment_scale must be > 0".into(),
            ));
        }
        if render.capture_offset < 0.0 || render.equipment_offset < 0.0 {
            return Err(ConfigError::ValidationError(
                "render.capture_offset and render.equipment_offset must be >= 0".into(),
            ));
        }
        if render.min_font_size <= 0.0 {
            return Err(ConfigError::ValidationError(
                "render.min_font_size must be > 0".into(),
            ));
        }
        Ok(())
    }
}
