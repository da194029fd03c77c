//! Text formatting of extracted metadata.
//!
//! Produces the three overlay strings and the console summary from an
//! [`ExifRecord`]. Everything here is pure.

mod shutter;

pub use shutter::{ShutterSpeed, MAX_DENOMINATOR};

use crate::types::{ExifRecord, Ratio};

/// Camera names containing this marker have a fixed lens, so the equipment
/// line shows the camera only.
const FIXED_LENS_MARKER: &str = "iPhone";

/// The strings derived from one [`ExifRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedStrings {
    /// Camera plus capture settings, one item per line
    pub info_full: String,

    /// Focal length, aperture, ISO, and shutter speed, one per line
    pub capture_settings: String,

    /// Camera, and lens unless the camera has a fixed lens
    pub equipment: String,
}

impl FormattedStrings {
    pub fn from_record(record: &ExifRecord) -> Self {
        let capture_settings = format!(
            "{}mm\nf/{}\nISO {}\n{} sec",
            record.focal_length,
            format_f_number(record.f_number),
            record.iso,
            ShutterSpeed::from_ratio(record.exposure_time),
        );
        let info_full = format!("{}\n{}", record.camera, capture_settings);
        let equipment = if record.camera.contains(FIXED_LENS_MARKER) {
            record.camera.clone()
        } else {
            format!("{}\n{}", record.camera, record.lens_model)
        };

        Self {
            info_full,
            capture_settings,
            equipment,
        }
    }
}

/// Format an aperture value, dropping the fractional part of whole numbers.
///
/// `18/10` → `"1.8"`, `8/1` → `"8"`.
pub fn format_f_number(f_number: Ratio) -> String {
    let text = f_number.to_f64().to_string();
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// Console summary for one image.
///
/// ```text
/// Exif data for photo.jpg
/// Camera: Canon EOS R6
/// Lens: RF50mm F1.8 STM
/// 50mm f/1.8 ISO 400 1/200 sec
/// ```
pub fn summary_lines(file_name: &str, record: &ExifRecord) -> Vec<String> {
    vec![
        format!("Exif data for {file_name}"),
        format!("Camera: {}", record.camera),
        format!("Lens: {}", record.lens_model),
        format!(
            "{}mm f/{} ISO {} {} sec",
            record.focal_length,
            format_f_number(record.f_number),
            record.iso,
            ShutterSpeed::from_ratio(record.exposure_time),
        ),
    ]
}
