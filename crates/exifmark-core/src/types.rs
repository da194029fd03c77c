//! Core data types shared across the pipeline stages.

use std::fmt;
use std::path::PathBuf;

use crate::format::FormattedStrings;

/// An unsigned EXIF rational (`num / denom`).
///
/// The extractor never produces a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub num: u32,
    pub denom: u32,
}

impl Ratio {
    pub fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.denom as f64
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// Capture metadata read from a photo's EXIF block.
///
/// One record per processed image; every field is required.
#[derive(Debug, Clone, PartialEq)]
pub struct ExifRecord {
    /// Camera model (`Model`)
    pub camera: String,

    /// Lens model (`LensModel`)
    pub lens_model: String,

    /// 35mm-equivalent focal length in mm (`FocalLengthIn35mmFilm`)
    pub focal_length: u32,

    /// Aperture (`FNumber`)
    pub f_number: Ratio,

    /// Exposure time in seconds (`ExposureTime`)
    pub exposure_time: Ratio,

    /// ISO sensitivity (`PhotographicSensitivity`)
    pub iso: u32,
}

/// The outcome of running one photo through the pipeline.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Input file
    pub source: PathBuf,

    /// Written output file
    pub output: PathBuf,

    /// Just the filename portion of the input
    pub file_name: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Metadata the overlay was built from
    pub exif: ExifRecord,

    /// Strings drawn onto the image
    pub strings: FormattedStrings,

    /// Brightness of the blurred image (0 = black, 1 = white)
    pub brightness: f64,

    /// False when the equipment text overflows the image width even at the
    /// smallest allowed font size
    pub text_fits: bool,
}

/// Processing statistics for a batch run.
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Total images processed successfully
    pub succeeded: usize,

    /// Total images that failed
    pub failed: usize,

    /// Total entries skipped (not a JPEG, or a previous output)
    pub skipped: usize,

    /// Processing rate in images per second
    pub images_per_second: f64,

    /// Total processing time in seconds
    pub total_seconds: f64,
}

impl ProcessingStats {
    /// True when no image failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
