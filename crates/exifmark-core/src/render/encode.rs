//! JPEG output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::error::{PipelineError, PipelineResult};

/// Flatten the canvas to RGB and write it to `path` as a JPEG.
///
/// An existing file at `path` is overwritten.
pub fn encode_jpeg(canvas: RgbaImage, quality: u8, path: &Path) -> PipelineResult<()> {
    let encode_error = |message: String| PipelineError::Encode {
        path: path.to_path_buf(),
        message,
    };

    let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();

    let file = File::create(path).map_err(|e| encode_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    encoder
        .encode_image(&rgb)
        .map_err(|e| encode_error(e.to_string()))?;
    writer.flush().map_err(|e| encode_error(e.to_string()))?;

    Ok(())
}
