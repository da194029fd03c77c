//! EXIF metadata extraction from photos.

use exif::{Exif, Field, In, Reader, Tag, Value};
use std::io::Cursor;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::types::{ExifRecord, Ratio};

/// Extracts the capture metadata drawn onto each photo.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract an [`ExifRecord`] from the raw bytes of a JPEG.
    ///
    /// Every field is required. The first absent or unusable tag is reported
    /// as [`PipelineError::MissingMetadata`]; a file without any EXIF block
    /// reports the tag as `EXIF`.
    pub fn extract(bytes: &[u8], path: &Path) -> PipelineResult<ExifRecord> {
        let exif = Reader::new()
            .read_from_container(&mut Cursor::new(bytes))
            .map_err(|e| {
                tracing::debug!("No EXIF in {:?}: {}", path, e);
                missing(path, "EXIF")
            })?;
        Self::from_exif(&exif, path)
    }

    /// Build a record from already-parsed EXIF data.
    pub fn from_exif(exif: &Exif, path: &Path) -> PipelineResult<ExifRecord> {
        Ok(ExifRecord {
            camera: Self::get_string(exif, Tag::Model, "Model", path)?,
            lens_model: Self::get_string(exif, Tag::LensModel, "LensModel", path)?,
            focal_length: Self::get_u32(
                exif,
                Tag::FocalLengthIn35mmFilm,
                "FocalLengthIn35mmFilm",
                path,
            )?,
            f_number: Self::get_ratio(exif, Tag::FNumber, "FNumber", path)?,
            exposure_time: Self::get_ratio(exif, Tag::ExposureTime, "ExposureTime", path)?,
            iso: Self::get_u32(
                exif,
                Tag::PhotographicSensitivity,
                "PhotographicSensitivity",
                path,
            )?,
        })
    }

    fn field<'a>(exif: &'a Exif, tag: Tag, name: &str, path: &Path) -> PipelineResult<&'a Field> {
        exif.get_field(tag, In::PRIMARY)
            .ok_or_else(|| missing(path, name))
    }

    /// ASCII field, trimmed of NULs and surrounding whitespace.
    fn get_string(exif: &Exif, tag: Tag, name: &str, path: &Path) -> PipelineResult<String> {
        match &Self::field(exif, tag, name, path)?.value {
            Value::Ascii(values) => values
                .first()
                .map(|bytes| {
                    String::from_utf8_lossy(bytes)
                        .trim_matches(|c: char| c == '\0' || c.is_whitespace())
                        .to_string()
                })
                .ok_or_else(|| missing(path, name)),
            _ => Err(missing(path, name)),
        }
    }

    /// SHORT or LONG field.
    fn get_u32(exif: &Exif, tag: Tag, name: &str, path: &Path) -> PipelineResult<u32> {
        let value = match &Self::field(exif, tag, name, path)?.value {
            Value::Short(v) => v.first().map(|&x| x as u32),
            Value::Long(v) => v.first().copied(),
            _ => None,
        };
        value.ok_or_else(|| missing(path, name))
    }

    /// RATIONAL field with a non-zero denominator.
    fn get_ratio(exif: &Exif, tag: Tag, name: &str, path: &Path) -> PipelineResult<Ratio> {
        match &Self::field(exif, tag, name, path)?.value {
            Value::Rational(v) => v
                .first()
                .filter(|r| r.denom != 0)
                .map(|r| Ratio::new(r.num, r.denom))
                .ok_or_else(|| missing(path, name)),
            _ => Err(missing(path, name)),
        }
    }
}

fn missing(path: &Path, tag: &str) -> PipelineError {
    PipelineError::MissingMetadata {
        path: path.to_path_buf(),
        tag: tag.to_string(),
    }
}
