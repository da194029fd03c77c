//! Pipeline orchestration - wires together all processing stages.

use std::path::{Path, PathBuf};
use std::time::Instant;

use image::DynamicImage;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult, Result};
use crate::format::FormattedStrings;
use crate::layout::{self, LayoutOptions};
use crate::render::{self, GlyphRenderer, TextRenderer};
use crate::types::ProcessedImage;

use super::decode::ImageDecoder;
use super::discovery::{Discovery, FileDiscovery};
use super::metadata::MetadataExtractor;
use super::validate::Validator;

/// The main image processor that orchestrates the full pipeline.
pub struct ImageProcessor {
    validator: Validator,
    decoder: ImageDecoder,
    discovery: FileDiscovery,
    layout: LayoutOptions,
    font_path: PathBuf,
    blur_radius: f32,
    jpeg_quality: u8,
}

impl ImageProcessor {
    /// Create a new image processor with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            validator: Validator::new(config.limits.clone()),
            decoder: ImageDecoder::new(config.limits.clone()),
            discovery: FileDiscovery::new(config.processing.clone()),
            layout: LayoutOptions::from(&config.render),
            font_path: config.font_path(),
            blur_radius: config.render.blur_radius,
            jpeg_quality: config.render.jpeg_quality,
        }
    }

    /// Process a single photo, loading the configured font for it.
    ///
    /// The font is dropped together with the decoded image when the call
    /// returns.
    pub fn process(&self, path: &Path) -> Result<ProcessedImage> {
        let renderer = GlyphRenderer::load(&self.font_path)?;
        self.process_with(path, &renderer)
    }

    /// Process a single photo with the given text renderer.
    ///
    /// Writes `<stem><suffix>.jpg` next to the input, overwriting any
    /// previous output.
    pub fn process_with<R: TextRenderer + ?Sized>(
        &self,
        path: &Path,
        renderer: &R,
    ) -> Result<ProcessedImage> {
        let start = Instant::now();
        tracing::debug!("Processing: {:?}", path);

        // Validate
        self.validator.validate(path)?;
        tracing::trace!("  Validate: {:?}", start.elapsed());

        // Read once; metadata and pixels both come from this buffer
        let bytes = std::fs::read(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read file: {}", e),
        })?;

        // Extract metadata
        let metadata_start = Instant::now();
        let exif = MetadataExtractor::extract(&bytes, path)?;
        let strings = FormattedStrings::from_record(&exif);
        tracing::trace!("  Metadata: {:?}", metadata_start.elapsed());

        // Decode
        let decode_start = Instant::now();
        let decoded = self.decoder.decode_from_bytes(&bytes, path)?;
        drop(bytes);
        tracing::trace!("  Decode: {:?}", decode_start.elapsed());

        // Blur
        let blur_start = Instant::now();
        let blurred = DynamicImage::ImageRgba8(render::blur(&decoded.image, self.blur_radius));
        drop(decoded.image);
        tracing::trace!("  Blur: {:?}", blur_start.elapsed());

        // Layout
        let layout_start = Instant::now();
        let brightness = layout::brightness(&blurred);
        let plan = layout::plan_layout(
            renderer,
            &strings,
            decoded.width,
            decoded.height,
            brightness,
            &self.layout,
        );
        tracing::trace!(
            "  Layout: {:?} (brightness {:.3}, font {:.1}px)",
            layout_start.elapsed(),
            brightness,
            plan.font_size
        );

        // Draw
        let draw_start = Instant::now();
        let mut canvas = blurred.into_rgba8();
        render::draw_overlay(&mut canvas, &plan, &strings, renderer);
        tracing::trace!("  Draw: {:?}", draw_start.elapsed());

        // Encode
        let encode_start = Instant::now();
        let output = self.discovery.output_path(path);
        render::encode_jpeg(canvas, self.jpeg_quality, &output)?;
        tracing::trace!("  Encode: {:?}", encode_start.elapsed());

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::debug!(
            "Processed {:?} in {:?} ({}x{}, {} bytes) -> {:?}",
            file_name,
            start.elapsed(),
            decoded.width,
            decoded.height,
            decoded.file_size,
            output
        );

        Ok(ProcessedImage {
            source: path.to_path_buf(),
            output,
            file_name,
            width: decoded.width,
            height: decoded.height,
            exif,
            strings,
            brightness,
            text_fits: plan.equipment_fits,
        })
    }

    /// Discover all photos at a path.
    pub fn discover(&self, path: &Path) -> PipelineResult<Discovery> {
        self.discovery.discover(path)
    }

    /// Where the output for `path` is written.
    pub fn output_path(&self, path: &Path) -> PathBuf {
        self.discovery.output_path(path)
    }

    /// The resolved font file used by [`ImageProcessor::process`].
    pub fn font_path(&self) -> &Path {
        &self.font_path
    }
}
