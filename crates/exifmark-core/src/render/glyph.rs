//! Font-backed text measurement and drawing.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, PxScaleFont, ScaleFont};
use image::{Rgba, RgbaImage};

use super::{blend_coverage, TextRenderer};
use crate::error::{PipelineError, PipelineResult};
use crate::layout::{TextBox, TextMeasure};

/// Renders text with an OpenType/TrueType font loaded from disk.
pub struct GlyphRenderer {
    font: FontVec,
}

impl GlyphRenderer {
    /// Read and parse the font at `path`.
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let data = std::fs::read(path).map_err(|e| PipelineError::Render {
            path: path.to_path_buf(),
            message: format!("Failed to read font: {e}"),
        })?;
        Self::from_bytes(data, path)
    }

    /// Parse font data; `path` is only used in error messages.
    pub fn from_bytes(data: Vec<u8>, path: &Path) -> PipelineResult<Self> {
        let font = FontVec::try_from_vec(data).map_err(|e| PipelineError::Render {
            path: path.to_path_buf(),
            message: format!("Invalid font: {e}"),
        })?;
        tracing::trace!("Loaded font {:?}", path);
        Ok(Self { font })
    }
}

/// Advance width of one line, kerning included.
fn line_width<F: Font>(font: &PxScaleFont<F>, line: &str) -> f32 {
    let mut width = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for c in line.chars() {
        let id = font.glyph_id(c);
        if let Some(prev) = prev {
            width += font.kern(prev, id);
        }
        width += font.h_advance(id);
        prev = Some(id);
    }
    width
}

impl TextMeasure for GlyphRenderer {
    fn measure(&self, text: &str, font_size: f32, line_spacing: f32) -> TextBox {
        let scaled = self.font.as_scaled(PxScale::from(font_size));
        let mut widest = 0.0f32;
        let mut lines = 0usize;
        for line in text.split('\n') {
            widest = widest.max(line_width(&scaled, line));
            lines += 1;
        }

        let n = lines as f32;
        TextBox::sized(widest, n * scaled.height() + (n - 1.0) * line_spacing)
    }
}

impl TextRenderer for GlyphRenderer {
    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        origin: (f32, f32),
        font_size: f32,
        line_spacing: f32,
        color: Rgba<u8>,
    ) {
        let scale = PxScale::from(font_size);
        let scaled = self.font.as_scaled(scale);
        let block_width = self.measure(text, font_size, line_spacing).x1;
        let line_advance = scaled.height() + line_spacing;

        for (index, line) in text.split('\n').enumerate() {
            let mut cursor_x = origin.0 + (block_width - line_width(&scaled, line)) / 2.0;
            let baseline = origin.1 + index as f32 * line_advance + scaled.ascent();
            let mut prev: Option<GlyphId> = None;

            for c in line.chars() {
                let id = scaled.glyph_id(c);
                if let Some(prev) = prev {
                    cursor_x += scaled.kern(prev, id);
                }

                let glyph = id.with_scale_and_position(scale, point(cursor_x, baseline));
                if let Some(outlined) = self.font.outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|px, py, coverage| {
                        let x = bounds.min.x as i32 + px as i32;
                        let y = bounds.min.y as i32 + py as i32;
                        blend_coverage(canvas, x, y, color, coverage);
                    });
                }

                cursor_x += scaled.h_advance(id);
                prev = Some(id);
            }
        }
    }
}
