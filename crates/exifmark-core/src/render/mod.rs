//! Rendering: blur, translucent panel, text, and JPEG output.
//!
//! Text goes through the [`TextRenderer`] trait. [`GlyphRenderer`] draws
//! with a real font; tests plug in simpler renderers.

mod encode;
mod glyph;

pub use encode::encode_jpeg;
pub use glyph::GlyphRenderer;

use image::{imageops, DynamicImage, Pixel, Rgba, RgbaImage};

use crate::format::FormattedStrings;
use crate::layout::{LayoutPlan, TextMeasure, TextPlacement};

/// Draws multi-line text onto an RGBA canvas.
pub trait TextRenderer: TextMeasure {
    /// Draw `text` with its bounding box's top-left at `origin`.
    ///
    /// Lines are centered within the block and separated by `line_spacing`
    /// extra pixels, matching [`TextMeasure::measure`]. Pixels outside the
    /// canvas are clipped.
    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        origin: (f32, f32),
        font_size: f32,
        line_spacing: f32,
        color: Rgba<u8>,
    );
}

/// Gaussian blur of the whole image. A non-positive sigma returns a copy.
pub fn blur(image: &DynamicImage, sigma: f32) -> RgbaImage {
    let rgba = image.to_rgba8();
    if sigma <= 0.0 {
        return rgba;
    }
    imageops::fast_blur(&rgba, sigma)
}

/// Alpha-blend `panel` over every pixel of the canvas.
pub fn draw_panel(canvas: &mut RgbaImage, panel: Rgba<u8>) {
    for pixel in canvas.pixels_mut() {
        pixel.blend(&panel);
    }
}

/// Blend `color` into one pixel, scaling its alpha by `coverage` (0 to 1).
///
/// Coordinates outside the canvas are ignored.
pub fn blend_coverage(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let alpha = (coverage.clamp(0.0, 1.0) * color[3] as f32).round() as u8;
    if alpha == 0 {
        return;
    }

    let mut top = color;
    top[3] = alpha;
    canvas.get_pixel_mut(x as u32, y as u32).blend(&top);
}

/// Draw the panel and both text blocks described by `plan`.
pub fn draw_overlay<R: TextRenderer + ?Sized>(
    canvas: &mut RgbaImage,
    plan: &LayoutPlan,
    strings: &FormattedStrings,
    renderer: &R,
) {
    draw_panel(canvas, plan.palette.panel);
    draw_block(canvas, &strings.capture_settings, &plan.capture, plan, renderer);
    draw_block(canvas, &strings.equipment, &plan.equipment, plan, renderer);
}

fn draw_block<R: TextRenderer + ?Sized>(
    canvas: &mut RgbaImage,
    text: &str,
    placement: &TextPlacement,
    plan: &LayoutPlan,
    renderer: &R,
) {
    renderer.draw(
        canvas,
        text,
        placement.position,
        placement.font_size,
        plan.line_spacing,
        plan.palette.text,
    );
}
