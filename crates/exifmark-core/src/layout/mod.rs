//! Layout engine: font sizes, text placement, and palette choice.
//!
//! The module is split into:
//! - **Geometry**: base font size and centering (pure functions)
//! - **Brightness**: histogram-based brightness estimate
//! - **Palette**: the two contrast-aware color pairs
//! - **Fit**: shrink-to-fit loop over a [`TextMeasure`]
//!
//! [`plan_layout`] combines them into a [`LayoutPlan`] for one image. Text
//! measurement goes through the [`TextMeasure`] trait so layout decisions can
//! be tested without a font file.

mod brightness;
mod fit;
mod geometry;
mod palette;

pub use brightness::{brightness, brightness_from_histogram, luma_histogram};
pub use fit::{fit_to_width, Fit, FitOptions};
pub use geometry::{base_font_size, centered_position, TextBox};
pub use palette::{Palette, BRIGHTNESS_THRESHOLD, PANEL_ALPHA, TEXT_ALPHA};

use crate::config::RenderConfig;
use crate::format::FormattedStrings;

/// Measures multi-line text at a given font size.
pub trait TextMeasure {
    /// Bounding box of `text` drawn at `(0, 0)`, lines separated by
    /// `line_spacing` extra pixels.
    fn measure(&self, text: &str, font_size: f32, line_spacing: f32) -> TextBox;
}

/// Tunable layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub line_spacing: f32,
    /// Equipment font size relative to the base size
    pub equipment_scale: f32,
    /// Multiplier on the centered y of the capture settings block
    pub capture_offset: f32,
    /// Multiplier on the centered y of the equipment block
    pub equipment_offset: f32,
    pub fit: FitOptions,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for LayoutOptions {
    fn from(render: &RenderConfig) -> Self {
        Self {
            line_spacing: render.line_spacing,
            equipment_scale: render.equipment_scale,
            capture_offset: render.capture_offset,
            equipment_offset: render.equipment_offset,
            fit: FitOptions {
                shrink_factor: render.shrink_factor,
                max_steps: render.max_shrink_steps,
                min_font_size: render.min_font_size,
            },
        }
    }
}

/// Where and how large one text block is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    pub font_size: f32,
    pub bbox: TextBox,
    /// Top-left draw origin, vertical offset applied
    pub position: (f32, f32),
}

/// Everything the renderer needs to draw the overlay on one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    /// Base font size derived from the image dimensions
    pub font_size: f32,
    pub capture: TextPlacement,
    pub equipment: TextPlacement,
    pub palette: Palette,
    pub line_spacing: f32,
    /// False when the equipment block is still wider than the image after
    /// the shrink loop gave up
    pub equipment_fits: bool,
}

/// Lay out the capture settings and equipment blocks on a `width × height`
/// image whose (blurred) brightness is `brightness`.
pub fn plan_layout<M: TextMeasure + ?Sized>(
    measurer: &M,
    strings: &FormattedStrings,
    width: u32,
    height: u32,
    brightness: f64,
    options: &LayoutOptions,
) -> LayoutPlan {
    let font_size = base_font_size(width, height);

    let capture_bbox = measurer.measure(&strings.capture_settings, font_size, options.line_spacing);
    let (cx, cy) = centered_position(width, height, &capture_bbox);

    let fit = fit_to_width(
        measurer,
        &strings.equipment,
        font_size * options.equipment_scale,
        options.line_spacing,
        width as f32,
        &options.fit,
    );
    if !fit.fits {
        tracing::debug!(
            "Equipment text still {:.0}px wide at {:.1}px after {} shrink steps (image is {}px)",
            fit.bbox.x1,
            fit.font_size,
            fit.steps,
            width
        );
    }
    let (ex, ey) = centered_position(width, height, &fit.bbox);

    LayoutPlan {
        font_size,
        capture: TextPlacement {
            font_size,
            bbox: capture_bbox,
            position: (cx, cy * options.capture_offset),
        },
        equipment: TextPlacement {
            font_size: fit.font_size,
            bbox: fit.bbox,
            position: (ex, ey * options.equipment_offset),
        },
        palette: Palette::for_brightness(brightness),
        line_spacing: options.line_spacing,
        equipment_fits: fit.fits,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Every glyph is half an em wide and one em tall.
    pub(crate) struct FixedAdvance;

    impl TextMeasure for FixedAdvance {
        fn measure(&self, text: &str, font_size: f32, line_spacing: f32) -> TextBox {
            let lines: Vec<&str> = text.split('\n').collect();
            let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            let n = lines.len() as f32;
            TextBox::sized(
                widest as f32 * font_size * 0.5,
                n * font_size + (n - 1.0) * line_spacing,
            )
        }
    }

    fn strings(equipment: &str) -> FormattedStrings {
        FormattedStrings {
            info_full: String::new(),
            capture_settings: "50mm\nf/1.8\nISO 400\n1/200 sec".to_string(),
            equipment: equipment.to_string(),
        }
    }

    #[test]
    fn test_capture_block_centered_then_raised() {
        let options = LayoutOptions {
            line_spacing: 0.0,
            ..LayoutOptions::default()
        };
        let plan = plan_layout(&FixedAdvance, &strings("Canon"), 3000, 2000, 0.2, &options);

        assert!((plan.font_size - 270.0).abs() < 1e-3);
        // widest line "1/200 sec" = 9 chars → 1215px; 4 lines → 1080px
        let capture = plan.capture;
        assert!((capture.bbox.x1 - 1215.0).abs() < 1e-2);
        assert!((capture.position.0 - (3000.0 - 1215.0) / 2.0).abs() < 1e-2);
        assert!((capture.position.1 - (2000.0 - 1080.0) / 2.0 * 0.4).abs() < 1e-2);
    }

    #[test]
    fn test_equipment_block_uses_scaled_size_and_lowered() {
        let options = LayoutOptions {
            line_spacing: 0.0,
            ..LayoutOptions::default()
        };
        let plan = plan_layout(&FixedAdvance, &strings("Canon"), 2000, 3000, 0.2, &options);

        let equipment = plan.equipment;
        assert!((equipment.font_size - 300.0 * 0.7).abs() < 1e-3);
        let expected_y = (3000.0 - equipment.bbox.y1) / 2.0 * 1.7;
        assert!((equipment.position.1 - expected_y).abs() < 1e-2);
    }

    #[test]
    fn test_long_equipment_text_is_shrunk_to_image_width() {
        let long = "Some Camera With A Very Long Name\nAn Even Longer Zoom Lens Designation";
        let plan = plan_layout(&FixedAdvance, &strings(long), 1000, 800, 0.2, &LayoutOptions::default());
        assert!(plan.equipment.bbox.x1 <= 1000.0);
        assert!(plan.equipment.font_size < 100.0 * 0.9 * 0.7);
        assert!(plan.equipment.position.0 >= 0.0);
        assert!(plan.equipment_fits);
    }

    #[test]
    fn test_exhausted_shrink_loop_is_reported_in_plan() {
        let long = "Some Camera With A Very Long Name\nAn Even Longer Zoom Lens Designation";
        let mut options = LayoutOptions::default();
        options.fit.max_steps = 0;
        let plan = plan_layout(&FixedAdvance, &strings(long), 1000, 800, 0.2, &options);

        assert!(!plan.equipment_fits);
        assert!((plan.equipment.font_size - 100.0 * 0.9 * 0.7).abs() < 1e-3);
        assert!(plan.equipment.bbox.x1 > 1000.0);
    }

    #[test]
    fn test_palette_follows_brightness() {
        let options = LayoutOptions::default();
        let dark = plan_layout(&FixedAdvance, &strings("Canon"), 100, 100, 0.1, &options);
        let bright = plan_layout(&FixedAdvance, &strings("Canon"), 100, 100, 0.9, &options);
        assert_eq!(dark.palette, Palette::DARK_ON_LIGHT);
        assert_eq!(bright.palette, Palette::LIGHT_ON_DARK);
    }

    #[test]
    fn test_options_from_render_config() {
        let mut render = RenderConfig::default();
        render.capture_offset = 0.25;
        render.max_shrink_steps = 5;
        let options = LayoutOptions::from(&render);
        assert_eq!(options.capture_offset, 0.25);
        assert_eq!(options.fit.max_steps, 5);
        assert_eq!(options.fit.shrink_factor, 0.9);
    }
}
