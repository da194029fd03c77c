//! Shrink-to-fit loop for text blocks wider than the image.

use super::geometry::TextBox;
use super::TextMeasure;

/// Bounds on the shrink loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Factor applied to the font size per step, in (0, 1)
    pub shrink_factor: f32,
    /// Maximum number of shrink steps
    pub max_steps: u32,
    /// The loop never shrinks below this size
    pub min_font_size: f32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            shrink_factor: 0.9,
            max_steps: 64,
            min_font_size: 4.0,
        }
    }
}

/// Outcome of fitting a text block to a width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub font_size: f32,
    pub bbox: TextBox,
    pub steps: u32,
    /// False when a guard stopped the loop before the text fit
    pub fits: bool,
}

/// Shrink `start_size` until `text` is no wider than `max_width`.
///
/// Each step multiplies the size by `shrink_factor` and re-measures. The
/// loop stops early, returning the last measured size, once `max_steps` is
/// reached or the next step would go below `min_font_size`.
pub fn fit_to_width<M: TextMeasure + ?Sized>(
    measurer: &M,
    text: &str,
    start_size: f32,
    line_spacing: f32,
    max_width: f32,
    options: &FitOptions,
) -> Fit {
    let mut font_size = start_size;
    let mut bbox = measurer.measure(text, font_size, line_spacing);
    let mut steps = 0;

    while bbox.x1 > max_width {
        let next = font_size * options.shrink_factor;
        if steps >= options.max_steps || next < options.min_font_size {
            break;
        }
        font_size = next;
        bbox = measurer.measure(text, font_size, line_spacing);
        steps += 1;
    }

    Fit {
        font_size,
        bbox,
        steps,
        fits: bbox.x1 <= max_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::FixedAdvance;

    #[test]
    fn test_text_that_fits_is_untouched() {
        let fit = fit_to_width(&FixedAdvance, "Canon", 10.0, 0.0, 1000.0, &FitOptions::default());
        assert_eq!(fit.font_size, 10.0);
        assert_eq!(fit.steps, 0);
        assert!(fit.fits);
    }

    #[test]
    fn test_wide_text_shrinks_until_it_fits() {
        // 20 chars at 0.5em per char: 10 * size px wide; needs size <= 50
        let text = "ABCDEFGHIJKLMNOPQRST";
        let fit = fit_to_width(&FixedAdvance, text, 100.0, 0.0, 500.0, &FitOptions::default());
        assert!(fit.fits);
        assert!(fit.bbox.x1 <= 500.0);
        // 100 * 0.9^7 = 47.8, 0.9^6 = 53.1
        assert_eq!(fit.steps, 7);
        assert!((fit.font_size - 100.0 * 0.9f32.powi(7)).abs() < 1e-3);
    }

    #[test]
    fn test_widest_line_decides() {
        let fit = fit_to_width(&FixedAdvance, "AB\nABCDEFGHIJ", 100.0, 0.0, 400.0, &FitOptions::default());
        assert!(fit.fits);
        assert!(fit.font_size <= 80.0);
    }

    #[test]
    fn test_step_cap_stops_loop() {
        let options = FitOptions {
            max_steps: 3,
            ..FitOptions::default()
        };
        let fit = fit_to_width(&FixedAdvance, "ABCDEFGHIJ", 1000.0, 0.0, 10.0, &options);
        assert_eq!(fit.steps, 3);
        assert!(!fit.fits);
    }

    #[test]
    fn test_min_font_size_stops_loop() {
        let options = FitOptions {
            min_font_size: 50.0,
            ..FitOptions::default()
        };
        let fit = fit_to_width(&FixedAdvance, "ABCDEFGHIJ", 100.0, 0.0, 10.0, &options);
        assert!(fit.font_size >= 50.0);
        assert!(!fit.fits);
    }
}
