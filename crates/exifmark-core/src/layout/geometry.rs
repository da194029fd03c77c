//! Pure calculation functions for text size and placement.
//!
//! All functions here are pure and testable without any I/O or images.

/// A text block's bounding box, measured from its draw origin at `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl TextBox {
    /// Box spanning `(0, 0)` to `(width, height)`.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: width,
            y1: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// Divisor applied to the longer image edge to get the base font size.
const EDGE_DIVISOR: f32 = 10.0;

/// Landscape images get slightly smaller text than portrait ones.
const LANDSCAPE_SCALE: f32 = 0.9;

/// Base font size in pixels for an image of the given dimensions.
///
/// # Examples
/// ```
/// # use exifmark_core::layout::base_font_size;
/// // 3000x2000 landscape: 3000 / 10 * 0.9
/// assert!((base_font_size(3000, 2000) - 270.0).abs() < 1e-3);
///
/// // 2000x3000 portrait: 3000 / 10
/// assert!((base_font_size(2000, 3000) - 300.0).abs() < 1e-3);
/// ```
pub fn base_font_size(width: u32, height: u32) -> f32 {
    let longer = width.max(height) as f32;
    let size = longer / EDGE_DIVISOR;
    if width > height {
        size * LANDSCAPE_SCALE
    } else {
        size
    }
}

/// Top-left position that centers a text box on the image.
///
/// Uses the box's right and bottom extents, so any inset of the glyphs from
/// the draw origin is centered along with them. Boxes larger than the image
/// yield negative coordinates.
pub fn centered_position(width: u32, height: u32, text: &TextBox) -> (f32, f32) {
    let x = (width as f32 - text.x1) / 2.0;
    let y = (height as f32 - text.y1) / 2.0;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_font_size_landscape() {
        assert!(approx(base_font_size(3000, 2000), 270.0));
    }

    #[test]
    fn test_font_size_portrait() {
        assert!(approx(base_font_size(2000, 3000), 300.0));
    }

    #[test]
    fn test_font_size_square_is_not_scaled() {
        assert!(approx(base_font_size(1000, 1000), 100.0));
    }

    #[test]
    fn test_centered_position() {
        let text = TextBox::sized(1000.0, 400.0);
        assert_eq!(centered_position(3000, 2000, &text), (1000.0, 800.0));
    }

    #[test]
    fn test_centered_position_oversized_box() {
        let text = TextBox::sized(1200.0, 100.0);
        let (x, _) = centered_position(1000, 1000, &text);
        assert_eq!(x, -100.0);
    }

    #[test]
    fn test_text_box_dimensions() {
        let text = TextBox {
            x0: 2.0,
            y0: 5.0,
            x1: 102.0,
            y1: 45.0,
        };
        assert_eq!(text.width(), 100.0);
        assert_eq!(text.height(), 40.0);
    }
}
