//! Contrast-aware colors for the text and the translucent panel.

use image::Rgba;

/// Brightness at or above which the panel turns dark.
pub const BRIGHTNESS_THRESHOLD: f64 = 0.5;

/// Text is drawn nearly opaque.
pub const TEXT_ALPHA: u8 = 254;

/// The panel lets the blurred photo show through.
pub const PANEL_ALPHA: u8 = 90;

/// Foreground and background colors of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Rgba<u8>,
    pub panel: Rgba<u8>,
}

impl Palette {
    /// Black text on a white panel, for dark photos.
    pub const DARK_ON_LIGHT: Palette = Palette {
        text: Rgba([0, 0, 0, TEXT_ALPHA]),
        panel: Rgba([255, 255, 255, PANEL_ALPHA]),
    };

    /// White text on a black panel, for bright photos.
    pub const LIGHT_ON_DARK: Palette = Palette {
        text: Rgba([255, 255, 255, TEXT_ALPHA]),
        panel: Rgba([0, 0, 0, PANEL_ALPHA]),
    };

    /// Pick the palette for an image brightness in `[0, 1]`.
    pub fn for_brightness(brightness: f64) -> Self {
        if brightness < BRIGHTNESS_THRESHOLD {
            Self::DARK_ON_LIGHT
        } else {
            Self::LIGHT_ON_DARK
        }
    }
}
