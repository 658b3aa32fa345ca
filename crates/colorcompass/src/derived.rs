//! Derived-color operations: random colors and complementary colors.

use rand::Rng;

use crate::convert::{hex_to_rgb, hsl_to_hex, rgb_to_hsl};

/// Generate a uniformly random color as a lowercase `#rrggbb` string.
pub fn random_color() -> String {
    let value: u32 = rand::rng().random_range(0..0x100_0000);
    format!("#{:06x}", value)
}

/// Rotate a color's hue by 180°, keeping saturation and lightness.
///
/// Input that fails hex parsing is returned unchanged. Callers feed this
/// straight from user input, and showing the original string is friendlier
/// than failing the whole card render.
pub fn complementary_color(hex: &str) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };

    let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
    let rotated = (hsl.h + 180) % 360;

    hsl_to_hex(rotated, hsl.s, hsl.l)
}
