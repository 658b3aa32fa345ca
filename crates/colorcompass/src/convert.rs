//! Hex, RGB and HSL conversion primitives.
//!
//! All conversions are pure functions over small value types. Hue,
//! saturation and lightness are rounded to integers on output, which is
//! what the rest of the library (and the UIs consuming it) expect.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// An RGB color. Channel ranges are enforced by the `u8` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSL color: hue in degrees, saturation and lightness in percent.
///
/// Hue is stored after integer rounding, so a value of 360 can occur and
/// is equivalent to 0. It is preserved as-is rather than normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

// Anchored: an optional `#` followed by exactly six hex digits.
static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap()
});

/// Parse a `#RRGGBB` string (the `#` is optional, digits are
/// case-insensitive) into an [`Rgb`].
///
/// Malformed input is an expected outcome and yields `None`: wrong
/// length, non-hex digits, or anything else that fails the anchored
/// pattern.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let caps = HEX_PATTERN.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();

    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Format RGB channels as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Convert RGB channels to HSL.
///
/// Achromatic inputs (all channels equal) give hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert HSL components to RGB.
///
/// Hue is split into the six 60° sectors of the color wheel. A hue of
/// 360 or more falls outside every sector and resolves to the achromatic
/// base, matching how out-of-range hue has always behaved here; callers
/// wanting wrap-around should reduce the hue modulo 360 first.
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> Rgb {
    let h = h as f64 / 360.0;
    let s = s as f64 / 100.0;
    let l = l as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else if h < 1.0 {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}

/// Convert HSL components directly to a lowercase hex string.
pub fn hsl_to_hex(h: u16, s: u8, l: u8) -> String {
    let rgb = hsl_to_rgb(h, s, l);
    rgb_to_hex(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_primary_hex_colors() {
        assert_eq!(hex_to_rgb("#FF0000"), Some(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(hex_to_rgb("#00FF00"), Some(Rgb { r: 0, g: 255, b: 0 }));
        assert_eq!(hex_to_rgb("#0000FF"), Some(Rgb { r: 0, g: 0, b: 255 }));
        assert_eq!(
            hex_to_rgb("#3B82F6"),
            Some(Rgb {
                r: 59,
                g: 130,
                b: 246
            })
        );
    }

    #[test]
    fn hash_prefix_is_optional() {
        assert_eq!(hex_to_rgb("FF0000"), hex_to_rgb("#FF0000"));
    }

    #[test]
    fn digit_case_is_ignored() {
        assert_eq!(hex_to_rgb("#ff00aa"), hex_to_rgb("#FF00AA"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(hex_to_rgb("invalid"), None);
        assert_eq!(hex_to_rgb("#ZZZ"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#1234567"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb(" #ff0000"), None);
    }

    #[test]
    fn formats_lowercase_zero_padded_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(0, 255, 0), "#00ff00");
        assert_eq!(rgb_to_hex(0, 0, 255), "#0000ff");
        assert_eq!(rgb_to_hex(59, 130, 246), "#3b82f6");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    }

    #[test]
    fn rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl { h: 0, s: 0, l: 0 });
    }

    #[test]
    fn rgb_to_hsl_mixed_color() {
        assert_eq!(rgb_to_hsl(59, 130, 246), Hsl { h: 217, s: 91, l: 60 });
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0, 100, 50), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsl_to_rgb(120, 100, 50), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(hsl_to_rgb(240, 100, 50), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(
            hsl_to_rgb(0, 0, 100),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(hsl_to_rgb(0, 0, 0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn hue_at_360_falls_outside_every_sector() {
        // 360 normalizes to 1.0, which no sector covers. The result is
        // the achromatic base, not a wrap-around to red.
        assert_eq!(hsl_to_rgb(360, 100, 50), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn hsl_to_hex_composes_conversion_and_formatting() {
        assert_eq!(hsl_to_hex(0, 100, 50), "#ff0000");
        assert_eq!(hsl_to_hex(120, 100, 50), "#00ff00");
        assert_eq!(hsl_to_hex(240, 100, 50), "#0000ff");
    }
}
