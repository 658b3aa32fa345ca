//! Core color math for ColorCompass.
//!
//! A stateless library of color-space conversions and derived-color
//! heuristics. The UI layers (pickers, sliders, moodboard, catalog
//! browser) are all thin consumers of these functions; everything here is
//! a pure function over plain value types, with no I/O and no shared
//! state.
//!
//! The main surfaces are:
//!
//! - [`convert`] — hex ↔ RGB ↔ HSL conversion primitives.
//! - [`derived`] — random color generation and complementary colors.
//! - [`ral`] — the static RAL classic catalog and substring search.
//! - [`personal`] — the personal color analysis suggestion heuristic.

pub mod convert;
pub mod derived;
pub mod personal;
pub mod ral;

pub use convert::{hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use derived::{complementary_color, random_color};
pub use personal::{
    color_suggestions, skin_tone_hex, EyeColor, HairColor, PersonalColors, SkinTone,
};
pub use ral::{search_ral, RalColor, RAL_COLORS};
