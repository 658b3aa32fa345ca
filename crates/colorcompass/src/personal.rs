//! Personal color analysis: suggestion tables keyed on appearance.
//!
//! The attribute buckets are closed enums so that adding a bucket forces
//! every lookup table below to be extended at compile time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    Light,
    Medium,
    Dark,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    Blonde,
    Brown,
    Black,
    Red,
    Grey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeColor {
    Blue,
    Green,
    Brown,
    Hazel,
    Grey,
}

/// The three appearance attributes the suggestion heuristic keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalColors {
    pub skin_tone: SkinTone,
    pub hair_color: HairColor,
    pub eye_color: EyeColor,
}

/// Representative swatch for a skin tone bucket.
pub fn skin_tone_hex(tone: SkinTone) -> &'static str {
    match tone {
        SkinTone::Light => "#F5DEB3",
        SkinTone::Medium => "#DEB887",
        SkinTone::Dark => "#CD853F",
        SkinTone::Deep => "#8B4513",
    }
}

fn skin_tone_suggestions(tone: SkinTone) -> [&'static str; 4] {
    match tone {
        SkinTone::Light => ["#E6E6FA", "#B0C4DE", "#F0E68C", "#FFB6C1"],
        SkinTone::Medium => ["#F4A460", "#87CEEB", "#DDA0DD", "#F0E68C"],
        SkinTone::Dark => ["#FF6347", "#4169E1", "#FFD700", "#FF69B4"],
        SkinTone::Deep => ["#FF4500", "#8A2BE2", "#FFFF00", "#FF1493"],
    }
}

fn hair_color_suggestions(hair: HairColor) -> [&'static str; 3] {
    match hair {
        HairColor::Blonde => ["#87CEFA", "#FFB6C1", "#98FB98"],
        HairColor::Brown => ["#8FBC8F", "#F4A460", "#DDA0DD"],
        HairColor::Black => ["#FF69B4", "#00CED1", "#FFD700"],
        HairColor::Red => ["#228B22", "#4169E1", "#FFD700"],
        HairColor::Grey => ["#800080", "#4169E1", "#FF69B4"],
    }
}

fn eye_color_suggestions(eye: EyeColor) -> [&'static str; 3] {
    match eye {
        EyeColor::Blue => ["#FFA500", "#FF6347", "#FFD700"],
        EyeColor::Green => ["#FF69B4", "#8B0000", "#FF4500"],
        EyeColor::Brown => ["#4169E1", "#228B22", "#FF69B4"],
        EyeColor::Hazel => ["#8FBC8F", "#F4A460", "#DDA0DD"],
        EyeColor::Grey => ["#FF1493", "#00CED1", "#FFD700"],
    }
}

/// Suggest colors for a person: the skin tone list, then the hair color
/// list, then the eye color list, de-duplicated in first-occurrence order
/// and capped at six.
///
/// The result always holds between 1 and 6 entries.
pub fn color_suggestions(personal: &PersonalColors) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::with_capacity(10);

    let candidates = skin_tone_suggestions(personal.skin_tone)
        .into_iter()
        .chain(hair_color_suggestions(personal.hair_color))
        .chain(eye_color_suggestions(personal.eye_color));

    for hex in candidates {
        if !suggestions.contains(&hex) {
            suggestions.push(hex);
        }
    }

    suggestions.truncate(6);
    suggestions
}
