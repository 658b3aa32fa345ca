use pretty_assertions::assert_eq;

use colorcompass::{
    color_suggestions, complementary_color, hex_to_rgb, random_color, rgb_to_hex, rgb_to_hsl,
    search_ral, skin_tone_hex, EyeColor, HairColor, Hsl, PersonalColors, SkinTone, RAL_COLORS,
};

fn hsl_of(hex: &str) -> Hsl {
    let rgb = hex_to_rgb(hex).unwrap_or_else(|| panic!("valid hex expected, got {hex}"));
    rgb_to_hsl(rgb.r, rgb.g, rgb.b)
}

fn hue_distance(a: u16, b: u16) -> u16 {
    let diff = (a as i32 - b as i32).rem_euclid(360) as u16;
    diff.min(360 - diff)
}

#[test]
fn hex_round_trips_to_lowercase_normalized_form() {
    let cases = [
        ("#FF0000", "#ff0000"),
        ("ff0000", "#ff0000"),
        ("#3B82F6", "#3b82f6"),
        ("3b82F6", "#3b82f6"),
        ("#abcdef", "#abcdef"),
        ("#000000", "#000000"),
        ("FFFFFF", "#ffffff"),
    ];

    for (input, normalized) in cases {
        let rgb = hex_to_rgb(input).expect("valid hex");
        assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), normalized);
    }
}

#[test]
fn complement_of_complement_returns_to_the_original_hue() {
    // Integer rounding happens twice on the way back, so hue may drift by
    // a degree; saturation and lightness stay within the same tolerance.
    for hex in ["#ff0000", "#3b82f6", "#00ff7f", "#abcdef", "#123456"] {
        let original = hsl_of(hex);
        let round_trip = hsl_of(&complementary_color(&complementary_color(hex)));

        assert!(
            hue_distance(original.h, round_trip.h) <= 1,
            "{hex}: hue {} -> {}",
            original.h,
            round_trip.h
        );
        assert!((original.s as i16 - round_trip.s as i16).abs() <= 1);
        assert!((original.l as i16 - round_trip.l as i16).abs() <= 1);
    }
}

#[test]
fn complement_of_complement_is_exact_for_clean_hues() {
    for hex in ["#ff0000", "#00ff7f", "#123456"] {
        let round_trip = hsl_of(&complementary_color(&complementary_color(hex)));
        assert_eq!(round_trip, hsl_of(hex));
    }
}

#[test]
fn complement_degrades_gracefully_on_bad_input() {
    assert_eq!(complementary_color("invalid"), "invalid");
    assert_eq!(complementary_color("#12"), "#12");
}

#[test]
fn random_colors_are_parseable() {
    for _ in 0..10 {
        let color = random_color();
        assert!(
            hex_to_rgb(&color).is_some(),
            "random_color produced unparseable {color}"
        );
    }
}

#[test]
fn ral_catalog_entries_parse_as_colors() {
    for color in RAL_COLORS {
        assert!(
            hex_to_rgb(color.hex).is_some(),
            "{} has unparseable hex {}",
            color.number,
            color.hex
        );
    }
}

#[test]
fn beige_search_finds_every_beige_and_nothing_else() {
    let results = search_ral("Beige");
    assert_eq!(results.len(), 8);
    for color in &results {
        assert!(
            color.name.to_lowercase().contains("beige"),
            "{} matched without 'beige' in its name",
            color.number
        );
    }
}

#[test]
fn suggestions_are_parseable_and_differ_across_profiles() {
    let fair = PersonalColors {
        skin_tone: SkinTone::Light,
        hair_color: HairColor::Blonde,
        eye_color: EyeColor::Blue,
    };
    let deep = PersonalColors {
        skin_tone: SkinTone::Dark,
        hair_color: HairColor::Black,
        eye_color: EyeColor::Brown,
    };

    for personal in [fair, deep] {
        let suggestions = color_suggestions(&personal);
        assert!((1..=6).contains(&suggestions.len()));
        for hex in &suggestions {
            assert!(hex_to_rgb(hex).is_some(), "unparseable suggestion {hex}");
        }
    }

    assert_ne!(color_suggestions(&fair), color_suggestions(&deep));
}

#[test]
fn skin_tone_swatches_match_the_published_palette() {
    assert_eq!(skin_tone_hex(SkinTone::Light), "#F5DEB3");
    assert_eq!(skin_tone_hex(SkinTone::Medium), "#DEB887");
    assert_eq!(skin_tone_hex(SkinTone::Dark), "#CD853F");
    assert_eq!(skin_tone_hex(SkinTone::Deep), "#8B4513");
}

#[test]
fn value_types_serialize_to_the_wire_shape() {
    let personal = PersonalColors {
        skin_tone: SkinTone::Light,
        hair_color: HairColor::Blonde,
        eye_color: EyeColor::Blue,
    };
    assert_eq!(
        serde_json::to_value(personal).unwrap(),
        serde_json::json!({
            "skinTone": "light",
            "hairColor": "blonde",
            "eyeColor": "blue",
        })
    );

    assert_eq!(
        serde_json::to_value(RAL_COLORS[0]).unwrap(),
        serde_json::json!({
            "number": "RAL 1000",
            "name": "Green beige",
            "hex": "#BEBD7F",
        })
    );

    let rgb = hex_to_rgb("#3b82f6").unwrap();
    assert_eq!(
        serde_json::to_value(rgb).unwrap(),
        serde_json::json!({ "r": 59, "g": 130, "b": 246 })
    );
}
