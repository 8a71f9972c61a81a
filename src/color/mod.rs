//! Color value type plus the HSL and Lab transforms the palette rules use.
//!
//! Colors are stored as 8-bit sRGB and always printed as uppercase `#RRGGBB`.
//! Conversions go through the `palette` crate; a trip through HSL is only
//! visually lossless (at most one unit per channel).

use crate::error::ColorError;
use palette::{Clamp, FromColor, Hsl, Lab, LinSrgb, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lab lightness moved per unit of darken/brighten.
const LAB_STEP: f32 = 18.0;

/// Contrast against white at or above which a label is drawn in white (WCAG AA).
pub const LABEL_CONTRAST_THRESHOLD: f32 = 4.5;

pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

/// Near-black used for labels on light backgrounds.
pub const LABEL_DARK: Color = Color::rgb(0x11, 0x18, 0x27);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#RRGGBB` (either case). Shorthand, missing `#` and extra
    /// characters are rejected rather than normalized.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        if !is_valid_hex(input) {
            return Err(ColorError::InvalidHex(input.to_string()));
        }
        let rgb: Srgb<u8> = input
            .parse()
            .map_err(|_| ColorError::InvalidHex(input.to_string()))?;
        Ok(Self::rgb(rgb.red, rgb.green, rgb.blue))
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    /// Uppercase `#RRGGBB`.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self.to_srgb())
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb: Srgb = Srgb::from_color(hsl);
        Self::from_srgb(rgb)
    }

    fn to_srgb(self) -> Srgb {
        Srgb::new(self.red, self.green, self.blue).into_format()
    }

    fn from_srgb(rgb: Srgb) -> Self {
        let rgb: Srgb<u8> = rgb.clamp().into_format();
        Self::rgb(rgb.red, rgb.green, rgb.blue)
    }

    /// WCAG 2.1 relative luminance in [0, 1].
    pub fn relative_luminance(self) -> f32 {
        let lin: LinSrgb = self.to_srgb().into_linear();
        0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue
    }

    /// WCAG contrast ratio, from 1 (identical) to 21 (black on white).
    pub fn contrast_ratio(self, other: Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }

    /// Readable foreground for text drawn on top of this color.
    pub fn label_color(self) -> Color {
        if self.contrast_ratio(WHITE) >= LABEL_CONTRAST_THRESHOLD {
            WHITE
        } else {
            LABEL_DARK
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

/// Exactly `#` followed by six hex digits.
pub fn is_valid_hex(input: &str) -> bool {
    input
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Wrap an angle into [0, 360).
pub fn normalize_hue(degrees: f32) -> f32 {
    let hue = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if hue >= 360.0 { 0.0 } else { hue }
}

pub fn hue_of(hsl: Hsl) -> f32 {
    normalize_hue(hsl.hue.into_positive_degrees())
}

pub fn rotate_hue(hsl: Hsl, degrees: f32) -> Hsl {
    Hsl::new(
        normalize_hue(hue_of(hsl) + degrees),
        hsl.saturation,
        hsl.lightness,
    )
}

pub fn shift_saturation(hsl: Hsl, delta: f32) -> Hsl {
    Hsl::new(
        hue_of(hsl),
        (hsl.saturation + delta).clamp(0.0, 1.0),
        hsl.lightness,
    )
}

pub fn shift_lightness(hsl: Hsl, delta: f32) -> Hsl {
    Hsl::new(
        hue_of(hsl),
        hsl.saturation,
        (hsl.lightness + delta).clamp(0.0, 1.0),
    )
}

/// Lower Lab lightness by `amount` steps. Zero is the identity.
pub fn darken(hsl: Hsl, amount: f32) -> Hsl {
    shift_lab_lightness(hsl, -amount)
}

/// Raise Lab lightness by `amount` steps. Zero is the identity.
pub fn brighten(hsl: Hsl, amount: f32) -> Hsl {
    shift_lab_lightness(hsl, amount)
}

fn shift_lab_lightness(hsl: Hsl, amount: f32) -> Hsl {
    if amount == 0.0 {
        return hsl;
    }
    let rgb: Srgb = Srgb::from_color(hsl);
    let mut lab: Lab = Lab::from_color(rgb);
    lab.l = (lab.l + LAB_STEP * amount).clamp(0.0, 100.0);
    let rgb: Srgb = Srgb::from_color(lab).clamp();
    let shifted: Hsl = Hsl::from_color(rgb);
    Hsl::new(hue_of(shifted), shifted.saturation, shifted.lightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn parses_strict_hex_only() {
        assert_eq!(Color::parse_hex("#3B82F6"), Ok(Color::rgb(0x3B, 0x82, 0xF6)));
        assert_eq!(Color::parse_hex("#3b82f6"), Ok(Color::rgb(0x3B, 0x82, 0xF6)));

        for bad in ["#FFF", "#ZZZZZZ", "FF0000", "#FF00000", "", "#", " #FF0000", "#+FFFFF"] {
            assert_eq!(
                Color::parse_hex(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn prints_uppercase_hex() {
        let color: Color = "#0a1b2c".parse().unwrap();
        assert_eq!(color.hex(), "#0A1B2C");
        assert_eq!(color.to_string(), "#0A1B2C");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#FF0010\"");
        let back: Color = serde_json::from_str("\"#ff0010\"").unwrap();
        assert_eq!(back, Color::rgb(255, 0, 16));
        assert!(serde_json::from_str::<Color>("\"#FFF\"").is_err());
    }

    #[test]
    fn red_to_hsl() {
        let hsl = Color::rgb(255, 0, 0).to_hsl();
        assert!(close(hue_of(hsl), 0.0));
        assert!(close(hsl.saturation, 1.0));
        assert!(close(hsl.lightness, 0.5));
    }

    #[test]
    fn hue_normalization_stays_in_range() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(450.0), 90.0);
        assert!(normalize_hue(-1e-7) < 360.0);
    }

    #[test]
    fn adjustments_clamp_to_unit_interval() {
        let hsl = Hsl::new(200.0, 0.9, 0.95);
        assert_eq!(shift_lightness(hsl, 0.3).lightness, 1.0);
        assert_eq!(shift_saturation(hsl, 0.3).saturation, 1.0);
        assert_eq!(shift_lightness(Hsl::new(10.0, 0.1, 0.05), -0.3).lightness, 0.0);
        assert_eq!(shift_saturation(Hsl::new(10.0, 0.1, 0.05), -0.3).saturation, 0.0);
    }

    #[test]
    fn zero_magnitude_darken_is_identity() {
        let hsl = Color::rgb(0x3B, 0x82, 0xF6).to_hsl();
        assert_eq!(darken(hsl, 0.0), hsl);
        assert_eq!(brighten(hsl, 0.0), hsl);
    }

    #[test]
    fn darken_and_brighten_are_monotonic() {
        let base = Color::rgb(0x3B, 0x82, 0xF6).to_hsl();
        let lum = |hsl: Hsl| Color::from_hsl(hsl).relative_luminance();

        assert!(lum(darken(base, 2.0)) < lum(darken(base, 1.0)));
        assert!(lum(darken(base, 1.0)) < lum(base));
        assert!(lum(base) < lum(brighten(base, 1.0)));
        assert!(lum(brighten(base, 1.0)) < lum(brighten(base, 2.0)));
    }

    #[test]
    fn darken_saturates_at_black() {
        let hsl = darken(Color::rgb(0x20, 0x20, 0x20).to_hsl(), 10.0);
        assert_eq!(Color::from_hsl(hsl), BLACK);
    }

    #[test]
    fn contrast_extremes() {
        assert!(close(WHITE.contrast_ratio(WHITE), 1.0));
        assert!((BLACK.contrast_ratio(WHITE) - 21.0).abs() < 0.01);
        assert!((WHITE.contrast_ratio(BLACK) - 21.0).abs() < 0.01);
    }

    #[test]
    fn label_color_picks_readable_foreground() {
        assert_eq!(WHITE.label_color(), LABEL_DARK);
        assert_eq!(BLACK.label_color(), WHITE);
        // #777777 sits just below 4.5:1 against white
        assert_eq!(Color::rgb(0x77, 0x77, 0x77).label_color(), LABEL_DARK);
        assert_eq!(Color::rgb(0x1E, 0x3A, 0x8A).label_color(), WHITE);
    }

    proptest! {
        #[test]
        fn hsl_round_trip_is_visually_identical(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Color::rgb(r, g, b);
            let back = Color::from_hsl(color.to_hsl());
            prop_assert!(r.abs_diff(back.red()) <= 1);
            prop_assert!(g.abs_diff(back.green()) <= 1);
            prop_assert!(b.abs_diff(back.blue()) <= 1);
        }

        #[test]
        fn rotated_hue_is_normalized(h in 0.0f32..360.0, delta in -720.0f32..720.0) {
            let hue = hue_of(rotate_hue(Hsl::new(h, 0.5, 0.5), delta));
            prop_assert!((0.0..360.0).contains(&hue));
        }

        #[test]
        fn hex_input_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(Color::parse_hex(&color.hex()), Ok(color));
            prop_assert_eq!(Color::parse_hex(&color.hex().to_lowercase()), Ok(color));
        }
    }
}
