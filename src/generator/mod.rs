//! Palette generation engine.
//!
//! Every style in [`STYLES`] maps the HSL form of a base color to an ordered
//! list of derived colors. Generation is pure: the same base always yields
//! the same palettes in the same order.

use crate::color::{self, Color};
use crate::error::ColorError;
use palette::Hsl;

/// Saturation / lightness push used by the "Nuances" style.
const SHADE_DELTA: f32 = 0.3;

/// A named derivation rule.
#[derive(Debug)]
pub struct PaletteStyle {
    pub name: &'static str,
    pub description: &'static str,
    rule: fn(Hsl) -> Vec<Hsl>,
}

impl PaletteStyle {
    /// Derived colors in HSL, before hex quantization.
    pub fn derive(&self, base: Hsl) -> Vec<Hsl> {
        (self.rule)(base)
    }

    pub fn apply(&'static self, base: Color) -> GeneratedPalette {
        let base_hsl = base.to_hsl();
        let colors = self
            .derive(base_hsl)
            .into_iter()
            // the untouched base keeps its exact sRGB value
            .map(|hsl| if hsl == base_hsl { base } else { Color::from_hsl(hsl) })
            .collect();
        GeneratedPalette {
            style: self,
            colors,
        }
    }
}

pub static STYLES: [PaletteStyle; 6] = [
    PaletteStyle {
        name: "Monochrome",
        description: "Variations d'une seule couleur",
        rule: monochrome,
    },
    PaletteStyle {
        name: "Complémentaire",
        description: "Couleurs opposées sur le cercle chromatique",
        rule: complementary,
    },
    PaletteStyle {
        name: "Triade",
        description: "Trois couleurs équidistantes sur le cercle chromatique",
        rule: triadic,
    },
    PaletteStyle {
        name: "Tétrade",
        description: "Quatre couleurs formant un rectangle sur le cercle chromatique",
        rule: tetradic,
    },
    PaletteStyle {
        name: "Analogique",
        description: "Couleurs adjacentes sur le cercle chromatique",
        rule: analogous,
    },
    PaletteStyle {
        name: "Nuances",
        description: "Variations de saturation et luminosité",
        rule: shades,
    },
];

fn monochrome(base: Hsl) -> Vec<Hsl> {
    vec![
        color::darken(base, 2.0),
        color::darken(base, 1.0),
        base,
        color::brighten(base, 1.0),
        color::brighten(base, 2.0),
    ]
}

fn complementary(base: Hsl) -> Vec<Hsl> {
    vec![base, color::rotate_hue(base, 180.0)]
}

fn triadic(base: Hsl) -> Vec<Hsl> {
    vec![
        base,
        color::rotate_hue(base, 120.0),
        color::rotate_hue(base, 240.0),
    ]
}

fn tetradic(base: Hsl) -> Vec<Hsl> {
    vec![
        base,
        color::rotate_hue(base, 90.0),
        color::rotate_hue(base, 180.0),
        color::rotate_hue(base, 270.0),
    ]
}

fn analogous(base: Hsl) -> Vec<Hsl> {
    vec![
        color::rotate_hue(base, -30.0),
        base,
        color::rotate_hue(base, 30.0),
    ]
}

fn shades(base: Hsl) -> Vec<Hsl> {
    vec![
        base,
        color::shift_saturation(base, -SHADE_DELTA),
        color::shift_saturation(base, SHADE_DELTA),
        color::shift_lightness(base, -SHADE_DELTA),
        color::shift_lightness(base, SHADE_DELTA),
    ]
}

/// One style applied to one base color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPalette {
    style: &'static PaletteStyle,
    colors: Vec<Color>,
}

impl PartialEq for PaletteStyle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PaletteStyle {}

#[allow(clippy::len_without_is_empty)]
impl GeneratedPalette {
    pub fn name(&self) -> &'static str {
        self.style.name
    }

    pub fn description(&self) -> &'static str {
        self.style.description
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

/// Apply every catalog style to `base`, in catalog order.
pub fn generate(base: Color) -> Vec<GeneratedPalette> {
    STYLES.iter().map(|style| style.apply(base)).collect()
}

/// [`generate`] for raw user input; only `#RRGGBB` is accepted.
pub fn generate_hex(input: &str) -> Result<Vec<GeneratedPalette>, ColorError> {
    Ok(generate(Color::parse_hex(input)?))
}

/// Case-insensitive lookup by style name.
pub fn find_style(name: &str) -> Option<&'static PaletteStyle> {
    let wanted = name.trim().to_lowercase();
    STYLES.iter().find(|style| style.name.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hue_of;
    use proptest::prelude::*;

    fn style(name: &str) -> &'static PaletteStyle {
        find_style(name).unwrap()
    }

    fn hue_gap(from: Hsl, to: Hsl) -> f32 {
        (hue_of(to) - hue_of(from)).rem_euclid(360.0)
    }

    #[test]
    fn one_palette_per_style_in_catalog_order() {
        let palettes = generate(Color::rgb(0x3B, 0x82, 0xF6));
        let names: Vec<_> = palettes.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            ["Monochrome", "Complémentaire", "Triade", "Tétrade", "Analogique", "Nuances"]
        );
        let lengths: Vec<_> = palettes.iter().map(|p| p.len()).collect();
        assert_eq!(lengths, [5, 2, 3, 4, 3, 5]);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_hex("#3B82F6").unwrap();
        let b = generate_hex("#3b82f6").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert!(matches!(generate_hex("#ZZZZZZ"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(generate_hex("#FFF"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn red_triad_hits_the_primaries() {
        let triad = style("Triade").apply(Color::rgb(255, 0, 0));
        let hexes: Vec<_> = triad.colors().iter().map(|c| c.hex()).collect();
        assert_eq!(hexes, ["#FF0000", "#00FF00", "#0000FF"]);
    }

    #[test]
    fn complement_rotates_hue_only() {
        let base = Color::rgb(0x3B, 0x82, 0xF6).to_hsl();
        let derived = style("Complémentaire").derive(base);
        assert_eq!(derived.len(), 2);
        assert!((hue_gap(base, derived[1]) - 180.0).abs() < 1e-3);
        assert_eq!(derived[1].saturation, base.saturation);
        assert_eq!(derived[1].lightness, base.lightness);
    }

    #[test]
    fn base_entries_keep_exact_input() {
        let base = Color::rgb(0x12, 0x34, 0x56);
        for palette in generate(base) {
            if palette.name() == "Monochrome" {
                assert_eq!(palette.colors()[2], base);
            } else if palette.name() == "Analogique" {
                assert_eq!(palette.colors()[1], base);
            } else {
                assert_eq!(palette.colors()[0], base);
            }
        }
    }

    #[test]
    fn monochrome_ladder_runs_dark_to_light() {
        let ladder = style("Monochrome").apply(Color::rgb(0x3B, 0x82, 0xF6));
        let lum: Vec<f32> = ladder.colors().iter().map(|c| c.relative_luminance()).collect();
        assert!(lum.windows(2).all(|w| w[0] <= w[1]), "{lum:?}");
        assert!(lum[0] < lum[2] && lum[2] < lum[4], "{lum:?}");
    }

    #[test]
    fn analogous_centers_the_base() {
        let base = Hsl::new(10.0, 0.6, 0.4);
        let derived = style("Analogique").derive(base);
        assert!((hue_of(derived[0]) - 340.0).abs() < 1e-3);
        assert_eq!(derived[1], base);
        assert!((hue_of(derived[2]) - 40.0).abs() < 1e-3);
    }

    #[test]
    fn shades_clamp_at_the_top() {
        let derived = style("Nuances").derive(Hsl::new(200.0, 0.9, 0.95));
        assert_eq!(derived[2].saturation, 1.0);
        assert_eq!(derived[4].lightness, 1.0);
        assert!((derived[1].saturation - 0.6).abs() < 1e-6);
        assert!((derived[3].lightness - 0.65).abs() < 1e-6);
    }

    #[test]
    fn style_lookup_ignores_case() {
        assert_eq!(style("tétrade").name, "Tétrade");
        assert_eq!(style(" NUANCES ").name, "Nuances");
        assert!(find_style("Carré").is_none());
    }

    proptest! {
        #[test]
        fn derived_values_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let base = Color::rgb(r, g, b).to_hsl();
            for style in STYLES.iter() {
                for hsl in style.derive(base) {
                    prop_assert!((0.0..360.0).contains(&hue_of(hsl)));
                    prop_assert!((0.0..=1.0).contains(&hsl.saturation));
                    prop_assert!((0.0..=1.0).contains(&hsl.lightness));
                }
            }
        }

        #[test]
        fn wheel_styles_are_evenly_spaced(h in 0.0f32..360.0, s in 0.0f32..=1.0, l in 0.0f32..=1.0) {
            let base = Hsl::new(h, s, l);

            let triad = style("Triade").derive(base);
            prop_assert!((hue_gap(triad[0], triad[1]) - 120.0).abs() < 1e-2);
            prop_assert!((hue_gap(triad[1], triad[2]) - 120.0).abs() < 1e-2);
            prop_assert!((hue_gap(triad[2], triad[0]) - 120.0).abs() < 1e-2);

            let tetrad = style("Tétrade").derive(base);
            for pair in tetrad.windows(2) {
                prop_assert!((hue_gap(pair[0], pair[1]) - 90.0).abs() < 1e-2);
            }
        }

        #[test]
        fn palettes_are_never_empty(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            for palette in generate(Color::rgb(r, g, b)) {
                prop_assert!((2..=5).contains(&palette.len()));
            }
        }
    }
}
