//! Shade ramps: nine colors from one base, lightest first.

use forge_color::parse_color;
use serde::{Deserialize, Serialize};

use crate::cache::Memo;

static SHADES: Memo<Vec<ColorShade>> = Memo::new("generate_color_shades");

/// Lightness percentages of a ramp, in output order.
pub const SHADE_LIGHTNESS: [u8; 9] = [90, 80, 70, 60, 50, 40, 30, 20, 10];

/// One step of a shade ramp, pre-rendered in the three CSS notations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorShade {
    pub hex: String,
    pub hsl: String,
    pub rgb: String,
    /// HSL lightness of this step, in percent.
    pub lightness: u8,
}

/// Hold hue and saturation of `base` and step lightness from 90% to 10%.
///
/// Returns an empty ramp when `base` does not parse.
#[must_use]
pub fn generate_color_shades(base: &str) -> Vec<ColorShade> {
    SHADES.get_or_insert_with(base.to_string(), || {
        let color = match parse_color(base) {
            Ok(color) => color.with_alpha(1.0),
            Err(err) => {
                tracing::warn!(%err, "no shades for unparseable base color");
                return Vec::new();
            }
        };

        SHADE_LIGHTNESS
            .iter()
            .map(|&lightness| {
                let shade = color.set_lightness(f64::from(lightness) / 100.0);
                ColorShade {
                    hex: shade.to_hex(),
                    hsl: shade.to_hsl_css(),
                    rgb: shade.to_rgb_css(),
                    lightness,
                }
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nine_steps_lightest_first() {
        let shades = generate_color_shades("#3B82F6");
        let lightness: Vec<u8> = shades.iter().map(|s| s.lightness).collect();
        assert_eq!(lightness, SHADE_LIGHTNESS.to_vec());
    }

    #[test]
    fn notations_agree() {
        let shades = generate_color_shades("#3B82F6");
        let mid = &shades[4];
        assert_eq!(mid.lightness, 50);
        assert!(mid.hsl.starts_with("hsl(217, 91%, 50%"), "{}", mid.hsl);
        assert!(mid.rgb.starts_with("rgb("), "{}", mid.rgb);
        let reparsed = parse_color(&mid.rgb).unwrap();
        assert_eq!(reparsed.to_hex(), mid.hex);
    }

    #[test]
    fn hex_is_lowercase() {
        for shade in generate_color_shades("#3B82F6") {
            assert_eq!(shade.hex, shade.hex.to_lowercase());
            assert_eq!(shade.hex.len(), 7);
        }
    }

    #[test]
    fn translucent_base_yields_opaque_shades() {
        let shades = generate_color_shades("rgba(59, 130, 246, 0.5)");
        assert!(shades.iter().all(|s| s.hex.len() == 7));
    }

    #[test]
    fn gray_base_stays_gray() {
        for shade in generate_color_shades("gray") {
            let color = parse_color(&shade.hex).unwrap();
            assert!(color.is_achromatic(), "{}", shade.hex);
            assert!(shade.hsl.starts_with("hsl(0, 0%, "), "{}", shade.hsl);
        }
    }

    #[test]
    fn invalid_base_is_empty() {
        assert!(generate_color_shades("not a color").is_empty());
    }
}
