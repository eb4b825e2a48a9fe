//! Named starting points for the animation, box-shadow and border-radius
//! generators.

use crate::animation::TimingPreset;
use crate::keyword::keyword_enum;
use crate::radius::{BorderRadiusConfig, RadiusUnit};
use crate::shadow::ShadowLayer;

/// Canonical cubic-bezier control points `[x1, y1, x2, y2]` of a timing
/// keyword. `Custom` has none.
#[must_use]
pub const fn bezier_points(preset: TimingPreset) -> Option<[f64; 4]> {
    match preset {
        TimingPreset::Ease => Some([0.25, 0.1, 0.25, 1.0]),
        TimingPreset::EaseIn => Some([0.42, 0.0, 1.0, 1.0]),
        TimingPreset::EaseOut => Some([0.0, 0.0, 0.58, 1.0]),
        TimingPreset::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
        TimingPreset::Linear => Some([0.0, 0.0, 1.0, 1.0]),
        TimingPreset::Custom => None,
    }
}

// ---------------------------------------------------------------------------
// Box shadow
// ---------------------------------------------------------------------------

keyword_enum! {
    pub enum ShadowPreset("shadow preset") {
        Subtle => "subtle",
        Medium => "medium",
        Large => "large",
        Layered => "layered",
    }
}

impl ShadowPreset {
    /// The preset's layers, top to bottom, numbered from `"1"`.
    #[must_use]
    pub fn layers(self) -> Vec<ShadowLayer> {
        let layer = |id: &str, y: f64, blur: f64, spread: f64, opacity: f64| ShadowLayer {
            id: id.to_string(),
            x: 0.0,
            y,
            blur,
            spread,
            color: "#000000".to_string(),
            inset: false,
            opacity,
        };
        match self {
            Self::Subtle => vec![layer("1", 1.0, 3.0, 0.0, 0.25)],
            Self::Medium => vec![layer("1", 4.0, 6.0, -1.0, 0.3)],
            Self::Large => vec![layer("1", 10.0, 15.0, -3.0, 0.35)],
            Self::Layered => vec![
                layer("1", 1.0, 3.0, 0.0, 0.25),
                layer("2", 1.0, 2.0, 0.0, 0.4),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Border radius
// ---------------------------------------------------------------------------

keyword_enum! {
    pub enum RadiusPreset("radius preset") {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Pill => "pill",
        Organic => "organic",
    }
}

impl RadiusPreset {
    #[must_use]
    pub fn config(self) -> BorderRadiusConfig {
        let uniform = |value: f64, unit: RadiusUnit| BorderRadiusConfig {
            top_left: value,
            top_right: value,
            bottom_right: value,
            bottom_left: value,
            unit,
        };
        match self {
            Self::None => uniform(0.0, RadiusUnit::Px),
            Self::Small => uniform(4.0, RadiusUnit::Px),
            Self::Medium => uniform(8.0, RadiusUnit::Px),
            Self::Large => uniform(16.0, RadiusUnit::Px),
            Self::Pill => uniform(50.0, RadiusUnit::Percent),
            Self::Organic => BorderRadiusConfig {
                top_left: 30.0,
                top_right: 60.0,
                bottom_right: 30.0,
                bottom_left: 60.0,
                unit: RadiusUnit::Px,
            },
        }
    }
}
