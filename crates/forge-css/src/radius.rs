//! Border radius with one shared unit for all four corners.

use forge_color::format_number;
use serde::{Deserialize, Serialize};

use crate::keyword::keyword_enum;
use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".border-radius";

keyword_enum! {
    #[derive(Default)]
    pub enum RadiusUnit("radius unit") {
        #[default]
        Px => "px",
        Percent => "%",
        Rem => "rem",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadiusConfig {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
    pub unit: RadiusUnit,
}

impl Default for BorderRadiusConfig {
    fn default() -> Self {
        Self {
            top_left: 0.0,
            top_right: 0.0,
            bottom_right: 0.0,
            bottom_left: 0.0,
            unit: RadiusUnit::Px,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadiusPatch {
    pub top_left: Option<f64>,
    pub top_right: Option<f64>,
    pub bottom_right: Option<f64>,
    pub bottom_left: Option<f64>,
    pub unit: Option<RadiusUnit>,
}

impl BorderRadiusPatch {
    /// A patch setting all four corners to `value`.
    #[must_use]
    pub const fn all_corners(value: f64) -> Self {
        Self {
            top_left: Some(value),
            top_right: Some(value),
            bottom_right: Some(value),
            bottom_left: Some(value),
            unit: None,
        }
    }
}

impl BorderRadiusConfig {
    pub fn apply(&mut self, patch: BorderRadiusPatch) {
        merge::non_negative(&mut self.top_left, patch.top_left);
        merge::non_negative(&mut self.top_right, patch.top_right);
        merge::non_negative(&mut self.bottom_right, patch.bottom_right);
        merge::non_negative(&mut self.bottom_left, patch.bottom_left);
        merge::plain(&mut self.unit, patch.unit);
    }

    /// Corners in CSS order: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub const fn corners(&self) -> [f64; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

/// The `border-radius` value, e.g. `8px 8px 8px 8px`.
#[must_use]
pub fn border_radius_value(config: &BorderRadiusConfig) -> String {
    config
        .corners()
        .iter()
        .map(|&corner| format!("{}{}", format_number(corner), config.unit))
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn border_radius_css(config: &BorderRadiusConfig) -> RuleBlock {
    RuleBlock::new(SELECTOR).with("border-radius", border_radius_value(config))
}
