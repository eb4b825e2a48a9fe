//! 2D transforms: translate, rotate, scale, skew and origin.
//!
//! Only functions that differ from the identity are emitted, always in the
//! order translate, rotate, scale, skew. An identity transform renders as
//! `none`. `transform-origin` is always present.

use std::fmt;
use std::str::FromStr;

use forge_color::format_number;
use serde::{Deserialize, Serialize};

use crate::keyword::{UnknownKeyword, keyword_enum};
use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".transform";

keyword_enum! {
    #[derive(Default)]
    pub enum OriginKeyword("transform origin") {
        #[default]
        Center => "center",
        Top => "top",
        TopRight => "top right",
        Right => "right",
        BottomRight => "bottom right",
        Bottom => "bottom",
        BottomLeft => "bottom left",
        Left => "left",
        TopLeft => "top left",
    }
}

/// `transform-origin`: a keyword position or an explicit point in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TransformOrigin {
    Keyword(OriginKeyword),
    Point { x: f64, y: f64 },
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::Keyword(OriginKeyword::Center)
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.keyword()),
            Self::Point { x, y } => write!(f, "{}px {}px", format_number(*x), format_number(*y)),
        }
    }
}

/// A length in px; the unit may be omitted.
fn px_length(text: &str) -> Option<f64> {
    let number = text.strip_suffix("px").unwrap_or(text);
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl FromStr for TransformOrigin {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if let [x, y] = words.as_slice() {
            if let (Some(x), Some(y)) = (px_length(x), px_length(y)) {
                return Ok(Self::Point { x, y });
            }
        }
        words.join(" ").parse::<OriginKeyword>().map(Self::Keyword).map_err(|mut err| {
            err.value = s.to_string();
            err.expected.push_str(", or an \"<x>px <y>px\" point");
            err
        })
    }
}

impl From<TransformOrigin> for String {
    fn from(origin: TransformOrigin) -> Self {
        origin.to_string()
    }
}

impl TryFrom<String> for TransformOrigin {
    type Error = UnknownKeyword;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    /// px.
    pub translate_x: f64,
    pub translate_y: f64,
    /// Degrees.
    pub rotate: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Degrees.
    pub skew_x: f64,
    pub skew_y: f64,
    #[serde(rename = "transformOrigin")]
    pub origin: TransformOrigin,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            skew_y: 0.0,
            origin: TransformOrigin::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformPatch {
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
    pub rotate: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub skew_x: Option<f64>,
    pub skew_y: Option<f64>,
    #[serde(rename = "transformOrigin")]
    pub origin: Option<TransformOrigin>,
}

impl TransformConfig {
    pub fn apply(&mut self, patch: TransformPatch) {
        merge::finite(&mut self.translate_x, patch.translate_x);
        merge::finite(&mut self.translate_y, patch.translate_y);
        merge::finite(&mut self.rotate, patch.rotate);
        merge::finite(&mut self.scale_x, patch.scale_x);
        merge::finite(&mut self.scale_y, patch.scale_y);
        merge::finite(&mut self.skew_x, patch.skew_x);
        merge::finite(&mut self.skew_y, patch.skew_y);
        merge::plain(&mut self.origin, patch.origin);
    }
}

/// The `transform` value.
#[must_use]
pub fn transform_value(config: &TransformConfig) -> String {
    let n = format_number;
    let [tx, ty, rotate, sx, sy, kx, ky] = [
        config.translate_x,
        config.translate_y,
        config.rotate,
        config.scale_x,
        config.scale_y,
        config.skew_x,
        config.skew_y,
    ]
    .map(n);
    // Values that print as identity are identity.
    let mut functions = Vec::new();
    if tx != "0" || ty != "0" {
        functions.push(format!("translate({tx}px, {ty}px)"));
    }
    if rotate != "0" {
        functions.push(format!("rotate({rotate}deg)"));
    }
    if sx != "1" || sy != "1" {
        functions.push(format!("scale({sx}, {sy})"));
    }
    if kx != "0" || ky != "0" {
        functions.push(format!("skew({kx}deg, {ky}deg)"));
    }
    if functions.is_empty() {
        "none".to_string()
    } else {
        functions.join(" ")
    }
}

#[must_use]
pub fn transform_css(config: &TransformConfig) -> RuleBlock {
    RuleBlock::new(SELECTOR)
        .with("transform", transform_value(config))
        .with("transform-origin", config.origin.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identity_is_none() {
        assert_eq!(
            transform_css(&TransformConfig::default()).to_string(),
            ".transform {\n  transform: none;\n  transform-origin: center;\n}"
        );
    }

    #[test]
    fn rotate_only() {
        let config = TransformConfig { rotate: 45.0, ..TransformConfig::default() };
        let css = transform_css(&config).to_string();
        assert!(css.contains("transform: rotate(45deg);"), "{css}");
    }

    #[test]
    fn sub_precision_values_are_identity() {
        let config = TransformConfig {
            rotate: 0.000_01,
            scale_x: 1.000_01,
            translate_y: -0.000_04,
            skew_y: 0.000_02,
            ..TransformConfig::default()
        };
        assert_eq!(transform_value(&config), "none");
        let config = TransformConfig { rotate: 0.000_06, ..TransformConfig::default() };
        assert_eq!(transform_value(&config), "rotate(0.0001deg)");
    }

    #[test]
    fn functions_in_fixed_order() {
        let config = TransformConfig {
            translate_x: 10.0,
            rotate: -15.0,
            scale_y: 1.5,
            skew_x: 5.0,
            ..TransformConfig::default()
        };
        assert_eq!(
            transform_value(&config),
            "translate(10px, 0px) rotate(-15deg) scale(1, 1.5) skew(5deg, 0deg)"
        );
    }

    #[test]
    fn origin_keywords_and_points() {
        assert_eq!(
            "top  right".parse::<TransformOrigin>(),
            Ok(TransformOrigin::Keyword(OriginKeyword::TopRight))
        );
        assert_eq!(
            "10px 20.5px".parse::<TransformOrigin>(),
            Ok(TransformOrigin::Point { x: 10.0, y: 20.5 })
        );
        assert_eq!(
            "0 0".parse::<TransformOrigin>().map(|o| o.to_string()),
            Ok("0px 0px".to_string())
        );
        assert!("middle".parse::<TransformOrigin>().is_err());
    }

    #[test]
    fn origin_serializes_as_css() {
        let config = TransformConfig {
            origin: TransformOrigin::Keyword(OriginKeyword::BottomLeft),
            ..TransformConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["transformOrigin"], "bottom left");
        let back: TransformConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn patch_ignores_non_finite() {
        let mut config = TransformConfig::default();
        config.apply(TransformPatch {
            rotate: Some(f64::NAN),
            scale_x: Some(2.0),
            ..TransformPatch::default()
        });
        assert!(config.rotate.abs() < f64::EPSILON);
        assert_eq!(transform_value(&config), "scale(2, 1)");
    }
}
