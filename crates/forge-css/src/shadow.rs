//! Multi-layer box shadows.
//!
//! Layers render in list order, which CSS paints top to bottom.

use forge_color::format_number;
use forge_palette::css_rgba;
use serde::{Deserialize, Serialize};

use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".box-shadow";

/// The store never lets the layer list drop below this.
pub const MIN_LAYERS: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    pub id: String,
    /// Offsets, blur and spread in px.
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub inset: bool,
    /// 0.0–1.0.
    pub opacity: f64,
}

impl ShadowLayer {
    /// The layer added by "add shadow": `0 4px 6px 0 #000000` at 0.3.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 4.0,
            blur: 6.0,
            spread: 0.0,
            color: "#000000".to_string(),
            inset: false,
            opacity: 0.3,
        }
    }

    pub fn apply(&mut self, patch: ShadowLayerPatch) {
        merge::finite(&mut self.x, patch.x);
        merge::finite(&mut self.y, patch.y);
        merge::non_negative(&mut self.blur, patch.blur);
        merge::finite(&mut self.spread, patch.spread);
        merge::color(&mut self.color, "color", patch.color);
        merge::plain(&mut self.inset, patch.inset);
        merge::clamped(&mut self.opacity, patch.opacity, 0.0, 1.0);
    }

    /// Finite geometry, a parseable color and a non-NaN opacity.
    fn is_valid(&self) -> bool {
        [self.x, self.y, self.blur, self.spread].iter().all(|v| v.is_finite())
            && !self.opacity.is_nan()
            && merge::is_color(&self.color)
    }

    /// `[inset ]Xpx Ypx Bpx Spx rgba(...)`.
    #[must_use]
    pub fn value(&self) -> String {
        format!(
            "{}{}px {}px {}px {}px {}",
            if self.inset { "inset " } else { "" },
            format_number(self.x),
            format_number(self.y),
            format_number(self.blur.max(0.0)),
            format_number(self.spread),
            css_rgba(&self.color, self.opacity),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayerPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub blur: Option<f64>,
    pub spread: Option<f64>,
    pub color: Option<String>,
    pub inset: Option<bool>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShadowConfig {
    pub shadows: Vec<ShadowLayer>,
}

impl Default for BoxShadowConfig {
    fn default() -> Self {
        Self {
            shadows: vec![ShadowLayer {
                spread: -1.0,
                ..ShadowLayer::new("1")
            }],
        }
    }
}

/// Partial update for [`BoxShadowConfig`]; `shadows` replaces the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxShadowPatch {
    pub shadows: Option<Vec<ShadowLayer>>,
}

impl BoxShadowConfig {
    /// Merge `patch`. A replacement list is refused, and the current layers
    /// kept, when it is empty, repeats an id, or has an invalid layer.
    pub fn apply(&mut self, patch: BoxShadowPatch) {
        let Some(shadows) = patch.shadows else { return };
        if shadows.len() < MIN_LAYERS {
            tracing::debug!("refusing empty shadow list");
            return;
        }
        if !merge::unique_ids(shadows.iter().map(|l| l.id.as_str())) {
            tracing::debug!("refusing shadow list with duplicate ids");
            return;
        }
        if let Some(bad) = shadows.iter().find(|l| !l.is_valid()) {
            tracing::warn!(id = %bad.id, "refusing shadow list with an invalid layer");
            return;
        }
        self.shadows = shadows
            .into_iter()
            .map(|mut layer| {
                layer.color = layer.color.trim().to_string();
                layer.opacity = layer.opacity.clamp(0.0, 1.0);
                layer.blur = layer.blur.max(0.0);
                layer
            })
            .collect();
    }

    #[must_use]
    pub fn layer(&self, id: &str) -> Option<&ShadowLayer> {
        self.shadows.iter().find(|l| l.id == id)
    }
}

/// The `box-shadow` value: layers joined by `, `, or `none`.
#[must_use]
pub fn box_shadow_value(config: &BoxShadowConfig) -> String {
    if config.shadows.is_empty() {
        return "none".to_string();
    }
    config
        .shadows
        .iter()
        .map(ShadowLayer::value)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn box_shadow_css(config: &BoxShadowConfig) -> RuleBlock {
    RuleBlock::new(SELECTOR).with("box-shadow", box_shadow_value(config))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presets::ShadowPreset;

    #[test]
    fn default_rule() {
        assert_eq!(
            box_shadow_css(&BoxShadowConfig::default()).to_string(),
            ".box-shadow {\n  box-shadow: 0px 4px 6px -1px rgba(0, 0, 0, 0.3);\n}"
        );
    }

    #[test]
    fn layers_keep_list_order() {
        let config = BoxShadowConfig { shadows: ShadowPreset::Layered.layers() };
        assert_eq!(
            box_shadow_value(&config),
            "0px 1px 3px 0px rgba(0, 0, 0, 0.25), 0px 1px 2px 0px rgba(0, 0, 0, 0.4)"
        );
    }

    #[test]
    fn inset_prefix() {
        let layer = ShadowLayer { inset: true, color: "#3B82F6".into(), ..ShadowLayer::new("7") };
        assert_eq!(layer.value(), "inset 0px 4px 6px 0px rgba(59, 130, 246, 0.3)");
    }

    #[test]
    fn zero_layers_is_none() {
        let config = BoxShadowConfig { shadows: Vec::new() };
        assert_eq!(box_shadow_css(&config).value_of("box-shadow"), Some("none"));
    }

    #[test]
    fn empty_replacement_is_refused() {
        let mut config = BoxShadowConfig::default();
        config.apply(BoxShadowPatch { shadows: Some(Vec::new()) });
        assert_eq!(config, BoxShadowConfig::default());
    }

    #[test]
    fn replacement_with_duplicate_ids_is_refused() {
        let mut config = BoxShadowConfig::default();
        config.apply(BoxShadowPatch {
            shadows: Some(vec![ShadowLayer::new("a"), ShadowLayer::new("a")]),
        });
        assert_eq!(config, BoxShadowConfig::default());
    }

    #[test]
    fn replacement_with_bad_layer_is_refused() {
        let bad_layers = [
            ShadowLayer { color: "not-a-color".into(), ..ShadowLayer::new("b") },
            ShadowLayer { x: f64::NAN, ..ShadowLayer::new("b") },
            ShadowLayer { spread: f64::INFINITY, ..ShadowLayer::new("b") },
            ShadowLayer { opacity: f64::NAN, ..ShadowLayer::new("b") },
        ];
        for bad in bad_layers {
            let mut config = BoxShadowConfig::default();
            config.apply(BoxShadowPatch { shadows: Some(vec![ShadowLayer::new("a"), bad]) });
            assert_eq!(config, BoxShadowConfig::default());
        }
    }

    #[test]
    fn replacement_is_normalized() {
        let mut config = BoxShadowConfig::default();
        config.apply(BoxShadowPatch {
            shadows: Some(vec![ShadowLayer {
                color: " #3B82F6 ".into(),
                blur: -2.0,
                opacity: 5.0,
                ..ShadowLayer::new("a")
            }]),
        });
        assert_eq!(box_shadow_value(&config), "0px 4px 0px 0px rgba(59, 130, 246, 1)");
    }

    #[test]
    fn layer_patch_clamps() {
        let mut layer = ShadowLayer::new("1");
        layer.apply(ShadowLayerPatch {
            blur: Some(-3.0),
            opacity: Some(2.0),
            x: Some(-12.5),
            color: Some("bogus".into()),
            ..ShadowLayerPatch::default()
        });
        assert_eq!(layer.value(), "-12.5px 4px 0px 0px rgba(0, 0, 0, 1)");
    }
}
