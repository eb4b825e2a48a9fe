//! Glassmorphism — a frosted translucent panel.
//!
//! The box shadow has fixed geometry (`0 8px 32px 0`); only its color and
//! opacity vary. Shadow opacity is `shadow_intensity / 10`.

use forge_color::format_number;
use forge_palette::css_rgba;
use serde::{Deserialize, Serialize};

use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".glassmorphism";

/// Upper bound of [`GlassmorphismConfig::shadow_intensity`].
pub const MAX_SHADOW_INTENSITY: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassmorphismConfig {
    pub background_color: String,
    /// 0.0–1.0.
    pub background_opacity: f64,
    /// Backdrop blur radius in px.
    pub backdrop_blur: f64,
    /// Corner radius in px.
    pub border_radius: f64,
    /// Border width in px.
    pub border_width: f64,
    pub border_color: String,
    /// 0.0–1.0.
    pub border_opacity: f64,
    /// 0.0–10.0.
    pub shadow_intensity: f64,
    pub shadow_color: String,
}

impl Default for GlassmorphismConfig {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            background_opacity: 0.25,
            backdrop_blur: 10.0,
            border_radius: 16.0,
            border_width: 1.0,
            border_color: "#ffffff".to_string(),
            border_opacity: 0.18,
            shadow_intensity: 0.8,
            shadow_color: "#000000".to_string(),
        }
    }
}

/// Partial update for [`GlassmorphismConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassmorphismPatch {
    pub background_color: Option<String>,
    pub background_opacity: Option<f64>,
    pub backdrop_blur: Option<f64>,
    pub border_radius: Option<f64>,
    pub border_width: Option<f64>,
    pub border_color: Option<String>,
    pub border_opacity: Option<f64>,
    pub shadow_intensity: Option<f64>,
    pub shadow_color: Option<String>,
}

impl GlassmorphismConfig {
    /// Merge `patch` field by field, clamping numbers into range.
    pub fn apply(&mut self, patch: GlassmorphismPatch) {
        merge::color(&mut self.background_color, "background-color", patch.background_color);
        merge::clamped(&mut self.background_opacity, patch.background_opacity, 0.0, 1.0);
        merge::non_negative(&mut self.backdrop_blur, patch.backdrop_blur);
        merge::non_negative(&mut self.border_radius, patch.border_radius);
        merge::non_negative(&mut self.border_width, patch.border_width);
        merge::color(&mut self.border_color, "border-color", patch.border_color);
        merge::clamped(&mut self.border_opacity, patch.border_opacity, 0.0, 1.0);
        merge::clamped(
            &mut self.shadow_intensity,
            patch.shadow_intensity,
            0.0,
            MAX_SHADOW_INTENSITY,
        );
        merge::color(&mut self.shadow_color, "shadow-color", patch.shadow_color);
    }
}

/// Format a glassmorphism configuration.
///
/// Out-of-range numbers are clamped on the way out, so hand-built
/// configurations format the same as ones that went through the store.
#[must_use]
pub fn glassmorphism_css(config: &GlassmorphismConfig) -> RuleBlock {
    let blur = format!("blur({}px)", format_number(config.backdrop_blur.max(0.0)));
    let intensity = config.shadow_intensity.clamp(0.0, MAX_SHADOW_INTENSITY);
    let border = format!(
        "{}px solid {}",
        format_number(config.border_width.max(0.0)),
        css_rgba(&config.border_color, config.border_opacity),
    );
    let shadow = format!(
        "0 8px 32px 0 {}",
        css_rgba(&config.shadow_color, intensity / MAX_SHADOW_INTENSITY),
    );

    RuleBlock::new(SELECTOR)
        .with("background", css_rgba(&config.background_color, config.background_opacity))
        .with("backdrop-filter", blur.clone())
        .with("-webkit-backdrop-filter", blur)
        .with("border-radius", format!("{}px", format_number(config.border_radius.max(0.0))))
        .with("border", border)
        .with("box-shadow", shadow)
}
