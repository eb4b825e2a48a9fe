//! Animation timing — easing function and duration.
//!
//! `preset` and `custom_bezier` move together: choosing a named preset
//! loads its canonical control points, and editing any control point turns
//! the preset into `custom`.

use forge_color::format_number;
use serde::{Deserialize, Serialize};

use crate::keyword::keyword_enum;
use crate::merge;
use crate::presets::bezier_points;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".animated-element";

keyword_enum! {
    #[derive(Default)]
    pub enum TimingPreset("timing preset") {
        #[default]
        Ease => "ease",
        EaseIn => "ease-in",
        EaseOut => "ease-out",
        EaseInOut => "ease-in-out",
        Linear => "linear",
        Custom => "custom",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTimingConfig {
    pub preset: TimingPreset,
    /// `[x1, y1, x2, y2]`; x values stay within 0–1.
    pub custom_bezier: [f64; 4],
    /// Milliseconds.
    pub duration: f64,
}

impl Default for AnimationTimingConfig {
    fn default() -> Self {
        Self {
            preset: TimingPreset::Ease,
            custom_bezier: [0.25, 0.1, 0.25, 1.0],
            duration: 1000.0,
        }
    }
}

/// Partial update for [`AnimationTimingConfig`].
///
/// A named `preset` wins over `custom_bezier` when both are given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTimingPatch {
    pub preset: Option<TimingPreset>,
    pub custom_bezier: Option<[f64; 4]>,
    pub duration: Option<f64>,
}

/// Clamp a control point: x coordinates (even indices) to 0–1, y free.
fn clamp_point(index: usize, value: f64) -> f64 {
    if index % 2 == 0 { value.clamp(0.0, 1.0) } else { value }
}

impl AnimationTimingConfig {
    pub fn apply(&mut self, patch: AnimationTimingPatch) {
        merge::non_negative(&mut self.duration, patch.duration);
        if let Some(points) = patch.custom_bezier {
            if points.iter().all(|p| p.is_finite()) {
                for (i, value) in points.into_iter().enumerate() {
                    self.custom_bezier[i] = clamp_point(i, value);
                }
                self.preset = TimingPreset::Custom;
            }
        }
        if let Some(preset) = patch.preset {
            self.select_preset(preset);
        }
    }

    /// Switch to `preset`, loading its control points. Selecting `custom`
    /// keeps the current points.
    pub fn select_preset(&mut self, preset: TimingPreset) {
        self.preset = preset;
        if let Some(points) = bezier_points(preset) {
            self.custom_bezier = points;
        }
    }

    /// Set control point `index` (0–3) and switch to `custom`. Returns
    /// `false` for an out-of-range index or a non-finite value.
    pub fn set_bezier_point(&mut self, index: usize, value: f64) -> bool {
        if index >= self.custom_bezier.len() || !value.is_finite() {
            return false;
        }
        self.custom_bezier[index] = clamp_point(index, value);
        self.preset = TimingPreset::Custom;
        true
    }
}

/// `animation-timing-function` value: the keyword, or `cubic-bezier(...)`
/// for custom curves.
#[must_use]
pub fn timing_function(config: &AnimationTimingConfig) -> String {
    match config.preset {
        TimingPreset::Custom => {
            let points: Vec<String> = config.custom_bezier.iter().map(|&p| format_number(p)).collect();
            format!("cubic-bezier({})", points.join(", "))
        }
        preset => preset.keyword().to_string(),
    }
}

#[must_use]
pub fn animation_timing_css(config: &AnimationTimingConfig) -> RuleBlock {
    RuleBlock::new(SELECTOR)
        .with("animation-timing-function", timing_function(config))
        .with("animation-duration", format!("{}ms", format_number(config.duration.max(0.0))))
}
