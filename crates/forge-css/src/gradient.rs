//! Gradients — linear, radial and conic, with any number of color stops.

use forge_color::color::normalize_hue;
use forge_color::format_number;
use serde::{Deserialize, Serialize};

use crate::keyword::keyword_enum;
use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".gradient";

/// A gradient always keeps at least this many stops.
pub const MIN_STOPS: usize = 2;

keyword_enum! {
    /// The gradient function.
    #[derive(Default)]
    pub enum GradientKind("gradient type") {
        #[default]
        Linear => "linear",
        Radial => "radial",
        Conic => "conic",
    }
}

/// A color at a position along the gradient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Stable identifier for list edits.
    pub id: String,
    pub color: String,
    /// Percent, 0–100.
    pub position: f64,
}

impl ColorStop {
    #[must_use]
    pub fn new(id: impl Into<String>, color: impl Into<String>, position: f64) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            position: position.clamp(0.0, 100.0),
        }
    }

    /// Merge a stop patch.
    pub fn apply(&mut self, patch: ColorStopPatch) {
        merge::color(&mut self.color, "color", patch.color);
        merge::clamped(&mut self.position, patch.position, 0.0, 100.0);
    }
}

/// Partial update for one [`ColorStop`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorStopPatch {
    pub color: Option<String>,
    pub position: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// Angle in degrees, 0–360 (exclusive). Unused by radial gradients.
    pub direction: f64,
    /// Stops in edit order; sorted by position only when formatting.
    pub stops: Vec<ColorStop>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            direction: 45.0,
            stops: vec![
                ColorStop::new("1", "#3B82F6", 0.0),
                ColorStop::new("2", "#14B8A6", 100.0),
            ],
        }
    }
}

/// Partial update for [`GradientConfig`]. `stops` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPatch {
    #[serde(rename = "type")]
    pub kind: Option<GradientKind>,
    pub direction: Option<f64>,
    pub stops: Option<Vec<ColorStop>>,
}

impl GradientConfig {
    /// Merge `patch`. A replacement stop list is refused, and the current
    /// stops kept, when it is shorter than [`MIN_STOPS`], repeats an id, or
    /// has a stop whose color does not parse or whose position is NaN.
    pub fn apply(&mut self, patch: GradientPatch) {
        merge::plain(&mut self.kind, patch.kind);
        if let Some(direction) = patch.direction.filter(|d| d.is_finite()) {
            self.direction = normalize_hue(direction);
        }
        if let Some(stops) = patch.stops {
            self.replace_stops(stops);
        }
    }

    fn replace_stops(&mut self, stops: Vec<ColorStop>) {
        if stops.len() < MIN_STOPS {
            tracing::debug!(count = stops.len(), "refusing gradient with too few stops");
            return;
        }
        if !merge::unique_ids(stops.iter().map(|s| s.id.as_str())) {
            tracing::debug!("refusing gradient stops with duplicate ids");
            return;
        }
        if let Some(bad) = stops
            .iter()
            .find(|s| s.position.is_nan() || !merge::is_color(&s.color))
        {
            tracing::warn!(
                id = %bad.id,
                color = %bad.color,
                "refusing gradient stops with an invalid stop"
            );
            return;
        }
        self.stops = stops
            .into_iter()
            .map(|stop| ColorStop::new(stop.id, stop.color.trim(), stop.position))
            .collect();
    }

    /// The stop with the given id.
    #[must_use]
    pub fn stop(&self, id: &str) -> Option<&ColorStop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Stops ordered by position. Stops at equal positions keep their
    /// relative order.
    #[must_use]
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        let mut stops: Vec<&ColorStop> = self.stops.iter().collect();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        stops
    }
}

/// The `background` value, e.g. `linear-gradient(45deg, #3B82F6 0%, #14B8A6 100%)`.
#[must_use]
pub fn gradient_value(config: &GradientConfig) -> String {
    let stops = config
        .sorted_stops()
        .iter()
        .map(|stop| format!("{} {}%", stop.color, format_number(stop.position)))
        .collect::<Vec<_>>()
        .join(", ");
    let direction = format_number(config.direction);
    match config.kind {
        GradientKind::Linear => format!("linear-gradient({direction}deg, {stops})"),
        GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        GradientKind::Conic => format!("conic-gradient(from {direction}deg, {stops})"),
    }
}

#[must_use]
pub fn gradient_css(config: &GradientConfig) -> RuleBlock {
    RuleBlock::new(SELECTOR).with("background", gradient_value(config))
}
