//! The generator store — one configuration per effect family plus the
//! active family.
//!
//! The store is an ordinary value owned by its caller. Configurations are
//! read through accessors and changed only through the setters below, each
//! of which re-establishes the family's invariants after merging.
//!
//! # Notification
//!
//! Subscribers registered with [`Store::subscribe`] run synchronously, in
//! registration order, after every change that actually altered state. A
//! setter whose patch leaves the configuration equal to what it was does
//! not notify. Each callback receives the [`GeneratorKind`] that changed;
//! switching the active family reports the newly active kind.
//!
//! # List identifiers
//!
//! Gradient stops and shadow layers carry string ids. Ids handed out by
//! [`Store::add_stop`] and [`Store::add_shadow`] come from one counter per
//! store that starts above every id used by the defaults and presets, so
//! runs are reproducible.

use std::fmt;

use forge_palette::{AccessibilityReport, ColorScheme, generate_color_scheme};
use serde::Serialize;

use crate::animation::{self, AnimationTimingConfig, AnimationTimingPatch, TimingPreset};
use crate::flexbox::{self, FlexboxConfig, FlexboxPatch};
use crate::glass::{self, GlassmorphismConfig, GlassmorphismPatch};
use crate::gradient::{self, ColorStop, ColorStopPatch, GradientConfig, GradientPatch, MIN_STOPS};
use crate::grid::{self, CssGridConfig, CssGridPatch};
use crate::keyword::keyword_enum;
use crate::palette::{self, ColorSchemePatch, ColorShadeConfig, ColorShadePatch};
use crate::presets::{RadiusPreset, ShadowPreset};
use crate::radius::{self, BorderRadiusConfig, BorderRadiusPatch};
use crate::rule::RuleBlock;
use crate::shadow::{self, BoxShadowConfig, BoxShadowPatch, MIN_LAYERS, ShadowLayer, ShadowLayerPatch};
use crate::transform::{self, TransformConfig, TransformPatch};

keyword_enum! {
    /// One effect family.
    #[derive(Default)]
    pub enum GeneratorKind("generator") {
        #[default]
        Glassmorphism => "glassmorphism",
        Gradient => "gradient",
        ColorScheme => "color-scheme",
        CssGrid => "css-grid",
        Flexbox => "flexbox",
        ColorShade => "color-shade",
        AnimationTiming => "animation-timing",
        BoxShadow => "box-shadow",
        Transform => "transform",
        BorderRadius => "border-radius",
    }
}

impl GeneratorKind {
    /// Title shown in listings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Glassmorphism => "Glassmorphism",
            Self::Gradient => "Gradient",
            Self::ColorScheme => "Color Scheme",
            Self::CssGrid => "CSS Grid",
            Self::Flexbox => "Flexbox",
            Self::ColorShade => "Color Shades",
            Self::AnimationTiming => "Animation Timing",
            Self::BoxShadow => "Box Shadow",
            Self::Transform => "Transform",
            Self::BorderRadius => "Border Radius",
        }
    }
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(GeneratorKind)>;

/// Contrast of the scheme's two text roles against its background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeAccessibility {
    pub text: AccessibilityReport,
    pub text_secondary: AccessibilityReport,
}

/// First id handed out for new stops and layers.
const FIRST_LIST_ID: u64 = 3;

pub struct Store {
    active: GeneratorKind,
    glassmorphism: GlassmorphismConfig,
    gradient: GradientConfig,
    color_scheme: ColorScheme,
    css_grid: CssGridConfig,
    flexbox: FlexboxConfig,
    color_shade: ColorShadeConfig,
    animation_timing: AnimationTimingConfig,
    box_shadow: BoxShadowConfig,
    transform: TransformConfig,
    border_radius: BorderRadiusConfig,
    next_list_id: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
    version: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("active", &self.active)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// A store holding every family's defaults, with glassmorphism active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: GeneratorKind::default(),
            glassmorphism: GlassmorphismConfig::default(),
            gradient: GradientConfig::default(),
            color_scheme: ColorScheme::default(),
            css_grid: CssGridConfig::default(),
            flexbox: FlexboxConfig::default(),
            color_shade: ColorShadeConfig::default(),
            animation_timing: AnimationTimingConfig::default(),
            box_shadow: BoxShadowConfig::default(),
            transform: TransformConfig::default(),
            border_radius: BorderRadiusConfig::default(),
            next_list_id: FIRST_LIST_ID,
            next_subscription: 0,
            subscribers: Vec::new(),
            version: 0,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub const fn active(&self) -> GeneratorKind {
        self.active
    }

    /// Number of effective changes so far.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub const fn glassmorphism(&self) -> &GlassmorphismConfig {
        &self.glassmorphism
    }

    #[must_use]
    pub const fn gradient(&self) -> &GradientConfig {
        &self.gradient
    }

    #[must_use]
    pub const fn color_scheme(&self) -> &ColorScheme {
        &self.color_scheme
    }

    #[must_use]
    pub const fn css_grid(&self) -> &CssGridConfig {
        &self.css_grid
    }

    #[must_use]
    pub const fn flexbox(&self) -> &FlexboxConfig {
        &self.flexbox
    }

    #[must_use]
    pub const fn color_shade(&self) -> &ColorShadeConfig {
        &self.color_shade
    }

    #[must_use]
    pub const fn animation_timing(&self) -> &AnimationTimingConfig {
        &self.animation_timing
    }

    #[must_use]
    pub const fn box_shadow(&self) -> &BoxShadowConfig {
        &self.box_shadow
    }

    #[must_use]
    pub const fn transform(&self) -> &TransformConfig {
        &self.transform
    }

    #[must_use]
    pub const fn border_radius(&self) -> &BorderRadiusConfig {
        &self.border_radius
    }

    // ── Subscriptions ───────────────────────────────────────────────

    /// Register `callback` to run after every effective change.
    pub fn subscribe(&mut self, callback: impl FnMut(GeneratorKind) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Record the outcome of a mutation and notify on change.
    fn commit(&mut self, kind: GeneratorKind, changed: bool) {
        if !changed {
            tracing::trace!(%kind, "patch left config unchanged");
            return;
        }
        self.version += 1;
        tracing::debug!(%kind, version = self.version, "config updated");
        for (_, callback) in &mut self.subscribers {
            callback(kind);
        }
    }

    /// Run `edit` on one configuration and commit if it changed.
    fn edit<C, R>(
        &mut self,
        kind: GeneratorKind,
        slot: impl FnOnce(&mut Self) -> &mut C,
        change: impl FnOnce(&mut C) -> R,
    ) -> R
    where
        C: Clone + PartialEq,
    {
        let config = slot(&mut *self);
        let before = config.clone();
        let result = change(config);
        let changed = *config != before;
        self.commit(kind, changed);
        result
    }

    /// The next counter value not already used by a stop or a layer.
    fn next_list_id(&mut self) -> String {
        loop {
            let id = self.next_list_id.to_string();
            self.next_list_id += 1;
            if self.gradient.stop(&id).is_none() && self.box_shadow.layer(&id).is_none() {
                return id;
            }
        }
    }

    // ── Active family ───────────────────────────────────────────────

    /// Switch the active family. Other configurations are untouched.
    pub fn set_active(&mut self, kind: GeneratorKind) {
        let changed = self.active != kind;
        self.active = kind;
        self.commit(kind, changed);
    }

    /// Restore one family to its defaults.
    pub fn reset(&mut self, kind: GeneratorKind) {
        match kind {
            GeneratorKind::Glassmorphism => {
                self.edit(kind, |s| &mut s.glassmorphism, |c| *c = GlassmorphismConfig::default());
            }
            GeneratorKind::Gradient => {
                self.edit(kind, |s| &mut s.gradient, |c| *c = GradientConfig::default());
            }
            GeneratorKind::ColorScheme => {
                self.edit(kind, |s| &mut s.color_scheme, |c| *c = ColorScheme::default());
            }
            GeneratorKind::CssGrid => {
                self.edit(kind, |s| &mut s.css_grid, |c| *c = CssGridConfig::default());
            }
            GeneratorKind::Flexbox => {
                self.edit(kind, |s| &mut s.flexbox, |c| *c = FlexboxConfig::default());
            }
            GeneratorKind::ColorShade => {
                self.edit(kind, |s| &mut s.color_shade, |c| *c = ColorShadeConfig::default());
            }
            GeneratorKind::AnimationTiming => {
                self.edit(kind, |s| &mut s.animation_timing, |c| {
                    *c = AnimationTimingConfig::default();
                });
            }
            GeneratorKind::BoxShadow => {
                self.edit(kind, |s| &mut s.box_shadow, |c| *c = BoxShadowConfig::default());
            }
            GeneratorKind::Transform => self.reset_transform(),
            GeneratorKind::BorderRadius => self.reset_border_radius(),
        }
    }

    // ── Glassmorphism ───────────────────────────────────────────────

    pub fn set_glassmorphism(&mut self, patch: GlassmorphismPatch) {
        self.edit(GeneratorKind::Glassmorphism, |s| &mut s.glassmorphism, |c| c.apply(patch));
    }

    // ── Gradient ────────────────────────────────────────────────────

    pub fn set_gradient(&mut self, patch: GradientPatch) {
        self.edit(GeneratorKind::Gradient, |s| &mut s.gradient, |c| c.apply(patch));
    }

    /// Append a `#3B82F6` stop at 50% and return its id.
    pub fn add_stop(&mut self) -> String {
        let id = self.next_list_id();
        let stop = ColorStop::new(id.clone(), "#3B82F6", 50.0);
        self.edit(GeneratorKind::Gradient, |s| &mut s.gradient, |c| c.stops.push(stop));
        id
    }

    /// Remove stop `id`. Refused (returns `false`) when only the minimum
    /// number of stops remains or no stop has that id.
    pub fn remove_stop(&mut self, id: &str) -> bool {
        if self.gradient.stops.len() <= MIN_STOPS {
            tracing::debug!(id, "refusing to remove gradient stop below minimum");
            return false;
        }
        self.edit(GeneratorKind::Gradient, |s| &mut s.gradient, |c| {
            let Some(index) = c.stops.iter().position(|stop| stop.id == id) else {
                return false;
            };
            c.stops.remove(index);
            true
        })
    }

    /// Patch stop `id`. Returns `false` if there is no such stop.
    pub fn update_stop(&mut self, id: &str, patch: ColorStopPatch) -> bool {
        self.edit(GeneratorKind::Gradient, |s| &mut s.gradient, |c| {
            let Some(stop) = c.stops.iter_mut().find(|stop| stop.id == id) else {
                return false;
            };
            stop.apply(patch);
            true
        })
    }

    // ── Color scheme ────────────────────────────────────────────────

    pub fn set_color_scheme(&mut self, patch: ColorSchemePatch) {
        self.edit(GeneratorKind::ColorScheme, |s| &mut s.color_scheme, |c| {
            palette::apply_scheme_patch(c, patch);
        });
    }

    /// Re-derive every role from the current primary.
    pub fn regenerate_scheme(&mut self) {
        let generated = generate_color_scheme(&self.color_scheme.primary);
        self.set_color_scheme(generated.into());
    }

    #[must_use]
    pub fn scheme_accessibility(&self) -> SchemeAccessibility {
        SchemeAccessibility {
            text: self.color_scheme.text_accessibility(),
            text_secondary: self.color_scheme.secondary_text_accessibility(),
        }
    }

    // ── CSS grid ────────────────────────────────────────────────────

    pub fn set_css_grid(&mut self, patch: CssGridPatch) {
        self.edit(GeneratorKind::CssGrid, |s| &mut s.css_grid, |c| c.apply(patch));
    }

    /// Add a column (up to six). Returns `false` at the limit.
    pub fn add_column(&mut self) -> bool {
        self.resize_grid(0, 1)
    }

    /// Drop the last column (down to one). Returns `false` at the limit.
    pub fn remove_column(&mut self) -> bool {
        self.resize_grid(0, -1)
    }

    /// Add a row (up to six). Returns `false` at the limit.
    pub fn add_row(&mut self) -> bool {
        self.resize_grid(1, 0)
    }

    /// Drop the last row (down to one). Returns `false` at the limit.
    pub fn remove_row(&mut self) -> bool {
        self.resize_grid(-1, 0)
    }

    fn resize_grid(&mut self, d_rows: isize, d_columns: isize) -> bool {
        let rows = self.css_grid.rows.saturating_add_signed(d_rows);
        let columns = self.css_grid.columns.saturating_add_signed(d_columns);
        let in_range = |n: usize| (grid::MIN_TRACKS..=grid::MAX_TRACKS).contains(&n);
        if !in_range(rows) || !in_range(columns) {
            tracing::debug!(rows, columns, "grid resize out of range");
            return false;
        }
        self.edit(GeneratorKind::CssGrid, |s| &mut s.css_grid, |c| c.resize(rows, columns));
        true
    }

    /// Name a template cell (0-based). Returns `false` for a cell outside
    /// the grid or an invalid name.
    pub fn set_area(&mut self, row: usize, column: usize, name: &str) -> bool {
        self.edit(GeneratorKind::CssGrid, |s| &mut s.css_grid, |c| c.set_area(row, column, name))
    }

    // ── Flexbox ─────────────────────────────────────────────────────

    pub fn set_flexbox(&mut self, patch: FlexboxPatch) {
        self.edit(GeneratorKind::Flexbox, |s| &mut s.flexbox, |c| c.apply(patch));
    }

    // ── Color shades ────────────────────────────────────────────────

    pub fn set_color_shade(&mut self, patch: ColorShadePatch) {
        self.edit(GeneratorKind::ColorShade, |s| &mut s.color_shade, |c| c.apply(patch));
    }

    // ── Animation timing ────────────────────────────────────────────

    pub fn set_animation_timing(&mut self, patch: AnimationTimingPatch) {
        self.edit(GeneratorKind::AnimationTiming, |s| &mut s.animation_timing, |c| c.apply(patch));
    }

    pub fn select_preset(&mut self, preset: TimingPreset) {
        self.edit(GeneratorKind::AnimationTiming, |s| &mut s.animation_timing, |c| {
            c.select_preset(preset);
        });
    }

    /// Set one control point (0–3) and switch to a custom curve.
    pub fn set_bezier_point(&mut self, index: usize, value: f64) -> bool {
        self.edit(GeneratorKind::AnimationTiming, |s| &mut s.animation_timing, |c| {
            c.set_bezier_point(index, value)
        })
    }

    // ── Box shadow ──────────────────────────────────────────────────

    pub fn set_box_shadow(&mut self, patch: BoxShadowPatch) {
        self.edit(GeneratorKind::BoxShadow, |s| &mut s.box_shadow, |c| c.apply(patch));
    }

    /// Append a new layer and return its id.
    pub fn add_shadow(&mut self) -> String {
        let id = self.next_list_id();
        let layer = ShadowLayer::new(id.clone());
        self.edit(GeneratorKind::BoxShadow, |s| &mut s.box_shadow, |c| c.shadows.push(layer));
        id
    }

    /// Remove layer `id`. Refused when it is the last layer.
    pub fn remove_shadow(&mut self, id: &str) -> bool {
        if self.box_shadow.shadows.len() <= MIN_LAYERS {
            tracing::debug!(id, "refusing to remove the last shadow layer");
            return false;
        }
        self.edit(GeneratorKind::BoxShadow, |s| &mut s.box_shadow, |c| {
            let Some(index) = c.shadows.iter().position(|layer| layer.id == id) else {
                return false;
            };
            c.shadows.remove(index);
            true
        })
    }

    /// Patch layer `id`. Returns `false` if there is no such layer.
    pub fn update_shadow(&mut self, id: &str, patch: ShadowLayerPatch) -> bool {
        self.edit(GeneratorKind::BoxShadow, |s| &mut s.box_shadow, |c| {
            let Some(layer) = c.shadows.iter_mut().find(|layer| layer.id == id) else {
                return false;
            };
            layer.apply(patch);
            true
        })
    }

    pub fn apply_shadow_preset(&mut self, preset: ShadowPreset) {
        self.set_box_shadow(BoxShadowPatch { shadows: Some(preset.layers()) });
    }

    // ── Transform ───────────────────────────────────────────────────

    pub fn set_transform(&mut self, patch: TransformPatch) {
        self.edit(GeneratorKind::Transform, |s| &mut s.transform, |c| c.apply(patch));
    }

    pub fn reset_transform(&mut self) {
        self.edit(GeneratorKind::Transform, |s| &mut s.transform, |c| *c = TransformConfig::default());
    }

    // ── Border radius ───────────────────────────────────────────────

    pub fn set_border_radius(&mut self, patch: BorderRadiusPatch) {
        self.edit(GeneratorKind::BorderRadius, |s| &mut s.border_radius, |c| c.apply(patch));
    }

    pub fn set_all_corners(&mut self, value: f64) {
        self.set_border_radius(BorderRadiusPatch::all_corners(value));
    }

    pub fn apply_radius_preset(&mut self, preset: RadiusPreset) {
        self.edit(GeneratorKind::BorderRadius, |s| &mut s.border_radius, |c| *c = preset.config());
    }

    pub fn reset_border_radius(&mut self) {
        self.edit(GeneratorKind::BorderRadius, |s| &mut s.border_radius, |c| {
            *c = BorderRadiusConfig::default();
        });
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// The rule block of one family.
    #[must_use]
    pub fn render(&self, kind: GeneratorKind) -> RuleBlock {
        match kind {
            GeneratorKind::Glassmorphism => glass::glassmorphism_css(&self.glassmorphism),
            GeneratorKind::Gradient => gradient::gradient_css(&self.gradient),
            GeneratorKind::ColorScheme => palette::color_scheme_css(&self.color_scheme),
            GeneratorKind::CssGrid => grid::css_grid_css(&self.css_grid),
            GeneratorKind::Flexbox => flexbox::flexbox_css(&self.flexbox),
            GeneratorKind::ColorShade => palette::color_shade_css(&self.color_shade),
            GeneratorKind::AnimationTiming => animation::animation_timing_css(&self.animation_timing),
            GeneratorKind::BoxShadow => shadow::box_shadow_css(&self.box_shadow),
            GeneratorKind::Transform => transform::transform_css(&self.transform),
            GeneratorKind::BorderRadius => radius::border_radius_css(&self.border_radius),
        }
    }

    #[must_use]
    pub fn render_active(&self) -> RuleBlock {
        self.render(self.active)
    }

    /// One family's configuration as JSON.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures from `serde_json`.
    pub fn config_json(&self, kind: GeneratorKind) -> serde_json::Result<serde_json::Value> {
        match kind {
            GeneratorKind::Glassmorphism => serde_json::to_value(&self.glassmorphism),
            GeneratorKind::Gradient => serde_json::to_value(&self.gradient),
            GeneratorKind::ColorScheme => serde_json::to_value(&self.color_scheme),
            GeneratorKind::CssGrid => serde_json::to_value(&self.css_grid),
            GeneratorKind::Flexbox => serde_json::to_value(&self.flexbox),
            GeneratorKind::ColorShade => serde_json::to_value(&self.color_shade),
            GeneratorKind::AnimationTiming => serde_json::to_value(&self.animation_timing),
            GeneratorKind::BoxShadow => serde_json::to_value(&self.box_shadow),
            GeneratorKind::Transform => serde_json::to_value(&self.transform),
            GeneratorKind::BorderRadius => serde_json::to_value(&self.border_radius),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder(store: &mut Store) -> (SubscriptionId, Rc<RefCell<Vec<GeneratorKind>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |kind| sink.borrow_mut().push(kind));
        (id, seen)
    }

    // ── Active family ───────────────────────────────────────────────

    #[test]
    fn starts_on_glassmorphism() {
        let store = Store::new();
        assert_eq!(store.active(), GeneratorKind::Glassmorphism);
        assert!(store.render_active().to_string().starts_with(".glassmorphism {"));
    }

    #[test]
    fn switching_keeps_other_configs() {
        let mut store = Store::new();
        store.set_all_corners(12.0);
        store.set_active(GeneratorKind::Gradient);
        store.set_active(GeneratorKind::BorderRadius);
        assert_eq!(
            store.render_active().value_of("border-radius"),
            Some("12px 12px 12px 12px")
        );
    }

    #[test]
    fn kinds_parse_from_keywords() {
        assert_eq!("css-grid".parse::<GeneratorKind>(), Ok(GeneratorKind::CssGrid));
        assert_eq!(GeneratorKind::ALL.len(), 10);
        assert_eq!(GeneratorKind::AnimationTiming.title(), "Animation Timing");
    }

    // ── Subscriptions ───────────────────────────────────────────────

    #[test]
    fn subscribers_see_effective_changes() {
        let mut store = Store::new();
        let (_, seen) = recorder(&mut store);

        store.set_flexbox(FlexboxPatch { gap: Some(8.0), ..FlexboxPatch::default() });
        store.set_flexbox(FlexboxPatch { gap: Some(8.0), ..FlexboxPatch::default() });
        store.set_active(GeneratorKind::Transform);
        store.set_active(GeneratorKind::Transform);

        assert_eq!(*seen.borrow(), vec![GeneratorKind::Flexbox, GeneratorKind::Transform]);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Store::new();
        let (id, seen) = recorder(&mut store);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.reset_transform();
        store.set_all_corners(4.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let mut store = Store::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(n));
        }
        store.set_all_corners(1.0);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn rejected_color_does_not_notify() {
        let mut store = Store::new();
        let (_, seen) = recorder(&mut store);
        store.set_glassmorphism(GlassmorphismPatch {
            background_color: Some("not-a-color".into()),
            ..GlassmorphismPatch::default()
        });
        assert_eq!(store.glassmorphism().background_color, "#ffffff");
        assert!(seen.borrow().is_empty());
    }

    // ── Gradient stops ──────────────────────────────────────────────

    #[test]
    fn removing_below_two_stops_is_refused() {
        let mut store = Store::new();
        assert!(!store.remove_stop("1"));
        assert_eq!(store.gradient().stops.len(), 2);
    }

    #[test]
    fn add_then_remove_stop() {
        let mut store = Store::new();
        let id = store.add_stop();
        assert_eq!(id, "3");
        assert_eq!(store.gradient().stop(&id).map(|s| s.color.as_str()), Some("#3B82F6"));
        assert!(store.remove_stop("1"));
        assert!(!store.remove_stop("1"));
        assert_eq!(store.gradient().stops.len(), 2);
    }

    #[test]
    fn unknown_stop_id() {
        let mut store = Store::new();
        store.add_stop();
        assert!(!store.remove_stop("nope"));
        assert!(!store.update_stop("nope", ColorStopPatch::default()));
    }

    #[test]
    fn update_stop_resorts_output() {
        let mut store = Store::new();
        assert!(store.update_stop("1", ColorStopPatch { position: Some(100.0), ..ColorStopPatch::default() }));
        assert!(store.update_stop("2", ColorStopPatch { position: Some(0.0), ..ColorStopPatch::default() }));
        assert_eq!(
            store.render(GeneratorKind::Gradient).value_of("background"),
            Some("linear-gradient(45deg, #14B8A6 0%, #3B82F6 100%)")
        );
    }

    #[test]
    fn ids_are_unique_across_lists() {
        let mut store = Store::new();
        let a = store.add_stop();
        let b = store.add_shadow();
        let c = store.add_stop();
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("3", "4", "5"));
    }

    #[test]
    fn new_ids_skip_ids_in_use() {
        let mut store = Store::new();
        store.set_gradient(GradientPatch {
            stops: Some(vec![ColorStop::new("1", "red", 0.0), ColorStop::new("3", "blue", 100.0)]),
            ..GradientPatch::default()
        });
        let id = store.add_stop();
        assert_eq!(id, "4");
        assert!(store.remove_stop("3"));
        assert!(!store.remove_stop("4"));
        let ids: Vec<&str> = store.gradient().stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn replaced_shadow_ids_are_not_handed_out_again() {
        let mut store = Store::new();
        store.set_box_shadow(BoxShadowPatch {
            shadows: Some(vec![ShadowLayer::new("3"), ShadowLayer::new("4")]),
        });
        assert_eq!(store.add_shadow(), "5");
        assert_eq!(store.add_stop(), "6");
    }

    #[test]
    fn duplicate_id_lists_are_refused() {
        let mut store = Store::new();
        let version = store.version();
        store.set_gradient(GradientPatch {
            stops: Some(vec![ColorStop::new("a", "red", 0.0), ColorStop::new("a", "blue", 100.0)]),
            ..GradientPatch::default()
        });
        store.set_box_shadow(BoxShadowPatch {
            shadows: Some(vec![ShadowLayer::new("a"), ShadowLayer::new("a")]),
        });
        assert_eq!(store.gradient(), &GradientConfig::default());
        assert_eq!(store.box_shadow(), &BoxShadowConfig::default());
        assert_eq!(store.version(), version);
    }

    #[test]
    fn remove_drops_a_single_entry() {
        let mut store = Store::new();
        let stop = store.add_stop();
        assert!(store.remove_stop(&stop));
        assert_eq!(store.gradient().stops.len(), 2);
        let layer = store.add_shadow();
        assert!(store.remove_shadow(&layer));
        assert_eq!(store.box_shadow().shadows.len(), 1);
    }

    // ── Box shadow ──────────────────────────────────────────────────

    #[test]
    fn last_shadow_cannot_be_removed() {
        let mut store = Store::new();
        assert!(!store.remove_shadow("1"));
        let id = store.add_shadow();
        assert!(store.remove_shadow("1"));
        assert_eq!(store.box_shadow().shadows.len(), 1);
        assert_eq!(store.box_shadow().shadows[0].id, id);
    }

    #[test]
    fn shadow_preset_and_update() {
        let mut store = Store::new();
        store.apply_shadow_preset(ShadowPreset::Layered);
        assert!(store.update_shadow("2", ShadowLayerPatch { inset: Some(true), ..ShadowLayerPatch::default() }));
        assert_eq!(
            store.render(GeneratorKind::BoxShadow).value_of("box-shadow"),
            Some("0px 1px 3px 0px rgba(0, 0, 0, 0.25), inset 0px 1px 2px 0px rgba(0, 0, 0, 0.4)")
        );
    }

    // ── Grid ────────────────────────────────────────────────────────

    #[test]
    fn grid_resizing_respects_limits() {
        let mut store = Store::new();
        for _ in 0..3 {
            assert!(store.add_column());
        }
        assert!(!store.add_column());
        assert_eq!(store.css_grid().columns, 6);
        assert_eq!(store.css_grid().template_areas[0][5], "area6");

        assert!(store.remove_row());
        assert!(store.remove_row());
        assert!(!store.remove_row());
        assert_eq!(store.css_grid().template_areas.len(), 1);
    }

    #[test]
    fn set_area_names_cell() {
        let mut store = Store::new();
        assert!(store.set_area(2, 2, "aside"));
        assert_eq!(store.css_grid().template_areas[2][2], "aside");
        assert!(!store.set_area(9, 0, "x"));
    }

    // ── Animation ───────────────────────────────────────────────────

    #[test]
    fn bezier_edit_forces_custom() {
        let mut store = Store::new();
        store.select_preset(TimingPreset::EaseIn);
        assert!(store.set_bezier_point(3, 1.2));
        assert_eq!(
            store.render(GeneratorKind::AnimationTiming).value_of("animation-timing-function"),
            Some("cubic-bezier(0.42, 0, 1, 1.2)")
        );
    }

    // ── Color scheme & shades ───────────────────────────────────────

    #[test]
    fn regenerate_keeps_primary() {
        let mut store = Store::new();
        store.set_color_scheme(ColorSchemePatch { primary: Some("#ff0000".into()), ..ColorSchemePatch::default() });
        store.regenerate_scheme();
        assert_eq!(store.color_scheme().primary, "#ff0000");
        assert_eq!(store.color_scheme().accent, "#00ffff");
    }

    #[test]
    fn default_scheme_accessibility() {
        let report = Store::new().scheme_accessibility();
        assert!(report.text.classification.normal_text_compliant);
        assert!(report.text_secondary.classification.large_text_compliant);
    }

    #[test]
    fn shade_base_change_regenerates() {
        let mut store = Store::new();
        store.set_color_shade(ColorShadePatch { base_color: Some("#00ff00".into()) });
        assert_eq!(store.color_shade().shades()[4].hex, "#00ff00");
    }

    // ── Transform & radius ──────────────────────────────────────────

    #[test]
    fn transform_reset() {
        let mut store = Store::new();
        store.set_transform(TransformPatch { rotate: Some(45.0), ..TransformPatch::default() });
        assert_eq!(store.render(GeneratorKind::Transform).value_of("transform"), Some("rotate(45deg)"));
        store.reset_transform();
        assert_eq!(store.transform(), &TransformConfig::default());
    }

    #[test]
    fn radius_preset_then_reset() {
        let mut store = Store::new();
        store.apply_radius_preset(RadiusPreset::Pill);
        assert_eq!(
            store.render(GeneratorKind::BorderRadius).value_of("border-radius"),
            Some("50% 50% 50% 50%")
        );
        store.reset(GeneratorKind::BorderRadius);
        assert_eq!(store.border_radius(), &BorderRadiusConfig::default());
    }

    #[test]
    fn reset_any_family() {
        let mut store = Store::new();
        store.add_stop();
        store.reset(GeneratorKind::Gradient);
        assert_eq!(store.gradient(), &GradientConfig::default());
    }

    #[test]
    fn config_json_uses_camel_case() {
        let json = Store::new().config_json(GeneratorKind::Glassmorphism).unwrap();
        assert_eq!(json["backdropBlur"], 10.0);
        assert_eq!(json["shadowColor"], "#000000");
    }
}
