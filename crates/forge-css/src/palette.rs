//! Color scheme and color shade generators, emitted as `:root` custom
//! properties.

use forge_palette::{ColorRole, ColorScheme, ColorShade, generate_color_shades};
use serde::{Deserialize, Serialize};

use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ":root";

// ---------------------------------------------------------------------------
// Color scheme
// ---------------------------------------------------------------------------

/// Partial update for a [`ColorScheme`], one optional color per role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemePatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub text_secondary: Option<String>,
}

impl ColorSchemePatch {
    /// Mutable access to the slot for `role`.
    pub fn slot(&mut self, role: ColorRole) -> &mut Option<String> {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Background => &mut self.background,
            ColorRole::Surface => &mut self.surface,
            ColorRole::Text => &mut self.text,
            ColorRole::TextSecondary => &mut self.text_secondary,
        }
    }
}

impl From<ColorScheme> for ColorSchemePatch {
    fn from(scheme: ColorScheme) -> Self {
        Self {
            primary: Some(scheme.primary),
            secondary: Some(scheme.secondary),
            accent: Some(scheme.accent),
            background: Some(scheme.background),
            surface: Some(scheme.surface),
            text: Some(scheme.text),
            text_secondary: Some(scheme.text_secondary),
        }
    }
}

/// Merge `patch` into `scheme`; colors that fail to parse are ignored.
pub fn apply_scheme_patch(scheme: &mut ColorScheme, mut patch: ColorSchemePatch) {
    for role in ColorRole::ALL {
        merge::color(scheme.get_mut(role), role.name(), patch.slot(role).take());
    }
}

/// `--color-<role>` custom properties in role order.
#[must_use]
pub fn color_scheme_css(scheme: &ColorScheme) -> RuleBlock {
    scheme.iter().fold(RuleBlock::new(SELECTOR), |rule, (role, color)| {
        rule.with(format!("--color-{role}"), color)
    })
}

// ---------------------------------------------------------------------------
// Color shades
// ---------------------------------------------------------------------------

/// A base color and the ramp derived from it. The ramp is never edited
/// directly; it is regenerated whenever the base changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorShadeConfig {
    base_color: String,
    shades: Vec<ColorShade>,
}

impl Default for ColorShadeConfig {
    fn default() -> Self {
        Self::new("#3B82F6")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorShadePatch {
    pub base_color: Option<String>,
}

impl ColorShadeConfig {
    /// A config for `base`. An unparseable base gives an empty ramp.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let base_color = base.trim().to_string();
        let shades = generate_color_shades(&base_color);
        Self { base_color, shades }
    }

    #[must_use]
    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    /// The nine shades, lightest first. Empty only for a base that never
    /// parsed.
    #[must_use]
    pub fn shades(&self) -> &[ColorShade] {
        &self.shades
    }

    /// Merge `patch`. A new base that fails to parse is ignored; otherwise
    /// the ramp is regenerated.
    pub fn apply(&mut self, patch: ColorShadePatch) {
        let previous = self.base_color.clone();
        merge::color(&mut self.base_color, "base-color", patch.base_color);
        if self.base_color != previous {
            self.shades = generate_color_shades(&self.base_color);
        }
    }
}

/// `--color-<n>` custom properties, `n` = 1 for the lightest shade.
#[must_use]
pub fn color_shade_css(config: &ColorShadeConfig) -> RuleBlock {
    config
        .shades
        .iter()
        .enumerate()
        .fold(RuleBlock::new(SELECTOR), |rule, (i, shade)| {
            rule.with(format!("--color-{}", i + 1), shade.hex.as_str())
        })
}

/// The ramp as a Tailwind `colors` snippet, keys 100 through 900.
#[must_use]
pub fn tailwind_colors(config: &ColorShadeConfig) -> String {
    let mut out = String::from("colors: {\n  primary: {\n");
    for (i, shade) in config.shades.iter().enumerate() {
        out.push_str(&format!("    {}: '{}',\n", (i + 1) * 100, shade.hex));
    }
    out.push_str("  }\n}");
    out
}
