//! Color scheme generation — seven semantic roles from one primary color.
//!
//! The derived roles keep the primary's hue and saturation:
//!
//! | Role             | Derivation             |
//! |------------------|------------------------|
//! | `secondary`      | hue + 60°              |
//! | `accent`         | hue + 180° (complement)|
//! | `background`     | lightness 5%           |
//! | `surface`        | lightness 10%          |
//! | `text`           | lightness 95%          |
//! | `text_secondary` | lightness 70%          |
//!
//! The primary itself is carried through verbatim, exactly as typed.

use std::fmt;

use forge_color::parse_color;
use serde::{Deserialize, Serialize};

use crate::cache::Memo;
use crate::contrast::{AccessibilityReport, accessibility_report};

static SCHEMES: Memo<ColorScheme> = Memo::new("generate_color_scheme");

// ---------------------------------------------------------------------------
// ColorRole
// ---------------------------------------------------------------------------

/// One named slot of a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    TextSecondary,
}

impl ColorRole {
    /// Every role, in display order.
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Background,
        Self::Surface,
        Self::Text,
        Self::TextSecondary,
    ];

    /// Kebab-case name, used for command fields and CSS custom properties.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Text => "text",
            Self::TextSecondary => "text-secondary",
        }
    }

    /// Look up a role by its kebab-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ColorScheme
// ---------------------------------------------------------------------------

/// A full set of semantic colors, each a CSS color string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::fallback("#3B82F6")
    }
}

impl ColorScheme {
    /// The fixed scheme used when a primary cannot be parsed, keeping the
    /// primary as given.
    #[must_use]
    pub fn fallback(primary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: "#14B8A6".to_string(),
            accent: "#F97316".to_string(),
            background: "#0F172A".to_string(),
            surface: "#1E293B".to_string(),
            text: "#F8FAFC".to_string(),
            text_secondary: "#CBD5E1".to_string(),
        }
    }

    /// The color assigned to `role`.
    #[must_use]
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Surface => &self.surface,
            ColorRole::Text => &self.text,
            ColorRole::TextSecondary => &self.text_secondary,
        }
    }

    /// Mutable access to the color assigned to `role`.
    pub fn get_mut(&mut self, role: ColorRole) -> &mut String {
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

    /// `(role, color)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Contrast of `text` against `background`.
    #[must_use]
    pub fn text_accessibility(&self) -> AccessibilityReport {
        accessibility_report(&self.text, &self.background)
    }

    /// Contrast of `text_secondary` against `background`.
    #[must_use]
    pub fn secondary_text_accessibility(&self) -> AccessibilityReport {
        accessibility_report(&self.text_secondary, &self.background)
    }
}

/// Derive a full scheme from a primary color string.
///
/// Results are memoized per input. An unparseable primary yields
/// [`ColorScheme::fallback`] rather than an error.
#[must_use]
pub fn generate_color_scheme(primary: &str) -> ColorScheme {
    SCHEMES.get_or_insert_with(primary.to_string(), || {
        let base = match parse_color(primary) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(%err, "falling back to the default color scheme");
                return ColorScheme::fallback(primary);
            }
        };

        ColorScheme {
            primary: primary.to_string(),
            secondary: base.rotate_hue(60.0).to_hex(),
            accent: base.rotate_hue(180.0).to_hex(),
            background: base.set_lightness(0.05).to_hex(),
            surface: base.set_lightness(0.10).to_hex(),
            text: base.set_lightness(0.95).to_hex(),
            text_secondary: base.set_lightness(0.70).to_hex(),
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
