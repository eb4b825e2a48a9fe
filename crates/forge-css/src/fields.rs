//! Field assignment — turning `name=value` pairs into patches.
//!
//! Every patch type implements [`Assign`]. Field names are the kebab-case
//! form of the configuration's field names; a few short aliases are
//! accepted where the long name is awkward to type.
//!
//! # Value syntax
//!
//! | Kind     | Accepted                                              |
//! |----------|-------------------------------------------------------|
//! | number   | `12`, `-3.5`, with an optional `px`/`deg`/`ms`/`%`/`rem` suffix |
//! | count    | non-negative integer                                  |
//! | bool     | `true`/`false`, `on`/`off`, `yes`/`no`, `1`/`0`        |
//! | color    | anything `parse_color` accepts                        |
//! | keyword  | the CSS keyword, case-insensitive                     |
//!
//! Colors are checked here as well as in the store so that a typo is
//! reported to the user instead of being silently dropped.

use std::str::FromStr;

use forge_color::parse_color;
use forge_palette::ColorRole;

use crate::animation::AnimationTimingPatch;
use crate::error::CommandError;
use crate::flexbox::FlexboxPatch;
use crate::glass::GlassmorphismPatch;
use crate::gradient::{ColorStopPatch, GradientPatch};
use crate::grid::CssGridPatch;
use crate::keyword::UnknownKeyword;
use crate::palette::{ColorSchemePatch, ColorShadePatch};
use crate::radius::BorderRadiusPatch;
use crate::shadow::ShadowLayerPatch;
use crate::store::GeneratorKind;
use crate::transform::TransformPatch;

/// Unit suffixes stripped from numeric values.
const UNITS: [&str; 5] = ["px", "deg", "ms", "%", "rem"];

/// A patch that can be filled one named field at a time.
pub(crate) trait Assign: Default {
    /// The family whose fields this patch carries, for error messages.
    const GENERATOR: GeneratorKind;

    /// Set `field` from its textual `value`.
    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError>;

    /// Build a patch from a list of assignments, stopping at the first
    /// error.
    fn from_assignments(assignments: &[(String, String)]) -> Result<Self, CommandError> {
        let mut patch = Self::default();
        for (field, value) in assignments {
            patch.assign(field, value)?;
        }
        Ok(patch)
    }
}

fn unknown<A: Assign>(field: &str) -> CommandError {
    CommandError::UnknownField {
        generator: A::GENERATOR,
        field: field.to_string(),
    }
}

// ── Value parsers ───────────────────────────────────────────────────

pub(crate) fn number(field: &str, value: &str) -> Result<f64, CommandError> {
    let trimmed = value.trim();
    let digits = UNITS
        .iter()
        .find_map(|unit| trimmed.strip_suffix(unit))
        .unwrap_or(trimmed);
    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::invalid(field, value, "expected a number"))
}

pub(crate) fn count(field: &str, value: &str) -> Result<usize, CommandError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| CommandError::invalid(field, value, "expected a whole number"))
}

fn boolean(field: &str, value: &str) -> Result<bool, CommandError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(CommandError::invalid(field, value, "expected true or false")),
    }
}

fn color(field: &str, value: &str) -> Result<String, CommandError> {
    parse_color(value)
        .map(|_| value.trim().to_string())
        .map_err(|_| CommandError::invalid(field, value, "not a color"))
}

fn keyword<T: FromStr<Err = UnknownKeyword>>(value: &str) -> Result<T, CommandError> {
    Ok(value.parse::<T>()?)
}

// ── Patches ─────────────────────────────────────────────────────────

impl Assign for GlassmorphismPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::Glassmorphism;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "background-color" | "background" => self.background_color = Some(color(field, value)?),
            "background-opacity" => self.background_opacity = Some(number(field, value)?),
            "backdrop-blur" | "blur" => self.backdrop_blur = Some(number(field, value)?),
            "border-radius" | "radius" => self.border_radius = Some(number(field, value)?),
            "border-width" => self.border_width = Some(number(field, value)?),
            "border-color" => self.border_color = Some(color(field, value)?),
            "border-opacity" => self.border_opacity = Some(number(field, value)?),
            "shadow-intensity" => self.shadow_intensity = Some(number(field, value)?),
            "shadow-color" => self.shadow_color = Some(color(field, value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl Assign for GradientPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::Gradient;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "type" | "kind" => self.kind = Some(keyword(value)?),
            "direction" | "angle" => self.direction = Some(number(field, value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl Assign for ColorStopPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::Gradient;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "color" => self.color = Some(color(field, value)?),
            "position" | "pos" => self.position = Some(number(field, value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl Assign for ColorSchemePatch {
    const GENERATOR: GeneratorKind = GeneratorKind::ColorScheme;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        let role = ColorRole::from_name(field).ok_or_else(|| unknown::<Self>(field))?;
        *self.slot(role) = Some(color(field, value)?);
        Ok(())
    }
}

impl Assign for CssGridPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::CssGrid;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "columns" | "cols" => self.columns = Some(count(field, value)?),
            "rows" => self.rows = Some(count(field, value)?),
            "column-gap" => self.column_gap = Some(number(field, value)?),
            "row-gap" => self.row_gap = Some(number(field, value)?),
            "gap" => {
                let gap = number(field, value)?;
                self.column_gap = Some(gap);
                self.row_gap = Some(gap);
            }
            "justify-items" => self.justify_items = Some(keyword(value)?),
            "align-items" => self.align_items = Some(keyword(value)?),
            "justify-content" => self.justify_content = Some(keyword(value)?),
            "align-content" => self.align_content = Some(keyword(value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl Assign for FlexboxPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::Flexbox;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "flex-direction" | "direction" => self.flex_direction = Some(keyword(value)?),
            "justify-content" => self.justify_content = Some(keyword(value)?),
            "align-items" => self.align_items = Some(keyword(value)?),
            "flex-wrap" | "wrap" => self.flex_wrap = Some(keyword(value)?),
            "align-content" => self.align_content = Some(keyword(value)?),
            "gap" => self.gap = Some(number(field, value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl Assign for ColorShadePatch {
    const GENERATOR: GeneratorKind = GeneratorKind::ColorShade;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "base-color" | "base" => self.base_color = Some(color(field, value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

/// Control points are not part of this patch: `x1`, `y1`, `x2` and `y2`
/// are applied one at a time through the store (see [`bezier_index`]).
impl Assign for AnimationTimingPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::AnimationTiming;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "preset" | "timing" => self.preset = Some(keyword(value)?),
            "duration" => self.duration = Some(number(field, value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

/// Index of a cubic-bezier control point field.
pub(crate) fn bezier_index(field: &str) -> Option<usize> {
    ["x1", "y1", "x2", "y2"].iter().position(|&name| name == field)
}

impl Assign for ShadowLayerPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::BoxShadow;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "x" => self.x = Some(number(field, value)?),
            "y" => self.y = Some(number(field, value)?),
            "blur" => self.blur = Some(number(field, value)?),
            "spread" => self.spread = Some(number(field, value)?),
            "color" => self.color = Some(color(field, value)?),
            "inset" => self.inset = Some(boolean(field, value)?),
            "opacity" => self.opacity = Some(number(field, value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl Assign for TransformPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::Transform;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "translate-x" => self.translate_x = Some(number(field, value)?),
            "translate-y" => self.translate_y = Some(number(field, value)?),
            "rotate" => self.rotate = Some(number(field, value)?),
            "scale-x" => self.scale_x = Some(number(field, value)?),
            "scale-y" => self.scale_y = Some(number(field, value)?),
            "scale" => {
                let scale = number(field, value)?;
                self.scale_x = Some(scale);
                self.scale_y = Some(scale);
            }
            "skew-x" => self.skew_x = Some(number(field, value)?),
            "skew-y" => self.skew_y = Some(number(field, value)?),
            "transform-origin" | "origin" => self.origin = Some(keyword(value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl Assign for BorderRadiusPatch {
    const GENERATOR: GeneratorKind = GeneratorKind::BorderRadius;

    fn assign(&mut self, field: &str, value: &str) -> Result<(), CommandError> {
        match field {
            "top-left" => self.top_left = Some(number(field, value)?),
            "top-right" => self.top_right = Some(number(field, value)?),
            "bottom-right" => self.bottom_right = Some(number(field, value)?),
            "bottom-left" => self.bottom_left = Some(number(field, value)?),
            "all" => {
                let unit = self.unit;
                *self = Self { unit, ..Self::all_corners(number(field, value)?) };
            }
            "unit" => self.unit = Some(keyword(value)?),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flexbox::FlexWrap;
    use crate::radius::RadiusUnit;
    use crate::transform::{OriginKeyword, TransformOrigin};

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter().map(|(f, v)| ((*f).to_string(), (*v).to_string())).collect()
    }

    // ── values ──────────────────────────────────────────────────────

    #[test]
    fn numbers_accept_unit_suffixes() {
        assert_eq!(number("x", "12px"), Ok(12.0));
        assert_eq!(number("x", "-45deg"), Ok(-45.0));
        assert_eq!(number("x", "300ms"), Ok(300.0));
        assert_eq!(number("x", " 50% "), Ok(50.0));
        assert!(number("x", "12em").is_err());
        assert!(number("x", "inf").is_err());
    }

    #[test]
    fn booleans() {
        assert_eq!(boolean("inset", "on"), Ok(true));
        assert_eq!(boolean("inset", "No"), Ok(false));
        assert!(boolean("inset", "maybe").is_err());
    }

    // ── patches ─────────────────────────────────────────────────────

    #[test]
    fn glass_fields() {
        let patch = GlassmorphismPatch::from_assignments(&pairs(&[
            ("blur", "20px"),
            ("background-color", "teal"),
        ]))
        .unwrap();
        assert_eq!(patch.backdrop_blur, Some(20.0));
        assert_eq!(patch.background_color.as_deref(), Some("teal"));
        assert_eq!(patch.border_color, None);
    }

    #[test]
    fn invalid_color_is_reported() {
        let err = GlassmorphismPatch::from_assignments(&pairs(&[("shadow-color", "#12")])).unwrap_err();
        assert_eq!(err, CommandError::invalid("shadow-color", "#12", "not a color"));
    }

    #[test]
    fn unknown_field_names_generator() {
        let err = FlexboxPatch::default().assign("colour", "red").unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownField {
                generator: GeneratorKind::Flexbox,
                field: "colour".into()
            }
        );
    }

    #[test]
    fn keywords_and_roles() {
        let mut flex = FlexboxPatch::default();
        flex.assign("wrap", "NOWRAP").unwrap();
        assert_eq!(flex.flex_wrap, Some(FlexWrap::NoWrap));

        let mut scheme = ColorSchemePatch::default();
        scheme.assign("text-secondary", "#cbd5e1").unwrap();
        assert_eq!(scheme.text_secondary.as_deref(), Some("#cbd5e1"));
        assert!(scheme.assign("tertiary", "#fff").is_err());
    }

    #[test]
    fn transform_origin_with_spaces() {
        let mut patch = TransformPatch::default();
        patch.assign("origin", "top left").unwrap();
        assert_eq!(patch.origin, Some(TransformOrigin::Keyword(OriginKeyword::TopLeft)));
        patch.assign("scale", "2").unwrap();
        assert_eq!((patch.scale_x, patch.scale_y), (Some(2.0), Some(2.0)));
    }

    #[test]
    fn radius_all_keeps_unit() {
        let patch = BorderRadiusPatch::from_assignments(&pairs(&[("unit", "rem"), ("all", "1.5")])).unwrap();
        assert_eq!(patch.unit, Some(RadiusUnit::Rem));
        assert_eq!(patch.bottom_left, Some(1.5));
    }

    #[test]
    fn bezier_fields() {
        assert_eq!(bezier_index("x1"), Some(0));
        assert_eq!(bezier_index("y2"), Some(3));
        assert_eq!(bezier_index("z1"), None);
    }
}
