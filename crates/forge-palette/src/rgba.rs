//! CSS color string to `rgba(...)`.

use forge_color::{Color, format_number, parse_color};

use crate::cache::Memo;

static RGBA: Memo<String> = Memo::new("css_rgba");

/// Convert a CSS color string to `rgba(r, g, b, a)` at the given alpha.
///
/// Alpha is clamped to 0.0–1.0 and replaces any alpha in `color`. A color
/// that fails to parse is rendered as white so formatters always produce a
/// usable declaration.
#[must_use]
pub fn css_rgba(color: &str, alpha: f64) -> String {
    let alpha = alpha.clamp(0.0, 1.0);
    let key = format!("{color}\u{0}{}", format_number(alpha));
    RGBA.get_or_insert_with(key, || match parse_color(color) {
        Ok(parsed) => parsed.to_rgba(alpha),
        Err(err) => {
            tracing::warn!(%err, "rendering unparseable color as white");
            Color::WHITE.to_rgba(alpha)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgba() {
        assert_eq!(css_rgba("#000000", 0.3), "rgba(0, 0, 0, 0.3)");
        assert_eq!(css_rgba("#ffffff", 0.25), "rgba(255, 255, 255, 0.25)");
        assert_eq!(css_rgba("#3B82F6", 1.0), "rgba(59, 130, 246, 1)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(css_rgba("black", 1.8), "rgba(0, 0, 0, 1)");
        assert_eq!(css_rgba("black", -0.5), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn source_alpha_is_replaced() {
        assert_eq!(css_rgba("rgba(10, 20, 30, 0.5)", 0.08), "rgba(10, 20, 30, 0.08)");
    }

    #[test]
    fn invalid_color_renders_white() {
        assert_eq!(css_rgba("#zzzzzz", 0.18), "rgba(255, 255, 255, 0.18)");
    }
}
