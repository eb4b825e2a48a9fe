//! WCAG contrast ratio and accessibility classification.
//!
//! Classifies a foreground/background pair against the WCAG 2.1 thresholds:
//!
//! - AAA: contrast ratio >= 7:1
//! - AA: contrast ratio >= 4.5:1 (also the normal-text threshold)
//! - Large text (18pt, or 14pt bold): contrast ratio >= 3:1
//!
//! Luminance is computed in linearized sRGB per the WCAG definition.

use std::fmt;

use forge_color::{Color, parse_color};
use serde::Serialize;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    color.relative_luminance()
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(fg: Color, bg: Color) -> f64 {
    let la = relative_luminance(fg);
    let lb = relative_luminance(bg);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "fail")]
    Fail,
}

impl WcagLevel {
    /// The label shown to users: `AAA`, `AA` or `fail`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold classification of a single contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagClassification {
    pub level: WcagLevel,
    pub normal_text_compliant: bool,
    pub large_text_compliant: bool,
}

/// Classify a contrast ratio against the WCAG thresholds.
#[must_use]
pub fn classify_wcag(ratio: f64) -> WcagClassification {
    let level = if ratio >= 7.0 {
        WcagLevel::Aaa
    } else if ratio >= 4.5 {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    };
    WcagClassification {
        level,
        normal_text_compliant: ratio >= 4.5,
        large_text_compliant: ratio >= 3.0,
    }
}

/// Contrast report for a text/background pair given as CSS color strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    /// Ratio rounded to two decimals, for display.
    pub contrast_ratio: f64,
    #[serde(flatten)]
    pub classification: WcagClassification,
}

/// Build an [`AccessibilityReport`] for two CSS color strings.
///
/// Classification uses the exact ratio; only the reported number is
/// rounded. If either color fails to parse the ratio is 1 (a failing pair).
#[must_use]
pub fn accessibility_report(foreground: &str, background: &str) -> AccessibilityReport {
    let ratio = match (parse_color(foreground), parse_color(background)) {
        (Ok(fg), Ok(bg)) => contrast_ratio(fg, bg),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(%err, "contrast check on unparseable color");
            1.0
        }
    };
    AccessibilityReport {
        contrast_ratio: (ratio * 100.0).round() / 100.0,
        classification: classify_wcag(ratio),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Color::hsl(180.0, 0.5, 0.5);
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 1e-12), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Color::srgb(0.8, 0.2, 0.3);
        let b = Color::srgb(0.1, 0.1, 0.4);
        assert!(contrast_ratio(a, b).to_bits() == contrast_ratio(b, a).to_bits());
    }

    #[test]
    fn contrast_tailwind_slate_pair() {
        // Default scheme text on background: roughly 17.2:1.
        let fg = Color::rgb8(0xF8, 0xFA, 0xFC);
        let bg = Color::rgb8(0x0F, 0x17, 0x2A);
        let ratio = contrast_ratio(fg, bg);
        assert!(ratio > 17.0 && ratio < 17.4, "ratio: {ratio}");
    }

    // ── classify_wcag ───────────────────────────────────────────────

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify_wcag(4.5).level, WcagLevel::Aa);
        assert_eq!(classify_wcag(4.49999).level, WcagLevel::Fail);
        assert_eq!(classify_wcag(7.0).level, WcagLevel::Aaa);
        assert_eq!(classify_wcag(6.99).level, WcagLevel::Aa);
    }

    #[test]
    fn classify_text_sizes() {
        let c = classify_wcag(3.0);
        assert!(c.large_text_compliant);
        assert!(!c.normal_text_compliant);

        let c = classify_wcag(2.99);
        assert!(!c.large_text_compliant);

        let c = classify_wcag(4.5);
        assert!(c.large_text_compliant && c.normal_text_compliant);
    }

    #[test]
    fn level_labels() {
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
        assert_eq!(WcagLevel::Fail.to_string(), "fail");
    }

    // ── accessibility_report ────────────────────────────────────────

    #[test]
    fn report_rounds_ratio() {
        let report = accessibility_report("#ffffff", "#000000");
        assert!(approx_eq(report.contrast_ratio, 21.0, 1e-9));
        assert_eq!(report.classification.level, WcagLevel::Aaa);
    }

    #[test]
    fn report_invalid_color_fails() {
        let report = accessibility_report("nope", "#000000");
        assert!(approx_eq(report.contrast_ratio, 1.0, 1e-9));
        assert_eq!(report.classification.level, WcagLevel::Fail);
        assert!(!report.classification.large_text_compliant);
    }

    #[test]
    fn report_serializes_flat() {
        let report = accessibility_report("#ffffff", "#000000");
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["level"], "AAA");
        assert_eq!(json["normalTextCompliant"], true);
        assert_eq!(json["contrastRatio"], 21.0);
    }
}
