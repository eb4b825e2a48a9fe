//! Field-level helpers shared by the patch `apply` methods.

use std::collections::HashSet;

use forge_color::parse_color;

/// Replace `slot` with `value` only if it parses as a color.
///
/// Rejected input is logged and leaves the previous color in place.
pub(crate) fn color(slot: &mut String, field: &'static str, value: Option<String>) {
    let Some(value) = value else { return };
    match parse_color(&value) {
        Ok(_) => *slot = value.trim().to_string(),
        Err(err) => tracing::warn!(field, %err, "keeping previous color"),
    }
}

/// Replace `slot` with `value`, clamped to `lo..=hi`. NaN is ignored.
pub(crate) fn clamped(slot: &mut f64, value: Option<f64>, lo: f64, hi: f64) {
    if let Some(value) = value.filter(|v| !v.is_nan()) {
        *slot = value.clamp(lo, hi);
    }
}

/// Replace `slot` with `value`, floored at zero. NaN is ignored.
pub(crate) fn non_negative(slot: &mut f64, value: Option<f64>) {
    clamped(slot, value, 0.0, f64::INFINITY);
}

/// Replace `slot` with any finite `value`.
pub(crate) fn finite(slot: &mut f64, value: Option<f64>) {
    if let Some(value) = value.filter(|v| v.is_finite()) {
        *slot = value;
    }
}

/// Whether `value` parses as a color.
pub(crate) fn is_color(value: &str) -> bool {
    parse_color(value).is_ok()
}

/// Whether no id appears twice.
pub(crate) fn unique_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    ids.into_iter().all(|id| seen.insert(id))
}

/// Replace `slot` with `value` if one was given.
pub(crate) fn plain<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_keeps_previous() {
        let mut slot = "#ffffff".to_string();
        color(&mut slot, "test", Some("nope".into()));
        assert_eq!(slot, "#ffffff");
        color(&mut slot, "test", Some(" tomato ".into()));
        assert_eq!(slot, "tomato");
        color(&mut slot, "test", None);
        assert_eq!(slot, "tomato");
    }

    #[test]
    fn numeric_guards() {
        let mut v = 0.5;
        clamped(&mut v, Some(2.0), 0.0, 1.0);
        assert!((v - 1.0).abs() < f64::EPSILON);
        clamped(&mut v, Some(f64::NAN), 0.0, 1.0);
        assert!((v - 1.0).abs() < f64::EPSILON);
        non_negative(&mut v, Some(-3.0));
        assert!(v.abs() < f64::EPSILON);
        finite(&mut v, Some(f64::INFINITY));
        assert!(v.abs() < f64::EPSILON);
        finite(&mut v, Some(-4.5));
        assert!((v + 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_ids() {
        assert!(unique_ids(["1", "2", "3"]));
        assert!(!unique_ids(["a", "b", "a"]));
        assert!(unique_ids(std::iter::empty()));
    }
}
