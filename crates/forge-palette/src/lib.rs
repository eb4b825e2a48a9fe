//! Derived colors for cssforge.
//!
//! Everything here builds on [`forge_color`] and works on CSS color
//! strings as a user typed them. Invalid input never produces an error at
//! this level: each derivation degrades to a fixed fallback and logs a
//! warning instead.
//!
//! - [`contrast`]: WCAG contrast ratio and conformance classification
//! - [`scheme`]: seven semantic roles derived from a primary color
//! - [`shades`]: a nine-step lightness ramp from a base color
//! - [`rgba`]: string-to-`rgba(...)` conversion used by the formatters
//!
//! Scheme, shade and rgba derivations are memoized process-wide (see
//! [`cache`]).

pub mod cache;
pub mod contrast;
pub mod rgba;
pub mod scheme;
pub mod shades;

pub use contrast::{
    AccessibilityReport, WcagClassification, WcagLevel, accessibility_report, classify_wcag,
    contrast_ratio,
};
pub use rgba::css_rgba;
pub use scheme::{ColorRole, ColorScheme, generate_color_scheme};
pub use shades::{ColorShade, generate_color_shades};
