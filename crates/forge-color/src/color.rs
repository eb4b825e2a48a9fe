// SPDX-License-Identifier: MIT
//
// forge-color color system — sRGB storage with HSL-space operations.
//
// Single-character variable names (r, g, b, h, s, l, a) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against the CSS Color reference algorithms.
#![allow(clippy::many_single_char_names)]
//
// CSS authors think in hex, rgb() and hsl(). Every derived color in this
// workspace (hue rotation, lightness ramps, alpha composition) happens in
// HSL space because that is what the CSS output speaks, and because the
// generated ramps have to agree with what a browser does for `hsl(...)`.
//
// Conversion pipeline:
//
//   CSS text → parse → sRGB (f64, 0–1) ↔ HSL ↔ CSS text (hex/rgb/rgba/hsl)
//
// Luminance math for WCAG contrast happens on linearized sRGB.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color stored as unclamped-precision sRGB channels plus alpha.
///
/// Channels are kept as `f64` in `0.0..=1.0` so that a chain of HSL edits
/// does not accumulate 8-bit rounding error. Rounding to bytes happens only
/// when the color is serialized.
///
/// # Examples
///
/// ```
/// use forge_color::Color;
///
/// let blue = Color::hex("#3B82F6").unwrap();
/// let teal = blue.rotate_hue(-40.0);
/// let dark = blue.set_lightness(0.1);
///
/// assert_eq!(blue.to_rgba(0.5), "rgba(59, 130, 246, 0.5)");
/// assert_eq!(dark.to_hsl_css(), "hsl(217, 91%, 10%)");
/// # let _ = teal;
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Red channel, 0.0 to 1.0.
    pub r: f64,

    /// Green channel, 0.0 to 1.0.
    pub g: f64,

    /// Blue channel, 0.0 to 1.0.
    pub b: f64,

    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from sRGB values (0.0 to 1.0 range, clamped).
    #[must_use]
    pub const fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::srgba(r, g, b, 1.0)
    }

    /// Create a color from sRGB values with alpha (all clamped to 0.0–1.0).
    #[must_use]
    pub const fn srgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Create a color from 8-bit sRGB values with alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgb8(r, g, b).with_alpha(f64::from(a) / 255.0)
    }

    /// Create a color from HSL values.
    ///
    /// - `h`: Hue angle in degrees (any value, wrapped to 0°–360°)
    /// - `s`: Saturation, 0.0 to 1.0
    /// - `l`: Lightness, 0.0 to 1.0
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_srgb(normalize_hue(h), s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
        Self::srgb(r, g, b)
    }

    /// Create a color from HSL values with alpha.
    #[must_use]
    pub fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self::hsl(h, s, l).with_alpha(alpha)
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    /// For the full CSS grammar use [`parse_color`](crate::parse_color).
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        crate::parse::parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::srgb(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::srgb(1.0, 1.0, 1.0);

    /// Fully transparent black (the CSS `transparent` keyword).
    pub const TRANSPARENT: Self = Self::srgba(0.0, 0.0, 0.0, 0.0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether this color has no saturation (a gray, black or white).
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min < 1e-9
    }

    // ─── HSL Operations ──────────────────────────────────────────────────
    //
    // These all round-trip through HSL, preserving alpha.

    /// Hue, saturation and lightness of this color.
    ///
    /// Hue is in degrees (0.0–360.0, 0.0 for achromatic colors); saturation
    /// and lightness are 0.0–1.0.
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        srgb_to_hsl(self.r, self.g, self.b)
    }

    /// Rotate the hue by `degrees` (wraps around 360°), keeping saturation
    /// and lightness.
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::hsla(h + degrees, s, l, self.alpha)
    }

    /// Set the hue to an absolute angle (normalized to 0°–360°).
    #[must_use]
    pub fn set_hue(self, degrees: f64) -> Self {
        let (_, s, l) = self.to_hsl();
        Self::hsla(degrees, s, l, self.alpha)
    }

    /// Replace the HSL lightness (clamped to 0.0–1.0), keeping hue and
    /// saturation.
    #[must_use]
    pub fn set_lightness(self, lightness: f64) -> Self {
        let (h, s, _) = self.to_hsl();
        Self::hsla(h, s, lightness, self.alpha)
    }

    /// Replace the HSL saturation (clamped to 0.0–1.0).
    #[must_use]
    pub fn set_saturation(self, saturation: f64) -> Self {
        let (h, _, l) = self.to_hsl();
        Self::hsla(h, saturation, l, self.alpha)
    }

    /// Mix this color with another in sRGB space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`.
    #[must_use]
    pub fn mix(self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;
        Self::srgba(
            self.r.mul_add(inv_t, other.r * t),
            self.g.mul_add(inv_t, other.g * t),
            self.b.mul_add(inv_t, other.b * t),
            self.alpha.mul_add(inv_t, other.alpha * t),
        )
    }

    // ─── Serialization ───────────────────────────────────────────────────

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// CSS `rgba(r, g, b, a)` with the given alpha (clamped to 0.0–1.0).
    ///
    /// The color's own alpha is replaced, not multiplied.
    #[must_use]
    pub fn to_rgba(self, alpha: f64) -> String {
        let (r, g, b) = self.to_rgb8();
        let a = format_number(alpha.clamp(0.0, 1.0));
        format!("rgba({r}, {g}, {b}, {a})")
    }

    /// CSS `rgb(r, g, b)`, or `rgba(...)` when the color is translucent.
    #[must_use]
    pub fn to_rgb_css(self) -> String {
        if self.is_opaque() {
            let (r, g, b) = self.to_rgb8();
            format!("rgb({r}, {g}, {b})")
        } else {
            self.to_rgba(self.alpha)
        }
    }

    /// CSS `hsl(h, s%, l%)` with integer components, or `hsla(...)` when
    /// the color is translucent.
    #[must_use]
    pub fn to_hsl_css(self) -> String {
        let (h, s, l) = self.to_hsl();
        let h = format_number(h.round() % 360.0);
        let s = format_number((s * 100.0).round());
        let l = format_number((l * 100.0).round());
        if self.is_opaque() {
            format!("hsl({h}, {s}%, {l}%)")
        } else {
            let a = format_number(self.alpha);
            format!("hsla({h}, {s}%, {l}%, {a})")
        }
    }

    /// Relative luminance per WCAG 2.1, 0.0 (black) to 1.0 (white).
    ///
    /// Uses the standard sRGB linearization + weighted sum formula:
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let r_lin = srgb_to_linear(self.r);
        let g_lin = srgb_to_linear(self.g);
        let b_lin = srgb_to_linear(self.b);
        0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::srgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::srgba({:.4}, {:.4}, {:.4}, {:.2})",
                self.r, self.g, self.b, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f64 = 1e-6;
        (self.r - other.r).abs() < EPS
            && (self.g - other.g).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── CSS Numbers ─────────────────────────────────────────────────────────────

/// Format a number the way CSS authors write it.
///
/// Integral values print without a fraction (`8`, `-1`), others with up to
/// four decimals and no trailing zeros (`0.3`, `33.3333`). Negative zero and
/// non-finite values print as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if !rounded.is_finite() || rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// HSL ↔ sRGB follows CSS Color Module Level 4, section 7. All functions are
// pure and deterministic.

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert HSL (hue in degrees, s/l in 0–1) to sRGB.
fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);
    let h = h / 360.0;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Convert sRGB to HSL (hue in degrees, s/l in 0–1).
fn srgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta < 1e-12 {
        // Achromatic: hue is undefined, use 0
        return (0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (normalize_hue(h * 60.0), s, l)
}

// ─── sRGB ↔ Linear (Gamma) ───────────────────────────────────────────────────

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
