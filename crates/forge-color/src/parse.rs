// SPDX-License-Identifier: MIT
//
// CSS color parsing — the single validity gate for free-text color input.
//
// Grammar accepted (case-insensitive, surrounding whitespace ignored):
//
//   #rgb | #rgba | #rrggbb | #rrggbbaa      (leading '#' optional)
//   rgb( R, G, B [, A] )   rgba( ... )      legacy comma syntax
//   rgb( R G B [/ A] )                      modern space syntax
//   hsl( H, S, L [, A] )   hsla( ... )      hue: deg | rad | grad | turn
//   hsl( H S L [/ A] )
//   <named color> | transparent
//
// R/G/B are numbers (0–255) or percentages, S/L are percentages (a bare
// number is read as a percentage), A is a number (0–1) or percentage.
// Out-of-range components are clamped, as browsers do.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Color;
use crate::named;

/// Failure to interpret a color string.
///
/// Callers in the UI layer treat this as "keep the previous value".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matches none of the supported color grammars.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// `name( args )` — a CSS color function call.
static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(rgba?|hsla?)\(\s*(.*?)\s*\)$").expect("color function regex is valid")
});

/// A numeric component with an optional unit suffix.
static COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)([+-]?(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?)(%|deg|rad|grad|turn)?$")
        .expect("color component regex is valid")
});

/// Parse any supported CSS color string into a [`Color`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] if the string is not a hex color,
/// an `rgb()`/`rgba()`/`hsl()`/`hsla()` function, or a CSS named color.
///
/// # Examples
///
/// ```
/// use forge_color::parse_color;
///
/// let a = parse_color("#3B82F6").unwrap();
/// let b = parse_color("rgb(59 130 246)").unwrap();
/// let c = parse_color("hsl(217.2deg, 91.2%, 59.8%)").unwrap();
/// assert_eq!(a.to_rgb8(), b.to_rgb8());
/// assert_eq!(a.to_rgb8(), c.to_rgb8());
/// assert!(parse_color("not a color").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    let invalid = || ColorError::InvalidColor(input.to_string());
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some(caps) = FUNCTION.captures(trimmed) {
        let name = caps[1].to_ascii_lowercase();
        let args = split_args(&caps[2]).ok_or_else(invalid)?;
        let parsed = if name.starts_with("rgb") {
            parse_rgb_args(&args)
        } else {
            parse_hsl_args(&args)
        };
        return parsed.ok_or_else(invalid);
    }

    if trimmed.starts_with('#') {
        return parse_hex(trimmed).ok_or_else(invalid);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower == "transparent" {
        return Ok(Color::TRANSPARENT);
    }
    if let Some([r, g, b]) = named::lookup(&lower) {
        return Ok(Color::rgb8(r, g, b));
    }

    // Bare hex digits without '#' ("3b82f6") are accepted last, so that a
    // named color such as "beige" is never misread.
    parse_hex(trimmed).ok_or_else(invalid)
}

// ─── Functional Notation ─────────────────────────────────────────────────────

/// Arguments of a color function: three channels and an optional alpha.
struct Args<'a> {
    channels: [&'a str; 3],
    alpha: Option<&'a str>,
}

/// Split `args` in either the legacy comma form or the modern space form.
fn split_args(args: &str) -> Option<Args<'_>> {
    if args.contains(',') {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        return match *parts.as_slice() {
            [a, b, c] => Some(Args { channels: [a, b, c], alpha: None }),
            [a, b, c, alpha] => Some(Args { channels: [a, b, c], alpha: Some(alpha) }),
            _ => None,
        };
    }

    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };
    let parts: Vec<&str> = channels.split_whitespace().collect();
    match *parts.as_slice() {
        [a, b, c] => Some(Args { channels: [a, b, c], alpha }),
        _ => None,
    }
}

/// A parsed numeric component: value plus lowercase unit ("" if none).
fn component(text: &str) -> Option<(f64, String)> {
    let caps = COMPONENT.captures(text)?;
    let value: f64 = caps[1].parse().ok()?;
    let unit = caps.get(2).map_or_else(String::new, |m| m.as_str().to_ascii_lowercase());
    value.is_finite().then_some((value, unit))
}

fn parse_alpha(text: Option<&str>) -> Option<f64> {
    let Some(text) = text else {
        return Some(1.0);
    };
    match component(text)? {
        (v, unit) if unit.is_empty() => Some(v.clamp(0.0, 1.0)),
        (v, unit) if unit == "%" => Some((v / 100.0).clamp(0.0, 1.0)),
        _ => None,
    }
}

fn parse_rgb_args(args: &Args<'_>) -> Option<Color> {
    let mut rgb = [0.0; 3];
    for (slot, text) in rgb.iter_mut().zip(args.channels) {
        *slot = match component(text)? {
            (v, unit) if unit.is_empty() => v / 255.0,
            (v, unit) if unit == "%" => v / 100.0,
            _ => return None,
        };
    }
    let alpha = parse_alpha(args.alpha)?;
    Some(Color::srgba(rgb[0], rgb[1], rgb[2], alpha))
}

fn parse_hsl_args(args: &Args<'_>) -> Option<Color> {
    let [h, s, l] = args.channels;
    let hue = match component(h)? {
        (v, unit) if unit.is_empty() || unit == "deg" => v,
        (v, unit) if unit == "rad" => v.to_degrees(),
        (v, unit) if unit == "grad" => v * 0.9,
        (v, unit) if unit == "turn" => v * 360.0,
        _ => return None,
    };
    let percent = |text: &str| match component(text)? {
        (v, unit) if unit.is_empty() || unit == "%" => Some(v / 100.0),
        _ => None,
    };
    let saturation = percent(s)?;
    let lightness = percent(l)?;
    let alpha = parse_alpha(args.alpha)?;
    Some(Color::hsla(hue, saturation, lightness, alpha))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
pub(crate) fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
