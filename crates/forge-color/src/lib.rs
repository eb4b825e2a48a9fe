// SPDX-License-Identifier: MIT
//
// forge-color — Color engine for cssforge.
//
// Every color a user types into a generator passes through this crate:
// free text is parsed into a `Color` (sRGB + alpha), edited in HSL space
// (hue rotation, lightness ramps, alpha composition), and serialized back
// out as CSS text. No external color library is involved; the whole engine
// is a few hundred lines of CSS Color Module math.

pub mod color;
pub mod named;
pub mod parse;

pub use color::{Color, format_number, srgb_to_linear};
pub use parse::{ColorError, parse_color};
