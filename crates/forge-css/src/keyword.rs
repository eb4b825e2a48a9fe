//! Closed sets of CSS keywords.
//!
//! Every enum-like configuration field is a Rust enum whose variants map
//! one-to-one onto CSS keywords. [`keyword_enum!`] generates the mapping:
//! `Display` and serde write the keyword, `FromStr` reads it back
//! (case-insensitively, surrounding whitespace ignored).

use thiserror::Error;

/// A string that is not one of an enum's keywords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?} (expected one of: {expected})")]
pub struct UnknownKeyword {
    /// Human-readable name of the keyword set, e.g. `"flex direction"`.
    pub kind: &'static str,
    pub value: String,
    /// The accepted keywords, comma separated.
    pub expected: String,
}

/// Declare a keyword enum.
///
/// ```ignore
/// keyword_enum! {
///     /// Doc comment.
///     #[derive(Default)]
///     pub enum FlexWrap("flex wrap") {
///         #[default]
///         NoWrap => "nowrap",
///         Wrap => "wrap",
///     }
/// }
/// ```
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $keyword)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The CSS keyword for this variant.
            #[must_use]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $( Self::$variant => $keyword ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.keyword())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::keyword::UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.keyword().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::keyword::UnknownKeyword {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.keyword())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

pub(crate) use keyword_enum;

#[cfg(test)]
mod tests {
    use super::*;

    keyword_enum! {
        #[derive(Default)]
        enum Sample("sample") {
            #[default]
            One => "one",
            TwoWords => "two-words",
            Percent => "%",
        }
    }

    #[test]
    fn display_writes_keyword() {
        assert_eq!(Sample::TwoWords.to_string(), "two-words");
        assert_eq!(Sample::Percent.to_string(), "%");
        assert_eq!(Sample::default(), Sample::One);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Two-Words ".parse::<Sample>(), Ok(Sample::TwoWords));
        assert_eq!("%".parse::<Sample>(), Ok(Sample::Percent));
    }

    #[test]
    fn parse_error_lists_choices() {
        let err = "three".parse::<Sample>().unwrap_err();
        assert_eq!(err.kind, "sample");
        assert_eq!(err.expected, "one, two-words, %");
        assert_eq!(
            err.to_string(),
            "unknown sample \"three\" (expected one of: one, two-words, %)"
        );
    }

    #[test]
    fn serde_uses_keywords() {
        assert_eq!(serde_json::to_string(&Sample::TwoWords).unwrap(), "\"two-words\"");
        let back: Sample = serde_json::from_str("\"%\"").unwrap();
        assert_eq!(back, Sample::Percent);
    }
}
