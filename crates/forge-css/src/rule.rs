//! Rule blocks — a selector plus its declarations, as emitted text.
//!
//! A [`RuleBlock`] renders as
//!
//! ```text
//! .selector {
//!   property: value;
//!   grid-template-areas:
//!     "a b"
//!     "c d";
//! }
//! ```
//!
//! Values containing newlines are written with the property on its own line
//! and each value line indented four spaces. The block has no trailing
//! newline.

use std::fmt;

use serde::Serialize;

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// Whether the value spans several lines.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.value.contains('\n')
    }

    /// The value folded onto one line, as an inline style would need it.
    #[must_use]
    pub fn inline_value(&self) -> String {
        self.value.lines().map(str::trim).collect::<Vec<_>>().join(" ")
    }
}

/// A CSS rule: selector and ordered declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleBlock {
    selector: String,
    declarations: Vec<Declaration>,
}

impl RuleBlock {
    /// An empty rule for `selector`.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration, builder style.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    /// Append a declaration.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
        });
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The declarations in emission order. This doubles as the style object
    /// for a live preview.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The value of the first declaration of `property`.
    #[must_use]
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

impl fmt::Display for RuleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            if decl.is_multiline() {
                writeln!(f, "  {}:", decl.property)?;
                let mut lines = decl.value.lines().peekable();
                while let Some(line) = lines.next() {
                    let end = if lines.peek().is_some() { "" } else { ";" };
                    writeln!(f, "    {line}{end}")?;
                }
            } else {
                writeln!(f, "  {}: {};", decl.property, decl.value)?;
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_single_line_declarations() {
        let rule = RuleBlock::new(".box")
            .with("display", "flex")
            .with("gap", "16px");
        assert_eq!(rule.to_string(), ".box {\n  display: flex;\n  gap: 16px;\n}");
    }

    #[test]
    fn renders_multiline_values_indented() {
        let rule = RuleBlock::new(".grid").with("grid-template-areas", "\"a b\"\n\"c d\"");
        assert_eq!(
            rule.to_string(),
            ".grid {\n  grid-template-areas:\n    \"a b\"\n    \"c d\";\n}"
        );
    }

    #[test]
    fn empty_rule() {
        assert_eq!(RuleBlock::new(":root").to_string(), ":root {\n}");
    }

    #[test]
    fn lookup_and_inline_value() {
        let rule = RuleBlock::new(".grid")
            .with("display", "grid")
            .with("grid-template-areas", "\"a b\"\n\"c d\"");
        assert_eq!(rule.value_of("display"), Some("grid"));
        assert_eq!(rule.value_of("gap"), None);
        assert_eq!(rule.declarations()[1].inline_value(), "\"a b\" \"c d\"");
    }
}
