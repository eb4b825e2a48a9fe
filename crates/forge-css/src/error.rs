//! Errors reported by the command language.

use thiserror::Error;

use crate::keyword::UnknownKeyword;
use crate::store::GeneratorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    Keyword(#[from] UnknownKeyword),

    #[error("{generator} has no field {field:?}")]
    UnknownField { generator: GeneratorKind, field: String },

    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: &'static str,
    },

    #[error("no {list} with id {id:?}")]
    UnknownId { list: &'static str, id: String },

    #[error("`{command}` does not apply to {active}")]
    WrongGenerator {
        command: &'static str,
        active: GeneratorKind,
    },

    #[error("failed to serialize config: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl CommandError {
    pub(crate) fn invalid(field: &str, value: &str, reason: &'static str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}
