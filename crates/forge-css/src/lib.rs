//! CSS generators for cssforge.
//!
//! Each effect family lives in its own module with three pieces:
//!
//! - a configuration record with the family's defaults,
//! - a patch type (one `Option` per field) merged into the configuration,
//! - a pure formatter turning the configuration into a [`RuleBlock`].
//!
//! | Module        | Family           | Selector             |
//! |---------------|------------------|----------------------|
//! | [`glass`]     | glassmorphism    | `.glassmorphism`     |
//! | [`gradient`]  | gradient         | `.gradient`          |
//! | [`palette`]   | color scheme     | `:root`              |
//! | [`grid`]      | CSS grid         | `.css-grid`          |
//! | [`flexbox`]   | flexbox          | `.flexbox`           |
//! | [`palette`]   | color shades     | `:root`              |
//! | [`animation`] | animation timing | `.animated-element`  |
//! | [`shadow`]    | box shadow       | `.box-shadow`        |
//! | [`transform`] | transform        | `.transform`         |
//! | [`radius`]    | border radius    | `.border-radius`     |
//!
//! The [`Store`] holds one configuration per family and is the only place
//! configurations change. The [`command`] module parses the line-oriented
//! command language and runs it against a store.

pub mod animation;
pub mod command;
pub mod error;
mod fields;
pub mod flexbox;
pub mod glass;
pub mod gradient;
pub mod grid;
pub mod keyword;
mod merge;
pub mod palette;
pub mod presets;
pub mod radius;
pub mod rule;
pub mod shadow;
pub mod store;
pub mod transform;

pub use command::{Command, Outcome, execute, parse_command};
pub use error::CommandError;
pub use keyword::UnknownKeyword;
pub use rule::{Declaration, RuleBlock};
pub use store::{GeneratorKind, Store, SubscriptionId};
