//! Shared CLI argument types
//!
//! Holds the option types every command sees: the output format and the
//! bundle of global flags handed to handlers.

mod common;
mod global;

pub use common::OutputFormat;
pub use global::GlobalOptions;
