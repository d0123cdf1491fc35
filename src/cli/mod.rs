//! Command-line interface definitions.
//!
//! This module contains CLI argument parsing and the value enums it exposes.

mod args;
mod enums;

pub use args::Args;
pub use enums::Filter;
