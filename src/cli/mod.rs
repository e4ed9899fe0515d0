//! Command-line interface module.

mod args;
pub mod build;
pub mod query;
pub mod resolve;
pub mod serve;
pub mod theme;

pub use args::{BuildArgs, Cli, Commands, QueryArgs, ThemeAction};
