//! Command-line interface definitions.
//!
//! - `Cli`, `Commands`: menu CLI argument definitions via clap
//! - `Display`: styled terminal chrome for headers and status markers

mod commands;
mod display;

pub use commands::{Cli, Commands, ConfigAction, OutputFormat, ScenarioArg};
pub use display::Display;
