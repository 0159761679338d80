use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::scenario::ScenarioId;

#[derive(Parser)]
#[command(name = "hive-examples")]
#[command(author, version, about = "Example agent-team workflows for claude-flow", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "HIVE_EXAMPLES_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Output format for CLI results.
/// - Text: Human-readable walkthrough (default)
/// - Json: Single JSON object
/// - Stream: NDJSON (one JSON object per line)
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Stream,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available example scenarios
    List,

    /// Print the walkthrough for a scenario
    Run {
        /// Scenario to print
        #[arg(value_enum)]
        scenario: ScenarioArg,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenarioArg {
    /// ML pipeline with a specialized team
    MlPipeline,
    /// Simple REST API with an agent team
    SimpleApi,
}

impl From<ScenarioArg> for ScenarioId {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::MlPipeline => Self::MlPipeline,
            ScenarioArg::SimpleApi => Self::SimpleApi,
        }
    }
}
