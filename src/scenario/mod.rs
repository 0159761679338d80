//! Example workflow scenarios.
//!
//! - `Scenario`, `Step`: static walkthrough content
//! - `catalog`: the ML pipeline and simple API scenarios
//! - `create_ml_pipeline`, `create_simple_api`: print a scenario to stdout

pub mod catalog;
mod runner;
mod types;

pub use runner::{
    create_ml_pipeline, create_ml_pipeline_with, create_simple_api, create_simple_api_with,
    render_text,
};
pub use types::{Scenario, ScenarioId, Step};
