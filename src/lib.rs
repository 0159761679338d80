pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scenario;

pub use error::{ExampleError, Result};
pub use output::{LineWriter, OutputWriter, TextSink};
pub use scenario::{
    Scenario, ScenarioId, Step, create_ml_pipeline, create_ml_pipeline_with, create_simple_api,
    create_simple_api_with,
};
