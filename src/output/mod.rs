//! Output sinks and format-aware rendering.
//!
//! - `TextSink`: line-oriented destination (stdout, buffers)
//! - `OutputWriter`: renders scenarios as text, JSON, or NDJSON

mod sink;
mod writer;

pub use sink::{LineWriter, TextSink};
pub use writer::{OutputWriter, ScenarioEvent, ScenarioOutput, StepOutput};
