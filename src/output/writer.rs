use serde::Serialize;

use super::TextSink;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::scenario::{Scenario, ScenarioId, render_text};

const DEFAULT_LIST_ID_WIDTH: usize = 14;

/// Output writer that handles different output formats.
///
/// Supports three output modes:
/// - Text: the walkthrough exactly as a user reads it (default)
/// - Json: single JSON object per scenario
/// - Stream: NDJSON, one event per banner, step, and closing line
pub struct OutputWriter {
    format: OutputFormat,
    list_id_width: usize,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            list_id_width: DEFAULT_LIST_ID_WIDTH,
        }
    }

    pub fn with_list_id_width(mut self, width: usize) -> Self {
        self.list_id_width = width;
        self
    }

    /// Returns the configured output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Emit a full scenario.
    pub fn emit_scenario<S: TextSink + ?Sized>(
        &self,
        scenario: &Scenario,
        sink: &mut S,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Text => render_text(scenario, sink)?,
            OutputFormat::Json => {
                let output = ScenarioOutput::from(scenario);
                write_json(sink, &output)?;
                sink.flush()?;
            }
            OutputFormat::Stream => {
                for event in ScenarioEvent::sequence(scenario) {
                    write_json(sink, &event)?;
                }
                sink.flush()?;
            }
        }
        Ok(())
    }

    /// Emit the scenario catalog.
    pub fn emit_list<'a, S, I>(&self, scenarios: I, sink: &mut S) -> Result<()>
    where
        S: TextSink + ?Sized,
        I: IntoIterator<Item = &'a Scenario>,
    {
        match self.format {
            OutputFormat::Text => {
                for scenario in scenarios {
                    sink.write_line(&format!(
                        "{:<width$} {}",
                        scenario.id,
                        scenario.banner,
                        width = self.list_id_width
                    ))?;
                }
            }
            OutputFormat::Json => {
                let list: Vec<ListEntry> = scenarios.into_iter().map(ListEntry::from).collect();
                write_json(sink, &list)?;
            }
            OutputFormat::Stream => {
                for scenario in scenarios {
                    write_json(sink, &ListEntry::from(scenario))?;
                }
            }
        }
        sink.flush()?;
        Ok(())
    }
}

fn write_json<S: TextSink + ?Sized, T: Serialize>(sink: &mut S, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    sink.write_line(&json)?;
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutput {
    pub scenario: ScenarioId,
    pub banner: String,
    pub steps: Vec<StepOutput>,
    pub closing: Vec<String>,
}

impl From<&Scenario> for ScenarioOutput {
    fn from(scenario: &Scenario) -> Self {
        Self {
            scenario: scenario.id,
            banner: scenario.banner.to_string(),
            steps: scenario
                .steps
                .iter()
                .enumerate()
                .map(|(idx, step)| StepOutput {
                    step: idx + 1,
                    description: step.description.to_string(),
                    command: step.command.to_string(),
                })
                .collect(),
            closing: scenario.closing.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutput {
    pub step: usize,
    pub description: String,
    pub command: String,
}

/// One NDJSON record in stream mode.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    Banner {
        scenario: ScenarioId,
        text: String,
    },
    Step(StepOutput),
    Closing {
        text: String,
    },
}

impl ScenarioEvent {
    pub fn sequence(scenario: &Scenario) -> Vec<Self> {
        let output = ScenarioOutput::from(scenario);
        let mut events = Vec::with_capacity(1 + output.steps.len() + output.closing.len());

        events.push(Self::Banner {
            scenario: output.scenario,
            text: output.banner,
        });
        events.extend(output.steps.into_iter().map(Self::Step));
        events.extend(
            output
                .closing
                .into_iter()
                .map(|text| Self::Closing { text }),
        );
        events
    }
}

#[derive(Debug, Clone, Serialize)]
struct ListEntry {
    id: ScenarioId,
    banner: &'static str,
    steps: usize,
}

impl From<&Scenario> for ListEntry {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id,
            banner: scenario.banner,
            steps: scenario.steps.len(),
        }
    }
}
