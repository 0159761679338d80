use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    MlPipeline,
    SimpleApi,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 2] = [ScenarioId::MlPipeline, ScenarioId::SimpleApi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MlPipeline => "ml-pipeline",
            Self::SimpleApi => "simple-api",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One instruction: what the user does, and the command they would paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub description: &'static str,
    pub command: &'static str,
}

impl Step {
    pub const fn new(description: &'static str, command: &'static str) -> Self {
        Self {
            description,
            command,
        }
    }
}

/// A fixed example workflow.
///
/// Everything is `'static`: scenarios live in the catalog and are never
/// built at runtime, so rendering one twice always yields the same lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub id: ScenarioId,
    pub banner: &'static str,
    pub steps: &'static [Step],
    pub closing: &'static [&'static str],
}

impl Scenario {
    /// Text lines in print order, blank separators included.
    ///
    /// Steps after the first and the closing block are each preceded by an
    /// empty line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 + self.steps.len() * 3 + self.closing.len());
        lines.push(self.banner.to_string());

        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            lines.push(step_label(idx + 1, step));
            lines.push(command_line(step));
        }

        lines.push(String::new());
        lines.extend(self.closing.iter().map(|line| line.to_string()));
        lines
    }
}

pub(crate) fn step_label(number: usize, step: &Step) -> String {
    format!("Step {}: {}", number, step.description)
}

pub(crate) fn command_line(step: &Step) -> String {
    format!("Command: {}", step.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: &[Step] = &[Step::new("First", "echo one"), Step::new("Second", "echo two")];

    const SAMPLE: Scenario = Scenario {
        id: ScenarioId::SimpleApi,
        banner: "Banner",
        steps: STEPS,
        closing: &["Done"],
    };

    #[test]
    fn test_lines_layout() {
        assert_eq!(
            SAMPLE.lines(),
            vec![
                "Banner",
                "Step 1: First",
                "Command: echo one",
                "",
                "Step 2: Second",
                "Command: echo two",
                "",
                "Done",
            ]
        );
    }

    #[test]
    fn test_scenario_id_display_pads() {
        assert_eq!(ScenarioId::MlPipeline.to_string(), "ml-pipeline");
        assert_eq!(format!("{:<12}|", ScenarioId::SimpleApi), "simple-api  |");
    }
}
