use std::io;

use tracing::debug;

use super::catalog::{ML_PIPELINE, SIMPLE_API};
use super::types::Scenario;
use crate::output::{LineWriter, TextSink};

/// Prints the ML pipeline walkthrough to stdout.
pub async fn create_ml_pipeline() -> io::Result<()> {
    create_ml_pipeline_with(&mut LineWriter::stdout()).await
}

pub async fn create_ml_pipeline_with<S: TextSink>(sink: &mut S) -> io::Result<()> {
    render_text(&ML_PIPELINE, sink)
}

/// Prints the simple API walkthrough to stdout.
pub async fn create_simple_api() -> io::Result<()> {
    create_simple_api_with(&mut LineWriter::stdout()).await
}

pub async fn create_simple_api_with<S: TextSink>(sink: &mut S) -> io::Result<()> {
    render_text(&SIMPLE_API, sink)
}

/// Writes a scenario's lines to `sink` and flushes.
///
/// The first write error is returned as-is; lines already written stay written.
pub fn render_text<S: TextSink + ?Sized>(scenario: &Scenario, sink: &mut S) -> io::Result<()> {
    let lines = scenario.lines();
    debug!(scenario = %scenario.id, lines = lines.len(), "Rendering scenario");

    for line in &lines {
        sink.write_line(line)?;
    }
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe {
        accepted: usize,
    }

    impl TextSink for BrokenPipe {
        fn write_line(&mut self, _line: &str) -> io::Result<()> {
            if self.accepted == 2 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_ml_pipeline_lines() {
        let mut lines: Vec<String> = Vec::new();
        create_ml_pipeline_with(&mut lines).await.unwrap();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "🤖 Creating ML Pipeline with Specialized Team");
        assert_eq!(lines[1], "Step 1: Initialize ML team");
        assert_eq!(lines.last().unwrap(), "✅ ML Pipeline workflow defined");
        assert_eq!(lines.iter().filter(|l| !l.is_empty()).count(), 10);
    }

    #[tokio::test]
    async fn test_simple_api_lines() {
        let mut lines: Vec<String> = Vec::new();
        create_simple_api_with(&mut lines).await.unwrap();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "🚀 Creating Simple API with Agent Team");
        assert_eq!(lines[8], "Command: npx claude-flow swarm status");
        assert_eq!(
            lines[11],
            "Run the commands above to see the ecosystem in action!"
        );
    }

    #[tokio::test]
    async fn test_write_error_passes_through() {
        let mut sink = BrokenPipe { accepted: 0 };
        let err = create_simple_api_with(&mut sink).await.unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "pipe closed");
        assert_eq!(sink.accepted, 2);
    }
}
