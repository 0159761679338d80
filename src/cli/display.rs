use std::io;

use console::style;

use crate::output::TextSink;

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_header<S>(&self, sink: &mut S, text: &str) -> io::Result<()>
    where
        S: TextSink + ?Sized,
    {
        sink.write_line("")?;
        sink.write_line(&style(text).bold().cyan().to_string())?;
        sink.write_line(&style("═".repeat(60)).dim().to_string())?;
        sink.write_line("")
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    pub fn print_info<S>(&self, sink: &mut S, message: &str) -> io::Result<()>
    where
        S: TextSink + ?Sized,
    {
        sink.write_line(&format!("{} {}", style("→").cyan(), message))
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        console::set_colors_enabled(false);
        let mut lines: Vec<String> = Vec::new();
        Display::new().print_header(&mut lines, "Scenarios").unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Scenarios");
        assert_eq!(lines[2].chars().count(), 60);
        assert!(lines[0].is_empty() && lines[3].is_empty());
    }
}
