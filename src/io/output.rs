use crate::core::Classification;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_classification(&mut self, result: &Classification) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_classification(&mut self, result: &Classification) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    verbosity: u8,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, verbosity: u8) -> Self {
        Self { writer, verbosity }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_classification(&mut self, result: &Classification) -> anyhow::Result<()> {
        let verdict = if result.is_spam {
            "SPAM".red().bold()
        } else {
            "NOT SPAM".green().bold()
        };
        writeln!(
            self.writer,
            "Verdict: {} ({}% confidence)",
            verdict, result.confidence
        )?;
        if self.verbosity > 0 {
            writeln!(self.writer, "Raw score: {}", result.score)?;
        }
        if !result.reasons.is_empty() {
            writeln!(self.writer, "Reasons:")?;
            for reason in &result.reasons {
                writeln!(self.writer, "  - {reason}")?;
            }
        }
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    verbosity: u8,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn OutputWriter> = match (format, output) {
        (OutputFormat::Json, Some(path)) => Box::new(JsonWriter::new(File::create(path)?)),
        (OutputFormat::Json, None) => Box::new(JsonWriter::new(std::io::stdout())),
        (OutputFormat::Terminal, Some(path)) => {
            Box::new(TerminalWriter::new(File::create(path)?, verbosity))
        }
        (OutputFormat::Terminal, None) => {
            Box::new(TerminalWriter::new(std::io::stdout(), verbosity))
        }
    };
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PatternKind, Reason};

    fn sample() -> Classification {
        Classification {
            is_spam: true,
            confidence: 85,
            reasons: vec![Reason::Pattern {
                pattern: PatternKind::ClickRequest,
            }],
            score: 85,
        }
    }

    #[test]
    fn test_json_writer_round_trips() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_classification(&sample())
            .unwrap();

        let parsed: Classification = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_terminal_writer_lists_reasons() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, 0)
            .write_classification(&sample())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("SPAM"));
        assert!(text.contains("85% confidence"));
        assert!(text.contains("Contains suspicious click request"));
    }

    #[test]
    fn test_terminal_writer_verbose_shows_raw_score() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, 1)
            .write_classification(&sample())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Raw score: 85"));
    }

    #[test]
    fn test_terminal_writer_omits_empty_reasons() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, 0)
            .write_classification(&Classification::clean())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("Reasons:"));
        assert!(text.contains("NOT SPAM"));
    }
}
