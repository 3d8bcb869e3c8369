//! Plain text output formatter

use super::{OutputFormatter, RunSummary};
use anyhow::Result;
use radj_core::{ClassSet, FrequencyReport};
use std::io::{self, Write};

/// Plain text formatter - one tab-separated `code class count` line per class
pub struct TextFormatter<W: Write> {
    writer: W,
    predictions_started: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            predictions_started: false,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &FrequencyReport, _summary: &RunSummary) -> Result<()> {
        for entry in report {
            writeln!(self.writer, "{}\t{}\t{}", entry.code(), entry.class, entry.count)?;
        }
        Ok(())
    }

    fn format_prediction(&mut self, position: usize, word: &str, classes: ClassSet) -> Result<()> {
        if !self.predictions_started {
            writeln!(self.writer)?;
            self.predictions_started = true;
        }
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            position,
            word,
            classes.combined_code(),
            classes
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radj_core::{AdjectiveClass, AdjectiveClassifier};

    #[test]
    fn test_report_lines() {
        let words = ["синий", "отцов", "деревянная", "стол"];
        let report = AdjectiveClassifier::new(&words).detect_all();

        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter
            .format_report(&report, &RunSummary::default())
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "1\tpossessive\t2\n5\tqualitative-relative\t2\n");
    }

    #[test]
    fn test_prediction_lines() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        let classes: ClassSet = [AdjectiveClass::Relative, AdjectiveClass::QualitativeRelative]
            .into_iter()
            .collect();
        formatter.format_prediction(4, "каменный", classes).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "\n4\tкаменный\t8\trelative+qualitative-relative\n");
    }
}
