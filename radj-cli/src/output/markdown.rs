//! Markdown output formatter

use super::{OutputFormatter, RunSummary};
use anyhow::Result;
use radj_core::{ClassSet, FrequencyReport};
use std::io::Write;

/// Markdown formatter - outputs the report as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    prediction_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            prediction_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &FrequencyReport, summary: &RunSummary) -> Result<()> {
        writeln!(self.writer, "| Code | Class | Count |")?;
        writeln!(self.writer, "|-----:|-------|------:|")?;
        for entry in report {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                entry.code(),
                entry.class,
                entry.count
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*Files: {}, words: {}, detectors: {}*",
            summary.files, summary.words, summary.detectors
        )?;
        Ok(())
    }

    fn format_prediction(&mut self, position: usize, word: &str, classes: ClassSet) -> Result<()> {
        if self.prediction_count == 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Predictions")?;
            writeln!(self.writer)?;
        }
        self.prediction_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` (position {}): {} ({})",
            self.prediction_count,
            word,
            position,
            classes,
            classes.combined_code()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
