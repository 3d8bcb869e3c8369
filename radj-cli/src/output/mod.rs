//! Output formatting module

use anyhow::Result;
use radj_core::{ClassSet, FrequencyReport};

/// Totals printed alongside a report
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of input files
    pub files: usize,
    /// Number of word-forms across all files
    pub words: usize,
    /// Detectors that ran, in letter form
    pub detectors: String,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the ranked frequency report
    fn format_report(&mut self, report: &FrequencyReport, summary: &RunSummary) -> Result<()>;

    /// Format the classes predicted for a single word-form
    fn format_prediction(&mut self, position: usize, word: &str, classes: ClassSet)
        -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
