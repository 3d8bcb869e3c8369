//! JSON output formatter

use super::{OutputFormatter, RunSummary};
use anyhow::Result;
use radj_core::{ClassSet, FrequencyReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - writes one document when finished
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    document: ReportDocument,
}

/// Top-level JSON document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Number of input files
    pub files: usize,
    /// Number of word-forms
    pub words: usize,
    /// Detectors that ran, in letter form
    pub detectors: String,
    /// Ranked class counts
    pub classes: Vec<ClassCountData>,
    /// Per-word predictions, present only when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub predictions: Vec<PredictionData>,
}

/// Data structure for one ranked class
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassCountData {
    pub code: u8,
    pub class: String,
    pub count: usize,
}

/// Data structure for one classified word
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionData {
    pub position: usize,
    pub word: String,
    /// Sum of the predicted class codes
    pub code: u8,
    pub classes: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            document: ReportDocument::default(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &FrequencyReport, summary: &RunSummary) -> Result<()> {
        self.document.files = summary.files;
        self.document.words = summary.words;
        self.document.detectors = summary.detectors.clone();
        self.document.classes = report
            .iter()
            .map(|entry| ClassCountData {
                code: entry.code(),
                class: entry.class.name().to_string(),
                count: entry.count,
            })
            .collect();
        Ok(())
    }

    fn format_prediction(&mut self, position: usize, word: &str, classes: ClassSet) -> Result<()> {
        self.document.predictions.push(PredictionData {
            position,
            word: word.to_string(),
            code: classes.combined_code(),
            classes: classes.iter().map(|c| c.name().to_string()).collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radj_core::{AdjectiveClassifier, DetectorSelection};

    #[test]
    fn test_json_document() {
        let words = ["каменный", "стол"];
        let classifier = AdjectiveClassifier::new(&words);
        let report = classifier.detect_all();
        let summary = RunSummary {
            files: 1,
            words: words.len(),
            detectors: "PQR".to_string(),
        };

        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, false);
        formatter.format_report(&report, &summary).unwrap();
        for prediction in classifier.predictions(&DetectorSelection::all()) {
            formatter
                .format_prediction(
                    prediction.position,
                    words[prediction.position],
                    prediction.classes,
                )
                .unwrap();
        }
        formatter.finish().unwrap();

        let document: ReportDocument = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(document.words, 2);
        assert_eq!(document.classes.len(), 2);
        assert_eq!(document.classes[0].code, 5);
        assert_eq!(document.classes[1].class, "relative");
        assert_eq!(document.predictions.len(), 1);
        assert_eq!(document.predictions[0].code, 8);
        assert_eq!(
            document.predictions[0].classes,
            vec!["relative", "qualitative-relative"]
        );
    }

    #[test]
    fn test_predictions_omitted_when_empty() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, true);
        formatter
            .format_report(&FrequencyReport::default(), &RunSummary::default())
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"classes\": []"));
        assert!(!output.contains("predictions"));
    }
}
