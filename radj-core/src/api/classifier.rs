//! Detection entry point

use std::collections::BTreeMap;

use crate::api::config::{Config, TieBreak};
use crate::api::report::{FrequencyReport, FrequencyTable};
use crate::detectors::{detector, Detections};
use crate::domain::{ClassSet, DetectorKind, DetectorSelection, PositionPrediction};
use crate::error::Result;

/// Adjective classifier over a borrowed sequence of word-forms
///
/// The classifier never copies or mutates the words; every call builds its
/// own tables and returns fresh results.
#[derive(Debug, Clone)]
pub struct AdjectiveClassifier<'a, S> {
    words: &'a [S],
    config: Config,
}

impl<'a, S: AsRef<str>> AdjectiveClassifier<'a, S> {
    /// Create a classifier with default configuration
    pub fn new(words: &'a [S]) -> Self {
        Self::with_config(words, Config::default())
    }

    /// Create a classifier with custom configuration
    pub fn with_config(words: &'a [S], config: Config) -> Self {
        Self { words, config }
    }

    pub fn words(&self) -> &'a [S] {
        self.words
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lazily scan the words with a single detector
    pub fn detections(&self, kind: DetectorKind) -> Detections<'a, S> {
        Detections::new(detector(kind), self.words)
    }

    /// Run the configured detectors (all three unless configured otherwise)
    pub fn detect_all(&self) -> FrequencyReport {
        self.detect(&self.config.selection)
    }

    /// Run the selected detectors and rank classes by occurrence count
    pub fn detect(&self, selection: &DetectorSelection) -> FrequencyReport {
        let mut table = FrequencyTable::new();

        for &kind in selection.kinds() {
            let before = table.total();
            table.extend(self.detections(kind));
            tracing::debug!(
                detector = %kind,
                matches = table.total() - before,
                words = self.words.len(),
                "detector finished"
            );
        }

        let report = table.into_report(self.config.tie_break);
        tracing::debug!(
            classes = report.len(),
            detections = report.total(),
            tie_break = %self.config.tie_break,
            "frequency report ready"
        );
        report
    }

    /// Run detectors named by string identifiers
    ///
    /// Fails with [`crate::Error::InvalidDetector`] on an unknown identifier
    /// before any detector runs.
    pub fn detect_by_ids<I, T>(&self, ids: I) -> Result<FrequencyReport>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let selection = DetectorSelection::parse(ids)?;
        Ok(self.detect(&selection))
    }

    /// Classes predicted for each matched position, in position order
    pub fn predictions(&self, selection: &DetectorSelection) -> Vec<PositionPrediction> {
        let mut by_position: BTreeMap<usize, ClassSet> = BTreeMap::new();

        for &kind in selection.kinds() {
            for detection in self.detections(kind) {
                tracing::trace!(
                    position = detection.position,
                    class = %detection.class,
                    "match"
                );
                by_position
                    .entry(detection.position)
                    .or_default()
                    .insert(detection.class);
            }
        }

        by_position
            .into_iter()
            .map(|(position, classes)| PositionPrediction { position, classes })
            .collect()
    }

    /// Tie-break policy applied to reports
    pub fn tie_break(&self) -> TieBreak {
        self.config.tie_break
    }
}
