//! Ranked frequency report

use crate::api::config::TieBreak;
use crate::domain::{AdjectiveClass, Detection};

/// Occurrence count of one class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassCount {
    pub class: AdjectiveClass,
    pub count: usize,
}

impl ClassCount {
    pub fn code(&self) -> u8 {
        self.class.code()
    }
}

/// Running count-per-class table
///
/// Classes are stored in first-insertion order.
#[derive(Debug, Default)]
pub(crate) struct FrequencyTable {
    counts: Vec<ClassCount>,
}

impl FrequencyTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, detection: Detection) {
        match self.counts.iter_mut().find(|c| c.class == detection.class) {
            Some(entry) => entry.count += 1,
            None => self.counts.push(ClassCount {
                class: detection.class,
                count: 1,
            }),
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub(crate) fn into_report(self, tie_break: TieBreak) -> FrequencyReport {
        let mut entries = self.counts;
        // sort_by is stable: equal counts keep insertion order under FirstSeen
        match tie_break {
            TieBreak::FirstSeen => entries.sort_by(|a, b| b.count.cmp(&a.count)),
            TieBreak::AscendingCode => {
                entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.code().cmp(&b.code())))
            }
        }
        FrequencyReport { entries }
    }
}

impl Extend<Detection> for FrequencyTable {
    fn extend<I: IntoIterator<Item = Detection>>(&mut self, iter: I) {
        for detection in iter {
            self.add(detection);
        }
    }
}

/// Classes ranked by descending occurrence count
///
/// Only classes detected at least once appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FrequencyReport {
    entries: Vec<ClassCount>,
}

impl FrequencyReport {
    /// Ranked entries, most common first
    pub fn entries(&self) -> &[ClassCount] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassCount> {
        self.entries.iter()
    }

    /// Count for one class, zero if it was never detected
    pub fn count(&self, class: AdjectiveClass) -> usize {
        self.entries
            .iter()
            .find(|c| c.class == class)
            .map_or(0, |c| c.count)
    }

    /// Most common class, if any
    pub fn most_common(&self) -> Option<ClassCount> {
        self.entries.first().copied()
    }

    /// Total number of detections
    pub fn total(&self) -> usize {
        self.entries.iter().map(|c| c.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked `(code, count)` pairs
    pub fn to_code_counts(&self) -> Vec<(u8, usize)> {
        self.entries.iter().map(|c| (c.code(), c.count)).collect()
    }
}

impl<'a> IntoIterator for &'a FrequencyReport {
    type Item = &'a ClassCount;
    type IntoIter = std::slice::Iter<'a, ClassCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
