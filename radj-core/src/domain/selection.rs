//! Detector selection

use std::str::FromStr;

use crate::domain::class::DetectorKind;
use crate::error::{Error, Result};

/// Detectors run when no explicit selection is given
pub const DEFAULT_DETECTORS: [DetectorKind; 3] = [
    DetectorKind::Possessive,
    DetectorKind::QualitativeRelative,
    DetectorKind::Relative,
];

/// Ordered, duplicate-free set of detectors to run
///
/// Selecting the same detector more than once has no effect. The order is
/// kept because it decides which class is encountered first when the report
/// breaks ties by first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorSelection {
    kinds: Vec<DetectorKind>,
}

impl DetectorSelection {
    /// All three detectors in default order
    pub fn all() -> Self {
        Self::from_kinds(DEFAULT_DETECTORS)
    }

    /// Selection that runs nothing
    pub fn none() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Build from detector kinds, dropping repeats
    pub fn from_kinds<I: IntoIterator<Item = DetectorKind>>(kinds: I) -> Self {
        let mut selection = Self::none();
        for kind in kinds {
            selection.push(kind);
        }
        selection
    }

    /// Parse string identifiers, failing on the first unknown one
    pub fn parse<I, T>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut selection = Self::none();
        for id in ids {
            for kind in parse_identifier(id.as_ref())? {
                selection.push(kind);
            }
        }
        Ok(selection)
    }

    fn push(&mut self, kind: DetectorKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    pub fn contains(&self, kind: DetectorKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Detectors in run order
    pub fn kinds(&self) -> &[DetectorKind] {
        &self.kinds
    }

    /// Compact letter form, e.g. `PQR`
    pub fn letters(&self) -> String {
        self.kinds.iter().map(DetectorKind::letter).collect()
    }
}

impl Default for DetectorSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Accepts a full name (`relative`) or a run of letters (`R`, `PQR`)
fn parse_identifier(id: &str) -> Result<Vec<DetectorKind>> {
    match id.parse::<DetectorKind>() {
        Ok(kind) => Ok(vec![kind]),
        Err(err) => {
            let trimmed = id.trim();
            if trimmed.len() > 1 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                let letters: Option<Vec<_>> =
                    trimmed.chars().map(DetectorKind::from_letter).collect();
                if let Some(kinds) = letters {
                    return Ok(kinds);
                }
            }
            Err(err)
        }
    }
}

impl FromStr for DetectorSelection {
    type Err = Error;

    /// Comma- or whitespace-separated identifiers
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|id| !id.is_empty()),
        )
    }
}

impl FromIterator<DetectorKind> for DetectorSelection {
    fn from_iter<I: IntoIterator<Item = DetectorKind>>(iter: I) -> Self {
        Self::from_kinds(iter)
    }
}
