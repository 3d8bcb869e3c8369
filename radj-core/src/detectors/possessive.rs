//! Possessive adjective detector (code 1)

use super::Detector;
use crate::domain::DetectorKind;
use crate::tables::russian::POSSESSIVE_ENDINGS;
use crate::tables::EndingSet;

/// Matches words ending in a possessive ending such as `-ов`, `-ин` or `-ья`
#[derive(Debug, Clone)]
pub struct PossessiveDetector {
    endings: EndingSet,
}

impl PossessiveDetector {
    pub fn new() -> Self {
        Self {
            endings: EndingSet::new(POSSESSIVE_ENDINGS),
        }
    }
}

impl Default for PossessiveDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for PossessiveDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Possessive
    }

    fn matches(&self, word: &str) -> bool {
        self.endings.matches(word)
    }
}
