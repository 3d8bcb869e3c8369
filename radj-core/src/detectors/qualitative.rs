//! Qualitative-relative adjective detector (code 5)

use super::Detector;
use crate::domain::DetectorKind;
use crate::tables::russian::QUALITATIVE_RELATIVE_ENDINGS;
use crate::tables::EndingSet;

/// Matches words carrying a full adjectival ending (`-ый`, `-ая`, `-ого`...)
#[derive(Debug, Clone)]
pub struct QualitativeRelativeDetector {
    endings: EndingSet,
}

impl QualitativeRelativeDetector {
    pub fn new() -> Self {
        Self {
            endings: EndingSet::new(QUALITATIVE_RELATIVE_ENDINGS),
        }
    }
}

impl Default for QualitativeRelativeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for QualitativeRelativeDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::QualitativeRelative
    }

    fn matches(&self, word: &str) -> bool {
        self.endings.matches(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdjectiveClass, Detection};

    #[test]
    fn test_gender_and_number_forms() {
        let detector = QualitativeRelativeDetector::new();
        for word in [
            "красивый", "зелёная", "синяя", "новую", "синюю", "нового", "синего", "новому",
            "новые", "новых", "новыми", "синими",
        ] {
            assert!(detector.matches(word), "expected match for {word}");
        }
    }

    #[test]
    fn test_non_matching_words() {
        let detector = QualitativeRelativeDetector::new();
        // short neuter "-ее" is not in the table
        for word in ["стол", "отцов", "мамин", "синее", "", "КРАСИВЫЙ"] {
            assert!(!detector.matches(word), "unexpected match for {word}");
        }
    }

    #[test]
    fn test_scan() {
        let words = ["красивый", "стол", "зелёная"];
        let detections: Vec<_> = QualitativeRelativeDetector::new().detect(&words).collect();
        assert_eq!(
            detections,
            vec![
                Detection::new(0, AdjectiveClass::QualitativeRelative),
                Detection::new(2, AdjectiveClass::QualitativeRelative),
            ]
        );
    }
}
