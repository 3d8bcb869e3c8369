//! Adjective classes and the detectors that predict them

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Morphological hypothesis assigned to a word-form
///
/// The numeric codes are chosen so that the sum of any subset of classes is
/// unique, which lets a single integer describe every class predicted for
/// one position (see [`crate::ClassSet::combined_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AdjectiveClass {
    /// Possessive adjective (code 1)
    Possessive,
    /// Relative adjective (code 3)
    Relative,
    /// Qualitative-and-relative adjective (code 5)
    QualitativeRelative,
}

impl AdjectiveClass {
    /// All classes in ascending code order
    pub const ALL: [AdjectiveClass; 3] = [
        AdjectiveClass::Possessive,
        AdjectiveClass::Relative,
        AdjectiveClass::QualitativeRelative,
    ];

    /// Numeric class code
    pub fn code(&self) -> u8 {
        match self {
            AdjectiveClass::Possessive => 1,
            AdjectiveClass::Relative => 3,
            AdjectiveClass::QualitativeRelative => 5,
        }
    }

    /// Look up a class by its numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.code() == code)
    }

    /// Machine-friendly name
    pub fn name(&self) -> &'static str {
        match self {
            AdjectiveClass::Possessive => "possessive",
            AdjectiveClass::Relative => "relative",
            AdjectiveClass::QualitativeRelative => "qualitative-relative",
        }
    }

    /// Detector that predicts this class
    pub fn detector_kind(&self) -> DetectorKind {
        match self {
            AdjectiveClass::Possessive => DetectorKind::Possessive,
            AdjectiveClass::Relative => DetectorKind::Relative,
            AdjectiveClass::QualitativeRelative => DetectorKind::QualitativeRelative,
        }
    }
}

impl fmt::Display for AdjectiveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identifier of one of the three detectors
///
/// Identifiers parse from their single-letter form (`P`, `Q`, `R`) or from
/// their full name, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    /// Possessive-ending detector
    Possessive,
    /// Qualitative-relative-ending detector
    QualitativeRelative,
    /// Relative-pattern detector
    Relative,
}

impl DetectorKind {
    /// Single-letter identifier
    pub fn letter(&self) -> char {
        match self {
            DetectorKind::Possessive => 'P',
            DetectorKind::QualitativeRelative => 'Q',
            DetectorKind::Relative => 'R',
        }
    }

    /// Full identifier
    pub fn name(&self) -> &'static str {
        self.class().name()
    }

    /// Class assigned to every word this detector matches
    pub fn class(&self) -> AdjectiveClass {
        match self {
            DetectorKind::Possessive => AdjectiveClass::Possessive,
            DetectorKind::QualitativeRelative => AdjectiveClass::QualitativeRelative,
            DetectorKind::Relative => AdjectiveClass::Relative,
        }
    }

    pub(crate) fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(DetectorKind::Possessive),
            'Q' => Some(DetectorKind::QualitativeRelative),
            'R' => Some(DetectorKind::Relative),
            _ => None,
        }
    }
}

impl FromStr for DetectorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        let mut chars = id.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Self::from_letter(letter).ok_or_else(|| Error::InvalidDetector(id.to_string()));
        }

        match id.to_lowercase().as_str() {
            "possessive" => Ok(DetectorKind::Possessive),
            "qualitative-relative" | "qualitative_relative" => {
                Ok(DetectorKind::QualitativeRelative)
            }
            "relative" => Ok(DetectorKind::Relative),
            _ => Err(Error::InvalidDetector(id.to_string())),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_codes() {
        assert_eq!(AdjectiveClass::Possessive.code(), 1);
        assert_eq!(AdjectiveClass::Relative.code(), 3);
        assert_eq!(AdjectiveClass::QualitativeRelative.code(), 5);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(AdjectiveClass::from_code(3), Some(AdjectiveClass::Relative));
        assert_eq!(AdjectiveClass::from_code(0), None);
        assert_eq!(AdjectiveClass::from_code(2), None);
    }

    #[test]
    fn test_detector_class_round_trip() {
        for class in AdjectiveClass::ALL {
            assert_eq!(class.detector_kind().class(), class);
        }
    }

    #[test]
    fn test_parse_letters() {
        assert_eq!("P".parse::<DetectorKind>().unwrap(), DetectorKind::Possessive);
        assert_eq!(
            "q".parse::<DetectorKind>().unwrap(),
            DetectorKind::QualitativeRelative
        );
        assert_eq!("R".parse::<DetectorKind>().unwrap(), DetectorKind::Relative);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "Possessive".parse::<DetectorKind>().unwrap(),
            DetectorKind::Possessive
        );
        assert_eq!(
            " qualitative-relative ".parse::<DetectorKind>().unwrap(),
            DetectorKind::QualitativeRelative
        );
        assert_eq!(
            "relative".parse::<DetectorKind>().unwrap(),
            DetectorKind::Relative
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "X".parse::<DetectorKind>(),
            Err(Error::InvalidDetector("X".to_string()))
        );
        assert!("qualitative".parse::<DetectorKind>().is_err());
        assert!("".parse::<DetectorKind>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(AdjectiveClass::QualitativeRelative.to_string(), "qualitative-relative");
        assert_eq!(DetectorKind::Relative.to_string(), "relative");
        assert_eq!(DetectorKind::Relative.letter(), 'R');
    }
}
