//! Detection records produced by the detectors

use std::fmt;

use crate::domain::class::AdjectiveClass;

/// One (position, class) observation emitted by a detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Zero-based index of the word-form in the input sequence
    pub position: usize,
    /// Predicted class
    pub class: AdjectiveClass,
}

impl Detection {
    /// Create a detection
    pub fn new(position: usize, class: AdjectiveClass) -> Self {
        Self { position, class }
    }
}

/// Set of classes predicted for a single position
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet {
    bits: u8,
}

impl ClassSet {
    /// Empty set
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    fn bit(class: AdjectiveClass) -> u8 {
        match class {
            AdjectiveClass::Possessive => 0b001,
            AdjectiveClass::Relative => 0b010,
            AdjectiveClass::QualitativeRelative => 0b100,
        }
    }

    /// Add a class; returns `false` if it was already present
    pub fn insert(&mut self, class: AdjectiveClass) -> bool {
        let bit = Self::bit(class);
        let added = self.bits & bit == 0;
        self.bits |= bit;
        added
    }

    pub fn contains(&self, class: AdjectiveClass) -> bool {
        self.bits & Self::bit(class) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Classes in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = AdjectiveClass> + '_ {
        AdjectiveClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Sum of the member codes
    ///
    /// Every subset of {1, 3, 5} has a distinct sum (0, 1, 3, 4, 5, 6, 8, 9),
    /// so the combined code identifies the set.
    pub fn combined_code(&self) -> u8 {
        self.iter().map(|class| class.code()).sum()
    }

    /// Inverse of [`ClassSet::combined_code`]
    pub fn from_combined_code(code: u8) -> Option<Self> {
        (0u8..8)
            .map(|bits| Self { bits })
            .find(|set| set.combined_code() == code)
    }
}

impl FromIterator<AdjectiveClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = AdjectiveClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|class| class.name()).collect();
        write!(f, "{}", names.join("+"))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ClassSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for class in self.iter() {
            seq.serialize_element(&class)?;
        }
        seq.end()
    }
}

/// Every class predicted for one word-form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionPrediction {
    /// Zero-based index of the word-form
    pub position: usize,
    /// Classes predicted by the selected detectors
    pub classes: ClassSet,
}

impl PositionPrediction {
    /// Sum of the predicted class codes
    pub fn combined_code(&self) -> u8 {
        self.classes.combined_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        assert!(set.insert(AdjectiveClass::Relative));
        assert!(!set.insert(AdjectiveClass::Relative));
        assert!(set.contains(AdjectiveClass::Relative));
        assert!(!set.contains(AdjectiveClass::Possessive));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_is_code_ordered() {
        let set: ClassSet = [
            AdjectiveClass::QualitativeRelative,
            AdjectiveClass::Possessive,
        ]
        .into_iter()
        .collect();

        let classes: Vec<_> = set.iter().collect();
        assert_eq!(
            classes,
            vec![AdjectiveClass::Possessive, AdjectiveClass::QualitativeRelative]
        );
        assert_eq!(set.to_string(), "possessive+qualitative-relative");
    }

    #[test]
    fn test_combined_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for bits in 0u8..8 {
            let set = ClassSet { bits };
            assert!(seen.insert(set.combined_code()), "duplicate sum for {set:?}");
        }
    }

    #[test]
    fn test_combined_code_inverse() {
        let set: ClassSet = AdjectiveClass::ALL.into_iter().collect();
        assert_eq!(set.combined_code(), 9);
        assert_eq!(ClassSet::from_combined_code(9), Some(set));

        let pos_rel = ClassSet::from_combined_code(4).unwrap();
        assert!(pos_rel.contains(AdjectiveClass::Possessive));
        assert!(pos_rel.contains(AdjectiveClass::Relative));
        assert!(!pos_rel.contains(AdjectiveClass::QualitativeRelative));

        assert_eq!(ClassSet::from_combined_code(0), Some(ClassSet::empty()));
        assert_eq!(ClassSet::from_combined_code(2), None);
        assert_eq!(ClassSet::from_combined_code(7), None);
    }
}
