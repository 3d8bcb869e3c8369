//! Adjective class detectors
//!
//! Each detector is a stateless word test. Scanning a word sequence with a
//! detector yields a lazy [`Detections`] iterator of `(position, class)`
//! pairs, one pair per matching word.

mod possessive;
mod qualitative;
mod relative;

pub use possessive::PossessiveDetector;
pub use qualitative::QualitativeRelativeDetector;
pub use relative::RelativeDetector;

use std::iter::Enumerate;
use std::slice::Iter;
use std::sync::LazyLock;

use crate::domain::{AdjectiveClass, Detection, DetectorKind};

/// A heuristic test assigning one adjective class
pub trait Detector: Send + Sync {
    /// Identifier of this detector
    fn kind(&self) -> DetectorKind;

    /// Class assigned to matching words
    fn class(&self) -> AdjectiveClass {
        self.kind().class()
    }

    /// Whether a single word-form matches
    fn matches(&self, word: &str) -> bool;

    /// Scan a word sequence lazily
    fn detect<'a, S: AsRef<str>>(&'a self, words: &'a [S]) -> Detections<'a, S>
    where
        Self: Sized,
    {
        Detections::new(self, words)
    }
}

/// Lazy sequence of detections over a borrowed word slice
///
/// Finite and side-effect free; scanning the same slice again yields the
/// same pairs.
pub struct Detections<'a, S> {
    detector: &'a dyn Detector,
    words: Enumerate<Iter<'a, S>>,
}

impl<'a, S: AsRef<str>> Detections<'a, S> {
    /// Start scanning `words` with `detector`
    pub fn new(detector: &'a dyn Detector, words: &'a [S]) -> Self {
        Self {
            detector,
            words: words.iter().enumerate(),
        }
    }
}

impl<S> Clone for Detections<'_, S> {
    fn clone(&self) -> Self {
        Self {
            detector: self.detector,
            words: self.words.clone(),
        }
    }
}

impl<S: AsRef<str>> Iterator for Detections<'_, S> {
    type Item = Detection;

    fn next(&mut self) -> Option<Detection> {
        let detector = self.detector;
        self.words
            .find(|(_, word)| detector.matches(word.as_ref()))
            .map(|(position, _)| Detection::new(position, detector.class()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.words.size_hint().1)
    }
}

static POSSESSIVE: LazyLock<PossessiveDetector> = LazyLock::new(PossessiveDetector::new);
static QUALITATIVE_RELATIVE: LazyLock<QualitativeRelativeDetector> =
    LazyLock::new(QualitativeRelativeDetector::new);
static RELATIVE: LazyLock<RelativeDetector> = LazyLock::new(RelativeDetector::new);

/// Shared instance of the detector identified by `kind`
pub fn detector(kind: DetectorKind) -> &'static dyn Detector {
    match kind {
        DetectorKind::Possessive => &*POSSESSIVE,
        DetectorKind::QualitativeRelative => &*QUALITATIVE_RELATIVE,
        DetectorKind::Relative => &*RELATIVE,
    }
}
