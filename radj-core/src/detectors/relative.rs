//! Relative adjective detector (code 3)

use std::sync::LazyLock;

use regex::Regex;

use super::Detector;
use crate::domain::DetectorKind;
use crate::tables::russian::RELATIVE_PATTERN;

static SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RELATIVE_PATTERN).expect("relative suffix pattern is valid"));

/// Matches words built from a stem, a relative-forming suffix (`-енн-`,
/// `-льн-`, `-ск-`...) and a short inflection
#[derive(Debug, Clone)]
pub struct RelativeDetector {
    pattern: &'static Regex,
}

impl RelativeDetector {
    pub fn new() -> Self {
        Self {
            pattern: &SUFFIX_PATTERN,
        }
    }
}

impl Default for RelativeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for RelativeDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Relative
    }

    fn matches(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}
