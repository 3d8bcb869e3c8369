//! Suffix membership lookup

use std::collections::HashSet;

/// Constant set of word endings with suffix lookup
///
/// Endings are grouped by character length so a lookup slices at most one
/// suffix per distinct length and probes a hash set.
#[derive(Debug, Clone)]
pub struct EndingSet {
    endings: HashSet<&'static str>,
    /// Distinct ending lengths in characters, ascending
    lengths: Vec<usize>,
}

impl EndingSet {
    /// Build from a static table; repeated and empty entries are ignored
    pub fn new(endings: &[&'static str]) -> Self {
        let endings: HashSet<&'static str> =
            endings.iter().copied().filter(|e| !e.is_empty()).collect();

        let mut lengths: Vec<usize> = endings.iter().map(|e| e.chars().count()).collect();
        lengths.sort_unstable();
        lengths.dedup();

        Self { endings, lengths }
    }

    /// Check whether `word` ends with any ending in the set - hot path
    ///
    /// Exact, case-sensitive comparison; no normalization.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.lengths.iter().any(|&len| {
            suffix_start(word, len).is_some_and(|start| self.endings.contains(&word[start..]))
        })
    }

    pub fn len(&self) -> usize {
        self.endings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endings.is_empty()
    }

    pub fn contains(&self, ending: &str) -> bool {
        self.endings.contains(ending)
    }
}

/// Byte offset where the last `chars` characters of `word` begin
#[inline]
fn suffix_start(word: &str, chars: usize) -> Option<usize> {
    word.char_indices()
        .rev()
        .nth(chars.checked_sub(1)?)
        .map(|(idx, _)| idx)
}
