//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and split it into word-forms
    pub fn read_words(path: &Path, preserve_case: bool) -> Result<Vec<String>> {
        let text = Self::read_text(path)?;
        let words = super::tokenize(&text, preserve_case);
        log::debug!("{}: {} words", path.display(), words.len());
        Ok(words)
    }
}
