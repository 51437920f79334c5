//! Splitting raw content into trimmed, non-blank lines.

use unicode_normalization::UnicodeNormalization;

/// A trimmed, non-blank line of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Position among the non-blank lines (0-based)
    pub index: usize,

    /// Line number in the original text (1-based)
    pub source_line: usize,

    /// Trimmed text
    pub text: String,
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Split content into trimmed, non-blank lines.
///
/// The content is NFC-normalized first so that decomposed letters (such as
/// `и` followed by a combining breve) match the classifier's letter classes.
pub fn split_lines(content: &str) -> Vec<Line> {
    let normalized: String = content.nfc().collect();

    normalized
        .lines()
        .enumerate()
        .map(|(n, raw)| (n + 1, raw.trim()))
        .filter(|(_, text)| !text.is_empty())
        .enumerate()
        .map(|(index, (source_line, text))| Line {
            index,
            source_line,
            text: text.to_string(),
        })
        .collect()
}
