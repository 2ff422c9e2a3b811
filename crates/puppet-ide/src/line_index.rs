//! Line/offset conversion.

use text_size::{TextRange, TextSize};

/// Start offsets of every line in a text.
///
/// Lines are split on `\n`; a preceding `\r` stays part of the line's
/// ending. A text ending in a newline has a final empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    /// Builds the index for `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Number of lines, counting the empty line after a trailing newline.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Offset of the first byte of `line`.
    #[must_use]
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        self.line_starts.get(line as usize).copied()
    }

    /// Range of `line` including its line ending.
    #[must_use]
    pub fn line_range(&self, line: u32) -> Option<TextRange> {
        let start = self.line_start(line)?;
        let end = self
            .line_starts
            .get(line as usize + 1)
            .copied()
            .unwrap_or(self.len);
        Some(TextRange::new(start, end))
    }

    /// Zero-based line containing `offset`. Offsets past the end map to the
    /// last line.
    #[must_use]
    pub fn line_of(&self, offset: TextSize) -> u32 {
        let after = self.line_starts.partition_point(|&start| start <= offset);
        after.saturating_sub(1) as u32
    }
}

/// Splits a line (as returned by [`LineIndex::line_range`]) into its
/// content and its line ending.
#[must_use]
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
