//! Text buffer abstraction for the emphasis scanner.
//!
//! The `TextBuffer` trait provides read access to the document plus the
//! handful of edit operations the reference host needs. Scanning only ever
//! reads: it walks a char range chunk by chunk through [`TextBuffer::iter_range`].

use smol_str::{SmolStr, ToSmolStr};
use std::ops::Range;

use crate::error::{EmphasisError, Result};

/// A text buffer that supports editing and chunked reads.
///
/// All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
pub trait TextBuffer {
    /// Total length in chars (Unicode scalar values).
    fn len_chars(&self) -> usize;

    /// Check if empty.
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Insert text at char offset.
    fn insert(&mut self, char_offset: usize, text: &str);

    /// Delete char range.
    fn delete(&mut self, char_range: Range<usize>);

    /// Replace char range with text.
    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        self.delete(char_range.clone());
        self.insert(char_range.start, text);
    }

    /// Get a slice as SmolStr. Returns None if range is invalid.
    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr>;

    /// Convert entire buffer to String.
    fn to_string(&self) -> String;

    /// Walk a char range as alternating text and line-break chunks.
    ///
    /// The range is copied once into an owned [`SmolStr`] and chunks are split
    /// off that copy as the iterator advances, so the chunks stay valid after
    /// the buffer is edited. Text chunks never contain a line break, so
    /// anything matched inside one chunk is confined to a single line.
    fn iter_range(&self, char_range: Range<usize>) -> Result<TextChunks> {
        let len = self.len_chars();
        let out_of_bounds = || EmphasisError::RangeOutOfBounds {
            start: char_range.start,
            end: char_range.end,
            len,
        };
        if char_range.start > char_range.end || char_range.end > len {
            return Err(out_of_bounds());
        }
        let text = self.slice(char_range.clone()).ok_or_else(out_of_bounds)?;
        Ok(TextChunks::new(text))
    }
}

/// One piece of a chunked read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub text: SmolStr,
    /// True when `text` is exactly one line ending (`\n`, `\r\n`, ...).
    pub is_line_break: bool,
}

impl TextChunk {
    /// Length in chars, used to advance absolute offsets.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Iterator over [`TextChunk`]s of a sliced range.
#[derive(Debug, Clone)]
pub struct TextChunks {
    text: SmolStr,
    /// Byte position of the next chunk.
    pos: usize,
}

impl TextChunks {
    pub fn new(text: SmolStr) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for TextChunks {
    type Item = TextChunk;

    fn next(&mut self) -> Option<TextChunk> {
        let rest = &self.text[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let break_len = line_break_len(rest);
        if break_len > 0 {
            self.pos += break_len;
            return Some(TextChunk {
                text: rest[..break_len].to_smolstr(),
                is_line_break: true,
            });
        }

        let end = rest.find(is_line_break_char).unwrap_or(rest.len());
        self.pos += end;
        Some(TextChunk {
            text: rest[..end].to_smolstr(),
            is_line_break: false,
        })
    }
}

/// Same set of line endings ropey counts lines by.
fn is_line_break_char(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Byte length of the line ending at the start of `s`, or 0.
fn line_break_len(s: &str) -> usize {
    if s.starts_with("\r\n") {
        return 2;
    }
    match s.chars().next() {
        Some(c) if is_line_break_char(c) => c.len_utf8(),
        _ => 0,
    }
}

/// Ropey-backed text buffer.
///
/// Provides O(log n) inserts, deletes and char-range slices.
#[derive(Clone, Default)]
pub struct EditorRope {
    rope: ropey::Rope,
}

impl EditorRope {
    /// Create from string.
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(s),
        }
    }
}

impl TextBuffer for EditorRope {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.rope.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        self.rope.remove(char_range);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.start > char_range.end || char_range.end > self.len_chars() {
            return None;
        }
        Some(self.rope.slice(char_range).to_smolstr())
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }
}

impl From<&str> for EditorRope {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for EditorRope {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}
