//! Core types: emphasis kinds, scan candidates, and selections.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Category of inline styling triggered by delimiter markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisKind {
    /// `**x**` or `__x__`
    Bold,
    /// `*x*` or `_x_`
    Italic,
    /// `` `x` ``
    InlineCode,
}

impl EmphasisKind {
    /// All kinds in scan order. Bold must precede italic.
    pub const ALL: [EmphasisKind; 3] = [
        EmphasisKind::Bold,
        EmphasisKind::Italic,
        EmphasisKind::InlineCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmphasisKind::Bold => "bold",
            EmphasisKind::Italic => "italic",
            EmphasisKind::InlineCode => "inline_code",
        }
    }
}

/// A raw pattern match before filtering.
///
/// Offsets are absolute char offsets into the document, not into the chunk
/// the match was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: EmphasisKind,
    pub from: usize,
    pub to: usize,
    /// Matched text including delimiters.
    pub raw_text: SmolStr,
    /// Captured content between the delimiters.
    pub inner_text: SmolStr,
}

impl Candidate {
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }
}

/// Text selection with anchor and head positions.
///
/// The anchor is where the selection started, the head is where the cursor is now.
/// They may be in any order - use `start()` and `end()` for ordered bounds.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where selection started
    pub anchor: usize,
    /// Where cursor is now
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor position).
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Get the start (lower bound) of the selection.
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end (upper bound) of the selection.
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Whether this selection puts the cursor inside `from..to`.
    ///
    /// A bare cursor counts when `from <= pos < to`, so sitting right after
    /// the closing delimiter leaves the span rendered. A ranged selection
    /// counts when it reaches into the span or ends exactly at its start.
    pub fn touches(&self, from: usize, to: usize) -> bool {
        self.start() < to && self.end() >= from
    }
}
