//! Host boundary.
//!
//! These traits abstract over the editor the plugin is attached to:
//! - Which parts of the document are currently visible
//! - Read access to the document text
//! - Whether the cursor sits inside a span
//!
//! Implementations are provided by the embedding editor. [`PlainView`] is a
//! rope-backed implementation for tests and editors without a view layer.

use std::ops::Range;

use crate::error::{EmphasisError, Result};
use crate::text::{EditorRope, TextBuffer};
use crate::types::Selection;

/// Answers whether an edit cursor lies inside `from..to`.
pub trait CursorQuery {
    fn is_cursor_inside(&self, from: usize, to: usize) -> bool;
}

/// Unit type implementation - no cursor, nothing is suppressed.
impl CursorQuery for () {
    fn is_cursor_inside(&self, _from: usize, _to: usize) -> bool {
        false
    }
}

impl CursorQuery for Selection {
    fn is_cursor_inside(&self, from: usize, to: usize) -> bool {
        self.touches(from, to)
    }
}

impl CursorQuery for [Selection] {
    fn is_cursor_inside(&self, from: usize, to: usize) -> bool {
        self.iter().any(|s| s.touches(from, to))
    }
}

impl<T: CursorQuery + ?Sized> CursorQuery for &T {
    fn is_cursor_inside(&self, from: usize, to: usize) -> bool {
        (**self).is_cursor_inside(from, to)
    }
}

/// The editor view a plugin is attached to.
pub trait EditorView {
    type Text: TextBuffer + ?Sized;

    fn text(&self) -> &Self::Text;

    /// Char ranges that currently need decorating, sorted and disjoint.
    fn visible_ranges(&self) -> Vec<Range<usize>>;
}

impl<V: EditorView + ?Sized> EditorView for &V {
    type Text = V::Text;

    fn text(&self) -> &Self::Text {
        (**self).text()
    }

    fn visible_ranges(&self) -> Vec<Range<usize>> {
        (**self).visible_ranges()
    }
}

/// Notification delivered by the host after a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    pub doc_changed: bool,
    pub viewport_changed: bool,
    /// Selections after the transaction.
    pub selections: Vec<Selection>,
}

impl ViewUpdate {
    /// Only document and viewport changes invalidate decorations.
    pub fn needs_recompute(&self) -> bool {
        self.doc_changed || self.viewport_changed
    }
}

impl CursorQuery for ViewUpdate {
    fn is_cursor_inside(&self, from: usize, to: usize) -> bool {
        self.selections.is_cursor_inside(from, to)
    }
}

/// Rope-backed view with explicit viewport and selection state.
///
/// Each mutator returns the [`ViewUpdate`] a real editor would deliver for
/// the same transaction.
#[derive(Clone, Default)]
pub struct PlainView {
    text: EditorRope,
    /// None means the whole document is visible.
    viewport: Option<Vec<Range<usize>>>,
    selections: Vec<Selection>,
}

impl PlainView {
    /// A fully visible document with the cursor at the start.
    pub fn new(text: impl Into<EditorRope>) -> Self {
        Self {
            text: text.into(),
            viewport: None,
            selections: vec![Selection::collapsed(0)],
        }
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Replace `char_range` with `insert` and leave a cursor after it.
    ///
    /// Visible ranges are shifted through the edit and clamped to the new
    /// document length. A reversed range or one past the end is rejected and
    /// leaves the view untouched.
    pub fn edit(&mut self, char_range: Range<usize>, insert: &str) -> Result<ViewUpdate> {
        let len = self.text.len_chars();
        if char_range.start > char_range.end || char_range.end > len {
            return Err(EmphasisError::RangeOutOfBounds {
                start: char_range.start,
                end: char_range.end,
                len,
            });
        }

        let inserted = insert.chars().count();
        self.text.replace(char_range.clone(), insert);

        let len = self.text.len_chars();
        if let Some(ranges) = self.viewport.as_mut() {
            for r in ranges.iter_mut() {
                let start = map_pos(r.start, &char_range, inserted, false).min(len);
                let end = map_pos(r.end, &char_range, inserted, true).min(len);
                *r = start..end.max(start);
            }
        }

        self.selections = vec![Selection::collapsed(char_range.start + inserted)];
        Ok(ViewUpdate {
            doc_changed: true,
            viewport_changed: false,
            selections: self.selections.clone(),
        })
    }

    /// Scroll: replace the visible ranges.
    pub fn set_viewport(&mut self, ranges: Vec<Range<usize>>) -> ViewUpdate {
        self.viewport = Some(ranges);
        ViewUpdate {
            doc_changed: false,
            viewport_changed: true,
            selections: self.selections.clone(),
        }
    }

    /// Move the cursor. Carries no change flags, so it does not trigger a
    /// recompute on its own.
    pub fn set_selection(&mut self, selection: Selection) -> ViewUpdate {
        self.selections = vec![selection];
        ViewUpdate {
            doc_changed: false,
            viewport_changed: false,
            selections: self.selections.clone(),
        }
    }
}

impl EditorView for PlainView {
    type Text = EditorRope;

    fn text(&self) -> &EditorRope {
        &self.text
    }

    fn visible_ranges(&self) -> Vec<Range<usize>> {
        match &self.viewport {
            Some(ranges) => ranges.clone(),
            None => vec![0..self.text.len_chars()],
        }
    }
}

/// Map a pre-edit offset to its post-edit position. Offsets inside the
/// replaced range collapse to the start, or to the end of the insertion
/// when `is_end` is set.
fn map_pos(pos: usize, replaced: &Range<usize>, inserted: usize, is_end: bool) -> usize {
    if pos <= replaced.start {
        pos
    } else if pos >= replaced.end {
        pos - replaced.len() + inserted
    } else if is_end {
        replaced.start + inserted
    } else {
        replaced.start
    }
}
