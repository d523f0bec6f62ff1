//! Published decorations.

use std::ops::Range;

use crate::widget::EmphasisWidget;

/// Replaces `from..to` with a rendering of the widget. The document text is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub widget: EmphasisWidget,
}

impl Decoration {
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }
}

/// Ordered, non-overlapping decorations.
///
/// For consecutive decorations `a`, `b`: `a.to <= b.from`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    /// The empty set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from decorations already sorted by `from`.
    ///
    /// A decoration that starts before the previous accepted one ends is
    /// dropped, so the first of two overlapping replacements wins.
    pub fn from_sorted(decorations: impl IntoIterator<Item = Decoration>) -> Self {
        let mut kept: Vec<Decoration> = Vec::new();
        for deco in decorations {
            if let Some(last) = kept.last() {
                debug_assert!(last.from <= deco.from, "decorations must be sorted by from");
                if deco.from < last.to {
                    tracing::trace!(
                        target: "weaver::emphasis::resolve",
                        range = ?deco.range(),
                        overlaps = ?last.range(),
                        "dropping overlapping decoration"
                    );
                    continue;
                }
            }
            kept.push(deco);
        }
        Self { decorations: kept }
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    pub fn as_slice(&self) -> &[Decoration] {
        &self.decorations
    }

    /// The decoration covering char offset `pos`, if any.
    pub fn decoration_at(&self, pos: usize) -> Option<&Decoration> {
        let idx = self.decorations.partition_point(|d| d.to <= pos);
        self.decorations.get(idx).filter(|d| d.from <= pos)
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorations.iter()
    }
}
