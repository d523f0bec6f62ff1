//! Turning raw candidates into a publishable decoration set.
//!
//! The filter is a single pass over candidates sorted by `from`, carrying
//! only the most recently kept span. Two consequences are relied on:
//!
//! - Nesting is checked against that one span, not against every ancestor.
//!   A span two levels under a kept ancestor gets through whenever the span
//!   between them was itself kept without nesting (e.g. it shares the
//!   ancestor's `from`).
//! - The kept span is updated *before* the cursor check. A span hidden
//!   because the cursor is inside it still swallows the spans nested in it.

use std::ops::Range;

use crate::decoration::{Decoration, DecorationSet};
use crate::types::Candidate;
use crate::view::CursorQuery;

/// Sort and filter candidates, returning the survivors in order.
///
/// The sort is stable and keyed on `from` only; ties keep scan order.
pub fn filter_candidates<C>(mut candidates: Vec<Candidate>, cursor: &C) -> Vec<Candidate>
where
    C: CursorQuery + ?Sized,
{
    candidates.sort_by_key(|c| c.from);

    let total = candidates.len();
    let mut prev: Option<Range<usize>> = None;
    let mut kept = Vec::with_capacity(total);

    for candidate in candidates {
        if let Some(p) = &prev {
            if candidate.from > p.start && candidate.to < p.end {
                tracing::trace!(
                    target: "weaver::emphasis::resolve",
                    range = ?candidate.range(),
                    parent = ?p,
                    "nested, skipped"
                );
                continue;
            }
        }
        prev = Some(candidate.range());

        if cursor.is_cursor_inside(candidate.from, candidate.to) {
            tracing::trace!(
                target: "weaver::emphasis::resolve",
                range = ?candidate.range(),
                "cursor inside, skipped"
            );
            continue;
        }
        kept.push(candidate);
    }

    tracing::debug!(
        target: "weaver::emphasis::resolve",
        total,
        kept = kept.len(),
        "filtered candidates"
    );
    kept
}

/// Filter candidates and wrap the survivors into a [`DecorationSet`].
pub fn resolve<C>(candidates: Vec<Candidate>, cursor: &C) -> DecorationSet
where
    C: CursorQuery + ?Sized,
{
    DecorationSet::from_sorted(filter_candidates(candidates, cursor).into_iter().map(
        |candidate| Decoration {
            from: candidate.from,
            to: candidate.to,
            widget: candidate.into(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmphasisKind, Selection};

    fn cand(from: usize, to: usize) -> Candidate {
        Candidate {
            kind: EmphasisKind::Bold,
            from,
            to,
            raw_text: format!("{from}-{to}").into(),
            inner_text: "x".into(),
        }
    }

    fn kept<C: CursorQuery + ?Sized>(candidates: Vec<Candidate>, cursor: &C) -> Vec<(usize, usize)> {
        filter_candidates(candidates, cursor)
            .iter()
            .map(|c| (c.from, c.to))
            .collect()
    }

    fn resolved<C: CursorQuery + ?Sized>(candidates: Vec<Candidate>, cursor: &C) -> Vec<(usize, usize)> {
        resolve(candidates, cursor)
            .iter()
            .map(|d| (d.from, d.to))
            .collect()
    }

    #[test]
    fn test_strictly_nested_is_dropped() {
        assert_eq!(kept(vec![cand(0, 10), cand(2, 5)], &()), vec![(0, 10)]);
    }

    #[test]
    fn test_sorts_before_filtering() {
        assert_eq!(kept(vec![cand(2, 5), cand(0, 10)], &()), vec![(0, 10)]);
    }

    #[test]
    fn test_adjacent_spans_survive() {
        assert_eq!(
            kept(vec![cand(0, 5), cand(5, 10)], &()),
            vec![(0, 5), (5, 10)]
        );
    }

    #[test]
    fn test_shared_boundary_is_not_nesting() {
        // Same start or same end is not strict containment.
        assert_eq!(
            kept(vec![cand(0, 10), cand(0, 4)], &()),
            vec![(0, 10), (0, 4)]
        );
        assert_eq!(
            kept(vec![cand(0, 10), cand(6, 10)], &()),
            vec![(0, 10), (6, 10)]
        );
    }

    #[test]
    fn test_cursor_inside_suppresses() {
        assert!(kept(vec![cand(3, 8)], &Selection::collapsed(5)).is_empty());
        assert!(kept(vec![cand(3, 8)], &Selection::collapsed(3)).is_empty());
    }

    #[test]
    fn test_cursor_at_end_does_not_suppress() {
        assert_eq!(kept(vec![cand(3, 8)], &Selection::collapsed(8)), vec![(3, 8)]);
    }

    #[test]
    fn test_any_of_several_cursors_suppresses() {
        let cursors = [Selection::collapsed(1), Selection::collapsed(12)];
        assert_eq!(
            kept(vec![cand(3, 8), cand(10, 15)], &cursors[..]),
            vec![(3, 8)]
        );
    }

    #[test]
    fn test_cursor_hidden_span_still_nests_its_child() {
        // 0..10 is hidden by the cursor but still becomes the previous span,
        // so 2..5 is dropped as nested even though nothing covers it.
        assert!(kept(vec![cand(0, 10), cand(2, 5)], &Selection::collapsed(7)).is_empty());
    }

    #[test]
    fn test_nesting_is_single_level() {
        // 0..4 shares the outer start so it is kept and becomes the previous
        // span; 6..9 is inside 0..20 but not inside 0..4, so the fold keeps it.
        assert_eq!(
            kept(vec![cand(0, 20), cand(0, 4), cand(6, 9)], &()),
            vec![(0, 20), (0, 4), (6, 9)]
        );
    }

    #[test]
    fn test_set_enforces_no_overlap() {
        // The fold lets the deeper spans through; the set keeps the first.
        assert_eq!(
            resolved(vec![cand(0, 20), cand(0, 4), cand(6, 9)], &()),
            vec![(0, 20)]
        );
        assert_eq!(
            resolved(vec![cand(0, 6), cand(4, 9), cand(9, 12)], &()),
            vec![(0, 6), (9, 12)]
        );
    }

    #[test]
    fn test_ancestor_hidden_by_cursor_lets_grandchild_render() {
        let cursors = [Selection::collapsed(15)];
        assert_eq!(
            resolved(vec![cand(0, 20), cand(0, 4), cand(6, 9)], &cursors[..]),
            vec![(0, 4), (6, 9)]
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let input = vec![cand(4, 9), cand(0, 3), cand(5, 7), cand(9, 14)];
        let cursors = [Selection::collapsed(11)];
        let first = resolve(input.clone(), &cursors[..]);
        let second = resolve(input, &cursors[..]);
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|d| (d.from, d.to)).collect::<Vec<_>>(),
            vec![(0, 3), (4, 9)]
        );
    }

    #[test]
    fn test_output_is_sorted_and_disjoint() {
        let input = vec![
            cand(30, 40),
            cand(0, 12),
            cand(3, 6),
            cand(10, 18),
            cand(18, 22),
            cand(21, 35),
            cand(31, 33),
        ];
        let set = resolve(input, &Selection::collapsed(19));
        let spans: Vec<_> = set.iter().map(|d| (d.from, d.to)).collect();
        for pair in spans.windows(2) {
            assert!(pair[0].1 <= pair[1].0, "{:?} overlaps", pair);
        }
        assert_eq!(spans, vec![(0, 12), (21, 35)]);
    }

    #[test]
    fn test_widget_carries_candidate_text() {
        let set = resolve(
            vec![Candidate {
                kind: EmphasisKind::InlineCode,
                from: 0,
                to: 6,
                raw_text: "`code`".into(),
                inner_text: "code".into(),
            }],
            &(),
        );
        let deco = &set.as_slice()[0];
        assert_eq!(deco.widget.kind(), EmphasisKind::InlineCode);
        assert_eq!(deco.widget.raw_text(), "`code`");
        assert_eq!(deco.widget.inner_text(), "code");
    }
}
