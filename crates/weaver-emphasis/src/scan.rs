//! Pattern scanning over visible text.
//!
//! Walks a char range chunk by chunk and runs each rule against every
//! non-line-break chunk. Match offsets are chunk-local bytes and get
//! translated to absolute char offsets here.

use std::ops::Range;

use smol_str::ToSmolStr;

use crate::error::Result;
use crate::rules::RuleTable;
use crate::text::TextBuffer;
use crate::types::Candidate;

/// Scan `range` of `text` and return every candidate the rules match.
///
/// Order is grouped by rule, then by position; callers must not rely on it.
pub fn scan<T>(text: &T, range: Range<usize>, rules: &RuleTable) -> Result<Vec<Candidate>>
where
    T: TextBuffer + ?Sized,
{
    let mut candidates = Vec::new();
    scan_into(text, range, rules, &mut candidates)?;
    Ok(candidates)
}

/// Like [`scan`], but appends to an existing list so several visible
/// ranges can be merged into one pass.
pub fn scan_into<T>(
    text: &T,
    range: Range<usize>,
    rules: &RuleTable,
    out: &mut Vec<Candidate>,
) -> Result<()>
where
    T: TextBuffer + ?Sized,
{
    let before = out.len();

    for rule in rules.iter() {
        let mut pos = range.start;
        for chunk in text.iter_range(range.clone())? {
            if !chunk.is_line_break {
                // Matches come back in order, so count chars incrementally.
                let mut counted_bytes = 0;
                let mut counted_chars = 0;
                for m in rule.matches(&chunk.text) {
                    counted_chars += chunk.text[counted_bytes..m.start].chars().count();
                    counted_bytes = m.start;

                    let from = pos + counted_chars;
                    let to = from + m.raw.chars().count();
                    if tracing::enabled!(target: "weaver::emphasis::scan", tracing::Level::TRACE) {
                        tracing::trace!(
                            target: "weaver::emphasis::scan",
                            kind = rule.kind.as_str(),
                            from,
                            to,
                            raw = %m.raw.escape_debug(),
                            "candidate"
                        );
                    }
                    out.push(Candidate {
                        kind: rule.kind,
                        from,
                        to,
                        raw_text: m.raw.to_smolstr(),
                        inner_text: m.inner.to_smolstr(),
                    });
                }
            }
            pos += chunk.char_len();
        }
    }

    tracing::debug!(
        target: "weaver::emphasis::scan",
        range = ?range,
        found = out.len() - before,
        "scanned range"
    );
    Ok(())
}
