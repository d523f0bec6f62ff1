//! Delimiter rules for each emphasis kind.
//!
//! Every rule is a `delim inner delim` pattern plus a one-char guard on both
//! sides: the opening delimiter must not follow another copy of the
//! delimiter char, and the closing one must not be followed by one. The
//! `regex` crate has no lookaround, so the guard is checked by hand and a
//! rejected match restarts the search one char further on.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::EmphasisConfig;
use crate::types::EmphasisKind;

static BOLD_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+?)\*\*").unwrap());
static BOLD_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_]+?)__").unwrap());
static ITALIC_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+?)\*").unwrap());
static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]+?)_").unwrap());
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+?)`").unwrap());

/// A single delimiter pattern belonging to one emphasis kind.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: EmphasisKind,
    /// Char the guard refuses on either side of the match.
    pub delimiter: char,
    pattern: &'static LazyLock<Regex>,
}

/// A guarded match inside one chunk. Offsets are bytes into that chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub raw: &'t str,
    pub inner: &'t str,
}

impl Rule {
    const fn new(kind: EmphasisKind, delimiter: char, pattern: &'static LazyLock<Regex>) -> Self {
        Self {
            kind,
            delimiter,
            pattern,
        }
    }

    /// Rules for one kind, in evaluation order.
    pub fn for_kind(kind: EmphasisKind) -> &'static [Rule] {
        static BOLD: [Rule; 2] = [
            Rule::new(EmphasisKind::Bold, '*', &BOLD_STAR_RE),
            Rule::new(EmphasisKind::Bold, '_', &BOLD_UNDERSCORE_RE),
        ];
        static ITALIC: [Rule; 2] = [
            Rule::new(EmphasisKind::Italic, '*', &ITALIC_STAR_RE),
            Rule::new(EmphasisKind::Italic, '_', &ITALIC_UNDERSCORE_RE),
        ];
        static INLINE_CODE: [Rule; 1] = [Rule::new(EmphasisKind::InlineCode, '`', &INLINE_CODE_RE)];

        match kind {
            EmphasisKind::Bold => &BOLD,
            EmphasisKind::Italic => &ITALIC,
            EmphasisKind::InlineCode => &INLINE_CODE,
        }
    }

    /// All guarded matches in `text`, left to right, non-overlapping.
    pub fn matches<'t>(&self, text: &'t str) -> Vec<RuleMatch<'t>> {
        let mut found = Vec::new();
        let mut at = 0;
        while at <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, at) else {
                break;
            };
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            if self.guard_holds(text, whole.start(), whole.end()) {
                found.push(RuleMatch {
                    start: whole.start(),
                    end: whole.end(),
                    raw: whole.as_str(),
                    inner: inner.as_str(),
                });
                at = whole.end();
            } else {
                // Every match starts with the delimiter.
                at = whole.start() + self.delimiter.len_utf8();
            }
        }
        found
    }

    fn guard_holds(&self, text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        before != Some(self.delimiter) && after != Some(self.delimiter)
    }
}

/// Ordered rules to scan with: bold before italic before inline code.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_config(&EmphasisConfig::default())
    }
}

impl RuleTable {
    pub fn from_config(config: &EmphasisConfig) -> Self {
        let rules = EmphasisKind::ALL
            .into_iter()
            .filter(|kind| config.is_enabled(*kind))
            .flat_map(|kind| Rule::for_kind(kind).iter().copied())
            .collect();
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
