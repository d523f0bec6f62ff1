//! Replacement widgets for decorated spans.
//!
//! One widget type covers all three kinds; the kind only decides which
//! style class the rendered node carries.

use smol_str::SmolStr;

use crate::theme::StyleClass;
use crate::types::{Candidate, EmphasisKind};

/// What the host draws in place of the raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualNode {
    /// Element name, always an inline element.
    pub tag: &'static str,
    /// Visible text, delimiters stripped.
    pub text: SmolStr,
    /// Style class from the theme table.
    pub class: StyleClass,
}

/// Render descriptor for one decoration.
#[derive(Debug, Clone)]
pub struct EmphasisWidget {
    kind: EmphasisKind,
    raw_text: SmolStr,
    inner_text: SmolStr,
}

impl EmphasisWidget {
    pub fn new(kind: EmphasisKind, raw_text: SmolStr, inner_text: SmolStr) -> Self {
        Self {
            kind,
            raw_text,
            inner_text,
        }
    }

    pub fn kind(&self) -> EmphasisKind {
        self.kind
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn inner_text(&self) -> &str {
        &self.inner_text
    }

    pub fn to_visual_node(&self) -> VisualNode {
        VisualNode {
            tag: "span",
            text: self.inner_text.clone(),
            class: StyleClass::for_kind(self.kind),
        }
    }

    /// Always false: clicks and keys on the widget are handled as if they
    /// hit the underlying text.
    pub fn ignore_event(&self) -> bool {
        false
    }
}

/// Hosts skip re-rendering when the old and new widget compare equal, and
/// the raw text fully determines the rendering.
impl PartialEq for EmphasisWidget {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.raw_text == other.raw_text
    }
}

impl Eq for EmphasisWidget {}

impl From<Candidate> for EmphasisWidget {
    fn from(candidate: Candidate) -> Self {
        Self::new(candidate.kind, candidate.raw_text, candidate.inner_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_node_per_kind() {
        let bold = EmphasisWidget::new(EmphasisKind::Bold, "**x**".into(), "x".into());
        assert_eq!(
            bold.to_visual_node(),
            VisualNode {
                tag: "span",
                text: "x".into(),
                class: StyleClass::Bold,
            }
        );

        let code = EmphasisWidget::new(EmphasisKind::InlineCode, "`y`".into(), "y".into());
        assert_eq!(code.to_visual_node().class, StyleClass::InlineCode);
        assert_eq!(code.to_visual_node().text, "y");
    }

    #[test]
    fn test_equality_is_keyed_on_raw_text() {
        let a = EmphasisWidget::new(EmphasisKind::Italic, "*a*".into(), "a".into());
        let same = EmphasisWidget::new(EmphasisKind::Italic, "*a*".into(), "a".into());
        let underscore = EmphasisWidget::new(EmphasisKind::Italic, "_a_".into(), "a".into());
        assert_eq!(a, same);
        assert_ne!(a, underscore);
    }

    #[test]
    fn test_does_not_swallow_events() {
        let widget = EmphasisWidget::new(EmphasisKind::Bold, "__b__".into(), "b".into());
        assert!(!widget.ignore_event());
    }
}
