//! The view plugin that keeps emphasis decorations current.
//!
//! Recomputation always rescans every visible range from scratch. Nothing is
//! debounced, so very large viewports with many matches pay the full cost on
//! every keystroke.

use web_time::Instant;

use crate::config::EmphasisConfig;
use crate::decoration::DecorationSet;
use crate::error::Result;
use crate::resolve::resolve;
use crate::rules::RuleTable;
use crate::scan::scan_into;
use crate::types::Candidate;
use crate::view::{CursorQuery, EditorView, ViewUpdate};

/// Where the plugin is in its update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluginState {
    #[default]
    Idle,
    Recomputing,
}

/// Decorates inline emphasis in the visible part of a view.
#[derive(Debug, Clone)]
pub struct EmphasisPlugin {
    rules: RuleTable,
    decorations: DecorationSet,
    state: PluginState,
}

impl EmphasisPlugin {
    /// Attach to `view` with every emphasis kind enabled.
    pub fn new<V: EditorView + ?Sized>(view: &V) -> Self {
        Self::with_config(view, &EmphasisConfig::default())
    }

    /// Attach to `view` and compute the initial decorations.
    ///
    /// There is no transaction on mount, so the initial pass does not hide
    /// spans around the cursor.
    pub fn with_config<V: EditorView + ?Sized>(view: &V, config: &EmphasisConfig) -> Self {
        let mut plugin = Self {
            rules: RuleTable::from_config(config),
            decorations: DecorationSet::none(),
            state: PluginState::Idle,
        };
        plugin.recompute(view, &());
        plugin
    }

    /// The currently published set.
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    pub fn state(&self) -> PluginState {
        self.state
    }

    /// React to a host transaction. Returns whether a new set was published.
    pub fn update<V: EditorView + ?Sized>(&mut self, view: &V, update: &ViewUpdate) -> bool {
        if !update.needs_recompute() {
            return false;
        }
        self.recompute(view, update)
    }

    /// Rebuild and publish. On failure the previous set stays published.
    fn recompute<V, C>(&mut self, view: &V, cursor: &C) -> bool
    where
        V: EditorView + ?Sized,
        C: CursorQuery + ?Sized,
    {
        debug_assert_eq!(self.state, PluginState::Idle, "recompute is not re-entrant");
        self.state = PluginState::Recomputing;
        let started = Instant::now();

        let result = self.build(view, cursor);
        self.state = PluginState::Idle;

        match result {
            Ok(decorations) => {
                tracing::debug!(
                    target: "weaver::emphasis::plugin",
                    decorations = decorations.len(),
                    elapsed_us = started.elapsed().as_micros() as u64,
                    "recomputed emphasis decorations"
                );
                self.decorations = decorations;
                true
            }
            Err(err) => {
                tracing::warn!(
                    target: "weaver::emphasis::plugin",
                    error = %err,
                    "emphasis recompute failed, keeping previous decorations"
                );
                false
            }
        }
    }

    /// Scan all visible ranges and resolve, without publishing.
    pub fn build<V, C>(&self, view: &V, cursor: &C) -> Result<DecorationSet>
    where
        V: EditorView + ?Sized,
        C: CursorQuery + ?Sized,
    {
        let mut candidates: Vec<Candidate> = Vec::new();
        for range in view.visible_ranges() {
            scan_into(view.text(), range, &self.rules, &mut candidates)?;
        }
        Ok(resolve(candidates, cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmphasisKind, Selection};
    use crate::view::PlainView;

    fn spans(plugin: &EmphasisPlugin) -> Vec<(EmphasisKind, usize, usize)> {
        plugin
            .decorations()
            .iter()
            .map(|d| (d.widget.kind(), d.from, d.to))
            .collect()
    }

    #[test]
    fn test_mount_computes_and_ignores_cursor() {
        // The cursor starts at 0, inside `*a*`, but mount has no update.
        let view = PlainView::new("*a* b");
        let plugin = EmphasisPlugin::new(&view);
        assert_eq!(spans(&plugin), vec![(EmphasisKind::Italic, 0, 3)]);
        assert_eq!(plugin.state(), PluginState::Idle);
    }

    #[test]
    fn test_update_without_flags_is_ignored() {
        let mut view = PlainView::new("x **b** y");
        let mut plugin = EmphasisPlugin::new(&view);
        let before = plugin.decorations().clone();

        let update = view.set_selection(Selection::collapsed(4));
        assert!(!plugin.update(&view, &update));
        assert_eq!(plugin.decorations(), &before);
    }

    #[test]
    fn test_doc_change_recomputes_with_cursor() {
        let mut view = PlainView::new("x y");
        let mut plugin = EmphasisPlugin::new(&view);
        assert!(plugin.decorations().is_empty());

        // Typing the closing delimiter leaves the cursor after it.
        let update = view.edit(3..3, " `c`").unwrap();
        assert!(plugin.update(&view, &update));
        assert_eq!(spans(&plugin), vec![(EmphasisKind::InlineCode, 4, 7)]);

        // An edit that leaves the cursor inside hides the span again.
        let update = view.edit(5..6, "cd").unwrap();
        assert!(plugin.update(&view, &update));
        assert!(plugin.decorations().is_empty());
    }

    #[test]
    fn test_viewport_change_rescans_visible_only() {
        let mut view = PlainView::new("**a** and **b**");
        let mut plugin = EmphasisPlugin::new(&view);
        assert_eq!(plugin.decorations().len(), 2);

        let update = view.set_viewport(vec![10..15]);
        assert!(plugin.update(&view, &update));
        assert_eq!(spans(&plugin), vec![(EmphasisKind::Bold, 10, 15)]);
    }

    #[test]
    fn test_failed_recompute_keeps_previous_set() {
        let mut view = PlainView::new("**a**");
        let mut plugin = EmphasisPlugin::new(&view);
        assert_eq!(plugin.decorations().len(), 1);

        let update = view.set_viewport(vec![0..99]);
        assert!(!plugin.update(&view, &update));
        assert_eq!(spans(&plugin), vec![(EmphasisKind::Bold, 0, 5)]);
        assert_eq!(plugin.state(), PluginState::Idle);
    }

    #[test]
    fn test_config_disables_kind() {
        let view = PlainView::new("*i* `c`");
        let config = EmphasisConfig {
            inline_code: false,
            ..Default::default()
        };
        let plugin = EmphasisPlugin::with_config(&view, &config);
        assert_eq!(spans(&plugin), vec![(EmphasisKind::Italic, 0, 3)]);
    }

    #[test]
    fn test_build_does_not_publish() {
        let view = PlainView::new("**a**");
        let plugin = EmphasisPlugin::new(&view);
        let hidden = plugin.build(&view, &Selection::collapsed(2)).unwrap();
        assert!(hidden.is_empty());
        assert_eq!(plugin.decorations().len(), 1);
    }
}
