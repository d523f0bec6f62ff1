//! weaver-emphasis: inline emphasis decorations for the weaver editor.
//!
//! Finds `**bold**`, `*italic*` and `` `code` `` spans in the visible part of
//! a document and replaces each one with a styled rendering of its content,
//! leaving the raw markup visible wherever the cursor is.
//!
//! This crate provides:
//! - `scan` - rule-driven candidate discovery over a `TextBuffer`
//! - `resolve` - the nesting/cursor filter producing a `DecorationSet`
//! - `EmphasisPlugin` - recomputes the set on document and viewport changes
//! - `EditorView` / `CursorQuery` - the traits a host editor implements

pub mod config;
pub mod decoration;
pub mod error;
pub mod plugin;
pub mod resolve;
pub mod rules;
pub mod scan;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;
pub mod widget;

pub use config::EmphasisConfig;
pub use decoration::{Decoration, DecorationSet};
pub use error::{EmphasisError, Result};
pub use plugin::{EmphasisPlugin, PluginState};
pub use resolve::{filter_candidates, resolve};
pub use rules::{Rule, RuleTable};
pub use scan::{scan, scan_into};
pub use smol_str::SmolStr;
pub use text::{EditorRope, TextBuffer, TextChunk, TextChunks};
pub use theme::{StyleClass, Theme, base_theme};
pub use types::{Candidate, EmphasisKind, Selection};
pub use view::{CursorQuery, EditorView, PlainView, ViewUpdate};
pub use widget::{EmphasisWidget, VisualNode};
