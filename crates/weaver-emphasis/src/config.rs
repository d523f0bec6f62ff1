use serde::{Deserialize, Serialize};

use crate::types::EmphasisKind;

/// Which emphasis kinds the plugin decorates.
///
/// Missing fields deserialize to enabled, so `{}` is the default config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisConfig {
    pub bold: bool,
    pub italic: bool,
    pub inline_code: bool,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            bold: true,
            italic: true,
            inline_code: true,
        }
    }
}

impl EmphasisConfig {
    pub fn is_enabled(&self, kind: EmphasisKind) -> bool {
        match kind {
            EmphasisKind::Bold => self.bold,
            EmphasisKind::Italic => self.italic,
            EmphasisKind::InlineCode => self.inline_code,
        }
    }
}
