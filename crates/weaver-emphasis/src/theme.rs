//! Style classes for rendered emphasis.
//!
//! The table is built once per process and never changes afterwards. Hosts
//! that inject their own stylesheet can still build a [`Theme`] with a
//! different code font and emit it with [`Theme::to_css`].

use std::fmt::Write;
use std::sync::LazyLock;

use smol_str::SmolStr;

use crate::types::EmphasisKind;

/// Monospace stack shared with the rest of the weaver editor.
pub const DEFAULT_CODE_FONT: &str =
    "'IBM Plex Mono', 'Berkeley Mono', 'Cascadia Code', 'Roboto Mono', Consolas, monospace";

/// A named class attached to rendered emphasis widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Bold,
    Italic,
    InlineCode,
}

impl StyleClass {
    pub const ALL: [StyleClass; 3] = [StyleClass::Bold, StyleClass::Italic, StyleClass::InlineCode];

    pub fn for_kind(kind: EmphasisKind) -> Self {
        match kind {
            EmphasisKind::Bold => StyleClass::Bold,
            EmphasisKind::Italic => StyleClass::Italic,
            EmphasisKind::InlineCode => StyleClass::InlineCode,
        }
    }

    /// CSS class name.
    pub fn name(&self) -> &'static str {
        match self {
            StyleClass::Bold => "md-bold",
            StyleClass::Italic => "md-italic",
            StyleClass::InlineCode => "md-inline-code",
        }
    }
}

/// Style declarations per class, as `(property, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    bold: Vec<(SmolStr, SmolStr)>,
    italic: Vec<(SmolStr, SmolStr)>,
    inline_code: Vec<(SmolStr, SmolStr)>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_code_font(DEFAULT_CODE_FONT)
    }
}

impl Theme {
    pub fn with_code_font(font_family: &str) -> Self {
        Self {
            bold: vec![(SmolStr::new_static("font-weight"), SmolStr::new_static("bold"))],
            italic: vec![(SmolStr::new_static("font-style"), SmolStr::new_static("italic"))],
            inline_code: vec![(SmolStr::new_static("font-family"), SmolStr::new(font_family))],
        }
    }

    pub fn declarations(&self, class: StyleClass) -> &[(SmolStr, SmolStr)] {
        match class {
            StyleClass::Bold => &self.bold,
            StyleClass::Italic => &self.italic,
            StyleClass::InlineCode => &self.inline_code,
        }
    }

    /// Render the table as a stylesheet, one rule per class.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for class in StyleClass::ALL {
            // Writing into a String cannot fail.
            let _ = writeln!(css, ".{} {{", class.name());
            for (property, value) in self.declarations(class) {
                let _ = writeln!(css, "    {}: {};", property, value);
            }
            css.push_str("}\n");
        }
        css
    }
}

static BASE_THEME: LazyLock<Theme> = LazyLock::new(Theme::default);

/// The process-wide theme, initialised on first use.
pub fn base_theme() -> &'static Theme {
    &BASE_THEME
}
