//! The closed set of built-in styles and their wire identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tables;

/// Style identifier sent by clients that want the text back unchanged.
///
/// Any identifier that is not one of [`Style::all`] behaves the same way; this
/// one is simply the value used when a request omits the style.
pub const PASSTHROUGH_STYLE: &str = "normal";

/// Available text styles.
///
/// Each variant owns one glyph table. Variants are declared in display order and
/// their discriminants index [`crate::StyleRegistry`] storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bold,
    Italic,
    Script,
    Monospace,
    SmallCaps,
}

/// Returned by [`Style::from_str`] for identifiers outside the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style '{0}'")]
pub struct UnknownStyleError(pub String);

impl Style {
    /// Number of built-in styles.
    pub const COUNT: usize = 5;

    /// Every style in declaration order, so `ALL[style as usize] == style`.
    pub const ALL: [Style; Self::COUNT] = [
        Self::Bold,
        Self::Italic,
        Self::Script,
        Self::Monospace,
        Self::SmallCaps,
    ];

    /// All available styles in display order.
    pub fn all() -> &'static [Style] {
        &Self::ALL
    }

    /// Wire identifier (case-sensitive).
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Script => "script",
            Self::Monospace => "monospace",
            Self::SmallCaps => "smallcaps",
        }
    }

    /// Display name for toolbars and listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Script => "Script",
            Self::Monospace => "Monospace",
            Self::SmallCaps => "Small Caps",
        }
    }

    /// Short description of which characters the style rewrites.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Bold => "Sans-serif bold letters and digits",
            Self::Italic => "Sans-serif italic letters",
            Self::Script => "Bold script letters",
            Self::Monospace => "Monospace letters and digits",
            Self::SmallCaps => "Small capitals for lowercase letters",
        }
    }

    /// Resolve a wire identifier. Matching is exact: `"Bold"` is not `"bold"`.
    pub fn from_id(id: &str) -> Option<Style> {
        Self::all().iter().copied().find(|style| style.id() == id)
    }

    /// The `(source, glyph)` pairs backing this style.
    pub(crate) fn pairs(&self) -> &'static [(char, char)] {
        match self {
            Self::Bold => tables::BOLD,
            Self::Italic => tables::ITALIC,
            Self::Script => tables::SCRIPT,
            Self::Monospace => tables::MONOSPACE,
            Self::SmallCaps => tables::SMALL_CAPS,
        }
    }
}

impl FromStr for Style {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownStyleError(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
