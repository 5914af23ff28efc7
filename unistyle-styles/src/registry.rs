//! Glyph maps and the process-wide registry that owns them.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::style::Style;

/// Built once on first use and only read afterwards.
static REGISTRY: LazyLock<StyleRegistry> = LazyLock::new(StyleRegistry::builtin);

/// A character substitution table.
///
/// Keys are case-sensitive. Characters without an entry are left as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMap {
    glyphs: HashMap<char, char>,
}

impl GlyphMap {
    /// Build a map from `(source, glyph)` pairs. A repeated source keeps the last glyph.
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        Self {
            glyphs: pairs.iter().copied().collect(),
        }
    }

    /// Replacement glyph for `c`, if it has one.
    pub fn get(&self, c: char) -> Option<char> {
        self.glyphs.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Substitute every mapped character of `text`, one glyph per input char.
    pub fn apply(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 4);
        for c in text.chars() {
            result.push(self.get(c).unwrap_or(c));
        }
        result
    }
}

/// The fixed collection of styles, each paired with its [`GlyphMap`].
#[derive(Debug)]
pub struct StyleRegistry {
    // Indexed by `Style as usize`, same order as `Style::all()`.
    maps: [GlyphMap; Style::COUNT],
}

impl StyleRegistry {
    /// Shared registry used by [`crate::transform`].
    pub fn global() -> &'static StyleRegistry {
        &REGISTRY
    }

    /// Build a fresh registry from the built-in tables.
    pub fn builtin() -> Self {
        Self {
            maps: Style::ALL.map(|style| GlyphMap::from_pairs(style.pairs())),
        }
    }

    /// Glyph map for a known style.
    pub fn get(&self, style: Style) -> &GlyphMap {
        &self.maps[style as usize]
    }

    /// Glyph map for a wire identifier, or `None` when the identifier is not recognized.
    pub fn lookup(&self, style_name: &str) -> Option<&GlyphMap> {
        Style::from_id(style_name).map(|style| self.get(style))
    }
}
