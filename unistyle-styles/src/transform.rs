//! Style dispatch: wire identifier in, styled text out.

use crate::registry::StyleRegistry;
use crate::style::Style;

/// Apply the style named `style_name` to `text`.
///
/// Unrecognized names (including [`crate::PASSTHROUGH_STYLE`]) return `text`
/// unchanged. This never fails.
pub fn transform(text: &str, style_name: &str) -> String {
    match StyleRegistry::global().lookup(style_name) {
        Some(map) => map.apply(text),
        None => text.to_string(),
    }
}

/// Apply an already-resolved style to `text`.
pub fn apply_style(text: &str, style: Style) -> String {
    StyleRegistry::global().get(style).apply(text)
}
