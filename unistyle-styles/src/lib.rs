//! Unicode look-alike text styles.
//!
//! Rewrites plain text into Mathematical Alphanumeric Symbols (and a handful of
//! IPA small capitals) so that it reads as bold, italic, script, monospace, or
//! small caps in places that only accept plain text.
//!
//! ```
//! use unistyle_styles::transform;
//!
//! assert_eq!(transform("Hi!", "italic"), "𝘏𝘪!");
//! assert_eq!(transform("Hi!", "normal"), "Hi!");
//! ```
//!
//! # Sub-modules
//!
//! - [`style`]: the [`Style`] enum and its wire identifiers
//! - [`registry`]: [`GlyphMap`] and the shared [`StyleRegistry`]
//! - `tables`: the raw `(source, glyph)` data
//! - `transform`: [`transform`] and [`apply_style`]

pub mod registry;
pub mod style;
mod tables;
mod transform;


pub use registry::{GlyphMap, StyleRegistry};
pub use style::{PASSTHROUGH_STYLE, Style, UnknownStyleError};
pub use transform::{apply_style, transform};
