//! Extract a font's character-to-glyph-index mapping and render it as JSON.
//!
//! The font's primary Unicode character map is selected and enumerated by
//! [`skrifa`]; this crate only collects the pairs in enumeration order and
//! formats them.
//!
//! # Example
//!
//! ```no_run
//! use glyphmap_export::GlyphMap;
//!
//! let data = std::fs::read("font.ttf").unwrap();
//! let map = GlyphMap::from_font_data(&data, 0).unwrap();
//! println!("{}", map.to_json().unwrap());
//! ```

mod charmap;
mod error;
mod json;

pub use charmap::GlyphMap;
pub use error::{Error, Result};

/// Where the glyph map is written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "tmp/map.json";
