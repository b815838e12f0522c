//! glyphmap CLI library.

pub mod cli;
pub mod export;
pub mod io;

pub use export::export_file;
pub use glyphmap_export::{DEFAULT_OUTPUT_PATH, GlyphMap};
