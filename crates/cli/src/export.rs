//! Font to JSON glyph map export.

use std::path::Path;

use anyhow::{Context, Result};
use glyphmap_export::GlyphMap;
use log::{debug, info};

use crate::io::FontFile;

/// Read `input`, extract its glyph map and write it to `output` as JSON.
///
/// The font is parsed and rendered before `output` is opened, so a bad font
/// leaves an existing output file untouched. Returns the number of entries.
pub fn export_file(input: &Path, output: &Path, face_index: u32) -> Result<usize> {
    let (count, json) = {
        let data = FontFile::new(input).read()?;
        debug!("Read {} bytes, using face {face_index}", data.len());

        let map = GlyphMap::from_font_data(&data, face_index)
            .with_context(|| format!("Failed to load font: {}", input.display()))?;
        (map.len(), map.to_json_vec()?)
    };

    FontFile::new(output).write(&json)?;
    info!("Wrote {count} glyph indices to {}", output.display());

    Ok(count)
}
