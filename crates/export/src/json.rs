//! JSON rendering of a glyph map.
//!
//! Output is a single-line object whose keys are decimal character codes and
//! whose values are bare glyph indices: `{"65": 36,"66": 37}`.

use std::io;

use serde::{Serialize, Serializer};
use serde_json::ser::Formatter;

use crate::{GlyphMap, Result};

/// Compact formatter with a space after each key's colon.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EntryFormatter;

impl Formatter for EntryFormatter {
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

impl Serialize for GlyphMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // Integer keys are quoted by serde_json.
        serializer.collect_map(self.entries())
    }
}

impl GlyphMap {
    /// Write the JSON document to `writer`.
    pub(crate) fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut serializer = serde_json::Serializer::with_formatter(writer, EntryFormatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    /// Render the JSON document as bytes.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.to_writer(&mut out)?;
        Ok(out)
    }

    /// Render the JSON document as a string.
    pub fn to_json(&self) -> Result<String> {
        let bytes = self.to_json_vec()?;
        Ok(String::from_utf8(bytes).expect("serde_json emits UTF-8"))
    }
}
