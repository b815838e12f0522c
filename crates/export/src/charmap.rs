//! Character map enumeration.

use indexmap::{IndexMap, map::Entry};
use log::debug;
use skrifa::{FontRef, MetadataProvider};

use crate::Result;

/// Glyph index of `.notdef`. A code point mapped here has no glyph.
const NOTDEF: u32 = 0;

/// Character codes mapped to glyph indices, in the order the font yields them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMap {
    entries: IndexMap<u32, u32>,
}

impl GlyphMap {
    /// Parse font data and enumerate its character map.
    ///
    /// `face_index` selects a face inside a font collection and must be `0`
    /// for a single font.
    pub fn from_font_data(data: &[u8], face_index: u32) -> Result<Self> {
        let font = FontRef::from_index(data, face_index)?;
        Ok(Self::from_font(&font))
    }

    /// Enumerate the primary Unicode character map of a parsed font.
    ///
    /// Fonts without a usable `cmap` produce an empty map.
    pub fn from_font(font: &FontRef) -> Self {
        let charmap = font.charmap();
        if !charmap.has_map() {
            debug!("Font has no usable character map");
        }
        Self::from_pairs(charmap.mappings().map(|(code, gid)| (code, gid.to_u32())))
    }

    /// Build a map from `(code, glyph index)` pairs, keeping their order.
    ///
    /// Pairs pointing at `.notdef` are dropped. If a code appears more than
    /// once the first glyph index is kept.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut entries = IndexMap::new();

        for (code, gid) in pairs {
            if gid == NOTDEF {
                continue;
            }
            match entries.entry(code) {
                Entry::Vacant(slot) => {
                    slot.insert(gid);
                }
                Entry::Occupied(slot) => {
                    debug!("Ignoring U+{code:04X} -> {gid}, already mapped to {}", slot.get());
                }
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Glyph index for a character code.
    pub fn get(&self, code: u32) -> Option<u32> {
        self.entries.get(&code).copied()
    }

    /// Iterate `(code, glyph index)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|(&code, &gid)| (code, gid))
    }

    pub(crate) fn entries(&self) -> &IndexMap<u32, u32> {
        &self.entries
    }
}

impl FromIterator<(u32, u32)> for GlyphMap {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
