//! CLI definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glyphmap_export::DEFAULT_OUTPUT_PATH;

use crate::export::export_file;

#[derive(Parser)]
#[command(name = "glyphmap", version)]
#[command(about = "Write a font's character-to-glyph-index map as JSON")]
pub struct Cli {
    /// Font file. When several are given only the last one is used.
    #[arg(required = true)]
    pub fonts: Vec<PathBuf>,
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Face to read from a font collection.
    #[arg(long, default_value_t = 0)]
    pub face_index: u32,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let font = self.fonts.last().context("No font path given")?;
        println!("Generating glyph indices for font {}", font.display());
        export_file(font, &self.output, self.face_index)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["glyphmap", "font.ttf"]).unwrap();
        assert_eq!(cli.fonts, vec![PathBuf::from("font.ttf")]);
        assert_eq!(cli.output, PathBuf::from("tmp/map.json"));
        assert_eq!(cli.face_index, 0);
    }

    #[test]
    fn test_keeps_every_font_argument() {
        let cli = Cli::try_parse_from(["glyphmap", "A.ttf", "B.ttf"]).unwrap();
        assert_eq!(cli.fonts.last(), Some(&PathBuf::from("B.ttf")));
    }

    #[test]
    fn test_requires_a_font() {
        assert!(Cli::try_parse_from(["glyphmap"]).is_err());
    }
}
