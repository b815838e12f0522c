//! Error types for glyph map extraction.

use std::result;

use skrifa::raw::ReadError;

/// Errors that can occur while extracting a glyph map.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("failed to serialize glyph map: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;
