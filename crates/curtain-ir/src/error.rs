//! Errors raised while loading page documents.

use std::path::PathBuf;
use thiserror::Error;

/// Failures loading or serializing a [`crate::PageDocument`].
#[derive(Error, Debug)]
pub enum PageError {
    /// The document file could not be read.
    #[error("failed to read page document {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The document was read but is not valid JSON for the schema.
    #[error("failed to parse page document: {0}")]
    Parse(#[from] serde_json::Error),
}
