//! Error types for eduformat library.

use std::io;
use thiserror::Error;

/// Result type alias for eduformat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while formatting generated material.
///
/// Classification itself never fails: any line that matches no rule becomes
/// a body paragraph. The only structural precondition is non-empty content.
#[derive(Error, Debug)]
pub enum Error {
    /// The document content is absent, empty or whitespace-only.
    #[error("Document content is missing or empty")]
    MissingContent,

    /// The material type id is not one of the known types.
    #[error("Unknown material type: {0}")]
    UnknownMaterialType(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
