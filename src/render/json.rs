//! JSON rendering of styled documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::RenderedDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document tree to JSON.
pub fn to_json(doc: &RenderedDocument, format: JsonFormat) -> Result<String> {
    to_json_value(doc, format)
}

/// Serialize any renderable value (build results, statistics) to JSON.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
