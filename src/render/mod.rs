//! Rendering of styled documents into text and JSON.
//!
//! The document tree is the primary output; these renderers are previews
//! and interchange formats for callers without a word-processor backend.

mod json;
mod text;

pub use json::{to_json, to_json_value, JsonFormat};
pub use text::{to_text, SEPARATOR};
