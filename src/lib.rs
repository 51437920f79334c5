//! # eduformat
//!
//! Structural formatting of generated Russian teaching materials.
//!
//! Generated lesson text arrives as loosely structured plain text. This crate
//! recovers its structure (headings, stage sub-headings, lists, pipe tables,
//! body paragraphs) with line-level heuristics and builds a fully styled
//! document tree following the GOST layout conventions used for school
//! paperwork.
//!
//! ## Quick Start
//!
//! ```
//! use eduformat::{format_document, MaterialType, Metadata, RawDocument};
//!
//! fn main() -> eduformat::Result<()> {
//!     let raw = RawDocument::new(
//!         "ЦЕЛИ\n- Развить навык\n- Закрепить тему",
//!         Metadata::new("mathematics", "5А", "Дроби"),
//!         MaterialType::LessonPlan,
//!     );
//!
//!     let doc = format_document(&raw)?;
//!     println!("{}", eduformat::render::to_text(&doc)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`parser`]: line splitting, block classification, table extraction
//! - [`builder`]: section accumulation, header and footer, table layout
//! - [`render`]: plain text preview and JSON interchange
//! - [`batch`]: parallel formatting of a whole generation result

pub mod batch;
pub mod builder;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use batch::format_materials;
pub use builder::{BuildResult, BuildStats, DocumentBuilder, FormatOptions};
pub use error::{Error, Result};
pub use model::{
    Alignment, Material, MaterialType, Metadata, Node, Paragraph, ParagraphKind, RawDocument,
    RenderedDocument, Table, TableCell, TableRow, TextRun,
};
pub use parser::{parse_blocks, Block, BlockKind};
pub use render::JsonFormat;
pub use style::StyleProfile;

use chrono::NaiveDate;

/// Build the styled document for a raw document with default options.
///
/// The footer carries today's local date.
pub fn format_document(raw: &RawDocument) -> Result<RenderedDocument> {
    DocumentBuilder::new().build(raw)
}

/// Build the styled document with custom options.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use eduformat::{format_document_with_options, FormatOptions, MaterialType, Metadata, RawDocument};
///
/// let raw = RawDocument::new("Текст.", Metadata::new("physics", "7Б", "Сила"), MaterialType::Summary);
/// let options = FormatOptions::new().with_date(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
/// let doc = format_document_with_options(&raw, options).unwrap();
/// assert_eq!(doc.nodes[0].plain_text(), "КОНСПЕКТ УРОКА");
/// ```
pub fn format_document_with_options(
    raw: &RawDocument,
    options: FormatOptions,
) -> Result<RenderedDocument> {
    DocumentBuilder::with_options(options).build(raw)
}

/// Build a document and render it as plain text.
pub fn to_text(raw: &RawDocument) -> Result<String> {
    let doc = format_document(raw)?;
    render::to_text(&doc)
}

/// Build a document and serialize its tree as JSON.
pub fn to_json(raw: &RawDocument, format: JsonFormat) -> Result<String> {
    let doc = format_document(raw)?;
    render::to_json(&doc, format)
}

/// Builder for formatting documents.
///
/// # Example
///
/// ```
/// use eduformat::{Eduformat, MaterialType, Metadata, RawDocument};
///
/// let raw = RawDocument::new("1. Разминка", Metadata::new("music", "3А", "Ритм"), MaterialType::Worksheet);
/// let text = Eduformat::new()
///     .without_footer()
///     .format(&raw)?
///     .to_text()?;
/// assert!(text.ends_with("1. Разминка"));
/// # Ok::<(), eduformat::Error>(())
/// ```
pub struct Eduformat {
    options: FormatOptions,
}

impl Eduformat {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: FormatOptions::default(),
        }
    }

    /// Fix the footer date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.options = self.options.with_date(date);
        self
    }

    /// Replace the provenance line.
    pub fn with_provenance(mut self, text: impl Into<String>) -> Self {
        self.options = self.options.with_provenance(text);
        self
    }

    /// Omit the title / subject / class / topic block.
    pub fn without_header(mut self) -> Self {
        self.options = self.options.with_header(false);
        self
    }

    /// Omit the date / provenance block.
    pub fn without_footer(mut self) -> Self {
        self.options = self.options.with_footer(false);
        self
    }

    /// Build the document and return a result wrapper.
    pub fn format(self, raw: &RawDocument) -> Result<FormatResult> {
        let result = DocumentBuilder::with_options(self.options).build_with_stats(raw)?;
        Ok(FormatResult {
            document: result.document,
            stats: result.stats,
        })
    }
}

impl Default for Eduformat {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of formatting one document.
pub struct FormatResult {
    /// The rendered document
    pub document: RenderedDocument,
    /// Content statistics
    pub stats: BuildStats,
}

impl FormatResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text of every node, one per line.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }
}
