//! Document model types.
//!
//! The input side ([`RawDocument`] and its [`Metadata`]) describes generated
//! text as it arrives from the producer. The output side ([`RenderedDocument`]
//! and its nodes) is the fully styled tree consumed by a word-processing
//! serializer: every paragraph and run carries its resolved font, size,
//! alignment, spacing and indentation.

mod document;
mod paragraph;
mod source;
mod table;

pub use document::{Node, PageSetup, RenderedDocument};
pub use paragraph::{
    Alignment, ListInfo, Paragraph, ParagraphKind, ParagraphStyle, TextRun, TextStyle,
};
pub use source::{Material, MaterialType, Metadata, RawDocument};
pub use table::{Border, BorderStyle, Borders, CellMargins, Table, TableCell, TableRow};
