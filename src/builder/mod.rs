//! Conversion of classified blocks into a styled document tree.
//!
//! [`DocumentBuilder`] is the entry point: it prepends the fixed header
//! block, renders the content (headings and tables directly, list items and
//! paragraphs through a [`SectionAccumulator`]) and appends the footer.

mod document;
mod options;
pub mod section;
mod stats;
pub mod table;

pub use document::{DocumentBuilder, DATE_FORMAT};
pub use options::{FormatOptions, DEFAULT_PROVENANCE};
pub use section::{SectionAccumulator, SectionItem};
pub use stats::{BuildResult, BuildStats};
pub use table::{column_widths, render_table, LESSON_TABLE_WEIGHTS};
