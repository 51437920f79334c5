//! Build result with statistics.

use crate::model::{Node, ParagraphKind, RenderedDocument};
use serde::{Deserialize, Serialize};

/// Result of building a document, including content statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResult {
    /// The rendered document
    pub document: RenderedDocument,

    /// Counts over the content nodes (header and footer excluded)
    pub stats: BuildStats,
}

/// Counts of the structures recovered from the content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of non-blank input lines
    pub line_count: u32,

    /// Main headings
    pub main_heading_count: u32,

    /// Sub-headings
    pub sub_heading_count: u32,

    /// Bullet paragraphs
    pub list_item_count: u32,

    /// Body paragraphs
    pub paragraph_count: u32,

    /// Quote paragraphs
    pub quote_count: u32,

    /// Tables (placeholders for empty table runs excluded)
    pub table_count: u32,

    /// Rows across all tables
    pub table_row_count: u32,
}

impl BuildStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one rendered content node.
    pub fn record(&mut self, node: &Node) {
        match node {
            Node::Table(table) => {
                self.table_count += 1;
                self.table_row_count += table.row_count() as u32;
            }
            Node::Paragraph(p) => match p.kind() {
                ParagraphKind::MainHeading => self.main_heading_count += 1,
                ParagraphKind::SubHeading => self.sub_heading_count += 1,
                ParagraphKind::ListItem => self.list_item_count += 1,
                ParagraphKind::Body => self.paragraph_count += 1,
                ParagraphKind::Quote => self.quote_count += 1,
                _ => {}
            },
        }
    }

    /// Total number of headings.
    pub fn heading_count(&self) -> u32 {
        self.main_heading_count + self.sub_heading_count
    }
}
