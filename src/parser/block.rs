//! Classified blocks of content.

use serde::Serialize;

/// The structural kind a single line is classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Section heading
    MainHeading,
    /// Stage, numbered point or labelled category
    SubHeading,
    /// First line of a pipe-delimited table
    TableRow,
    /// Bullet, `N)` or `letter)` item
    ListItem,
    /// Anything else
    Paragraph,
}

impl BlockKind {
    /// Short label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::MainHeading => "heading",
            BlockKind::SubHeading => "subheading",
            BlockKind::TableRow => "table",
            BlockKind::ListItem => "list",
            BlockKind::Paragraph => "paragraph",
        }
    }
}

/// A classified unit of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section heading
    MainHeading {
        /// Heading text as written
        text: String,
    },

    /// Sub-heading
    SubHeading {
        /// Heading text as written
        text: String,
    },

    /// List item, marker not yet stripped
    ListItem {
        /// Item text including its marker
        text: String,
    },

    /// A run of table lines parsed into cells
    Table {
        /// Rows of trimmed cell strings; separator lines excluded
        rows: Vec<Vec<String>>,
    },

    /// Body paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },
}

impl Block {
    /// The kind this block was classified as.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::MainHeading { .. } => BlockKind::MainHeading,
            Block::SubHeading { .. } => BlockKind::SubHeading,
            Block::ListItem { .. } => BlockKind::ListItem,
            Block::Table { .. } => BlockKind::TableRow,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }
}
