//! Document-level types.

use super::{Paragraph, Table};
use crate::style::{cm_to_pt, StyleProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The styled document tree handed to a word-processing serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Page size and margins
    pub page: PageSetup,

    /// Default font family
    pub default_font: String,

    /// Default font size in points
    pub default_font_size: f32,

    /// Date printed in the footer
    pub generated_on: NaiveDate,

    /// Content nodes in reading order
    pub nodes: Vec<Node>,
}

impl RenderedDocument {
    /// Create an empty document laid out with the given style.
    pub fn new(style: &StyleProfile, generated_on: NaiveDate) -> Self {
        Self {
            page: PageSetup::from_style(style),
            default_font: style.body_font.to_string(),
            default_font_size: style.body_size,
            generated_on,
            nodes: Vec::new(),
        }
    }

    /// Add several nodes in order.
    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    /// Iterate over tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Table(t) => Some(t),
            Node::Paragraph(_) => None,
        })
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.nodes
            .iter()
            .map(|node| node.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A top-level content node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Node {
    /// Get the paragraph, if this node is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Node::Paragraph(p) => Some(p),
            Node::Table(_) => None,
        }
    }

    /// Get the table, if this node is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(t) => Some(t),
            Node::Paragraph(_) => None,
        }
    }

    /// Get plain text content of the node.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Paragraph(p) => p.plain_text(),
            Node::Table(t) => t.plain_text(),
        }
    }
}

/// Page geometry in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Top margin
    pub margin_top: f32,
    /// Bottom margin
    pub margin_bottom: f32,
    /// Left margin
    pub margin_left: f32,
    /// Right margin
    pub margin_right: f32,
}

impl PageSetup {
    /// Derive the page setup from a style profile.
    pub fn from_style(style: &StyleProfile) -> Self {
        Self {
            width: cm_to_pt(style.page_width),
            height: cm_to_pt(style.page_height),
            margin_top: cm_to_pt(style.margins.top),
            margin_bottom: cm_to_pt(style.margins.bottom),
            margin_left: cm_to_pt(style.margins.left),
            margin_right: cm_to_pt(style.margins.right),
        }
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParagraphKind, TextRun};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    fn test_document_new() {
        let doc = RenderedDocument::new(&StyleProfile::GOST, date());
        assert_eq!(doc.node_count(), 0);
        assert_eq!(doc.default_font, "Times New Roman");
        assert!(!doc.page.is_landscape());
        // 3cm left margin
        assert!((doc.page.margin_left - 85.04).abs() < 0.1);
    }

    #[test]
    fn test_extend_nodes() {
        let mut doc = RenderedDocument::new(&StyleProfile::GOST, date());
        doc.extend([
            Node::Paragraph(Paragraph::with_run(
                ParagraphKind::MainHeading,
                TextRun::new("ЦЕЛИ", "Times New Roman", 15.0),
            )),
            Node::Table(Table::new()),
            Node::Paragraph(Paragraph::with_run(
                ParagraphKind::Body,
                TextRun::new("Текст", "Times New Roman", 14.0),
            )),
        ]);

        assert_eq!(doc.node_count(), 3);
        assert_eq!(doc.tables().count(), 1);
        assert!(doc.nodes[1].as_table().is_some());
        assert_eq!(doc.plain_text(), "ЦЕЛИ\n\nТекст");
    }
}
