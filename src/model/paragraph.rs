//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A styled paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph of the given kind.
    pub fn new(kind: ParagraphKind) -> Self {
        Self {
            runs: Vec::new(),
            style: ParagraphStyle::new(kind),
        }
    }

    /// Create a paragraph holding a single run.
    pub fn with_run(kind: ParagraphKind, run: TextRun) -> Self {
        let mut p = Self::new(kind);
        p.add_run(run);
        p
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Set the alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Set spacing before/after (points) and return self.
    pub fn spacing(mut self, before: Option<f32>, after: Option<f32>) -> Self {
        self.style.space_before = before;
        self.style.space_after = after;
        self
    }

    /// Set the line spacing multiplier and return self.
    pub fn line_spacing(mut self, multiplier: f32) -> Self {
        self.style.line_spacing = Some(multiplier);
        self
    }

    /// Set the left indent (points) and return self.
    pub fn left_indent(mut self, points: f32) -> Self {
        self.style.left_indent = Some(points);
        self
    }

    /// Set the first-line indent (points) and return self.
    pub fn first_line_indent(mut self, points: f32) -> Self {
        self.style.first_line_indent = Some(points);
        self
    }

    /// Set the hanging indent (points) and return self.
    pub fn hanging_indent(mut self, points: f32) -> Self {
        self.style.hanging_indent = Some(points);
        self
    }

    /// Mark as a heading of the given level and return self.
    pub fn heading(mut self, level: u8) -> Self {
        self.style.heading_level = Some(level.clamp(1, 6));
        self
    }

    /// Mark as a bullet list item and return self.
    pub fn bullet(mut self, marker: char) -> Self {
        self.style.list_info = Some(ListInfo { marker, level: 0 });
        self
    }

    /// Get the role of this paragraph.
    pub fn kind(&self) -> ParagraphKind {
        self.style.kind
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.plain_text().trim().is_empty()
    }
}

/// Structural role of a paragraph within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    /// Material-type title at the top of the document
    Title,
    /// Subject / class / topic line of the header
    HeaderField,
    /// Section heading
    MainHeading,
    /// Stage, numbered point or labelled category
    SubHeading,
    /// Bullet paragraph
    ListItem,
    /// Body text with first-line indent
    Body,
    /// Short quoted line or inline definition
    Quote,
    /// Empty paragraph used for vertical space or as a placeholder
    Spacer,
    /// Date and provenance lines
    Footer,
    /// Text inside a table cell
    TableCell,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a plain run in the given font.
    pub fn new(text: impl Into<String>, font_name: &str, font_size: f32) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                font_name: font_name.to_string(),
                font_size,
                bold: false,
                italic: false,
            },
        }
    }

    /// Make the run bold and return self.
    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    /// Set boldness and return self.
    pub fn bold_if(mut self, bold: bool) -> Self {
        self.style.bold = bold;
        self
    }

    /// Make the run italic and return self.
    pub fn italic(mut self) -> Self {
        self.style.italic = true;
        self
    }
}

/// Resolved text styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font name
    pub font_name: String,

    /// Font size in points
    pub font_size: f32,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

/// Paragraph styling properties. Lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Structural role
    pub kind: ParagraphKind,

    /// Heading level (1-6) or None for normal paragraph
    pub heading_level: Option<u8>,

    /// Text alignment
    pub alignment: Alignment,

    /// List information if this is a list item
    pub list_info: Option<ListInfo>,

    /// Line spacing multiplier (1.0 = single, 1.5 = one and a half)
    pub line_spacing: Option<f32>,

    /// Space before paragraph
    pub space_before: Option<f32>,

    /// Space after paragraph
    pub space_after: Option<f32>,

    /// Left indent of the whole paragraph
    pub left_indent: Option<f32>,

    /// First line indent
    pub first_line_indent: Option<f32>,

    /// Hanging indent (first line outdented by this amount)
    pub hanging_indent: Option<f32>,
}

impl ParagraphStyle {
    /// Create a default style for the given role.
    pub fn new(kind: ParagraphKind) -> Self {
        Self {
            kind,
            heading_level: None,
            alignment: Alignment::default(),
            list_info: None,
            line_spacing: None,
            space_before: None,
            space_after: None,
            left_indent: None,
            first_line_indent: None,
            hanging_indent: None,
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Information about a bullet list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Bullet character drawn by the serializer
    pub marker: char,

    /// Nesting level (0 = top level)
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new(ParagraphKind::HeaderField);
        p.add_run(TextRun::new("Класс: ", "Times New Roman", 14.0).bold());
        p.add_run(TextRun::new("5А", "Times New Roman", 14.0));

        assert_eq!(p.plain_text(), "Класс: 5А");
        assert!(p.runs[0].style.bold);
        assert!(!p.runs[1].style.bold);
    }

    #[test]
    fn test_heading() {
        let h1 = Paragraph::new(ParagraphKind::MainHeading).heading(9);
        assert_eq!(h1.style.heading_level, Some(6));
    }

    #[test]
    fn test_empty_paragraph() {
        let p = Paragraph::new(ParagraphKind::Spacer);
        assert!(p.is_empty());

        let p = Paragraph::with_run(ParagraphKind::Body, TextRun::new("  ", "Arial", 12.0));
        assert!(p.is_empty());
    }

    #[test]
    fn test_bullet() {
        let p = Paragraph::new(ParagraphKind::ListItem).bullet('•');
        assert_eq!(p.kind(), ParagraphKind::ListItem);
        assert_eq!(p.style.list_info.map(|l| l.marker), Some('•'));
    }
}
