//! Accumulation of list items and body paragraphs between boundaries.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Node, Paragraph, ParagraphKind, TextRun};
use crate::style::StyleProfile;

/// Leading `-`, `•`, `*`, `N)` or `letter)` marker and the whitespace after it.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-•*]|\d+\)|[а-яёa-z]\))\s*").unwrap());

const BULLET: char = '•';
const QUOTE_MAX_CHARS: usize = 100;
const QUOTE_MARKS: [char; 5] = ['"', '«', '»', '“', '”'];

const BODY_SPACE_AFTER: f32 = 6.0;
const LIST_SPACE_AFTER: f32 = 3.0;

/// Content that may sit inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionItem {
    /// List item with its marker still attached
    ListItem(String),
    /// Body paragraph
    Paragraph(String),
}

/// Buffers list items and paragraphs until a boundary flushes them.
pub struct SectionAccumulator<'a> {
    style: &'a StyleProfile,
    pending: Vec<SectionItem>,
}

impl<'a> SectionAccumulator<'a> {
    /// Create an empty accumulator rendering with the given style.
    pub fn new(style: &'a StyleProfile) -> Self {
        Self {
            style,
            pending: Vec::new(),
        }
    }

    /// Buffer an item without rendering it.
    pub fn append(&mut self, item: SectionItem) {
        self.pending.push(item);
    }

    /// Check if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Render and clear the buffer, preserving input order.
    ///
    /// Each run of consecutive list items is emitted as a group of bullet
    /// paragraphs before the paragraph that interrupts it.
    pub fn flush(&mut self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(self.pending.len());
        let mut list_run: Vec<String> = Vec::new();

        for item in self.pending.drain(..) {
            match item {
                SectionItem::ListItem(text) => list_run.push(text),
                SectionItem::Paragraph(text) => {
                    if !list_run.is_empty() {
                        nodes.extend(render_list(self.style, &list_run));
                        list_run.clear();
                    }
                    if let Some(paragraph) = render_paragraph(self.style, &text) {
                        nodes.push(Node::Paragraph(paragraph));
                    }
                }
            }
        }

        if !list_run.is_empty() {
            nodes.extend(render_list(self.style, &list_run));
        }

        nodes
    }
}

/// Remove a leading list marker and the whitespace after it.
pub fn strip_list_marker(text: &str) -> &str {
    match LIST_MARKER.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Check if a paragraph should render as a quote / inline definition.
pub fn is_quote(text: &str) -> bool {
    text.chars().count() < QUOTE_MAX_CHARS && text.contains(QUOTE_MARKS)
}

fn render_list(style: &StyleProfile, items: &[String]) -> Vec<Node> {
    items
        .iter()
        .map(|item| {
            let text = strip_list_marker(item).trim();
            let paragraph = Paragraph::with_run(
                ParagraphKind::ListItem,
                TextRun::new(text, style.body_font, style.body_size),
            )
            .bullet(BULLET)
            .left_indent(style.first_line_indent_pt())
            .hanging_indent(style.hanging_indent_pt())
            .line_spacing(style.line_spacing)
            .spacing(None, Some(LIST_SPACE_AFTER));
            Node::Paragraph(paragraph)
        })
        .collect()
}

fn render_paragraph(style: &StyleProfile, text: &str) -> Option<Paragraph> {
    let text = text.replace("```", "");
    let text = text.trim();
    if text.is_empty() {
        log::debug!("Section: skipping paragraph that was only code fences");
        return None;
    }

    let run = TextRun::new(text, style.body_font, style.body_size);
    let paragraph = if is_quote(text) {
        Paragraph::with_run(ParagraphKind::Quote, run.italic())
            .left_indent(style.first_line_indent_pt() * 2.0)
    } else {
        Paragraph::with_run(ParagraphKind::Body, run).first_line_indent(style.first_line_indent_pt())
    };

    Some(
        paragraph
            .line_spacing(style.line_spacing)
            .spacing(None, Some(BODY_SPACE_AFTER)),
    )
}
