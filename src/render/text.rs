//! Plain text rendering of styled documents.

use crate::error::Result;
use crate::model::{Node, Paragraph, ParagraphKind, RenderedDocument, Table};

/// Horizontal rule separating the header, content and footer.
pub const SEPARATOR: &str = "────────────────────────────────────────";

/// Convert a document to plain text.
///
/// Headings are set off by blank lines, list items keep their bullet, quotes
/// are indented and table rows are printed as ` | `-joined cells.
pub fn to_text(doc: &RenderedDocument) -> Result<String> {
    let mut renderer = TextRenderer::default();
    for node in &doc.nodes {
        renderer.render_node(node);
    }
    Ok(renderer.finish())
}

#[derive(Default)]
struct TextRenderer {
    output: String,
    header_open: bool,
    footer_open: bool,
}

impl TextRenderer {
    fn render_node(&mut self, node: &Node) {
        match node {
            Node::Paragraph(p) => self.render_paragraph(p),
            Node::Table(t) => {
                self.close_header();
                self.render_table(t);
            }
        }
    }

    fn render_paragraph(&mut self, para: &Paragraph) {
        let text = para.plain_text();

        match para.kind() {
            ParagraphKind::Title => {
                self.line(&text);
                self.blank();
            }
            ParagraphKind::HeaderField => {
                self.line(&text);
                self.header_open = true;
            }
            ParagraphKind::Footer => {
                if !self.footer_open {
                    self.blank();
                    self.line(SEPARATOR);
                    self.footer_open = true;
                }
                self.line(&text);
            }
            ParagraphKind::Spacer => {}
            kind => {
                self.close_header();
                match kind {
                    ParagraphKind::MainHeading => {
                        self.blank();
                        self.line(&text);
                        self.blank();
                    }
                    ParagraphKind::SubHeading => {
                        self.blank();
                        self.line(&text);
                    }
                    ParagraphKind::ListItem => {
                        let marker = para.style.list_info.map(|l| l.marker).unwrap_or('•');
                        self.line(&format!("  {} {}", marker, text));
                    }
                    ParagraphKind::Quote => self.line(&format!("    {}", text)),
                    _ => self.line(&text),
                }
            }
        }
    }

    fn render_table(&mut self, table: &Table) {
        self.blank();
        for row in &table.rows {
            self.line(&row.plain_text());
        }
        self.blank();
    }

    fn close_header(&mut self) {
        if self.header_open {
            self.blank();
            self.line(SEPARATOR);
            self.blank();
            self.header_open = false;
        }
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Insert an empty line unless the output already ends with one.
    fn blank(&mut self) {
        if !self.output.is_empty() && !self.output.ends_with("\n\n") {
            self.output.push('\n');
        }
    }

    fn finish(self) -> String {
        self.output.trim().to_string()
    }
}
