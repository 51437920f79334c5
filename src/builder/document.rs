//! Assembly of the full rendered document.

use chrono::NaiveDate;

use super::section::{SectionAccumulator, SectionItem};
use super::table::render_table;
use super::{BuildResult, BuildStats, FormatOptions};
use crate::error::Result;
use crate::model::{Alignment, Node, Paragraph, ParagraphKind, RawDocument, RenderedDocument, TextRun};
use crate::parser::{Block, BlockParser};
use crate::style::{subject_name, StyleProfile};

const TITLE_SPACE_AFTER: f32 = 18.0;
const FIELD_SPACE_AFTER: f32 = 6.0;
const TOPIC_SPACE_AFTER: f32 = 24.0;
const MAIN_HEADING_SPACING: (f32, f32) = (18.0, 12.0);
const SUB_HEADING_SPACING: (f32, f32) = (12.0, 6.0);
const FOOTER_GAP: f32 = 30.0;
const DATE_SPACE_BEFORE: f32 = 12.0;
const PROVENANCE_SPACE_BEFORE: f32 = 6.0;

/// Date format of the footer (`dd.mm.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Builds a [`RenderedDocument`] from generated text.
///
/// The builder holds no per-document state, so one instance can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    options: FormatOptions,
    style: &'static StyleProfile,
}

impl DocumentBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a builder with custom options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            options,
            style: &StyleProfile::GOST,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Get the style profile.
    pub fn style(&self) -> &StyleProfile {
        self.style
    }

    /// Build the styled document.
    ///
    /// Fails only when the content is absent or blank; every line of a
    /// non-empty text is classified into some block.
    pub fn build(&self, raw: &RawDocument) -> Result<RenderedDocument> {
        self.build_with_stats(raw).map(|result| result.document)
    }

    /// Build the styled document and collect content statistics.
    pub fn build_with_stats(&self, raw: &RawDocument) -> Result<BuildResult> {
        let content = raw.require_content()?;
        let date = self.options.resolved_date();

        let mut document = RenderedDocument::new(self.style, date);
        if self.options.include_header {
            document.extend(self.header(raw));
        }

        let (body, stats) = self.content(content);
        document.extend(body);

        if self.options.include_footer {
            document.extend(self.footer(date));
        }

        log::debug!(
            "Built {} document: {} nodes, {} headings, {} tables",
            raw.material_type,
            document.node_count(),
            stats.heading_count(),
            stats.table_count
        );

        Ok(BuildResult { document, stats })
    }

    fn content(&self, content: &str) -> (Vec<Node>, BuildStats) {
        let parser = BlockParser::new(content);
        let mut stats = BuildStats {
            line_count: parser.line_count() as u32,
            ..Default::default()
        };

        let mut nodes = Vec::new();
        let mut section = SectionAccumulator::new(self.style);

        for block in parser {
            let boundary = match block {
                Block::ListItem { text } => {
                    section.append(SectionItem::ListItem(text));
                    continue;
                }
                Block::Paragraph { text } => {
                    section.append(SectionItem::Paragraph(text));
                    continue;
                }
                Block::MainHeading { text } => Node::Paragraph(self.main_heading(&text)),
                Block::SubHeading { text } => Node::Paragraph(self.sub_heading(&text)),
                Block::Table { rows } => render_table(&rows, self.style),
            };

            if !section.is_empty() {
                nodes.extend(section.flush());
            }
            nodes.push(boundary);
        }
        if !section.is_empty() {
            nodes.extend(section.flush());
        }

        for node in &nodes {
            stats.record(node);
        }
        (nodes, stats)
    }

    fn main_heading(&self, text: &str) -> Paragraph {
        let text = text.trim_end_matches(':').trim();
        let (before, after) = MAIN_HEADING_SPACING;
        Paragraph::with_run(
            ParagraphKind::MainHeading,
            TextRun::new(text, self.style.body_font, self.style.subheading_size).bold(),
        )
        .heading(1)
        .align(Alignment::Left)
        .spacing(Some(before), Some(after))
    }

    fn sub_heading(&self, text: &str) -> Paragraph {
        let (before, after) = SUB_HEADING_SPACING;
        Paragraph::with_run(
            ParagraphKind::SubHeading,
            TextRun::new(text, self.style.body_font, self.style.body_size).bold(),
        )
        .heading(2)
        .left_indent(self.style.first_line_indent_pt())
        .spacing(Some(before), Some(after))
    }

    fn header(&self, raw: &RawDocument) -> Vec<Node> {
        let style = self.style;
        let meta = &raw.metadata;

        let title = Paragraph::with_run(
            ParagraphKind::Title,
            TextRun::new(raw.material_type.title(), style.body_font, style.heading_size).bold(),
        )
        .align(Alignment::Center)
        .spacing(None, Some(TITLE_SPACE_AFTER));

        let field = |label: &str, value: &str, bold_value: bool, after: f32| {
            let mut p = Paragraph::new(ParagraphKind::HeaderField);
            p.add_run(TextRun::new(label, style.body_font, style.body_size).bold());
            p.add_run(TextRun::new(value, style.body_font, style.body_size).bold_if(bold_value));
            Node::Paragraph(p.spacing(None, Some(after)))
        };

        vec![
            Node::Paragraph(title),
            field("Предмет: ", subject_name(&meta.subject), false, FIELD_SPACE_AFTER),
            field("Класс: ", &meta.class_name, false, FIELD_SPACE_AFTER),
            field("Тема: ", &meta.topic, true, TOPIC_SPACE_AFTER),
        ]
    }

    fn footer(&self, date: NaiveDate) -> Vec<Node> {
        let style = self.style;
        let small = style.body_size - 2.0;

        let gap = Paragraph::with_run(
            ParagraphKind::Spacer,
            TextRun::new("", style.body_font, style.body_size),
        )
        .spacing(Some(FOOTER_GAP), None);

        let created = Paragraph::with_run(
            ParagraphKind::Footer,
            TextRun::new(
                format!("Дата создания: {}", date.format(DATE_FORMAT)),
                style.body_font,
                small,
            )
            .italic(),
        )
        .spacing(Some(DATE_SPACE_BEFORE), None);

        let provenance = Paragraph::with_run(
            ParagraphKind::Footer,
            TextRun::new(self.options.provenance.as_str(), style.body_font, small).italic(),
        )
        .align(Alignment::Center)
        .spacing(Some(PROVENANCE_SPACE_BEFORE), None);

        vec![
            Node::Paragraph(gap),
            Node::Paragraph(created),
            Node::Paragraph(provenance),
        ]
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{MaterialType, Metadata};

    fn builder() -> DocumentBuilder {
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        DocumentBuilder::with_options(FormatOptions::new().with_date(date))
    }

    fn raw(content: &str) -> RawDocument {
        RawDocument::new(
            content,
            Metadata::new("mathematics", "5А", "Дроби"),
            MaterialType::LessonPlan,
        )
    }

    #[test]
    fn test_header_block() {
        let doc = builder().build(&raw("Текст.")).unwrap();
        let texts: Vec<String> = doc.nodes[..4].iter().map(Node::plain_text).collect();
        assert_eq!(
            texts,
            vec!["ПЛАН УРОКА", "Предмет: Математика", "Класс: 5А", "Тема: Дроби"]
        );

        let title = doc.nodes[0].as_paragraph().unwrap();
        assert_eq!(title.style.alignment, Alignment::Center);
        assert!(title.runs[0].style.bold);
        assert_eq!(title.runs[0].style.font_size, 16.0);

        let topic = doc.nodes[3].as_paragraph().unwrap();
        assert!(topic.runs.iter().all(|r| r.style.bold));
        let subject = doc.nodes[1].as_paragraph().unwrap();
        assert!(!subject.runs[1].style.bold);
    }

    #[test]
    fn test_footer_block() {
        let doc = builder().build(&raw("Текст.")).unwrap();
        let n = doc.node_count();
        assert_eq!(doc.nodes[n - 2].plain_text(), "Дата создания: 02.09.2024");

        let provenance = doc.nodes[n - 1].as_paragraph().unwrap();
        assert_eq!(provenance.kind(), ParagraphKind::Footer);
        assert_eq!(provenance.style.alignment, Alignment::Center);
        assert!(provenance.runs[0].style.italic);
    }

    #[test]
    fn test_main_heading_strips_colon() {
        let options = FormatOptions::new().with_header(false).with_footer(false);
        let doc = DocumentBuilder::with_options(options)
            .build(&raw("Оборудование:"))
            .unwrap();
        let heading = doc.nodes[0].as_paragraph().unwrap();
        assert_eq!(heading.plain_text(), "Оборудование");
        assert_eq!(heading.style.heading_level, Some(1));
        assert_eq!(heading.runs[0].style.font_size, 15.0);
    }

    #[test]
    fn test_missing_content() {
        assert!(matches!(builder().build(&raw("")), Err(Error::MissingContent)));
        assert!(matches!(
            builder().build(&raw(" \n \t")),
            Err(Error::MissingContent)
        ));
    }

    #[test]
    fn test_stats() {
        let result = builder()
            .build_with_stats(&raw("ЦЕЛИ\n1. Разминка\n- a\n- b\nТекст\n| A | B |\n| 1 | 2 |"))
            .unwrap();
        let stats = result.stats;
        assert_eq!(stats.line_count, 7);
        assert_eq!(stats.main_heading_count, 1);
        assert_eq!(stats.sub_heading_count, 1);
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 2);
    }
}
