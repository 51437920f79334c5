//! Rendering of extracted table rows into a styled table node.

use crate::model::{Alignment, Node, Paragraph, ParagraphKind, Table, TableCell, TableRow, TextRun};
use crate::style::StyleProfile;

/// Relative column widths of the six-column lesson-structure table:
/// activity type, teacher actions, student actions, learning format,
/// competency code, notes.
///
/// Any six-column table gets these widths.
pub const LESSON_TABLE_WEIGHTS: [f32; 6] = [1500.0, 3000.0, 3000.0, 1200.0, 800.0, 1500.0];

const TABLE_SPACING: f32 = 12.0;

/// Column widths in points for a table whose header row has `columns` cells.
pub fn column_widths(columns: usize, style: &StyleProfile) -> Vec<f32> {
    let text_width = style.text_width_pt();

    if columns == LESSON_TABLE_WEIGHTS.len() {
        let total: f32 = LESSON_TABLE_WEIGHTS.iter().sum();
        return LESSON_TABLE_WEIGHTS
            .iter()
            .map(|weight| text_width * weight / total)
            .collect();
    }

    if columns == 0 {
        return Vec::new();
    }
    vec![text_width / columns as f32; columns]
}

/// Render extracted rows as a table node.
///
/// The first row is a bold, centered header when the table has at least two
/// rows. A table without rows becomes an empty placeholder paragraph.
pub fn render_table(rows: &[Vec<String>], style: &StyleProfile) -> Node {
    let Some(first) = rows.first() else {
        log::warn!("Table run produced no rows, emitting placeholder");
        return Node::Paragraph(Paragraph::new(ParagraphKind::Spacer));
    };

    let has_header = rows.len() >= 2;
    let widths = column_widths(first.len(), style);

    let mut table = Table::new();
    table.header_rows = u8::from(has_header);
    table.column_widths = widths.clone();
    table.spacing = TABLE_SPACING;

    for (row_index, row) in rows.iter().enumerate() {
        let is_header = has_header && row_index == 0;
        let cells = row
            .iter()
            .enumerate()
            .map(|(col, text)| render_cell(text, is_header, style).width(widths.get(col).copied()))
            .collect();

        table.add_row(if is_header {
            TableRow::header(cells)
        } else {
            TableRow::new(cells)
        });
    }

    Node::Table(table)
}

fn render_cell(text: &str, is_header: bool, style: &StyleProfile) -> TableCell {
    let run = TextRun::new(text.trim(), style.body_font, style.table_size).bold_if(is_header);
    let alignment = if is_header {
        Alignment::Center
    } else {
        Alignment::Justify
    };
    TableCell::new(Paragraph::with_run(ParagraphKind::TableCell, run).align(alignment))
}
