//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A styled table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of header rows (0 = no header)
    pub header_rows: u8,

    /// Column widths in points, indexed by column
    pub column_widths: Vec<f32>,

    /// Table width as a percentage of the text width
    pub width_percent: u8,

    /// Space before and after the table in points
    pub spacing: f32,
}

impl Table {
    /// Create a new empty table spanning the full text width.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            header_rows: 0,
            column_widths: Vec::new(),
            width_percent: 100,
            spacing: 0.0,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Vec<Paragraph>,

    /// Cell width in points
    pub width: Option<f32>,

    /// Border on every side
    pub borders: Borders,

    /// Inner cell margins
    pub margins: CellMargins,
}

impl TableCell {
    /// Create a cell holding a single paragraph.
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            content: vec![paragraph],
            width: None,
            borders: Borders::single(),
            margins: CellMargins::default(),
        }
    }

    /// Set the width and return self.
    pub fn width(mut self, width: Option<f32>) -> Self {
        self.width = width;
        self
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Border style of one cell edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No border
    None,
    /// Single solid line
    #[default]
    Single,
}

/// A border line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Line style
    pub style: BorderStyle,
    /// Line width in points
    pub width: f32,
}

/// Borders of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    /// Top edge
    pub top: Border,
    /// Bottom edge
    pub bottom: Border,
    /// Left edge
    pub left: Border,
    /// Right edge
    pub right: Border,
}

impl Borders {
    /// Thin single lines on all four sides.
    pub fn single() -> Self {
        let line = Border {
            style: BorderStyle::Single,
            width: 0.5,
        };
        Self {
            top: line,
            bottom: line,
            left: line,
            right: line,
        }
    }
}

/// Inner margins of a cell in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMargins {
    /// Top margin
    pub top: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
    /// Right margin
    pub right: f32,
}

impl Default for CellMargins {
    fn default() -> Self {
        Self {
            top: 3.0,
            bottom: 3.0,
            left: 5.0,
            right: 5.0,
        }
    }
}
