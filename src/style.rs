//! The fixed formatting standard applied to every rendered document.
//!
//! All values follow the GOST layout used for school paperwork: Times New
//! Roman, 14pt body text, 2cm top/bottom margins, 3cm left, 1.5cm right,
//! one-and-a-half line spacing and a 1.25cm first-line indent.

use serde::{Deserialize, Serialize};

/// Points per centimetre (1pt = 1/72 inch).
pub const POINTS_PER_CM: f32 = 72.0 / 2.54;

/// Convert centimetres to points.
pub fn cm_to_pt(cm: f32) -> f32 {
    cm * POINTS_PER_CM
}

/// Page margins in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
    /// Right margin
    pub right: f32,
}

/// Typographic and layout constants consulted by every render step.
///
/// Font sizes are in points, lengths in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleProfile {
    /// Font family used for all text
    pub body_font: &'static str,

    /// Body text size
    pub body_size: f32,

    /// Document title size
    pub heading_size: f32,

    /// Section heading size
    pub subheading_size: f32,

    /// Table cell text size
    pub table_size: f32,

    /// Page width (A4)
    pub page_width: f32,

    /// Page height (A4)
    pub page_height: f32,

    /// Page margins
    pub margins: Margins,

    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: f32,

    /// First-line indent of body paragraphs
    pub first_line_indent: f32,

    /// Hanging indent of bullet paragraphs
    pub hanging_indent: f32,
}

impl StyleProfile {
    /// The required formatting standard.
    pub const GOST: StyleProfile = StyleProfile {
        body_font: "Times New Roman",
        body_size: 14.0,
        heading_size: 16.0,
        subheading_size: 15.0,
        table_size: 12.0,
        page_width: 21.0,
        page_height: 29.7,
        margins: Margins {
            top: 2.0,
            bottom: 2.0,
            left: 3.0,
            right: 1.5,
        },
        line_spacing: 1.5,
        first_line_indent: 1.25,
        hanging_indent: 0.63,
    };

    /// Width available for text between the left and right margins, in points.
    pub fn text_width_pt(&self) -> f32 {
        cm_to_pt(self.page_width - self.margins.left - self.margins.right)
    }

    /// First-line indent in points.
    pub fn first_line_indent_pt(&self) -> f32 {
        cm_to_pt(self.first_line_indent)
    }

    /// Hanging indent in points.
    pub fn hanging_indent_pt(&self) -> f32 {
        cm_to_pt(self.hanging_indent)
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::GOST
    }
}

/// Display names for subject ids.
const SUBJECT_NAMES: &[(&str, &str)] = &[
    ("mathematics", "Математика"),
    ("russian", "Русский язык"),
    ("literature", "Литература"),
    ("physics", "Физика"),
    ("chemistry", "Химия"),
    ("biology", "Биология"),
    ("geography", "География"),
    ("history", "История России"),
    ("social-studies", "Обществознание"),
    ("english", "Английский язык"),
    ("art", "Изобразительное искусство"),
    ("music", "Музыка"),
    ("pe", "Физическая культура"),
    ("technology", "Технология"),
    ("informatics", "Информатика"),
];

/// Resolve a subject id to its display name.
///
/// Unknown ids pass through unchanged.
pub fn subject_name(id: &str) -> &str {
    SUBJECT_NAMES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, name)| *name)
        .unwrap_or(id)
}
