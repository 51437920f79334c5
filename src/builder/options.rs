//! Formatting options and configuration.

use chrono::{Local, NaiveDate};

/// Default provenance line printed at the bottom of every document.
pub const DEFAULT_PROVENANCE: &str = "Создано с помощью образовательной платформы ИИ";

/// Options for building a rendered document.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Date printed in the footer (today's local date if unset)
    pub date: Option<NaiveDate>,

    /// Emit the title / subject / class / topic block
    pub include_header: bool,

    /// Emit the date / provenance block
    pub include_footer: bool,

    /// Provenance line text
    pub provenance: String,
}

impl FormatOptions {
    /// Create new format options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Enable or disable the header block.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Enable or disable the footer block.
    pub fn with_footer(mut self, include: bool) -> Self {
        self.include_footer = include;
        self
    }

    /// Set the provenance line.
    pub fn with_provenance(mut self, text: impl Into<String>) -> Self {
        self.provenance = text.into();
        self
    }

    /// The footer date, falling back to today's local date.
    pub fn resolved_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            date: None,
            include_header: true,
            include_footer: true,
            provenance: DEFAULT_PROVENANCE.to_string(),
        }
    }
}
