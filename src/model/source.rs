//! Input types: generated text plus the metadata it was requested with.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of teaching material a text was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialType {
    /// Lesson plan
    LessonPlan,
    /// Presentation outline
    Presentation,
    /// Worksheet
    Worksheet,
    /// Test / assessment
    Test,
    /// Homework assignment
    Homework,
    /// Lesson summary
    Summary,
}

impl MaterialType {
    /// All material types in display order.
    pub const ALL: [MaterialType; 6] = [
        MaterialType::LessonPlan,
        MaterialType::Presentation,
        MaterialType::Worksheet,
        MaterialType::Test,
        MaterialType::Homework,
        MaterialType::Summary,
    ];

    /// The id used in requests (e.g. `lesson-plan`).
    pub fn id(self) -> &'static str {
        match self {
            MaterialType::LessonPlan => "lesson-plan",
            MaterialType::Presentation => "presentation",
            MaterialType::Worksheet => "worksheet",
            MaterialType::Test => "test",
            MaterialType::Homework => "homework",
            MaterialType::Summary => "summary",
        }
    }

    /// Document title printed at the top of the header block.
    pub fn title(self) -> &'static str {
        match self {
            MaterialType::LessonPlan => "ПЛАН УРОКА",
            MaterialType::Presentation => "СТРУКТУРА ПРЕЗЕНТАЦИИ",
            MaterialType::Worksheet => "РАБОЧИЙ ЛИСТ",
            MaterialType::Test => "КОНТРОЛЬНАЯ РАБОТА",
            MaterialType::Homework => "ДОМАШНЕЕ ЗАДАНИЕ",
            MaterialType::Summary => "КОНСПЕКТ УРОКА",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MaterialType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MaterialType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| Error::UnknownMaterialType(s.to_string()))
    }
}

/// Request metadata shared by every material of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Subject id (e.g. `mathematics`)
    pub subject: String,

    /// Class label (e.g. `5А`)
    pub class_name: String,

    /// Lesson topic
    pub topic: String,
}

impl Metadata {
    /// Create metadata.
    pub fn new(
        subject: impl Into<String>,
        class_name: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            class_name: class_name.into(),
            topic: topic.into(),
        }
    }
}

/// Generated text for one material, with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    /// Generated text; `None` when the upstream producer returned nothing
    pub content: Option<String>,

    /// Request metadata
    #[serde(flatten)]
    pub metadata: Metadata,

    /// Material type the text was generated for
    pub material_type: MaterialType,
}

impl RawDocument {
    /// Create a raw document.
    pub fn new(content: impl Into<String>, metadata: Metadata, material_type: MaterialType) -> Self {
        Self {
            content: Some(content.into()),
            metadata,
            material_type,
        }
    }

    /// Get the content, failing if it is absent or blank.
    pub fn require_content(&self) -> Result<&str> {
        match self.content.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(Error::MissingContent),
        }
    }
}

/// One entry of a generation result: either text or an upstream error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Generated text
    pub content: Option<String>,

    /// Upstream generation error message
    pub error: Option<String>,
}

impl Material {
    /// A successfully generated material.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            error: None,
        }
    }

    /// A material whose generation failed upstream.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            content: None,
            error: Some(message.into()),
        }
    }

    /// Check if this material can be formatted.
    pub fn is_usable(&self) -> bool {
        self.error.is_none() && self.content.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}
