//! File naming for exported documents.

use crate::model::{MaterialType, Metadata};

const MAX_COMPONENT_CHARS: usize = 50;

/// Slug used as the file-name prefix for a material type.
pub fn type_slug(material_type: MaterialType) -> &'static str {
    match material_type {
        MaterialType::LessonPlan => "план_урока",
        MaterialType::Presentation => "презентация",
        MaterialType::Worksheet => "рабочий_лист",
        MaterialType::Test => "контрольная",
        MaterialType::Homework => "домашнее_задание",
        MaterialType::Summary => "конспект",
    }
}

/// File name for one exported material:
/// `<type-slug>_<subject>_<class>_<topic>.<extension>`.
pub fn file_name(material_type: MaterialType, metadata: &Metadata, extension: &str) -> String {
    format!(
        "{}_{}_{}_{}.{}",
        type_slug(material_type),
        sanitize(&metadata.subject),
        metadata.class_name,
        sanitize(&metadata.topic),
        extension.trim_start_matches('.')
    )
}

/// Archive name for a bundle of every material of one request.
pub fn zip_name(metadata: &Metadata) -> String {
    format!(
        "materials_{}_{}_{}.zip",
        sanitize(&metadata.subject),
        metadata.class_name,
        sanitize(&metadata.topic)
    )
}

/// Reduce a free-form string to a file-name component.
///
/// Keeps Latin and Cyrillic letters, digits and whitespace, replaces each
/// whitespace run with `_`, lowercases and truncates to 50 characters.
pub fn sanitize(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|&c| is_name_char(c) || c.is_whitespace())
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
        .chars()
        .take(MAX_COMPONENT_CHARS)
        .collect()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}
