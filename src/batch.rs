//! Parallel formatting of a whole generation result.
//!
//! A generation request produces one [`Material`] per requested material
//! type. Every usable material is built on the rayon pool; entries that
//! carry an upstream error or no text are skipped.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::builder::{DocumentBuilder, FormatOptions};
use crate::error::Result;
use crate::model::{Material, MaterialType, Metadata, RawDocument, RenderedDocument};

/// Build every usable material in parallel.
///
/// The returned map is keyed by the material-type id as given. An unknown id
/// yields [`Error::UnknownMaterialType`](crate::Error::UnknownMaterialType)
/// for that entry without affecting the others.
pub fn format_materials(
    materials: &BTreeMap<String, Material>,
    metadata: &Metadata,
    options: &FormatOptions,
) -> BTreeMap<String, Result<RenderedDocument>> {
    // Resolve the date once so every document carries the same footer.
    let options = options.clone().with_date(options.resolved_date());
    let builder = DocumentBuilder::with_options(options);

    let usable: Vec<(&String, &Material)> = materials
        .iter()
        .filter(|(id, material)| {
            if let Some(error) = &material.error {
                log::warn!("Skipping {}: upstream error: {}", id, error);
                false
            } else if !material.is_usable() {
                log::warn!("Skipping {}: no content", id);
                false
            } else {
                true
            }
        })
        .collect();

    usable
        .into_par_iter()
        .map(|(id, material)| {
            let result = format_one(&builder, id, material, metadata);
            if let Err(e) = &result {
                log::warn!("Failed to format {}: {}", id, e);
            }
            (id.clone(), result)
        })
        .collect()
}

fn format_one(
    builder: &DocumentBuilder,
    id: &str,
    material: &Material,
    metadata: &Metadata,
) -> Result<RenderedDocument> {
    let material_type: MaterialType = id.parse()?;
    let raw = RawDocument {
        content: material.content.clone(),
        metadata: metadata.clone(),
        material_type,
    };
    builder.build(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    fn options() -> FormatOptions {
        FormatOptions::new().with_date(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap())
    }

    fn metadata() -> Metadata {
        Metadata::new("history", "8В", "Реформы Петра I")
    }

    #[test]
    fn test_format_materials() {
        let mut materials = BTreeMap::new();
        materials.insert("lesson-plan".to_string(), Material::text("ЦЕЛИ\n- узнать"));
        materials.insert("homework".to_string(), Material::text("1. Прочитать параграф"));
        materials.insert("test".to_string(), Material::failed("timeout"));
        materials.insert("summary".to_string(), Material::text("   "));

        let results = format_materials(&materials, &metadata(), &options());
        assert_eq!(results.len(), 2);

        let plan = results["lesson-plan"].as_ref().unwrap();
        assert_eq!(plan.nodes[0].plain_text(), "ПЛАН УРОКА");
        let homework = results["homework"].as_ref().unwrap();
        assert_eq!(homework.nodes[0].plain_text(), "ДОМАШНЕЕ ЗАДАНИЕ");
        assert!(!results.contains_key("test"));
        assert!(!results.contains_key("summary"));
    }

    #[test]
    fn test_unknown_type_is_isolated() {
        let mut materials = BTreeMap::new();
        materials.insert("quiz".to_string(), Material::text("Текст"));
        materials.insert("worksheet".to_string(), Material::text("Текст"));

        let results = format_materials(&materials, &metadata(), &options());
        assert!(matches!(
            results["quiz"],
            Err(Error::UnknownMaterialType(ref id)) if id == "quiz"
        ));
        assert!(results["worksheet"].is_ok());
    }

    #[test]
    fn test_empty_input() {
        let results = format_materials(&BTreeMap::new(), &metadata(), &options());
        assert!(results.is_empty());
    }
}
