//! Benchmarks for eduformat classification and building.
//!
//! Run with: cargo bench

use std::collections::BTreeMap;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eduformat::builder::{DocumentBuilder, FormatOptions};
use eduformat::parser::classifier::classify;
use eduformat::{format_materials, Material, MaterialType, Metadata, RawDocument};

/// Creates a synthetic lesson plan with the given number of stages.
fn create_lesson_plan(stages: usize) -> String {
    let mut content = String::from("ПЛАН УРОКА\nЦели:\nОбразовательные: освоить тему\n");

    content.push_str("ХОД УРОКА\n");
    for i in 1..=stages {
        content.push_str(&format!("{}. Этап работы (5 мин)\n", i));
        content.push_str("Учитель объясняет новый материал и задаёт вопросы классу.\n");
        content.push_str("- работа в парах\n- самопроверка\n");
    }

    content.push_str("| Вид деят. | Деятельность учителя | Деятельность учащихся |\n");
    content.push_str("|---|---|---|\n");
    for i in 0..stages {
        content.push_str(&format!("| Этап {} | Объясняет | Слушают |\n", i));
    }
    content
}

fn bench_classify(c: &mut Criterion) {
    let lines = [
        "ПЛАН УРОКА",
        "1. Организационный момент (2 мин)",
        "| Вид деят. | Деятельность учителя |",
        "- пункт списка",
        "Обычный абзац текста без разметки.",
    ];

    c.bench_function("classify_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(classify(black_box(line), Some("| a | b |")));
            }
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let builder = DocumentBuilder::with_options(FormatOptions::new().with_date(date));

    let mut group = c.benchmark_group("document_build");

    for stages in [5, 50, 500] {
        let raw = RawDocument::new(
            create_lesson_plan(stages),
            Metadata::new("mathematics", "5А", "Дроби"),
            MaterialType::LessonPlan,
        );

        group.bench_function(format!("{}_stages", stages), |b| {
            b.iter(|| builder.build(black_box(&raw)).unwrap())
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let options = FormatOptions::new().with_date(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
    let metadata = Metadata::new("physics", "8Б", "Давление");
    let materials: BTreeMap<String, Material> = MaterialType::ALL
        .iter()
        .map(|t| (t.id().to_string(), Material::text(create_lesson_plan(50))))
        .collect();

    c.bench_function("format_materials_all_types", |b| {
        b.iter(|| format_materials(black_box(&materials), &metadata, &options))
    });
}

criterion_group!(benches, bench_classify, bench_build, bench_batch);
criterion_main!(benches);
