//! Integration tests for line classification and block parsing.

use eduformat::parser::classifier::{classify, matching_rules, RULES};
use eduformat::parser::{extract, parse_blocks, split_lines, BlockParser};
use eduformat::{Block, BlockKind};

const LESSON_PLAN: &str = "\
ПЛАН УРОКА
Цели:
Образовательные: познакомить с дробями
Развивающие: развивать логическое мышление
ХОД УРОКА
1. Организационный момент (2 мин)
Учитель приветствует учащихся.
- проверка готовности
- настрой на работу
| Вид деят. | Деятельность учителя | Деятельность учащихся |
|---|---|---|
| Опрос | Задаёт вопросы | Отвечают |

Домашнее задание выдано.";

#[test]
fn test_lesson_plan_blocks() {
    let kinds: Vec<BlockKind> = parse_blocks(LESSON_PLAN).iter().map(Block::kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::MainHeading,
            BlockKind::MainHeading,
            BlockKind::SubHeading,
            BlockKind::SubHeading,
            BlockKind::MainHeading,
            BlockKind::SubHeading,
            BlockKind::Paragraph,
            BlockKind::ListItem,
            BlockKind::ListItem,
            BlockKind::TableRow,
            BlockKind::Paragraph,
        ]
    );
}

#[test]
fn test_table_block_contents() {
    let blocks = parse_blocks(LESSON_PLAN);
    let table = blocks
        .iter()
        .find_map(|b| match b {
            Block::Table { rows } => Some(rows),
            _ => None,
        })
        .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(
        table[0],
        vec!["Вид деят.", "Деятельность учителя", "Деятельность учащихся"]
    );
    assert_eq!(table[1], vec!["Опрос", "Задаёт вопросы", "Отвечают"]);
}

#[test]
fn test_separator_table_consumes_all_lines() {
    let lines = split_lines("| A | B |\n|---|---|\n| 1 | 2 |\nпосле таблицы");
    let extracted = extract(&lines, 0);
    assert_eq!(extracted.rows, vec![vec!["A", "B"], vec!["1", "2"]]);
    assert_eq!(extracted.consumed, 3);
}

#[test]
fn test_every_line_lands_in_one_block() {
    let parser = BlockParser::new(LESSON_PLAN);
    let line_count = parser.line_count();

    let covered: usize = parser
        .map(|block| match block {
            // header and data row plus the separator
            Block::Table { rows } => rows.len() + 1,
            _ => 1,
        })
        .sum();
    assert_eq!(covered, line_count);
}

#[test]
fn test_classification_is_total() {
    let samples = [
        "",
        "|",
        "||||",
        "1.",
        "1.5 литра",
        "а)",
        "б) Образовательные: цели",
        "—",
        "12345",
        "   ",
        "Ёж",
        "ЁЖИК",
        "«»",
        "```",
    ];
    for line in samples {
        for next in [None, Some("| x |"), Some("")] {
            let kind = classify(line, next);
            // the first matching rule decides, or nothing matched
            match matching_rules(line, next).first() {
                Some(first) => assert_eq!(kind, *first),
                None => assert_eq!(kind, BlockKind::Paragraph),
            }
        }
    }
}

#[test]
fn test_rule_order() {
    let order: Vec<BlockKind> = RULES.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        order,
        vec![
            BlockKind::MainHeading,
            BlockKind::SubHeading,
            BlockKind::TableRow,
            BlockKind::ListItem,
        ]
    );
}

#[test]
fn test_shadowed_rules() {
    // `Цели:` matches only the `Word:` heading rule
    assert_eq!(matching_rules("Цели:", None), vec![BlockKind::MainHeading]);

    // A line starting with a pipe is never ALL-CAPS, so only the table rule matches
    let kinds = matching_rules("| ЭТАП | ВРЕМЯ |", Some("| a | b |"));
    assert_eq!(kinds, vec![BlockKind::TableRow]);

    // An ALL-CAPS line with an inner pipe is a heading before it is a table row
    assert_eq!(
        matching_rules("ИТОГ | ВЫВОД", Some("| a | b |")),
        vec![BlockKind::MainHeading, BlockKind::TableRow]
    );
}

#[test]
fn test_lettered_lines() {
    assert_eq!(
        classify("а) Образовательные: освоить понятие", None),
        BlockKind::SubHeading
    );
    assert_eq!(classify("а) первый вариант", None), BlockKind::ListItem);
}

#[test]
fn test_blank_lines_are_ignored() {
    let blocks = parse_blocks("\n\n  \nТекст\n\n\t\n");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            text: "Текст".to_string()
        }]
    );
}
