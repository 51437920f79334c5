//! Line classification.
//!
//! Several predicates overlap (a numbered sub-heading looks like a numbered
//! list item, a table header looks like a body line with a colon), so the
//! rules form an ordered decision table evaluated top-down: the first rule
//! that matches decides the kind. A line that matches no rule is a
//! [`BlockKind::Paragraph`].

use std::sync::LazyLock;

use regex::Regex;

use super::BlockKind;

/// Canonical section titles recognised by prefix (case-sensitive).
pub const SECTION_TITLES: &[&str] = &[
    "ПЛАН УРОКА",
    "ХОД УРОКА",
    "ЦЕЛИ",
    "ЗАДАЧИ",
    "ОБОРУДОВАНИЕ",
    "ОБЩИЕ СВЕДЕНИЯ",
    "ПЛАНИРУЕМЫЕ РЕЗУЛЬТАТЫ",
    "СТРУКТУРА УРОКА",
    "ДОМАШНЕЕ ЗАДАНИЕ",
    "ДОПОЛНИТЕЛЬНО",
];

/// Labelled categories that introduce a sub-section (always followed by `:`).
pub const LABELLED_CATEGORIES: &[&str] = &[
    "Образовательные",
    "Развивающие",
    "Воспитательные",
    "Предметные",
    "Метапредметные",
    "Личностные",
    "Деятельность учителя",
    "Деятельность учащихся",
    "Методы",
];

/// Header tokens of the lesson-structure table.
const ACTIVITY_HEADER_TOKEN: &str = "Вид деят.";
const ACTIVITY_HEADER_WORD: &str = "Деятельность";

static ROMAN_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:IX|IV|X|V?I{1,3}|V)\.").unwrap());

static CAPITAL_WORD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[А-ЯЁA-Z][а-яёa-z]+:$").unwrap());

// `1.` but not a decimal number such as `1.5`
static NUMBERED_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.(?:\D|$)").unwrap());

static TIMED_STAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[А-ЯЁA-Z][а-яёa-z]+(?:[\s,\-]+[А-ЯЁа-яёA-Za-z]+)*\s*\(\d+\s*мин\.?\)").unwrap()
});

static STAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Этап\s+\d+").unwrap());

static CATEGORY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^(?:{}):", LABELLED_CATEGORIES.join("|"))).unwrap());

static LETTERED_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[а-яёa-z]\)\s*(?:{}):",
        LABELLED_CATEGORIES.join("|")
    ))
    .unwrap()
});

static CAPITALIZED_COLUMNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*[А-ЯЁA-Z][а-яёa-z\s]+\|.*\|\s*[А-ЯЁA-Z][а-яёa-z\s]+\|").unwrap()
});

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-•*]|\d+\)|[а-яёa-z]\))\s").unwrap());

/// A classification rule: `(line, next_line) -> matches`.
pub type Predicate = fn(&str, Option<&str>) -> bool;

/// The decision table, in precedence order.
pub const RULES: &[(BlockKind, Predicate)] = &[
    (BlockKind::MainHeading, is_main_heading),
    (BlockKind::SubHeading, is_sub_heading),
    (BlockKind::TableRow, is_table_row),
    (BlockKind::ListItem, is_list_item),
];

/// Classify one trimmed line, given the line that follows it.
pub fn classify(line: &str, next_line: Option<&str>) -> BlockKind {
    RULES
        .iter()
        .find(|(_, matches)| matches(line, next_line))
        .map(|(kind, _)| *kind)
        .unwrap_or(BlockKind::Paragraph)
}

/// Every rule a line satisfies, in precedence order.
///
/// Only the first entry decides the kind; the rest show which overlapping
/// rules were shadowed.
pub fn matching_rules(line: &str, next_line: Option<&str>) -> Vec<BlockKind> {
    RULES
        .iter()
        .filter(|(_, matches)| matches(line, next_line))
        .map(|(kind, _)| *kind)
        .collect()
}

/// ALL-CAPS line, Roman-numeral prefix, canonical title, or `Word:` alone.
pub fn is_main_heading(line: &str, _next_line: Option<&str>) -> bool {
    is_all_caps(line)
        || ROMAN_PREFIX.is_match(line)
        || SECTION_TITLES.iter().any(|title| line.starts_with(title))
        || CAPITAL_WORD_LABEL.is_match(line)
}

/// Numbered point, lettered category, timed stage, `Этап N` or labelled category.
pub fn is_sub_heading(line: &str, _next_line: Option<&str>) -> bool {
    NUMBERED_POINT.is_match(line)
        || LETTERED_CATEGORY.is_match(line)
        || TIMED_STAGE.is_match(line)
        || STAGE_NUMBER.is_match(line)
        || CATEGORY_LABEL.is_match(line)
}

/// Pipe-delimited line that continues on the next line or looks like a header.
pub fn is_table_row(line: &str, next_line: Option<&str>) -> bool {
    if !line.contains('|') {
        return false;
    }

    next_line.is_some_and(|next| next.contains('|'))
        || (line.contains(ACTIVITY_HEADER_TOKEN) && line.contains(ACTIVITY_HEADER_WORD))
        || CAPITALIZED_COLUMNS.is_match(line)
}

/// Bullet (`-`, `•`, `*`), `N)` or `letter)` marker followed by whitespace.
pub fn is_list_item(line: &str, _next_line: Option<&str>) -> bool {
    LIST_MARKER.is_match(line)
}

/// At least three letters, all upper-case Cyrillic or Latin, starting with one.
fn is_all_caps(line: &str) -> bool {
    if !line.chars().next().is_some_and(is_upper_letter) {
        return false;
    }

    let mut letters = 0;
    for c in line.chars().filter(|c| c.is_alphabetic()) {
        if !is_upper_letter(c) {
            return false;
        }
        letters += 1;
    }
    letters >= 3
}

fn is_upper_letter(c: char) -> bool {
    c.is_ascii_uppercase() || ('А'..='Я').contains(&c) || c == 'Ё'
}
