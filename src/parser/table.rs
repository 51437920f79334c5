//! Extraction of pipe-delimited tables.

use std::sync::LazyLock;

use regex::Regex;

/// Markdown-style header separator such as `|---|:--:|`.
static SEPARATOR_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\-|:\s]+$").unwrap());

/// Cells parsed from a run of table lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTable {
    /// Rows of trimmed cell strings
    pub rows: Vec<Vec<String>>,

    /// Number of input lines consumed, separators included
    pub consumed: usize,
}

/// Parse the run of pipe-containing lines starting at `start`.
///
/// Consumption stops at the first line without a `|`. Separator lines are
/// consumed but produce no row. Empty cells are dropped wherever they occur.
pub fn extract<L: AsRef<str>>(lines: &[L], start: usize) -> ExtractedTable {
    let mut rows = Vec::new();
    let mut index = start;

    while let Some(line) = lines.get(index).map(|l| l.as_ref().trim()) {
        if !line.contains('|') {
            break;
        }
        index += 1;

        if SEPARATOR_LINE.is_match(line) {
            continue;
        }

        let cells = split_cells(line);
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    let consumed = index - start;
    log::debug!(
        "Table: {} rows from {} lines starting at line {}",
        rows.len(),
        consumed,
        start
    );

    ExtractedTable { rows, consumed }
}

/// Split one table line into its non-empty trimmed cells.
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_separator() {
        let lines = ["| Этап | Время |", "|---|---|", "| Разминка | 5 мин |"];
        let table = extract(&lines, 0);

        assert_eq!(table.consumed, 3);
        assert_eq!(
            table.rows,
            vec![vec!["Этап", "Время"], vec!["Разминка", "5 мин"]]
        );
    }

    #[test]
    fn test_extract_stops_at_plain_line() {
        let lines = [
            "Вступление",
            "Этап | Время",
            "Опрос | 10 мин",
            "После таблицы",
            "| ещё | строка |",
        ];
        let table = extract(&lines, 1);

        assert_eq!(table.consumed, 2);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Этап", "Время"]);
    }

    #[test]
    fn test_extract_only_separators() {
        let lines = ["|---|---|", "| :-: | --- |"];
        let table = extract(&lines, 0);

        assert!(table.rows.is_empty());
        assert_eq!(table.consumed, 2);
    }

    #[test]
    fn test_extract_out_of_range() {
        let lines: [&str; 0] = [];
        let table = extract(&lines, 0);
        assert_eq!(table.consumed, 0);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_empty_interior_cell_keeps_column_count() {
        let lines = [
            "| Вид деят. | Учитель | Ученики | | Форма | УУД | Прим. |",
            "| Опрос | Спрашивает | Отвечают | Фронт. | К | - |",
        ];
        let table = extract(&lines, 0);

        assert_eq!(table.rows[0].len(), 6);
        assert!(table.rows[0].iter().all(|cell| !cell.is_empty()));
        assert_eq!(table.rows[1].len(), 6);
    }

    #[test]
    fn test_split_cells_drops_empty_cells() {
        assert_eq!(split_cells("| a |  | c |"), vec!["a", "c"]);
        assert_eq!(split_cells("a | b"), vec!["a", "b"]);
        assert_eq!(split_cells("||x||"), vec!["x"]);
        assert!(split_cells("| |").is_empty());
    }
}
