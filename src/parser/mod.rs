//! Structural parsing of generated text.
//!
//! Raw text is split into trimmed non-blank lines, each line is classified
//! with one line of lookahead, and runs of table lines are collapsed into a
//! single [`Block::Table`].

mod block;
pub mod classifier;
mod lines;
pub mod table;

pub use block::{Block, BlockKind};
pub use classifier::classify;
pub use lines::{split_lines, Line};
pub use table::{extract, ExtractedTable};

/// Iterator over the blocks of a text, in input order.
///
/// Every non-blank line ends up in exactly one block; table runs are consumed
/// as a whole.
pub struct BlockParser {
    lines: Vec<Line>,
    position: usize,
}

impl BlockParser {
    /// Create a parser over the given content.
    pub fn new(content: &str) -> Self {
        Self::from_lines(split_lines(content))
    }

    /// Create a parser over already split lines.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines, position: 0 }
    }

    /// Number of non-blank lines in the input.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Iterator for BlockParser {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let line = self.lines.get(self.position)?;
        let next_line = self.lines.get(self.position + 1).map(|l| l.text.as_str());
        let text = line.text.clone();

        let block = match classify(&text, next_line) {
            BlockKind::MainHeading => Block::MainHeading { text },
            BlockKind::SubHeading => Block::SubHeading { text },
            BlockKind::ListItem => Block::ListItem { text },
            BlockKind::Paragraph => Block::Paragraph { text },
            BlockKind::TableRow => {
                let extracted = extract(&self.lines, self.position);
                // A table row always contains a pipe, so at least one line is consumed
                self.position += extracted.consumed.max(1);
                return Some(Block::Table {
                    rows: extracted.rows,
                });
            }
        };

        self.position += 1;
        Some(block)
    }
}

/// Parse content into blocks.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    BlockParser::new(content).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_content() {
        let content = "ХОД УРОКА\n\
                       1. Разминка\n\
                       - первый\n\
                       - второй\n\
                       | Этап | Время |\n\
                       |---|---|\n\
                       | Опрос | 5 мин |\n\
                       Итоговый текст.";
        let blocks = parse_blocks(content);
        let kinds: Vec<BlockKind> = blocks.iter().map(Block::kind).collect();

        assert_eq!(
            kinds,
            vec![
                BlockKind::MainHeading,
                BlockKind::SubHeading,
                BlockKind::ListItem,
                BlockKind::ListItem,
                BlockKind::TableRow,
                BlockKind::Paragraph,
            ]
        );
        assert_eq!(
            blocks[4],
            Block::Table {
                rows: vec![
                    vec!["Этап".to_string(), "Время".to_string()],
                    vec!["Опрос".to_string(), "5 мин".to_string()],
                ]
            }
        );
    }

    #[test]
    fn test_every_line_maps_to_one_block() {
        let content = "Строка один\n\nСтрока два\n- пункт\nЦЕЛИ";
        let parser = BlockParser::new(content);
        assert_eq!(parser.line_count(), 4);
        assert_eq!(parser.count(), 4);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_blocks("").is_empty());
    }
}
