// src/markdown.rs
//! Line-walking parser for the small Markdown subset the house documents
//! use. Lines are classified into typed blocks; no inline parsing happens
//! here (see `inline`), and no attempt is made at general Markdown
//! compliance.

use crate::press::CoverPage;

/// A parsed block. The first group is produced by [`parse`]; the variants
/// after `Rule` are only emitted by the press-kit builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// A whole-line `*italic*` paragraph, set as a muted aside.
    Note(String),
    Bullet { lead: Option<String>, text: String },
    /// The printed number is whatever the source wrote.
    Numbered { number: String, text: String },
    Code(Vec<String>),
    Table(Table),
    Rule,
    PageBreak,
    Spacer(f32),
    Cover(CoverPage),
    Section { title: String, subtitle: Option<String> },
    /// Small bold grey line, e.g. a release embargo notice.
    Kicker(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Parses Markdown source into blocks.
///
/// The subset recognised: `#`–`####` headings, `---` rules, ``` fences,
/// `|`-delimited tables with a `---|---` separator row, `-`/`*` bullets,
/// `N.` numbered items, whole-line `*italic*` notes. Everything else is a
/// paragraph; each source line is its own paragraph. Blank lines separate
/// blocks and produce nothing.
pub fn parse(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut code: Option<Vec<String>> = None;
    let mut table: Option<Table> = None;

    for line in source.lines() {
        let stripped = line.trim();

        // Fence toggling. An opening fence also terminates an open table.
        if stripped.starts_with("```") {
            match code.take() {
                Some(lines) => blocks.push(Block::Code(lines)),
                None => {
                    flush_table(&mut table, &mut blocks);
                    code = Some(Vec::new());
                }
            }
            continue;
        }

        if let Some(lines) = code.as_mut() {
            lines.push(line.to_string());
            continue;
        }

        if stripped.starts_with('|') {
            let cells: Vec<String> = stripped
                .trim_matches('|')
                .split('|')
                .map(|c| c.trim().to_string())
                .collect();
            if is_separator_row(&cells) {
                continue;
            }
            match table.as_mut() {
                Some(t) => t.rows.push(cells),
                None => table = Some(Table { headers: cells, rows: Vec::new() }),
            }
            continue;
        }
        flush_table(&mut table, &mut blocks);

        if stripped.is_empty() {
            continue;
        }

        if stripped == "---" {
            blocks.push(Block::Rule);
        } else if let Some(text) = stripped.strip_prefix("#### ") {
            blocks.push(Block::Heading { level: 4, text: text.trim().to_string() });
        } else if let Some(text) = stripped.strip_prefix("### ") {
            blocks.push(Block::Heading { level: 3, text: text.trim().to_string() });
        } else if let Some(text) = stripped.strip_prefix("## ") {
            blocks.push(Block::Heading { level: 2, text: text.trim().to_string() });
        } else if let Some(text) = stripped.strip_prefix("# ") {
            blocks.push(Block::Heading { level: 1, text: text.trim().to_string() });
        } else if let Some((number, text)) = numbered_item(stripped) {
            blocks.push(Block::Numbered { number, text });
        } else if let Some(text) = stripped.strip_prefix("- ").or_else(|| stripped.strip_prefix("* ")) {
            blocks.push(Block::Bullet { lead: None, text: text.to_string() });
        } else if is_note_line(stripped) {
            blocks.push(Block::Note(stripped[1..stripped.len() - 1].to_string()));
        } else {
            blocks.push(Block::Paragraph(stripped.to_string()));
        }
    }

    // Unterminated structures at end of input are flushed as-is.
    flush_table(&mut table, &mut blocks);
    if let Some(lines) = code.take() {
        blocks.push(Block::Code(lines));
    }

    log::debug!("parsed {} blocks", blocks.len());
    blocks
}

fn flush_table(table: &mut Option<Table>, blocks: &mut Vec<Block>) {
    if let Some(t) = table.take() {
        blocks.push(Block::Table(t));
    }
}

fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

fn numbered_item(line: &str) -> Option<(String, String)> {
    let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let rest = line[digits.len()..].strip_prefix('.')?;
    let text = rest.trim_start();
    if text.is_empty() || text.len() == rest.len() {
        return None;
    }
    Some((digits, text.to_string()))
}

fn is_note_line(line: &str) -> bool {
    line.len() > 2
        && line.starts_with('*')
        && line.ends_with('*')
        && !line.starts_with("**")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_by_level() {
        let blocks = parse("# One\n## Two\n### Three\n#### Four\n");
        assert_eq!(blocks.len(), 4);
        for (i, block) in blocks.iter().enumerate() {
            match block {
                Block::Heading { level, .. } => assert_eq!(*level as usize, i + 1),
                other => panic!("expected heading, got {:?}", other),
            }
        }
    }

    #[test]
    fn deeper_heading_markers_fall_through_to_paragraph() {
        let blocks = parse("##### Five\n");
        assert_eq!(blocks, vec![Block::Paragraph("##### Five".to_string())]);
    }

    #[test]
    fn each_line_is_its_own_paragraph() {
        let blocks = parse("first line\nsecond line\n\nthird\n");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::Paragraph(_)));
    }

    #[test]
    fn bullets_accept_both_markers() {
        let blocks = parse("- dash item\n* star item\n");
        assert_eq!(
            blocks,
            vec![
                Block::Bullet { lead: None, text: "dash item".to_string() },
                Block::Bullet { lead: None, text: "star item".to_string() },
            ]
        );
    }

    #[test]
    fn numbered_items_keep_the_source_number() {
        let blocks = parse("3. third thing\n");
        assert_eq!(
            blocks,
            vec![Block::Numbered { number: "3".to_string(), text: "third thing".to_string() }]
        );
        // A version string is not a numbered item.
        assert_eq!(parse("3.14 is pi\n"), vec![Block::Paragraph("3.14 is pi".to_string())]);
    }

    #[test]
    fn note_line_requires_single_star_wrapping() {
        assert_eq!(parse("*an aside*\n"), vec![Block::Note("an aside".to_string())]);
        assert!(matches!(parse("**bold line**\n")[0], Block::Paragraph(_)));
    }

    #[test]
    fn fenced_code_collects_raw_lines() {
        let blocks = parse("```\nlet x = 1;\n\n  indented\n```\n");
        assert_eq!(
            blocks,
            vec![Block::Code(vec![
                "let x = 1;".to_string(),
                "".to_string(),
                "  indented".to_string(),
            ])]
        );
    }

    #[test]
    fn unterminated_code_block_is_flushed() {
        let blocks = parse("```\ndangling\n");
        assert_eq!(blocks, vec![Block::Code(vec!["dangling".to_string()])]);
    }

    #[test]
    fn table_with_separator_row() {
        let blocks = parse("| A | B |\n|---|:--:|\n| 1 | 2 |\n| 3 | 4 |\n");
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table, got {:?}", blocks[0]);
        };
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn table_ends_at_first_non_table_line() {
        let blocks = parse("| A |\n| 1 |\nafter\n");
        assert!(matches!(blocks[0], Block::Table(_)));
        assert_eq!(blocks[1], Block::Paragraph("after".to_string()));
    }

    #[test]
    fn opening_fence_terminates_open_table() {
        let blocks = parse("| A |\n| 1 |\n```\ncode\n```\n");
        assert!(matches!(blocks[0], Block::Table(_)));
        assert!(matches!(blocks[1], Block::Code(_)));
    }

    #[test]
    fn rule_is_exactly_three_dashes() {
        assert_eq!(parse("---\n"), vec![Block::Rule]);
        assert!(matches!(parse("----\n")[0], Block::Paragraph(_)));
    }
}
