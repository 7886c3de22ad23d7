//! # README Tables
//!
//! Both READMEs carry a `Problem | Solution | Difficulty | Tags` table.
//! Regeneration swaps only that table; everything around it is left as the
//! author wrote it.

use crate::badge::{BadgeStyle, difficulty_badge};
use crate::error::Result;
use crate::metadata::QuestionMeta;
use crate::problem::Problem;
use regex::{NoExpand, Regex};

/// Icon used as the link text in the Solution column.
pub const LINK_ICON: &str = "🔗";

/// Header line of the generated table.
pub const TABLE_HEADER: &str = "| Problem | Solution | Difficulty | Tags |";

/// Separator line of the generated table.
pub const TABLE_SEPARATOR: &str = "|---------|---------|------------|------|";

/// Header, separator, then every following line that starts and ends with a pipe.
const TABLE_PATTERN: &str =
    r"\| Problem \| Solution \| Difficulty \| Tags [ \t]*\|\r?\n\|[-| ]+\|\r?\n(?:\|.*\|(?:\r?\n|$))*";

/// One row of the README table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Numbered title, e.g. `1. Two Sum`.
    pub title: String,
    /// Link to the solution page on the site.
    pub link: String,
    pub difficulty: String,
    pub tags: Vec<String>,
}

impl TableRow {
    /// Build a row for a problem from its metadata.
    #[must_use]
    pub fn new(problem: &Problem, meta: &QuestionMeta, site_url: &str) -> Self {
        Self {
            title: problem.numbered_title(),
            link: solution_link(site_url, problem.number),
            difficulty: meta.difficulty.clone(),
            tags: meta.tags.clone(),
        }
    }

    /// Render as a single Markdown table line.
    #[must_use]
    pub fn render(&self, style: BadgeStyle) -> String {
        format!(
            "| {} | [{}]({}) | {} | {} |",
            self.title,
            LINK_ICON,
            self.link,
            difficulty_badge(&self.difficulty, style),
            self.tags.join(", ")
        )
    }
}

/// URL of a problem's page on the site.
#[must_use]
pub fn solution_link(site_url: &str, number: u64) -> String {
    format!("{}/solutions/{}/", site_url.trim_end_matches('/'), number)
}

/// Render rows, one per line, without a trailing newline.
#[must_use]
pub fn render_rows(rows: &[TableRow], style: BadgeStyle) -> String {
    rows.iter()
        .map(|row| row.render(style))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap rendered rows in the table header. Always ends with a newline.
#[must_use]
pub fn render_table(rows: &str) -> String {
    if rows.is_empty() {
        // no blank row line, or reruns would keep adding one
        return format!("{TABLE_HEADER}\n{TABLE_SEPARATOR}\n");
    }
    format!("{TABLE_HEADER}\n{TABLE_SEPARATOR}\n{rows}\n")
}

/// What [`replace_table`] did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableUpdate {
    /// An existing table was swapped out.
    Replaced,
    /// No table was found; the new one was appended.
    Appended,
}

/// Replace the first generated table in `text` with `table`.
///
/// When the document has no table, it is trimmed and the table appended
/// after a blank line.
pub fn replace_table(text: &str, table: &str) -> Result<(String, TableUpdate)> {
    let pattern = Regex::new(TABLE_PATTERN)?;

    if pattern.is_match(text) {
        let updated = pattern.replace(text, NoExpand(table)).into_owned();
        Ok((updated, TableUpdate::Replaced))
    } else {
        Ok((format!("{}\n\n{}", text.trim(), table), TableUpdate::Appended))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_rows() -> Vec<TableRow> {
        let problem = Problem::parse_folder_name("0001-two-sum").unwrap();
        let meta = QuestionMeta::new("Easy", vec!["Array".into(), "Hash Table".into()]);
        vec![TableRow::new(&problem, &meta, "https://example.com/")]
    }

    #[test]
    fn row_for_site() {
        let rows = render_rows(&sample_rows(), BadgeStyle::SiteTable);
        assert!(rows.starts_with("| 1. Two Sum | [🔗](https://example.com/solutions/1/) | <span"));
        assert!(rows.ends_with(">Easy</span> | Array, Hash Table |"));
    }

    #[test]
    fn row_for_github() {
        let rows = render_rows(&sample_rows(), BadgeStyle::GithubTable);
        assert_eq!(
            rows,
            "| 1. Two Sum | [🔗](https://example.com/solutions/1/) | ![Easy](https://img.shields.io/badge/Difficulty-Easy-4c1.svg) | Array, Hash Table |"
        );
    }

    #[test]
    fn row_without_metadata_has_empty_cells() {
        let problem = Problem::parse_folder_name("0002-add-two-numbers").unwrap();
        let row = TableRow::new(&problem, &QuestionMeta::empty(), "https://example.com");
        assert_eq!(
            row.render(BadgeStyle::SiteTable),
            "| 2. Add Two Numbers | [🔗](https://example.com/solutions/2/) |  |  |"
        );
    }

    #[test]
    fn replaces_existing_table_and_keeps_surroundings() {
        let text = "# Solutions\n\nIntro text.\n\n\
                    | Problem | Solution | Difficulty | Tags |\n\
                    |---|---|---|---|\n\
                    | old | row | x | y |\n\
                    | another | row | x | y |\n\
                    \n## Footer\nManual notes | kept.\n";
        let table = render_table("| new | row | z | w |");

        let (updated, outcome) = replace_table(text, &table).unwrap();
        assert_eq!(outcome, TableUpdate::Replaced);
        assert_eq!(
            updated,
            "# Solutions\n\nIntro text.\n\n\
             | Problem | Solution | Difficulty | Tags |\n\
             |---------|---------|------------|------|\n\
             | new | row | z | w |\n\
             \n## Footer\nManual notes | kept.\n"
        );
    }

    #[test]
    fn header_may_have_trailing_spaces() {
        let text = "| Problem | Solution | Difficulty | Tags   |\n| --- | --- |\n| a | b |\n";
        let (updated, outcome) = replace_table(text, &render_table("| c | d |")).unwrap();
        assert_eq!(outcome, TableUpdate::Replaced);
        assert!(!updated.contains("| a | b |"));
    }

    #[test]
    fn table_at_end_without_newline() {
        let text = "Intro\n\n| Problem | Solution | Difficulty | Tags |\n|-|-|-|-|\n| a | b | c | d |";
        let (updated, _) = replace_table(text, &render_table("| e | f | g | h |")).unwrap();
        assert_eq!(
            updated,
            format!("Intro\n\n{TABLE_HEADER}\n{TABLE_SEPARATOR}\n| e | f | g | h |\n")
        );
    }

    #[test]
    fn appends_when_no_table() {
        let (updated, outcome) = replace_table("# Title\n\nSome text.\n\n", &render_table("| a |")).unwrap();
        assert_eq!(outcome, TableUpdate::Appended);
        assert_eq!(updated, format!("# Title\n\nSome text.\n\n{TABLE_HEADER}\n{TABLE_SEPARATOR}\n| a |\n"));
    }

    #[test]
    fn dollar_signs_in_rows_are_literal() {
        let text = format!("{}\n", render_table("| old |"));
        let (updated, _) = replace_table(&text, &render_table("| costs $1 and $name |")).unwrap();
        assert!(updated.contains("| costs $1 and $name |"));
    }

    #[test]
    fn crlf_documents_are_recognised() {
        let text = "Intro\r\n| Problem | Solution | Difficulty | Tags |\r\n|---|---|\r\n| a | b |\r\nOutro\r\n";
        let (updated, outcome) = replace_table(text, &render_table("| c | d |")).unwrap();
        assert_eq!(outcome, TableUpdate::Replaced);
        assert!(updated.ends_with("| c | d |\nOutro\r\n"));
    }

    proptest! {
        #[test]
        fn replacement_is_idempotent(
            before in "[a-zA-Z# \n]{0,40}",
            after in "[a-zA-Z# ]{1,40}",
            cells in proptest::collection::vec("[a-z0-9 ]{1,10}", 0..5),
        ) {
            let rows = cells.iter().map(|c| format!("| {c} |")).collect::<Vec<_>>().join("\n");
            let table = render_table(&rows);
            let doc = format!("{before}\n\n{TABLE_HEADER}\n|---|\n| stale |\n\n{after}\n");

            let (once, _) = replace_table(&doc, &table).unwrap();
            let (twice, outcome) = replace_table(&once, &table).unwrap();
            prop_assert_eq!(outcome, TableUpdate::Replaced);
            prop_assert_eq!(&once, &twice);
            let tail = format!("\n{after}\n");
            prop_assert!(once.ends_with(&tail));
        }
    }
}
