//! # Solution Pages
//!
//! One Markdown page per problem for the static site: tag and difficulty
//! badges, the problem statement, then a content tab per solution file.

use crate::badge::{BadgeStyle, difficulty_badge, tag_badge};
use crate::error::Result;
use crate::metadata::QuestionMeta;
use crate::problem::Problem;
use regex::Regex;

/// Commit subjects written by the submission sync tool start with this.
pub const SYNC_PREFIX: &str = "[LeetCode Sync]";

const STATS_PATTERN: &str =
    r"Runtime\s*-\s*(.*?)\s*\((.*?)\),\s*Memory\s*-\s*(.*?)\s*\((.*?)\)";

// =============================================================================
// LANGUAGES
// =============================================================================

/// Languages that count as solution files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    Python,
    JavaScript,
    CSharp,
    Sql,
}

impl Language {
    /// Map a file extension (without the dot) to a language.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "py" => Some(Self::Python),
            "js" => Some(Self::JavaScript),
            "cs" => Some(Self::CSharp),
            "sql" => Some(Self::Sql),
            _ => None,
        }
    }

    /// File extension, also used as the code fence language.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::JavaScript => "js",
            Self::CSharp => "cs",
            Self::Sql => "sql",
        }
    }

    /// Tab label shown on the site.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python3",
            Self::JavaScript => "JS",
            Self::CSharp => "C#",
            Self::Sql => "SQL",
        }
    }
}

// =============================================================================
// SUBMISSION STATS
// =============================================================================

/// Runtime and memory figures recorded in a sync commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStats {
    pub runtime: String,
    pub runtime_percentile: String,
    pub memory: String,
    pub memory_percentile: String,
}

/// Extract submission stats from the subject of the commit that added a
/// solution file.
///
/// Only subjects starting with [`SYNC_PREFIX`] are considered.
pub fn parse_submission_stats(subject: &str) -> Result<Option<SubmissionStats>> {
    if !subject.starts_with(SYNC_PREFIX) {
        return Ok(None);
    }

    let pattern = Regex::new(STATS_PATTERN)?;
    Ok(pattern.captures(subject).map(|caps| SubmissionStats {
        runtime: caps[1].to_string(),
        runtime_percentile: caps[2].to_string(),
        memory: caps[3].to_string(),
        memory_percentile: caps[4].to_string(),
    }))
}

// =============================================================================
// RENDERING
// =============================================================================

/// A solution file ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionFile {
    pub language: Language,
    pub code: String,
    pub stats: Option<SubmissionStats>,
}

impl SolutionFile {
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            stats: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Option<SubmissionStats>) -> Self {
        self.stats = stats;
        self
    }
}

/// Name of the generated page for a problem.
#[must_use]
pub fn page_file_name(problem: &Problem) -> String {
    format!("{}.md", problem.number)
}

fn indent(code: &str) -> String {
    code.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("\t{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one content tab holding a solution's code and stats.
#[must_use]
pub fn render_solution_tab(file: &SolutionFile) -> String {
    let mut tab = format!(
        "=== \"{}\"\n\n\t```{} linenums=\"1\"\n{}\n\t```\n",
        file.language.display_name(),
        file.language.extension(),
        indent(file.code.trim_end())
    );

    if let Some(stats) = &file.stats {
        tab.push_str(&format!(
            "\n\n\t**Submission Stats:**\n\n\t- Runtime: {} ({})\n\t- Memory: {} ({})\n",
            stats.runtime, stats.runtime_percentile, stats.memory, stats.memory_percentile
        ));
    }

    tab
}

/// Render the full page for a problem.
#[must_use]
pub fn render_page(
    problem: &Problem,
    meta: &QuestionMeta,
    readme: &str,
    solutions: &[SolutionFile],
) -> String {
    let tags = meta
        .tags
        .iter()
        .map(|tag| tag_badge(tag))
        .collect::<Vec<_>>()
        .join(" ");

    let mut page = format!(
        "{}\n## Problem - {}\n{}\n\n",
        tags,
        problem.title(),
        difficulty_badge(&meta.difficulty, BadgeStyle::SitePage)
    );

    let readme = readme.trim();
    if !readme.is_empty() {
        page.push_str(readme);
        page.push_str("\n\n");
    }

    page.push_str("## Solutions\n\n");
    page.push_str(
        &solutions
            .iter()
            .map(render_solution_tab)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    page
}
