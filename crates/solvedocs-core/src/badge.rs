//! Difficulty and tag badges.
//!
//! The static site renders inline HTML spans; GitHub READMEs cannot style
//! spans, so they get a shields.io image instead.

use crate::metadata::Difficulty;

/// Where a badge will be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Row in the site README table.
    SiteTable,
    /// Row in the GitHub README table.
    GithubTable,
    /// Header of a generated solution page.
    SitePage,
}

fn site_color(difficulty: &str) -> &'static str {
    match difficulty.parse::<Difficulty>() {
        Ok(Difficulty::Easy) => "#46c6c2",
        Ok(Difficulty::Medium) => "#fac31d",
        Ok(Difficulty::Hard) => "#f8615c",
        Err(_) => "#9E9E9E",
    }
}

fn github_color(difficulty: &str) -> &'static str {
    match difficulty.parse::<Difficulty>() {
        Ok(Difficulty::Easy) => "4c1",
        Ok(Difficulty::Medium) => "f9c851",
        Ok(Difficulty::Hard) => "e05d44",
        Err(_) => "9e9e9e",
    }
}

/// Render a difficulty badge. An empty difficulty renders nothing.
#[must_use]
pub fn difficulty_badge(difficulty: &str, style: BadgeStyle) -> String {
    if difficulty.is_empty() {
        return String::new();
    }

    match style {
        BadgeStyle::SiteTable => format!(
            r#"<span style="background-color:#ffffff1a; color:{}; padding:2px 6px; border-radius:6px;">{}</span>"#,
            site_color(difficulty),
            difficulty
        ),
        BadgeStyle::SitePage => format!(
            r#"<span style="background-color:#ffffff1a; color:{}; padding:2px 8px; border-radius:6px; font-size:0.85em;">{}</span>"#,
            site_color(difficulty),
            difficulty
        ),
        BadgeStyle::GithubTable => format!(
            "![{difficulty}](https://img.shields.io/badge/Difficulty-{difficulty}-{}.svg)",
            github_color(difficulty)
        ),
    }
}

/// Render a topic tag as a small grey badge for site pages.
#[must_use]
pub fn tag_badge(tag: &str) -> String {
    format!(
        r#"<span style="background-color:#607D8B; color:white; padding:2px 6px; border-radius:6px; font-size:0.75em; margin-right:0.2rem;">{tag}</span>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_difficulty_renders_nothing() {
        for style in [BadgeStyle::SiteTable, BadgeStyle::GithubTable, BadgeStyle::SitePage] {
            assert_eq!(difficulty_badge("", style), "");
        }
    }

    #[test]
    fn site_table_badge() {
        assert_eq!(
            difficulty_badge("Easy", BadgeStyle::SiteTable),
            r#"<span style="background-color:#ffffff1a; color:#46c6c2; padding:2px 6px; border-radius:6px;">Easy</span>"#
        );
    }

    #[test]
    fn site_page_badge_is_larger() {
        let badge = difficulty_badge("Hard", BadgeStyle::SitePage);
        assert!(badge.contains("color:#f8615c"));
        assert!(badge.contains("padding:2px 8px"));
        assert!(badge.contains("font-size:0.85em"));
    }

    #[test]
    fn github_badge_uses_shields() {
        assert_eq!(
            difficulty_badge("Medium", BadgeStyle::GithubTable),
            "![Medium](https://img.shields.io/badge/Difficulty-Medium-f9c851.svg)"
        );
    }

    #[test]
    fn unknown_difficulty_is_grey() {
        assert!(difficulty_badge("Extreme", BadgeStyle::SiteTable).contains("#9E9E9E"));
        assert!(difficulty_badge("Extreme", BadgeStyle::GithubTable).ends_with("-9e9e9e.svg)"));
    }

    #[test]
    fn tag_badge_wraps_name() {
        let badge = tag_badge("Dynamic Programming");
        assert!(badge.starts_with("<span style=\"background-color:#607D8B;"));
        assert!(badge.ends_with(">Dynamic Programming</span>"));
    }
}
