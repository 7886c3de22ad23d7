//! # Problem Folders
//!
//! A solution folder is named `<number>-<slug>`, e.g. `0011-container-with-most-water`.
//! The slug doubles as the metadata lookup key; the number is shown without
//! its zero padding.

/// Lowercase Roman numerals that stay upper-cased in titles.
const ROMAN_NUMERALS: [&str; 20] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv", "xv",
    "xvi", "xvii", "xviii", "xix", "xx",
];

/// A problem identified from its folder name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Problem {
    /// Problem number with leading zeros dropped.
    pub number: u64,
    /// URL-safe identifier, also the API lookup key.
    pub slug: String,
    /// The folder name this problem was parsed from.
    pub folder: String,
}

impl Problem {
    /// Parse a folder name of the form `<digits>-<slug>`.
    ///
    /// Returns `None` when the name does not start with digits followed by a
    /// hyphen and a non-empty remainder, or when the number overflows.
    #[must_use]
    pub fn parse_folder_name(name: &str) -> Option<Self> {
        let digits_end = name
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(idx, _)| idx)?;
        if digits_end == 0 {
            return None;
        }

        let slug = name[digits_end..].strip_prefix('-')?;
        if slug.is_empty() {
            return None;
        }

        let number = name[..digits_end].parse().ok()?;
        Some(Self {
            number,
            slug: slug.to_string(),
            folder: name.to_string(),
        })
    }

    /// Human title built from the slug, e.g. `Two Sum`.
    #[must_use]
    pub fn title(&self) -> String {
        title_from_slug(&self.slug)
    }

    /// Title prefixed with the problem number, e.g. `1. Two Sum`.
    #[must_use]
    pub fn numbered_title(&self) -> String {
        format!("{}. {}", self.number, self.title())
    }
}

/// Capitalize a word, upper-casing it entirely if it is a Roman numeral.
#[must_use]
pub fn smart_capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    if ROMAN_NUMERALS.contains(&lower.as_str()) {
        return word.to_uppercase();
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a slug into a title: split on `-` and capitalize each word.
#[must_use]
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(smart_capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_strips_leading_zeros() {
        let problem = Problem::parse_folder_name("0001-two-sum").unwrap();
        assert_eq!(problem.number, 1);
        assert_eq!(problem.slug, "two-sum");
        assert_eq!(problem.folder, "0001-two-sum");
    }

    #[test]
    fn parse_rejects_names_without_number() {
        assert!(Problem::parse_folder_name("two-sum").is_none());
        assert!(Problem::parse_folder_name("-two-sum").is_none());
        assert!(Problem::parse_folder_name(".git").is_none());
    }

    #[test]
    fn parse_rejects_missing_slug() {
        assert!(Problem::parse_folder_name("0001").is_none());
        assert!(Problem::parse_folder_name("0001-").is_none());
        assert!(Problem::parse_folder_name("0001two-sum").is_none());
    }

    #[test]
    fn parse_rejects_overflowing_number() {
        assert!(Problem::parse_folder_name("99999999999999999999999-x").is_none());
    }

    #[test]
    fn all_zero_number_is_zero() {
        let problem = Problem::parse_folder_name("0000-warmup").unwrap();
        assert_eq!(problem.number, 0);
    }

    #[test]
    fn roman_numerals_are_uppercased() {
        assert_eq!(smart_capitalize("ii"), "II");
        assert_eq!(smart_capitalize("XiV"), "XIV");
        assert_eq!(title_from_slug("jump-game-ii"), "Jump Game II");
        assert_eq!(title_from_slug("house-robber-iii"), "House Robber III");
    }

    #[test]
    fn capitalize_lowercases_the_rest() {
        assert_eq!(smart_capitalize("hELLO"), "Hello");
        assert_eq!(smart_capitalize(""), "");
        assert_eq!(smart_capitalize("3sum"), "3sum");
    }

    #[test]
    fn numbered_title() {
        let problem = Problem::parse_folder_name("0011-container-with-most-water").unwrap();
        assert_eq!(problem.title(), "Container With Most Water");
        assert_eq!(problem.numbered_title(), "11. Container With Most Water");
    }

    #[test]
    fn double_hyphen_yields_empty_word() {
        assert_eq!(title_from_slug("a--b"), "A  B");
    }

    proptest! {
        #[test]
        fn parse_recovers_number_and_slug(number in 0u64..1_000_000, slug in "[a-z][a-z0-9-]{0,30}") {
            let folder = format!("{:04}-{}", number, slug);
            let problem = Problem::parse_folder_name(&folder).unwrap();
            prop_assert_eq!(problem.number, number);
            prop_assert_eq!(problem.slug, slug);
        }

        #[test]
        fn title_keeps_word_count(slug in "[a-z]{1,8}(-[a-z]{1,8}){0,5}") {
            let title = title_from_slug(&slug);
            prop_assert_eq!(title.split(' ').count(), slug.split('-').count());
        }
    }
}
