//! # Question Metadata
//!
//! What the API knows about a problem: its difficulty and topic tags.
//! The same shape is stored per slug in the cache file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty levels as spelled by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The API spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty: {other:?}")),
        }
    }
}

/// Difficulty and topic tags for one problem.
///
/// `difficulty` is kept as the raw string so the cache file mirrors what the
/// API returned, including values this crate does not recognise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMeta {
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuestionMeta {
    /// Create metadata from a difficulty string and tag names.
    pub fn new(difficulty: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            difficulty: difficulty.into(),
            tags,
        }
    }

    /// Placeholder used when no metadata could be obtained.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The parsed difficulty, if it is one of the known levels.
    #[must_use]
    pub fn level(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    /// True when neither difficulty nor tags are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_empty() && self.tags.is_empty()
    }
}
