//! # solvedocs-core
//!
//! Pure rendering logic for a collection of coding-exercise solutions.
//!
//! Callers scan the solutions directory and fetch metadata; this crate turns
//! the results into text:
//!
//! ```text
//! "0001-two-sum" ──► Problem ──┬──► README table rows ──► replace_table()
//!                              ├──► solution page      ──► render_page()
//!                              └──► nav entry          ──► update_nav()
//! ```
//!
//! Nothing here touches the filesystem or the network.

pub mod badge;
pub mod cache;
pub mod error;
pub mod metadata;
pub mod nav;
pub mod page;
pub mod problem;
pub mod table;

pub use badge::{BadgeStyle, difficulty_badge, tag_badge};
pub use cache::{CacheStats, MetadataCache};
pub use error::{Error, Result};
pub use metadata::{Difficulty, QuestionMeta};
pub use nav::{NavEntry, update_nav};
pub use page::{Language, SolutionFile, SubmissionStats, parse_submission_stats, render_page};
pub use problem::{Problem, smart_capitalize, title_from_slug};
pub use table::{TableRow, TableUpdate, render_rows, render_table, replace_table};
