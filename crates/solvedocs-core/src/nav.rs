//! Site navigation in `mkdocs.yml`.
//!
//! Only the `nav` key is rewritten; the rest of the configuration keeps its
//! keys and their order.

use crate::error::{Error, Result};
use crate::page::page_file_name;
use crate::problem::Problem;
use serde_yaml::{Mapping, Value};

/// Title of the landing page entry.
pub const OVERVIEW_TITLE: &str = "Overview";

/// Title of the section holding every solution page.
pub const SOLUTIONS_TITLE: &str = "Solutions";

/// One page in the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    /// Path relative to the docs directory.
    pub path: String,
}

impl NavEntry {
    /// Entry for a problem page stored under `pages_dir`.
    #[must_use]
    pub fn for_problem(problem: &Problem, pages_dir: &str) -> Self {
        Self {
            title: problem.numbered_title(),
            path: format!("{}/{}", pages_dir.trim_end_matches('/'), page_file_name(problem)),
        }
    }

    fn to_value(&self) -> Value {
        single_entry(&self.title, Value::String(self.path.clone()))
    }
}

fn single_entry(key: &str, value: Value) -> Value {
    let mut map = Mapping::new();
    map.insert(Value::String(key.to_string()), value);
    Value::Mapping(map)
}

/// Build the `nav` value: the overview page, then a section of problem pages.
#[must_use]
pub fn nav_value(entries: &[NavEntry], overview_path: &str) -> Value {
    let pages = entries.iter().map(NavEntry::to_value).collect();
    Value::Sequence(vec![
        single_entry(OVERVIEW_TITLE, Value::String(overview_path.to_string())),
        single_entry(SOLUTIONS_TITLE, Value::Sequence(pages)),
    ])
}

/// Replace the `nav` key of a mkdocs configuration document.
///
/// The document must be a mapping; an empty file is rejected like any other
/// non-mapping document.
pub fn update_nav(yaml: &str, entries: &[NavEntry]) -> Result<String> {
    let parsed = if yaml.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str::<Value>(yaml)?
    };
    let mut config = match parsed {
        Value::Mapping(map) => map,
        other => {
            return Err(Error::InvalidDocument(format!(
                "expected a mapping at the top of the site config, found {}",
                kind(&other)
            )));
        }
    };

    config.insert(Value::String("nav".to_string()), nav_value(entries, "README.md"));
    Ok(serde_yaml::to_string(&Value::Mapping(config))?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
