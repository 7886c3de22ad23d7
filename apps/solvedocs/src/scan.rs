//! Solutions directory traversal.

use crate::error::{CliError, Result};
use solvedocs_core::{Language, Problem};
use std::fs;
use std::path::{Path, PathBuf};

/// A problem folder found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDir {
    pub problem: Problem,
    pub path: PathBuf,
}

/// List problem folders under `dir`, sorted by folder name.
///
/// Files and folders that are not named `<number>-<slug>` are skipped.
pub fn scan_problems(dir: &Path) -> Result<Vec<ProblemDir>> {
    if !dir.is_dir() {
        return Err(CliError::MissingFile(dir.to_path_buf()));
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(dir).map_err(CliError::io(dir))? {
        let entry = entry.map_err(CliError::io(dir))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => folders.push((name, path)),
            Err(name) => tracing::debug!(?name, "skipping non UTF-8 folder name"),
        }
    }
    folders.sort();

    let problems = folders
        .into_iter()
        .filter_map(|(name, path)| match Problem::parse_folder_name(&name) {
            Some(problem) => Some(ProblemDir { problem, path }),
            None => {
                tracing::debug!(folder = %name, "skipping folder without a problem number");
                None
            }
        })
        .collect();
    Ok(problems)
}

/// The problem statement kept in the folder's `README.md`, trimmed.
///
/// Returns an empty string when the folder has no README.
pub fn read_problem_readme(dir: &Path) -> Result<String> {
    let path = dir.join("README.md");
    if !path.is_file() {
        return Ok(String::new());
    }
    let text = fs::read_to_string(&path).map_err(CliError::io(&path))?;
    Ok(text.trim().to_string())
}

/// Solution files in a problem folder, sorted by file name.
pub fn solution_files(dir: &Path) -> Result<Vec<(Language, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(CliError::io(dir))? {
        let path = entry.map_err(CliError::io(dir))?.path();
        if !path.is_file() {
            continue;
        }
        let language = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension);
        if let Some(language) = language {
            files.push((language, path));
        }
    }
    files.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout() -> TempDir {
        let temp = tempfile::tempdir().unwrap();
        for folder in ["0002-add-two-numbers", "0001-two-sum", "notes", "0010-regular-expression-matching"] {
            fs::create_dir(temp.path().join(folder)).unwrap();
        }
        fs::write(temp.path().join("0003-not-a-folder"), "").unwrap();
        temp
    }

    #[test]
    fn problems_are_sorted_and_filtered() {
        let temp = layout();
        let problems = scan_problems(temp.path()).unwrap();
        let slugs: Vec<_> = problems.iter().map(|p| p.problem.slug.as_str()).collect();
        assert_eq!(slugs, vec!["two-sum", "add-two-numbers", "regular-expression-matching"]);
        assert_eq!(problems[2].problem.number, 10);
        assert!(problems[0].path.ends_with("0001-two-sum"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let result = scan_problems(&temp.path().join("Solutions"));
        assert!(matches!(result, Err(CliError::MissingFile(_))));
    }

    #[test]
    fn readme_is_trimmed_or_empty() {
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(read_problem_readme(temp.path()).unwrap(), "");

        fs::write(temp.path().join("README.md"), "\n\n# Two Sum\n\nText.\n\n").unwrap();
        assert_eq!(read_problem_readme(temp.path()).unwrap(), "# Two Sum\n\nText.");
    }

    #[test]
    fn only_known_languages_are_solutions() {
        let temp = tempfile::tempdir().unwrap();
        for file in ["solution.py", "README.md", "b.sql", "a.js", "notes.txt", "x.cs"] {
            fs::write(temp.path().join(file), "").unwrap();
        }
        fs::create_dir(temp.path().join("dir.py")).unwrap();

        let files = solution_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|(lang, path)| (*lang, path.file_name().unwrap().to_str().unwrap().to_string()))
            .collect();
        assert_eq!(
            names,
            vec![
                (Language::JavaScript, "a.js".to_string()),
                (Language::Sql, "b.sql".to_string()),
                (Language::Python, "solution.py".to_string()),
                (Language::CSharp, "x.cs".to_string()),
            ]
        );
    }
}
