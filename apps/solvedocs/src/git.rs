//! Commit lookup for submission stats.

use std::path::Path;
use tokio::process::Command;

/// Pathspec for `file` as seen from inside `repo`.
///
/// `git -C` changes directory before reading the pathspec, so a file already
/// joined onto a relative `repo` has to lose that prefix again.
fn pathspec<'a>(repo: &Path, file: &'a Path) -> &'a Path {
    file.strip_prefix(repo).unwrap_or(file)
}

/// Subject of the commit that added `file`, as reported by `git log`.
///
/// `file` may be given relative to the working directory (as `repo.join(..)`
/// produces) or relative to `repo`. Returns `None` when git is unavailable,
/// `repo` is not a repository, or the file has no history.
pub async fn first_added_subject(repo: &Path, file: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["log", "--diff-filter=A", "--pretty=format:%s", "--"])
        .arg(pathspec(repo, file))
        .output()
        .await;

    let output = match output {
        Ok(output) => output,
        Err(error) => {
            tracing::debug!(%error, "git unavailable");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!(
            file = %file.display(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "git log failed"
        );
        return None;
    }

    let subject = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!subject.is_empty()).then_some(subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command as StdCommand;

    fn git(repo: &Path, args: &[&str]) -> bool {
        StdCommand::new("git")
            .arg("-C")
            .arg(repo)
            .args(args)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Create a repository with one committed file, or `None` without git.
    fn repo_with_commit(message: &str) -> Option<tempfile::TempDir> {
        let temp = tempfile::tempdir().unwrap();
        let repo = temp.path();
        if !git(repo, &["init", "-q"]) {
            return None;
        }
        fs::write(repo.join("solution.py"), "x = 1\n").unwrap();
        let committed = git(repo, &["config", "user.name", "Test User"])
            && git(repo, &["config", "user.email", "test@example.com"])
            && git(repo, &["config", "commit.gpgsign", "false"])
            && git(repo, &["add", "solution.py"])
            && git(repo, &["commit", "-q", "-m", message]);
        committed.then_some(temp)
    }

    #[tokio::test]
    async fn subject_of_adding_commit() {
        let subject = "[LeetCode Sync] Runtime - 3 ms (90.00%), Memory - 16.4 MB (70.00%)";
        let Some(temp) = repo_with_commit(subject) else {
            return;
        };
        let file = temp.path().join("solution.py");

        assert_eq!(
            first_added_subject(temp.path(), &file).await.as_deref(),
            Some(subject)
        );
    }

    #[test]
    fn pathspec_drops_repo_prefix() {
        assert_eq!(
            pathspec(Path::new("repo"), Path::new("repo/Solutions/0001-two-sum/s.py")),
            Path::new("Solutions/0001-two-sum/s.py")
        );
        assert_eq!(
            pathspec(Path::new("/abs/repo"), Path::new("/abs/repo/s.py")),
            Path::new("s.py")
        );
        assert_eq!(
            pathspec(Path::new("."), Path::new("./Solutions/s.py")),
            Path::new("Solutions/s.py")
        );
        assert_eq!(pathspec(Path::new("repo"), Path::new("s.py")), Path::new("s.py"));
    }

    #[tokio::test]
    async fn repo_relative_file_path() {
        let subject = "[LeetCode Sync] Runtime - 1 ms (99%), Memory - 2 MB (50%)";
        let Some(temp) = repo_with_commit(subject) else {
            return;
        };

        assert_eq!(
            first_added_subject(temp.path(), Path::new("solution.py")).await.as_deref(),
            Some(subject)
        );
    }

    #[tokio::test]
    async fn untracked_file_has_no_subject() {
        let Some(temp) = repo_with_commit("initial") else {
            return;
        };
        let file = temp.path().join("new.py");
        fs::write(&file, "y = 2\n").unwrap();

        assert_eq!(first_added_subject(temp.path(), &file).await, None);
    }

    #[tokio::test]
    async fn outside_a_repository() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("solution.py");
        fs::write(&file, "x = 1\n").unwrap();

        assert_eq!(first_added_subject(temp.path(), &file).await, None);
    }
}
