use std::path::PathBuf;
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::change::{Diff, DiffScope, ShortHash};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    async fn run(&self, args: &[&str]) -> AppResult<Output> {
        debug!(?args, "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))
    }

    async fn stdout(&self, args: &[&str]) -> AppResult<String> {
        let output = self.run(args).await?;
        if !output.status.success() {
            return Err(AppError::VersionControl(format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn has_changes(&self) -> AppResult<bool> {
        let status = self.stdout(&["status", "-s"]).await?;
        Ok(!status.trim().is_empty())
    }

    async fn diff(&self, scope: DiffScope) -> AppResult<Diff> {
        let text = self.stdout(scope.diff_args()).await?;
        Ok(Diff::new(text))
    }

    async fn commit(&self, message: &str, scope: DiffScope) -> AppResult<()> {
        let mut args = vec!["commit"];
        if scope == DiffScope::All {
            args.push("-a");
        }
        args.extend(["-m", message]);

        let output = self.run(&args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let detail = if stderr.is_empty() { stdout } else { stderr };
            return Err(AppError::CommitFailed(format!(
                "git commit exited with {}: {detail}",
                output.status
            )));
        }
        Ok(())
    }

    async fn head_short_hash(&self) -> AppResult<ShortHash> {
        let hash = self
            .stdout(&["--no-pager", "log", "-1", "--pretty=format:%h"])
            .await?;
        let hash = hash.trim();
        if hash.is_empty() {
            return Err(AppError::VersionControl(
                "git log returned no commit".to_string(),
            ));
        }
        Ok(ShortHash(hash.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn git_available() -> bool {
        std::process::Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = std::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {args:?} failed");
    }

    fn init_repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        git(dir.path(), &["config", "user.name", "Test User"]);
        git(dir.path(), &["config", "user.email", "test@example.com"]);
        git(dir.path(), &["config", "commit.gpgsign", "false"]);
        git(dir.path(), &["config", "core.hooksPath", "/dev/null"]);
        fs::write(dir.path().join("README.md"), "hello\n").unwrap();
        git(dir.path(), &["add", "README.md"]);
        git(dir.path(), &["commit", "-q", "-m", "Initial commit"]);
        dir
    }

    #[tokio::test]
    async fn clean_tree_reports_no_changes() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        let git_cli = GitCli::new(repo.path().to_path_buf());
        assert!(!git_cli.has_changes().await.unwrap());
    }

    #[tokio::test]
    async fn staged_scope_ignores_unstaged_edits() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        fs::write(repo.path().join("README.md"), "hello\nworld\n").unwrap();
        let git_cli = GitCli::new(repo.path().to_path_buf());

        assert!(git_cli.has_changes().await.unwrap());
        assert!(git_cli.diff(DiffScope::Staged).await.unwrap().is_empty());
        let all = git_cli.diff(DiffScope::All).await.unwrap();
        assert!(all.text.contains("+world"));
    }

    #[tokio::test]
    async fn commits_all_changes_and_reads_short_hash() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        fs::write(repo.path().join("README.md"), "changed\n").unwrap();
        let git_cli = GitCli::new(repo.path().to_path_buf());

        git_cli
            .commit("Update readme", DiffScope::All)
            .await
            .unwrap();
        let hash = git_cli.head_short_hash().await.unwrap();
        assert!(hash.as_str().len() >= 4);
        assert!(!git_cli.has_changes().await.unwrap());
    }

    #[tokio::test]
    async fn empty_message_is_a_commit_failure() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        fs::write(repo.path().join("README.md"), "changed\n").unwrap();
        let git_cli = GitCli::new(repo.path().to_path_buf());

        let err = git_cli.commit("", DiffScope::All).await.unwrap_err();
        assert!(matches!(err, AppError::CommitFailed(_)));
    }
}
