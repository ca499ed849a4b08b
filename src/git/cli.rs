//! [`VersionControl`] backed by the system `git` binary.
//!
//! All operations use `std::process::Command` to shell out to `git`, inheriting
//! the user's existing git config, SSH agent, and credential store.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::VersionControl;
use super::status::{StatusEntry, parse_name_status};
use crate::error::GitError;

/// Runs `git` commands inside one repository directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    /// Run a git command and return its stdout, or a descriptive error.
    fn run_git(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        debug!(repo = %self.repo.display(), ?args, "Running git {}", operation);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()
            .map_err(GitError::SpawnFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                command: operation.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn run_git_lines(&self, args: &[&str], operation: &str) -> Result<Vec<String>, GitError> {
        let stdout = self.run_git(args, operation)?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    /// Like `run_git_lines` for `-z` output, where paths are NUL terminated and unquoted.
    fn run_git_paths(&self, args: &[&str], operation: &str) -> Result<Vec<String>, GitError> {
        let stdout = self.run_git(args, operation)?;
        Ok(stdout
            .split('\0')
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect())
    }
}

impl VersionControl for GitCli {
    fn ensure_repository(&self) -> Result<(), GitError> {
        if which::which("git").is_err() {
            return Err(GitError::GitNotInstalled);
        }
        if !self.repo.is_dir() {
            return Err(GitError::NotARepository(self.repo.clone()));
        }

        match self.run_git(&["rev-parse", "--git-dir"], "rev-parse") {
            Ok(_) => Ok(()),
            Err(GitError::CommandFailed { .. }) => Err(GitError::NotARepository(self.repo.clone())),
            Err(e) => Err(e),
        }
    }

    fn staged_status(&self) -> Result<Vec<StatusEntry>, GitError> {
        let stdout = self.run_git(
            &["diff", "--cached", "--name-status", "-z"],
            "diff --name-status",
        )?;
        Ok(parse_name_status(&stdout))
    }

    fn staged_diff(&self, entry: &StatusEntry) -> Result<String, GitError> {
        let mut args = vec![
            "--literal-pathspecs",
            "diff",
            "--cached",
            "--no-color",
            "--no-ext-diff",
            "--",
        ];
        if let Some(old) = entry.old_path.as_deref() {
            args.push(old);
        }
        args.push(&entry.path);

        self.run_git(&args, "diff --cached")
    }

    fn unstaged_files(&self) -> Result<Vec<String>, GitError> {
        self.run_git_paths(&["diff", "--name-only", "-z"], "diff --name-only")
    }

    fn untracked_files(&self) -> Result<Vec<String>, GitError> {
        self.run_git_paths(
            &["ls-files", "--others", "--exclude-standard", "-z"],
            "ls-files",
        )
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.run_git(&["add", "."], "add").map(|_| ())
    }

    fn commit(&self, subject: &str, body: &str) -> Result<(), GitError> {
        let mut args = vec!["commit", "-m", subject];
        if !body.is_empty() {
            args.extend(["-m", body]);
        }

        let stdout = self.run_git(&args, "commit")?;
        debug!("git commit output: {}", stdout.trim());
        Ok(())
    }

    fn push(&self) -> Result<(), GitError> {
        self.run_git(&["push"], "push").map(|_| ())
    }

    fn current_branch(&self) -> Result<String, GitError> {
        self.run_git(&["branch", "--show-current"], "branch")
            .map(|s| s.trim().to_string())
    }

    fn remotes(&self) -> Result<Vec<String>, GitError> {
        self.run_git_lines(&["remote"], "remote")
    }

    fn last_commit_hash(&self) -> Result<String, GitError> {
        self.run_git(&["rev-parse", "--short", "HEAD"], "rev-parse HEAD")
            .map(|s| s.trim().to_string())
    }
}
