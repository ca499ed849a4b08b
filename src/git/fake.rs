//! In-memory [`VersionControl`] for unit tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::PathBuf;

use super::{StatusEntry, VersionControl};
use crate::error::GitError;

/// In-memory [`VersionControl`] used by scanner and workflow tests.
#[derive(Default)]
pub(crate) struct FakeGit {
    pub is_repo: bool,
    pub status: Vec<(&'static str, &'static str, &'static str)>,
    pub failing_diffs: HashSet<&'static str>,
    pub status_fails: bool,
    pub unstaged_fails: bool,
    pub remotes: Vec<String>,
    pub remotes_fail: bool,
    pub commit_fails: bool,
    pub push_fails: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeGit {
    pub fn repo() -> Self {
        Self {
            is_repo: true,
            ..Self::default()
        }
    }

    /// Stage a file: status code, path, diff text.
    pub fn staged(mut self, code: &'static str, path: &'static str, diff: &'static str) -> Self {
        self.status.push((code, path, diff));
        self
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == name)
    }

    fn record(&self, name: &str) {
        self.calls.borrow_mut().push(name.to_string());
    }

    fn failure(command: &str) -> GitError {
        GitError::CommandFailed {
            command: command.to_string(),
            stderr: "simulated failure".to_string(),
        }
    }
}

impl VersionControl for FakeGit {
    fn ensure_repository(&self) -> Result<(), GitError> {
        if self.is_repo {
            Ok(())
        } else {
            Err(GitError::NotARepository(PathBuf::from("/nowhere")))
        }
    }

    fn staged_status(&self) -> Result<Vec<StatusEntry>, GitError> {
        if self.status_fails {
            return Err(Self::failure("diff --name-status"));
        }
        Ok(self
            .status
            .iter()
            .map(|(code, path, _)| StatusEntry {
                status: (*code).to_string(),
                path: (*path).to_string(),
                old_path: None,
            })
            .collect())
    }

    fn staged_diff(&self, entry: &StatusEntry) -> Result<String, GitError> {
        if self.failing_diffs.contains(entry.path.as_str()) {
            return Err(Self::failure("diff --cached"));
        }
        Ok(self
            .status
            .iter()
            .find(|(_, path, _)| *path == entry.path)
            .map(|(_, _, diff)| (*diff).to_string())
            .unwrap_or_default())
    }

    fn unstaged_files(&self) -> Result<Vec<String>, GitError> {
        if self.unstaged_fails {
            return Err(Self::failure("diff --name-only"));
        }
        Ok(vec!["README.md".to_string()])
    }

    fn untracked_files(&self) -> Result<Vec<String>, GitError> {
        Ok(Vec::new())
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.record("add");
        Ok(())
    }

    fn commit(&self, subject: &str, body: &str) -> Result<(), GitError> {
        self.record("commit");
        self.record(&format!("commit:{subject}|{body}"));
        if self.commit_fails {
            return Err(Self::failure("commit"));
        }
        Ok(())
    }

    fn push(&self) -> Result<(), GitError> {
        self.record("push");
        if self.push_fails {
            return Err(Self::failure("push"));
        }
        Ok(())
    }

    fn current_branch(&self) -> Result<String, GitError> {
        Ok("main".to_string())
    }

    fn remotes(&self) -> Result<Vec<String>, GitError> {
        if self.remotes_fail {
            return Err(Self::failure("remote"));
        }
        Ok(self.remotes.clone())
    }

    fn last_commit_hash(&self) -> Result<String, GitError> {
        Ok("abc1234".to_string())
    }
}
