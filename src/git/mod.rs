//! Git operations through the system `git` binary.

pub mod cli;
pub mod status;

pub use cli::GitCli;
pub use status::{StatusEntry, parse_name_status};

use crate::error::GitError;

/// Everything the workflow needs from version control.
///
/// Implemented by [`GitCli`]; tests substitute an in-memory fake.
pub trait VersionControl {
    /// Fail with [`GitError::NotARepository`] unless the working directory is under git.
    fn ensure_repository(&self) -> Result<(), GitError>;

    /// Staged entries in the order git reports them.
    fn staged_status(&self) -> Result<Vec<StatusEntry>, GitError>;

    /// Staged unified diff for one entry.
    fn staged_diff(&self, entry: &StatusEntry) -> Result<String, GitError>;

    /// Tracked files with unstaged modifications.
    fn unstaged_files(&self) -> Result<Vec<String>, GitError>;

    /// Untracked files not covered by an ignore rule.
    fn untracked_files(&self) -> Result<Vec<String>, GitError>;

    /// `git add .`
    fn stage_all(&self) -> Result<(), GitError>;

    /// Commit the index with a subject and an optional body (empty = none).
    fn commit(&self, subject: &str, body: &str) -> Result<(), GitError>;

    fn push(&self) -> Result<(), GitError>;

    fn current_branch(&self) -> Result<String, GitError>;

    fn remotes(&self) -> Result<Vec<String>, GitError>;

    /// Abbreviated hash of HEAD.
    fn last_commit_hash(&self) -> Result<String, GitError>;
}

#[cfg(test)]
pub(crate) mod fake;
