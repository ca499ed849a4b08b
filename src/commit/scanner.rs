//! Builds a [`ChangeSet`] from the staged index.

use tracing::{debug, warn};

use crate::commit::changes::{ChangeKind, ChangeSet, FileChange};
use crate::error::GitError;
use crate::git::VersionControl;

/// Reads staged statuses and per-file diffs from version control.
pub struct ChangeScanner<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
}

impl<'a, V: VersionControl + ?Sized> ChangeScanner<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        Self { vcs }
    }

    /// Scan staged changes.
    ///
    /// A file whose diff cannot be read is skipped with a warning; the rest
    /// of the scan continues. Zero staged files yields an empty set.
    pub fn scan(&self) -> Result<ChangeSet, GitError> {
        self.vcs.ensure_repository()?;

        let entries = self.vcs.staged_status()?;
        debug!("Found {} staged entries", entries.len());

        let mut files = Vec::with_capacity(entries.len());
        for entry in entries {
            let diff = match self.vcs.staged_diff(&entry) {
                Ok(diff) => diff,
                Err(e) => {
                    warn!("Failed to get diff for {}: {}", entry.path, e);
                    continue;
                }
            };

            let kind = ChangeKind::from_status_code(entry.code());
            files.push(FileChange::new(entry.path, kind, diff).with_old_path(entry.old_path));
        }

        Ok(ChangeSet::new(files))
    }
}
