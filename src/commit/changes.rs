//! Staged change records.

use std::fmt;

/// How a staged file changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
}

impl ChangeKind {
    /// All kinds in reporting order.
    pub const ALL: [ChangeKind; 5] = [
        ChangeKind::Added,
        ChangeKind::Modified,
        ChangeKind::Deleted,
        ChangeKind::Renamed,
        ChangeKind::Copied,
    ];

    /// Map a git status letter to a kind. Unknown letters count as modified.
    pub fn from_status_code(code: char) -> Self {
        match code {
            'A' => ChangeKind::Added,
            'M' => ChangeKind::Modified,
            'D' => ChangeKind::Deleted,
            'R' => ChangeKind::Renamed,
            'C' => ChangeKind::Copied,
            _ => ChangeKind::Modified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Copied => "copied",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One staged path with its diff.
///
/// Line counts are derived from `diff_text` on construction and never set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: String,
    pub kind: ChangeKind,
    pub old_path: Option<String>,
    diff_text: String,
    lines_added: usize,
    lines_removed: usize,
}

impl FileChange {
    pub fn new(path: impl Into<String>, kind: ChangeKind, diff_text: impl Into<String>) -> Self {
        let diff_text = diff_text.into();
        let (lines_added, lines_removed) = count_diff_lines(&diff_text);
        Self {
            path: path.into(),
            kind,
            old_path: None,
            diff_text,
            lines_added,
            lines_removed,
        }
    }

    pub fn with_old_path(mut self, old_path: Option<String>) -> Self {
        self.old_path = old_path;
        self
    }

    pub fn diff_text(&self) -> &str {
        &self.diff_text
    }

    pub fn lines_added(&self) -> usize {
        self.lines_added
    }

    pub fn lines_removed(&self) -> usize {
        self.lines_removed
    }
}

/// Staged files in the order git listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<FileChange>,
}

impl ChangeSet {
    pub fn new(files: Vec<FileChange>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[FileChange] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }

    pub fn total_added(&self) -> usize {
        self.files.iter().map(FileChange::lines_added).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.files.iter().map(FileChange::lines_removed).sum()
    }

    /// Non-zero per-kind file counts in [`ChangeKind::ALL`] order.
    pub fn counts_by_kind(&self) -> Vec<(ChangeKind, usize)> {
        ChangeKind::ALL
            .iter()
            .map(|kind| (*kind, self.files.iter().filter(|f| f.kind == *kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl FromIterator<FileChange> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = FileChange>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Count added and removed lines in a unified diff, ignoring `+++`/`---` headers.
pub fn count_diff_lines(diff: &str) -> (usize, usize) {
    let mut added = 0;
    let mut removed = 0;

    for line in diff.lines() {
        if line.starts_with('+') && !line.starts_with("+++") {
            added += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            removed += 1;
        }
    }

    (added, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DIFF: &str = "--- a/file.txt
+++ b/file.txt
@@ -1,3 +1,4 @@
 line1
+added line
 line2
-removed line
 line3
+another added line";

    #[test]
    fn test_count_diff_lines() {
        assert_eq!(count_diff_lines(SAMPLE_DIFF), (2, 1));
    }

    #[test]
    fn test_count_diff_lines_is_idempotent() {
        let first = count_diff_lines(SAMPLE_DIFF);
        let second = count_diff_lines(SAMPLE_DIFF);
        assert_eq!(first, second);

        let change = FileChange::new("file.txt", ChangeKind::Modified, SAMPLE_DIFF);
        assert_eq!(
            (change.lines_added(), change.lines_removed()),
            count_diff_lines(change.diff_text())
        );
    }

    #[test]
    fn test_count_diff_lines_empty() {
        assert_eq!(count_diff_lines(""), (0, 0));
    }

    #[test]
    fn test_count_diff_lines_binary_notice() {
        let diff = "diff --git a/logo.png b/logo.png\nBinary files a/logo.png and b/logo.png differ\n";
        assert_eq!(count_diff_lines(diff), (0, 0));
    }

    #[test]
    fn test_from_status_code() {
        assert_eq!(ChangeKind::from_status_code('A'), ChangeKind::Added);
        assert_eq!(ChangeKind::from_status_code('M'), ChangeKind::Modified);
        assert_eq!(ChangeKind::from_status_code('D'), ChangeKind::Deleted);
        assert_eq!(ChangeKind::from_status_code('R'), ChangeKind::Renamed);
        assert_eq!(ChangeKind::from_status_code('C'), ChangeKind::Copied);
        assert_eq!(ChangeKind::from_status_code('?'), ChangeKind::Modified);
        assert_eq!(ChangeKind::from_status_code('T'), ChangeKind::Modified);
        assert_eq!(ChangeKind::from_status_code('U'), ChangeKind::Modified);
    }

    #[test]
    fn test_change_kind_display() {
        assert_eq!(ChangeKind::Added.to_string(), "added");
        assert_eq!(ChangeKind::Copied.to_string(), "copied");
    }

    #[test]
    fn test_change_set_totals_and_kinds() {
        let set: ChangeSet = vec![
            FileChange::new("a.go", ChangeKind::Modified, "+x\n-y\n"),
            FileChange::new("b.txt", ChangeKind::Added, "+1\n+2\n+3\n"),
            FileChange::new("c.rs", ChangeKind::Modified, ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        assert_eq!(set.total_added(), 4);
        assert_eq!(set.total_removed(), 1);
        assert_eq!(
            set.counts_by_kind(),
            vec![(ChangeKind::Added, 1), (ChangeKind::Modified, 2)]
        );
        assert_eq!(set.paths(), vec!["a.go", "b.txt", "c.rs"]);
    }

    #[test]
    fn test_empty_change_set() {
        let set = ChangeSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total_added(), 0);
        assert!(set.counts_by_kind().is_empty());
    }
}
