//! Staged-change scanning, prompt construction and suggestion parsing.

pub mod changes;
pub mod classify;
pub mod prompt;
pub mod scanner;
pub mod suggestion;

pub use changes::{ChangeKind, ChangeSet, FileChange, count_diff_lines};
pub use classify::{FileCategory, classify_path};
pub use prompt::{PromptBuilder, TRUNCATION_MARKER, truncate_diff};
pub use scanner::ChangeScanner;
pub use suggestion::{CommitSuggestion, PLACEHOLDER_CONFIDENCE, parse_suggestion};
