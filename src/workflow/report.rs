//! Console rendering for workflow progress.

use crate::commit::{ChangeKind, ChangeSet, CommitSuggestion};
use crate::llm::describe_model;

/// Files listed in the staging preview before collapsing the rest.
pub const PREVIEW_LIMIT: usize = 5;

/// Model named in the hint when nothing is installed.
const SUGGESTED_PULL: &str = "llama3.2";

fn kind_marker(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added => "[+]",
        ChangeKind::Modified => "[~]",
        ChangeKind::Deleted => "[-]",
        ChangeKind::Renamed => "[>]",
        ChangeKind::Copied => "[=]",
    }
}

/// Files that `git add .` would stage. Empty when there is nothing to add.
pub fn format_staging_preview(unstaged: &[String], untracked: &[String]) -> String {
    let entries: Vec<String> = unstaged
        .iter()
        .cloned()
        .chain(untracked.iter().map(|path| format!("{path} (untracked)")))
        .collect();

    if entries.is_empty() {
        return String::new();
    }

    let mut out = format!("Files to stage ({}):\n", entries.len());
    for entry in entries.iter().take(PREVIEW_LIMIT) {
        out.push_str(&format!("  {entry}\n"));
    }
    if entries.len() > PREVIEW_LIMIT {
        out.push_str(&format!(
            "  ... and {} more files\n",
            entries.len() - PREVIEW_LIMIT
        ));
    }
    out
}

/// Per-file lines with kind markers, then totals.
pub fn format_changes(changes: &ChangeSet) -> String {
    let mut out = format!("Staged changes ({} files):\n", changes.len());
    for file in changes.files() {
        out.push_str(&format!("  {} {}", kind_marker(file.kind), file.path));
        if let Some(old) = &file.old_path {
            out.push_str(&format!(" (from {old})"));
        }
        out.push_str(&format!(
            " +{} -{}\n",
            file.lines_added(),
            file.lines_removed()
        ));
    }

    out.push_str(&format!(
        "  Total: +{} -{}\n",
        changes.total_added(),
        changes.total_removed()
    ));

    let kinds: Vec<String> = changes
        .counts_by_kind()
        .into_iter()
        .map(|(kind, count)| format!("{count} {kind}"))
        .collect();
    if !kinds.is_empty() {
        out.push_str(&format!("  Summary: {}\n", kinds.join(", ")));
    }
    out
}

pub fn format_suggestion(suggestion: &CommitSuggestion) -> String {
    let mut out = String::from("Suggested commit message:\n");
    out.push_str(&format!("  {}\n", suggestion.subject));
    if suggestion.has_body() {
        out.push('\n');
        for line in suggestion.body.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out.push_str(&format!(
        "\n  Confidence: {:.0}%\n",
        suggestion.confidence * 100.0
    ));
    out.push_str(&format!(
        "  Files: {}\n",
        suggestion.files_affected.join(", ")
    ));
    out
}

/// Numbered model list with annotations.
pub fn format_model_list(models: &[String]) -> String {
    let mut out = String::new();
    for (i, model) in models.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, describe_model(model)));
    }
    out
}

/// Output of `--list-models`. An empty install gets a pull hint instead of numbers.
pub fn format_model_listing(models: &[String]) -> String {
    let mut out = String::from("Available Ollama models:\n");
    if models.is_empty() {
        out.push_str("  (none)\n");
        out.push_str(&format!("Pull a model first: ollama pull {SUGGESTED_PULL}\n"));
    } else {
        out.push_str(&format_model_list(models));
    }
    out
}
