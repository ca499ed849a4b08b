//! Prompt construction for model-generated commit messages.

use std::borrow::Cow;

use crate::commit::changes::ChangeSet;
use crate::commit::classify::classify_path;
use crate::config::PromptProfile;

/// Appended to a diff that was cut at the character cap.
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

const INSTRUCTIONS: &str = r#"## Instructions
Write a Git commit message for the changes above, following the Conventional Commits style.

Subject line rules:
- Format: `type: description` or `type(scope): description`
- Type: one of feat, fix, docs, style, refactor, perf, test, build, ci, chore
- Imperative mood ("add", "fix", "remove"), lowercase after the colon, no period at the end
- Keep the subject under 50 characters

Body (optional):
- Leave one blank line after the subject
- Explain what changed and why, not how
- Wrap lines at 72 characters

GOOD: `feat(auth): add token refresh`
BAD:  `Added some changes to the authentication module files.`
GOOD: `fix: handle empty config file`
BAD:  `fix: Fixed bug`

Respond with only the commit message. No explanations, no quotes, no markdown fences."#;

/// Builds the summary and the bounded-size prompt for a [`ChangeSet`].
///
/// Output depends only on the change set and the profile, so identical
/// inputs produce byte-identical prompts.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    max_files: usize,
    max_diff_chars: usize,
}

impl PromptBuilder {
    pub fn new(profile: PromptProfile) -> Self {
        Self {
            max_files: profile.max_detailed_files(),
            max_diff_chars: profile.max_diff_chars(),
        }
    }

    /// Totals and per-kind file counts.
    pub fn build_summary(&self, changes: &ChangeSet) -> String {
        let mut out = String::new();
        out.push_str(&format!("Files changed: {}\n", changes.len()));
        out.push_str(&format!(
            "Lines: +{} -{}\n",
            changes.total_added(),
            changes.total_removed()
        ));

        let by_kind: Vec<String> = changes
            .counts_by_kind()
            .into_iter()
            .map(|(kind, count)| format!("{count} {kind}"))
            .collect();
        if !by_kind.is_empty() {
            out.push_str(&format!("By type: {}\n", by_kind.join(", ")));
        }

        out
    }

    /// Full prompt text. The caller must not pass an empty change set.
    pub fn build_prompt(&self, changes: &ChangeSet) -> String {
        let mut out = String::from(
            "You are an expert software engineer writing a Git commit message for staged changes.\n\n",
        );

        out.push_str("## Summary\n");
        out.push_str(&self.build_summary(changes));

        out.push_str("\n## Changed Files\n");
        for file in changes.files().iter().take(self.max_files) {
            out.push_str(&format!("\n### {} ({}", file.path, file.kind));
            if let Some(old) = &file.old_path {
                out.push_str(&format!(" from {old}"));
            }
            out.push_str(&format!(
                ", {}, +{} -{})\n",
                classify_path(&file.path),
                file.lines_added(),
                file.lines_removed()
            ));

            if file.diff_text().trim().is_empty() {
                out.push_str("(binary or empty diff)\n");
            } else {
                let diff = truncate_diff(file.diff_text(), self.max_diff_chars);
                out.push_str(&format!("```diff\n{}\n```\n", diff.trim_end_matches('\n')));
            }
        }

        if changes.len() > self.max_files {
            out.push_str(&format!(
                "\n... and {} more files\n",
                changes.len() - self.max_files
            ));
        }

        out.push('\n');
        out.push_str(INSTRUCTIONS);
        out
    }
}

/// Cut `diff` to `max_chars` characters and append [`TRUNCATION_MARKER`].
/// Shorter input is returned unchanged.
pub fn truncate_diff(diff: &str, max_chars: usize) -> Cow<'_, str> {
    match diff.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(format!("{}{}", &diff[..byte_idx], TRUNCATION_MARKER)),
        None => Cow::Borrowed(diff),
    }
}
