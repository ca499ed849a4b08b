//! Turning raw model output into a commit suggestion.

use crate::commit::changes::ChangeSet;

/// Placeholder confidence attached to every suggestion.
///
/// Not derived from any model signal.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.8;

/// A generated commit message with the files it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitSuggestion {
    pub subject: String,
    pub body: String,
    pub confidence: f64,
    pub files_affected: Vec<String>,
}

impl CommitSuggestion {
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Shell command a user can paste to make the same commit by hand.
    pub fn commit_command(&self) -> String {
        let mut cmd = format!("git commit -m {}", shell_quote(&self.subject));
        if self.has_body() {
            cmd.push_str(&format!(" -m {}", shell_quote(&self.body)));
        }
        cmd
    }
}

/// POSIX single-quoting: nothing inside is expanded, `'` becomes `'\''`.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Split model output into subject and body.
///
/// The subject is the first non-blank line, trimmed. The body is everything
/// after it with leading blank lines dropped, trimmed. Never fails; empty
/// input gives an empty subject and body.
pub fn parse_suggestion(raw: &str, changes: &ChangeSet) -> CommitSuggestion {
    let mut lines = raw.lines().skip_while(|l| l.trim().is_empty());
    let subject = lines.next().map(str::trim).unwrap_or_default().to_string();

    let body = lines
        .skip_while(|l| l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    CommitSuggestion {
        subject,
        body,
        confidence: PLACEHOLDER_CONFIDENCE,
        files_affected: changes.paths(),
    }
}
