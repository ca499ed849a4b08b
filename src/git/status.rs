//! Parsing of `git diff --cached --name-status -z` output.

use tracing::debug;

/// One record of the staged name-status listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Raw status field, e.g. `M`, `A` or `R100`.
    pub status: String,
    pub path: String,
    /// Source path for renames and copies.
    pub old_path: Option<String>,
}

impl StatusEntry {
    /// The single-letter status code (`?` when the field is empty).
    pub fn code(&self) -> char {
        self.status.chars().next().unwrap_or('?')
    }
}

/// Parse NUL-separated name-status output into entries, preserving git's order.
///
/// With `-z` paths are emitted verbatim (no quoting). Each record is a status
/// field followed by one path, or by two paths (`old`, `new`) for renames
/// and copies. A trailing record without its path is dropped.
pub fn parse_name_status(output: &str) -> Vec<StatusEntry> {
    let mut fields = output.split('\0');
    let mut entries = Vec::new();

    while let Some(status) = fields.next() {
        let status = status.trim();
        if status.is_empty() {
            continue;
        }

        let Some(first) = fields.next().filter(|p| !p.is_empty()) else {
            debug!("Skipping status record without a path: {:?}", status);
            break;
        };

        if status.starts_with(['R', 'C']) {
            let Some(second) = fields.next().filter(|p| !p.is_empty()) else {
                debug!("Skipping {} record without a target path: {:?}", status, first);
                break;
            };
            entries.push(StatusEntry {
                status: status.to_string(),
                path: second.to_string(),
                old_path: Some(first.to_string()),
            });
        } else {
            entries.push(StatusEntry {
                status: status.to_string(),
                path: first.to_string(),
                old_path: None,
            });
        }
    }

    entries
}
