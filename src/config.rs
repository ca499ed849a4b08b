//! Run configuration, built once at startup and passed to every component.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use tracing::warn;

/// Default Ollama endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model requested from Ollama.
pub const DEFAULT_MODEL: &str = "llama2";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default cap on generated tokens (`num_predict`).
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Default timeout for a single Ollama request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable to override the default request timeout.
pub const TIMEOUT_ENV_VAR: &str = "OLLAMA_COMMIT_TIMEOUT";

/// How much diff context goes into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PromptProfile {
    /// 3 files, 1000 characters of diff each.
    #[default]
    Compact,
    /// 5 files, 2000 characters of diff each.
    Extended,
}

impl PromptProfile {
    /// Maximum number of files rendered with their diff.
    pub fn max_detailed_files(self) -> usize {
        match self {
            PromptProfile::Compact => 3,
            PromptProfile::Extended => 5,
        }
    }

    /// Maximum number of characters of diff text per file.
    pub fn max_diff_chars(self) -> usize {
        match self {
            PromptProfile::Compact => 1_000,
            PromptProfile::Extended => 2_000,
        }
    }
}

/// Settings shared by the scanner, prompt builder and inference client.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub repository: PathBuf,
    pub timeout: Duration,
    pub prompt_profile: PromptProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            repository: PathBuf::from("."),
            timeout: default_timeout(),
            prompt_profile: PromptProfile::default(),
        }
    }
}

/// Run-mode switches for the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowOptions {
    pub interactive: bool,
    pub skip_stage: bool,
    pub skip_push: bool,
    pub dry_run: bool,
    pub force: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            skip_stage: false,
            skip_push: false,
            dry_run: false,
            force: false,
        }
    }
}

impl WorkflowOptions {
    /// Whether approval prompts are answered "yes" without asking.
    pub fn auto_approve(&self) -> bool {
        !self.interactive || self.force || self.dry_run
    }
}

/// Get the request timeout when no `--timeout` flag was given.
///
/// Reads from OLLAMA_COMMIT_TIMEOUT if set, otherwise uses the default
/// of 30 seconds. Logs a warning if the variable holds an invalid value.
pub fn default_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        temp_env::with_var_unset(TIMEOUT_ENV_VAR, || {
            let config = Config::default();
            assert_eq!(config.endpoint, "http://localhost:11434");
            assert_eq!(config.model, "llama2");
            assert_eq!(config.temperature, 0.7);
            assert_eq!(config.max_tokens, 150);
            assert_eq!(config.repository, PathBuf::from("."));
            assert_eq!(config.timeout, Duration::from_secs(30));
            assert_eq!(config.prompt_profile, PromptProfile::Compact);
        });
    }

    #[test]
    fn test_prompt_profile_limits() {
        assert_eq!(PromptProfile::Compact.max_detailed_files(), 3);
        assert_eq!(PromptProfile::Compact.max_diff_chars(), 1_000);
        assert_eq!(PromptProfile::Extended.max_detailed_files(), 5);
        assert_eq!(PromptProfile::Extended.max_diff_chars(), 2_000);
    }

    #[test]
    fn test_default_timeout_from_env() {
        temp_env::with_var(TIMEOUT_ENV_VAR, Some("90"), || {
            assert_eq!(default_timeout(), Duration::from_secs(90));
        });
    }

    #[test]
    fn test_default_timeout_invalid_env_uses_default() {
        temp_env::with_var(TIMEOUT_ENV_VAR, Some("soon"), || {
            assert_eq!(default_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        });
    }

    #[test]
    fn test_default_timeout_empty_env_uses_default() {
        temp_env::with_var(TIMEOUT_ENV_VAR, Some(""), || {
            assert_eq!(default_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        });
    }

    #[test]
    fn test_auto_approve() {
        let interactive = WorkflowOptions::default();
        assert!(!interactive.auto_approve());

        let forced = WorkflowOptions {
            force: true,
            ..WorkflowOptions::default()
        };
        assert!(forced.auto_approve());

        let batch = WorkflowOptions {
            interactive: false,
            ..WorkflowOptions::default()
        };
        assert!(batch.auto_approve());

        let dry = WorkflowOptions {
            dry_run: true,
            ..WorkflowOptions::default()
        };
        assert!(dry.auto_approve());
    }
}
