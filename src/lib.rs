//! ollama-commit - A CLI tool that writes Git commit messages with a local Ollama model.
//!
//! # Overview
//!
//! ollama-commit stages the working tree, scans the staged diff, asks a model
//! served by Ollama for a conventional-commit message, and then commits and
//! pushes after confirmation.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod workflow;

// Re-export commonly used types
pub use commit::{ChangeKind, ChangeSet, CommitSuggestion, FileChange, PromptBuilder};
pub use config::{Config, PromptProfile, WorkflowOptions};
pub use error::{ErrorKind, GitError, InferenceError, WorkflowError};
pub use git::{GitCli, VersionControl};
pub use llm::{InferenceBackend, OllamaClient};
pub use workflow::{Outcome, PushOutcome, Workflow, WorkflowState};
