//! Error types for ollama-commit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the `git` subprocess adapter.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository: {}. Run ollama-commit from within a git repository.", .0.display())]
    NotARepository(PathBuf),

    #[error("git executable not found in PATH")]
    GitNotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Errors from the Ollama inference backend.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error(
        "Ollama is not running or not accessible at {endpoint}. Start it with: ollama serve"
    )]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Ollama request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Ollama API returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Ollama returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl InferenceError {
    /// Whether the backend could not serve the request at all.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, InferenceError::MalformedResponse(_))
    }
}

/// Coarse classification that picks the remediation hint shown on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotARepository,
    BackendUnavailable,
    MalformedResponse,
    Interaction,
}

impl ErrorKind {
    /// What the user can try next, if anything obvious.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            ErrorKind::NotARepository => {
                Some("run inside a Git repository or pass --repo <path>")
            }
            ErrorKind::BackendUnavailable => Some(
                "check that Ollama is running (ollama serve) and a model is pulled (ollama pull llama3.2)",
            ),
            ErrorKind::MalformedResponse => {
                Some("try again or pick another model with --model")
            }
            ErrorKind::Interaction => None,
        }
    }
}

/// Errors that abort a workflow run.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("No Ollama models available. Pull a model first: ollama pull llama3.2")]
    NoModelsAvailable,

    #[error("Prompt failed: {0}")]
    Interaction(String),
}

impl WorkflowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkflowError::Git(GitError::NotARepository(_)) => ErrorKind::NotARepository,
            WorkflowError::Git(_) | WorkflowError::NoModelsAvailable => {
                ErrorKind::BackendUnavailable
            }
            WorkflowError::Inference(e) if e.is_unavailable() => ErrorKind::BackendUnavailable,
            WorkflowError::Inference(_) => ErrorKind::MalformedResponse,
            WorkflowError::Interaction(_) => ErrorKind::Interaction,
        }
    }
}
