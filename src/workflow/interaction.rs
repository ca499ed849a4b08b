//! Terminal prompts used by the workflow.

use dialoguer::{Confirm, Input};

use super::report::format_model_list;
use crate::error::WorkflowError;
use crate::llm::resolve_model_selection;

/// User decisions the workflow blocks on.
///
/// This abstraction allows scripting the answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Interaction {
    /// Yes/no question; an empty answer means yes.
    fn confirm(&self, question: &str) -> Result<bool, WorkflowError>;

    /// Pick one of `models` (never empty).
    fn choose_model(&self, models: &[String]) -> Result<String, WorkflowError>;
}

/// Prompts on the controlling terminal with dialoguer.
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn confirm(&self, question: &str) -> Result<bool, WorkflowError> {
        Confirm::new()
            .with_prompt(question)
            .default(true)
            .interact()
            .map_err(|e| WorkflowError::Interaction(e.to_string()))
    }

    fn choose_model(&self, models: &[String]) -> Result<String, WorkflowError> {
        println!("Available models:");
        print!("{}", format_model_list(models));

        let answer: String = Input::new()
            .with_prompt(format!("Select a model [1-{}] (default 1)", models.len()))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| WorkflowError::Interaction(e.to_string()))?;

        resolve_model_selection(&answer, models)
            .map(str::to_string)
            .ok_or(WorkflowError::NoModelsAvailable)
    }
}
