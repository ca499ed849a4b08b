//! The commit workflow as an explicit state machine.
//!
//! One run walks `Idle → Verifying → Staging → Scanning → Prompting →
//! Inferring → AwaitingCommitApproval → Committing → AwaitingPushApproval →
//! Pushing → Done`, leaving early through `Done` (nothing staged, declined
//! prompt, no remote) or `Aborted` on the first fatal error.

pub mod interaction;
pub mod report;

pub use interaction::{Interaction, TerminalInteraction};

use tracing::{debug, info, warn};

use crate::commit::{ChangeScanner, ChangeSet, CommitSuggestion, PromptBuilder, parse_suggestion};
use crate::config::{Config, WorkflowOptions};
use crate::error::{InferenceError, WorkflowError};
use crate::git::VersionControl;
use crate::llm::InferenceBackend;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Verifying,
    Staging,
    Scanning,
    Prompting,
    Inferring,
    AwaitingCommitApproval,
    Committing,
    AwaitingPushApproval,
    Pushing,
    Done,
    Aborted,
}

/// What happened to the push after a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    /// `--skip-push` was given.
    Skipped,
    Declined,
    NoRemote,
    /// The push failed; the commit stands.
    Failed(String),
}

/// How a run that did not abort ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NothingStaged,
    CommitDeclined(CommitSuggestion),
    Committed {
        suggestion: CommitSuggestion,
        hash: Option<String>,
        push: PushOutcome,
    },
    /// Dry run: every mutating command was only reported.
    DryRun(CommitSuggestion),
}

enum Step {
    Next(WorkflowState),
    Finish(Outcome),
}

/// A single workflow run over borrowed collaborators.
pub struct Workflow<'a, V: ?Sized, B: ?Sized, I: ?Sized> {
    config: &'a Config,
    options: WorkflowOptions,
    vcs: &'a V,
    backend: &'a B,
    interaction: &'a I,
    model: String,
    changes: ChangeSet,
    prompt: String,
    suggestion: Option<CommitSuggestion>,
    hash: Option<String>,
    history: Vec<WorkflowState>,
}

impl<'a, V, B, I> Workflow<'a, V, B, I>
where
    V: VersionControl + ?Sized,
    B: InferenceBackend + ?Sized,
    I: Interaction + ?Sized,
{
    pub fn new(
        config: &'a Config,
        options: WorkflowOptions,
        vcs: &'a V,
        backend: &'a B,
        interaction: &'a I,
    ) -> Self {
        Self {
            config,
            options,
            vcs,
            backend,
            interaction,
            model: config.model.clone(),
            changes: ChangeSet::default(),
            prompt: String::new(),
            suggestion: None,
            hash: None,
            history: Vec::new(),
        }
    }

    /// States visited so far, in order.
    pub fn history(&self) -> &[WorkflowState] {
        &self.history
    }

    /// Model used for generation; differs from the configured one after a selection.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Drive the machine until `Done` or the first fatal error.
    pub async fn run(&mut self) -> Result<Outcome, WorkflowError> {
        let mut state = WorkflowState::Idle;
        loop {
            self.history.push(state);
            debug!(?state, "Workflow state");

            match self.step(state).await {
                Ok(Step::Next(next)) => state = next,
                Ok(Step::Finish(outcome)) => {
                    self.history.push(WorkflowState::Done);
                    return Ok(outcome);
                }
                Err(e) => {
                    self.history.push(WorkflowState::Aborted);
                    return Err(e);
                }
            }
        }
    }

    async fn step(&mut self, state: WorkflowState) -> Result<Step, WorkflowError> {
        use WorkflowState::*;

        let next = match state {
            Idle => Verifying,
            Verifying => {
                self.verify().await?;
                Staging
            }
            Staging => {
                self.stage()?;
                Scanning
            }
            Scanning => {
                println!("\nScanning staged changes...");
                self.changes = ChangeScanner::new(self.vcs).scan()?;
                if self.changes.is_empty() {
                    println!("No staged changes found.");
                    if self.options.skip_stage {
                        println!("Tip: stage your changes first with 'git add <files>'");
                    } else {
                        println!("Tip: make sure you have changes to commit");
                    }
                    return Ok(Step::Finish(Outcome::NothingStaged));
                }
                print!("{}", report::format_changes(&self.changes));
                Prompting
            }
            Prompting => {
                self.prompt =
                    PromptBuilder::new(self.config.prompt_profile).build_prompt(&self.changes);
                debug!(prompt_len = self.prompt.len(), "Built prompt");
                Inferring
            }
            Inferring => {
                println!("\nGenerating commit message with {}...", self.model);
                let raw = self
                    .backend
                    .generate(
                        &self.model,
                        &self.prompt,
                        self.config.temperature,
                        self.config.max_tokens,
                    )
                    .await?;

                let suggestion = parse_suggestion(&raw, &self.changes);
                if suggestion.subject.is_empty() {
                    return Err(InferenceError::MalformedResponse(
                        "model returned an empty commit message".to_string(),
                    )
                    .into());
                }
                self.suggestion = Some(suggestion);
                AwaitingCommitApproval
            }
            AwaitingCommitApproval => {
                let suggestion = self.current_suggestion()?;
                println!();
                print!("{}", report::format_suggestion(&suggestion));

                if !self.approve("Commit with this message?")? {
                    println!("[SKIP] Commit cancelled");
                    println!("You can commit manually with:\n  {}", suggestion.commit_command());
                    return Ok(Step::Finish(Outcome::CommitDeclined(suggestion)));
                }
                Committing
            }
            Committing => {
                let suggestion = self.current_suggestion()?;
                if self.options.dry_run {
                    println!("[DRY RUN] Would run: {}", suggestion.commit_command());
                } else {
                    self.vcs.commit(&suggestion.subject, &suggestion.body)?;
                    self.hash = self.vcs.last_commit_hash().ok();
                    match &self.hash {
                        Some(hash) => println!("[DONE] Created commit {hash}"),
                        None => println!("[DONE] Created commit"),
                    }
                }
                AwaitingPushApproval
            }
            AwaitingPushApproval => {
                if self.options.skip_push {
                    println!("[SKIP] Push skipped (--skip-push)");
                    return self.finish(PushOutcome::Skipped);
                }

                let remotes = self.vcs.remotes().unwrap_or_else(|e| {
                    warn!("Failed to list remotes: {}", e);
                    Vec::new()
                });
                if remotes.is_empty() {
                    println!("[SKIP] No remote repository configured, skipping push");
                    println!("Add a remote with: git remote add origin <url>");
                    return self.finish(PushOutcome::NoRemote);
                }

                println!("Remote(s): {}", remotes.join(", "));
                if let Ok(branch) = self.vcs.current_branch() {
                    println!("Current branch: {branch}");
                }

                if !self.approve("Push to remote?")? {
                    println!("[SKIP] Push cancelled. You can push manually with: git push");
                    return self.finish(PushOutcome::Declined);
                }
                Pushing
            }
            Pushing => {
                if self.options.dry_run {
                    println!("[DRY RUN] Would run: git push");
                    return self.finish(PushOutcome::Pushed);
                }
                match self.vcs.push() {
                    Ok(()) => {
                        println!("[DONE] Pushed to remote");
                        return self.finish(PushOutcome::Pushed);
                    }
                    Err(e) => {
                        warn!("Push failed: {}", e);
                        eprintln!("[WARN] Failed to push: {e}");
                        eprintln!("You can push manually later with: git push");
                        return self.finish(PushOutcome::Failed(e.to_string()));
                    }
                }
            }
            Done | Aborted => {
                return Err(WorkflowError::Interaction(format!(
                    "workflow already finished ({state:?})"
                )));
            }
        };

        Ok(Step::Next(next))
    }

    async fn verify(&mut self) -> Result<(), WorkflowError> {
        println!("Verifying prerequisites...");
        self.vcs.ensure_repository()?;
        println!("  [PASS] Git repository");

        let models = self.backend.list_models().await?;
        println!("  [PASS] Connected to Ollama ({} models available)", models.len());

        if !models.iter().any(|m| *m == self.model) {
            println!("  [WARN] Model '{}' not found", self.model);
            if models.is_empty() {
                return Err(WorkflowError::NoModelsAvailable);
            }
            self.model = if !self.options.auto_approve() {
                self.interaction.choose_model(&models)?
            } else {
                models[0].clone()
            };
        }

        info!(model = %self.model, "Selected model");
        println!("  [PASS] Using model: {}", self.model);
        Ok(())
    }

    fn stage(&self) -> Result<(), WorkflowError> {
        if self.options.skip_stage {
            println!("\nUsing already staged changes");
            return Ok(());
        }

        println!("\nStaging changes (git add .)...");
        let preview = self.vcs.unstaged_files().and_then(|unstaged| {
            self.vcs
                .untracked_files()
                .map(|untracked| (unstaged, untracked))
        });
        match preview {
            Ok((unstaged, untracked)) => {
                let text = report::format_staging_preview(&unstaged, &untracked);
                if text.is_empty() {
                    println!("No unstaged files found");
                } else {
                    print!("{text}");
                }
            }
            Err(e) => {
                warn!("Could not list unstaged files: {}", e);
                println!("[WARN] Could not list unstaged files: {e}");
            }
        }

        if self.options.dry_run {
            println!("[DRY RUN] Would run: git add .");
        } else {
            self.vcs.stage_all()?;
            println!("[DONE] Changes staged");
        }
        Ok(())
    }

    fn approve(&self, question: &str) -> Result<bool, WorkflowError> {
        if self.options.auto_approve() {
            return Ok(true);
        }
        self.interaction.confirm(question)
    }

    fn current_suggestion(&self) -> Result<CommitSuggestion, WorkflowError> {
        self.suggestion.clone().ok_or_else(|| {
            InferenceError::MalformedResponse("no commit suggestion generated".to_string()).into()
        })
    }

    fn finish(&self, push: PushOutcome) -> Result<Step, WorkflowError> {
        let suggestion = self.current_suggestion()?;
        let outcome = if self.options.dry_run {
            Outcome::DryRun(suggestion)
        } else {
            Outcome::Committed {
                suggestion,
                hash: self.hash.clone(),
                push,
            }
        };
        println!("\nWorkflow completed!");
        Ok(Step::Finish(outcome))
    }
}
