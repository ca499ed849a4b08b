//! ollama-commit - CLI entry point.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ollama_commit::config::{
    Config, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    PromptProfile, WorkflowOptions, default_timeout,
};
use ollama_commit::git::GitCli;
use ollama_commit::llm::{InferenceBackend, OllamaClient};
use ollama_commit::workflow::report::format_model_listing;
use ollama_commit::workflow::{TerminalInteraction, Workflow};

/// Stage, describe, commit and push changes with a commit message from a local Ollama model.
#[derive(Parser, Debug)]
#[command(name = "ollama-commit")]
#[command(about = "Generate Git commit messages with a local Ollama model")]
#[command(version)]
struct Cli {
    /// Ollama model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Ollama API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,

    /// Maximum number of tokens to generate
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Request timeout in seconds (overrides OLLAMA_COMMIT_TIMEOUT)
    #[arg(long)]
    timeout: Option<u64>,

    /// How much diff context to send to the model
    #[arg(long, value_enum, default_value_t = PromptProfile::Compact)]
    prompt_profile: PromptProfile,

    /// List available Ollama models and exit
    #[arg(long)]
    list_models: bool,

    /// Never prompt; approve every step
    #[arg(long)]
    non_interactive: bool,

    /// Use already staged changes instead of running `git add .`
    #[arg(long, alias = "skip-add")]
    skip_stage: bool,

    /// Commit without pushing
    #[arg(long)]
    skip_push: bool,

    /// Show what would happen without changing the repository
    #[arg(long)]
    dry_run: bool,

    /// Approve commit and push without asking
    #[arg(short, long)]
    force: bool,

    /// Repository to operate on
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            repository: self.repo.clone(),
            timeout: self
                .timeout
                .map(Duration::from_secs)
                .unwrap_or_else(default_timeout),
            prompt_profile: self.prompt_profile,
        }
    }

    fn options(&self) -> WorkflowOptions {
        WorkflowOptions {
            interactive: !self.non_interactive,
            skip_stage: self.skip_stage,
            skip_push: self.skip_push,
            dry_run: self.dry_run,
            force: self.force,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = cli.config();
    let client = OllamaClient::new(&config).context("Failed to create Ollama client")?;

    if cli.list_models {
        let models = client
            .list_models()
            .await
            .context("Failed to list Ollama models")?;
        print!("{}", format_model_listing(&models));
        return Ok(());
    }

    if cli.dry_run {
        println!("[DRY RUN] No changes will be made to the repository\n");
    }

    let git = GitCli::new(&config.repository);
    let interaction = TerminalInteraction;
    let mut workflow = Workflow::new(&config, cli.options(), &git, &client, &interaction);

    if let Err(e) = workflow.run().await {
        if let Some(hint) = e.kind().hint() {
            eprintln!("Hint: {hint}");
        }
        return Err(anyhow::Error::new(e).context("ollama-commit failed"));
    }

    Ok(())
}
