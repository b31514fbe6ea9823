mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::io::{self, IsTerminal, Write};
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::commit::{self, CommitCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::editor::ExternalEditor;
use crate::infra::git::GitCli;
use crate::infra::llm::AnthropicClient;
use crate::infra::signal::CtrlC;
use crate::infra::terminal::CrosstermTerminal;
use crate::workflow::commit::CommitWorkflowOutcome;

#[derive(Parser)]
#[command(
    name = "gcai",
    author,
    version,
    about = "Generate a commit message for your changes with Claude"
)]
struct Cli {
    /// Include all changes (not just staged)
    #[arg(long)]
    all: bool,
    /// Create the commit after confirmation
    #[arg(long)]
    commit: bool,
    /// Use conventional commit format (type: description)
    #[arg(short, long)]
    conventional: bool,
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let interrupt = CtrlC::listen();
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let result = run(cli, interrupt).await;
    let code = report(result, &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}

/// Prints whatever the outcome still owes the user and returns the exit code.
fn report(
    result: AppResult<CommitWorkflowOutcome>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match result {
        Ok(outcome) if outcome.is_success() => 0,
        Ok(_) => 1,
        Err(AppError::Interrupted) => {
            let _ = writeln!(out);
            let _ = out.flush();
            1
        }
        Err(error) => {
            let _ = writeln!(err, "Error: {error}");
            1
        }
    }
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("gcai=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

async fn run(cli: Cli, interrupt: CtrlC) -> AppResult<CommitWorkflowOutcome> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let language_model = Arc::new(AnthropicClient::new(
        config.anthropic_base_url.clone(),
        config.anthropic_api_key.clone(),
        config.model.clone(),
    ));
    let editor = Arc::new(ExternalEditor::new(config.editor.clone()));

    let context = AppContext::new(
        config,
        git,
        language_model,
        Arc::new(CrosstermTerminal::new()),
        editor,
        Arc::new(interrupt),
    );

    let outcome = commit::run(
        &context,
        CommitCommandArgs {
            all: cli.all,
            commit: cli.commit,
            conventional: cli.conventional,
        },
    )
    .await?;

    match &outcome {
        CommitWorkflowOutcome::Proposed(_) if io::stdout().is_terminal() => println!(),
        CommitWorkflowOutcome::Committed { message, hash } => {
            debug!(%message, hash = ?hash, "commit created");
        }
        _ => {}
    }

    Ok(outcome)
}
