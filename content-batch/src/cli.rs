//! Command-line surface for content-batch.
//!
//! Parses arguments, loads configuration, wires the HTTP client and terminal
//! operator into the core pipelines, and reports run-ending input errors to
//! the operator. All pipeline logic lives in `content-batch-core`.
use crate::client::HttpClient;
use crate::load_config::load_config;
use crate::menu::run_menu;
use crate::operator::TerminalOperator;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use content_batch_core::batch::run_batch;
use content_batch_core::content::{ContentKind, PurgeKind};
use content_batch_core::contract::{ContentApi, Operator};
use content_batch_core::error::RunError;
use content_batch_core::outcome::RunOutcome;
use content_batch_core::purge::run_purge;
use std::path::PathBuf;

/// CLI for content-batch: bulk-create and purge content on the content API.
#[derive(Parser)]
#[clap(
    name = "content-batch",
    version,
    about = "Bulk-create universities, casts and articles from local folders, or purge them, via the content API"
)]
pub struct Cli {
    /// Optional YAML config file (api.base_url, api.timeout_secs)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive main menu
    Menu,
    /// Create every item found in a local folder
    Create {
        #[clap(value_enum)]
        kind: CreateTarget,
        /// Folder to scan; asked for interactively when omitted
        #[clap(long)]
        folder: Option<PathBuf>,
    },
    /// Delete every item of one content type
    Purge {
        #[clap(value_enum)]
        kind: PurgeTarget,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CreateTarget {
    Universities,
    Casts,
    Articles,
}

impl From<CreateTarget> for ContentKind {
    fn from(target: CreateTarget) -> Self {
        match target {
            CreateTarget::Universities => ContentKind::University,
            CreateTarget::Casts => ContentKind::Cast,
            CreateTarget::Articles => ContentKind::Article,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PurgeTarget {
    Casts,
    Articles,
    Users,
    Universities,
}

impl From<PurgeTarget> for PurgeKind {
    fn from(target: PurgeTarget) -> Self {
        match target {
            PurgeTarget::Casts => PurgeKind::Cast,
            PurgeTarget::Articles => PurgeKind::Article,
            PurgeTarget::Users => PurgeKind::User,
            PurgeTarget::Universities => PurgeKind::University,
        }
    }
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let config = load_config(cli.config.as_deref())?;
    let client = HttpClient::new(config).context("Failed to construct HTTP client")?;

    match cli.command {
        Commands::Menu => {
            tracing::info!(command = "menu", "Starting interactive menu");
            run_menu(&client, &TerminalOperator::new()).await;
        }
        Commands::Create { kind, folder } => {
            tracing::info!(command = "create", ?kind, "Starting batch creation");
            let operator = TerminalOperator::with_folder(folder);
            create(kind.into(), &client, &operator).await;
        }
        Commands::Purge { kind } => {
            tracing::info!(command = "purge", ?kind, "Starting purge");
            purge(kind.into(), &client, &TerminalOperator::new()).await;
        }
    }

    Ok(())
}

/// Runs one batch and reports how it ended. Input errors end the run cleanly.
pub async fn create<A, O>(kind: ContentKind, api: &A, operator: &O)
where
    A: ContentApi + ?Sized,
    O: Operator + ?Sized,
{
    report(run_batch(kind, api, operator).await, operator);
}

/// Runs one purge and reports how it ended.
pub async fn purge<A, O>(kind: PurgeKind, api: &A, operator: &O)
where
    A: ContentApi + ?Sized,
    O: Operator + ?Sized,
{
    report(run_purge(kind, api, operator).await, operator);
}

fn report<O: Operator + ?Sized>(result: Result<RunOutcome, RunError>, operator: &O) {
    match result {
        Ok(RunOutcome::Completed(summary)) => {
            tracing::info!(
                succeeded = summary.succeeded(),
                failed = summary.failed(),
                "Run completed"
            );
        }
        Ok(RunOutcome::Aborted) => tracing::info!("Run aborted by operator"),
        Err(e) => {
            tracing::error!(error = %e, "Run ended before processing items");
            operator.show(&format!("{e} Exiting."));
        }
    }
}
