//! Boot Sequencer - Application entry point
//!
//! CLI-based entry point that dispatches to various commands and exits
//! with the status of the first failing step.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boot_sequencer::{
    cli::{Cli, Commands},
    commands,
    config::{Config, DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
    AppResult,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Execute command
    let result = execute(&cli).await;

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn execute(cli: &Cli) -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?.with_overrides(cli.overrides())?;
    tracing::debug!(?config, "Configuration loaded");

    match cli.selected_command() {
        Commands::Run => commands::run::execute(config).await,
        Commands::Seed => commands::seed::execute(config).await,
        Commands::Serve => commands::serve::execute(config).await,
        Commands::Plan => commands::plan::execute(config).await,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        VERBOSE_LOG_FILTER.to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    };

    // stdout belongs to the children
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
