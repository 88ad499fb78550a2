//! Seed command - Runs only the seed step.

use crate::config::Config;
use crate::errors::AppResult;

use super::system_sequencer;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    if config.skip_seed {
        tracing::warn!("Seed step skipped by configuration, nothing to do");
        return Ok(());
    }

    system_sequencer(&config).seed().await
}
