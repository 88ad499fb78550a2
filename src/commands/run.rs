//! Run command - Seed, then hand off to the application server.

use crate::config::Config;
use crate::errors::AppResult;

use super::system_sequencer;

/// Execute the run command
pub async fn execute(config: Config) -> AppResult<()> {
    if let Some(dir) = &config.workdir {
        tracing::debug!("Working directory: {}", dir.display());
    }

    system_sequencer(&config).run().await
}
