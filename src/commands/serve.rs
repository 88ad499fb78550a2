//! Serve command - Starts the application server without seeding.

use crate::config::Config;
use crate::errors::AppResult;

use super::system_sequencer;

/// Execute the serve command
pub async fn execute(config: Config) -> AppResult<()> {
    system_sequencer(&config).serve().await
}
