//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod plan;
pub mod run;
pub mod seed;
pub mod serve;

use std::sync::Arc;

use crate::config::Config;
use crate::process::SystemRunner;
use crate::services::Sequencer;

/// Build a sequencer backed by real processes
pub(crate) fn system_sequencer(config: &Config) -> Sequencer<SystemRunner> {
    let runner = Arc::new(SystemRunner::new(config.workdir.clone()));
    Sequencer::new(runner, config)
}
