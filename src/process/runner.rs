//! Process runner trait.
//!
//! The seam between the sequencing rules and the operating system.
//! The sequencer only ever talks to a `ProcessRunner`, so ordering and
//! fail-fast behavior can be checked without spawning anything.

use async_trait::async_trait;

use crate::domain::{CommandSpec, LaunchMode, Step};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Runs the commands of a startup sequence.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run a command with inherited stdio and wait for it to exit.
    ///
    /// Returns the exit code, whatever its value. Only failures to
    /// launch or wait are reported as errors.
    async fn run_to_completion(&self, step: Step, command: &CommandSpec) -> AppResult<i32>;

    /// Hand control to a long-running command.
    ///
    /// In [`LaunchMode::Exec`] this replaces the current process and only
    /// returns when the replacement fails. In [`LaunchMode::Spawn`] it waits
    /// for the child and returns its exit code.
    async fn hand_off(&self, step: Step, command: &CommandSpec, mode: LaunchMode)
        -> AppResult<i32>;
}
