//! Startup sequencer - Seed, then serve, failing fast.
//!
//! The serve step never starts unless the seed step has returned with
//! status 0. Any non-zero status ends the sequence with that same code.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{CommandSpec, LaunchMode, Step};
use crate::errors::{AppError, AppResult};
use crate::process::ProcessRunner;

/// Runs the startup sequence against a [`ProcessRunner`].
pub struct Sequencer<R: ProcessRunner> {
    runner: Arc<R>,
    seed_command: CommandSpec,
    serve_command: CommandSpec,
    skip_seed: bool,
    launch_mode: LaunchMode,
}

impl<R: ProcessRunner> Sequencer<R> {
    /// Create a sequencer from resolved configuration
    pub fn new(runner: Arc<R>, config: &Config) -> Self {
        Self {
            runner,
            seed_command: config.seed_command.clone(),
            serve_command: config.serve_command.clone(),
            skip_seed: config.skip_seed,
            launch_mode: config.launch_mode,
        }
    }

    /// Run the full sequence: seed to completion, then hand off to serve.
    ///
    /// Returns `Ok(())` only if every step exited 0. In exec mode a
    /// successful hand-off never returns at all.
    pub async fn run(&self) -> AppResult<()> {
        if self.skip_seed {
            tracing::warn!("Skipping seed step");
        } else {
            self.seed().await?;
        }

        self.serve().await
    }

    /// Run only the seed step.
    pub async fn seed(&self) -> AppResult<()> {
        tracing::info!("Running seed command: {}", self.seed_command);

        let code = self
            .runner
            .run_to_completion(Step::Seed, &self.seed_command)
            .await?;

        check_status(Step::Seed, code)?;
        tracing::info!("Seed step completed");
        Ok(())
    }

    /// Run only the serve step, in the configured launch mode.
    pub async fn serve(&self) -> AppResult<()> {
        tracing::info!(
            mode = %self.launch_mode,
            "Starting serve command: {}",
            self.serve_command
        );

        let code = self
            .runner
            .hand_off(Step::Serve, &self.serve_command, self.launch_mode)
            .await?;

        check_status(Step::Serve, code)?;
        tracing::info!("Serve process exited cleanly");
        Ok(())
    }

    /// Steps `run` would execute, in order, without executing them.
    pub fn plan(&self) -> Vec<(Step, &CommandSpec)> {
        let mut steps = Vec::with_capacity(2);
        if !self.skip_seed {
            steps.push((Step::Seed, &self.seed_command));
        }
        steps.push((Step::Serve, &self.serve_command));
        steps
    }
}

fn check_status(step: Step, code: i32) -> AppResult<()> {
    if code == 0 {
        Ok(())
    } else {
        tracing::error!(code, "{} step failed", step);
        Err(AppError::step_failed(step, code))
    }
}
