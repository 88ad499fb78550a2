//! Operating system backed process runner.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;

use super::exit::exit_code;
use super::runner::ProcessRunner;
use crate::domain::{CommandSpec, LaunchMode, Step};
use crate::errors::{AppError, AppResult};

/// Launches real child processes with inherited stdio and environment.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    workdir: Option<PathBuf>,
}

impl SystemRunner {
    /// Create a runner; children start in `workdir` when given.
    pub fn new(workdir: Option<PathBuf>) -> Self {
        Self { workdir }
    }

    fn std_command(&self, command: &CommandSpec) -> std::process::Command {
        let mut cmd = std::process::Command::new(command.program());
        cmd.args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Spawn the command and wait for it.
    ///
    /// An interrupt delivered to the sequencer also reaches the child
    /// through the terminal's process group, so it is only logged and the
    /// child's own exit status is still what gets returned.
    async fn spawn_and_wait(&self, step: Step, command: &CommandSpec) -> AppResult<i32> {
        let mut child = tokio::process::Command::from(self.std_command(command))
            .spawn()
            .map_err(|e| AppError::launch(step, command.program(), e))?;

        tracing::debug!(pid = ?child.id(), "{} process started", step);

        let wait = child.wait();
        tokio::pin!(wait);

        let mut listening = true;
        let status = loop {
            tokio::select! {
                status = &mut wait => break status,
                result = tokio::signal::ctrl_c(), if listening => {
                    listening = false;
                    match result {
                        Ok(()) => tracing::info!(
                            "Received interrupt, waiting for {} process to exit...",
                            step
                        ),
                        Err(e) => tracing::warn!("Failed to listen for interrupts: {}", e),
                    }
                }
            }
        }
        .map_err(|e| AppError::launch(step, command.program(), e))?;

        let code = exit_code(status);
        tracing::debug!(code, "{} process exited", step);
        Ok(code)
    }

    #[cfg(unix)]
    async fn replace_process(&self, step: Step, command: &CommandSpec) -> AppResult<i32> {
        use std::os::unix::process::CommandExt;

        tracing::info!("Handing off to {} command: {}", step, command);

        // exec only returns on failure
        let err = self.std_command(command).exec();
        Err(AppError::launch(step, command.program(), err))
    }

    #[cfg(not(unix))]
    async fn replace_process(&self, step: Step, command: &CommandSpec) -> AppResult<i32> {
        tracing::warn!("Process replacement is not supported on this platform, spawning instead");
        self.spawn_and_wait(step, command).await
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run_to_completion(&self, step: Step, command: &CommandSpec) -> AppResult<i32> {
        self.spawn_and_wait(step, command).await
    }

    async fn hand_off(
        &self,
        step: Step,
        command: &CommandSpec,
        mode: LaunchMode,
    ) -> AppResult<i32> {
        match mode {
            LaunchMode::Exec => self.replace_process(step, command).await,
            LaunchMode::Spawn => self.spawn_and_wait(step, command).await,
        }
    }
}
