//! Centralized error handling.
//!
//! Provides a unified error type for the launcher, with a mapping
//! from every variant to the exit code the process terminates with.

use std::io;

use thiserror::Error;

use crate::config::{EXIT_CANNOT_EXECUTE, EXIT_GENERAL_FAILURE, EXIT_NOT_FOUND};
use crate::domain::Step;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Child process errors
    #[error("{step} step exited with status {code}")]
    StepFailed { step: Step, code: i32 },

    #[error("failed to launch {step} command `{program}`: {source}")]
    Launch {
        step: Step,
        program: String,
        #[source]
        source: io::Error,
    },

    // Configuration
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("configuration error: {0}")]
    Config(String),

    // Output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Exit code the launcher terminates with for this error.
    ///
    /// A failed step propagates the child's own status unchanged. Launch
    /// failures follow `sh`: 127 when the program is missing, 126 when it
    /// cannot be executed.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::StepFailed { code, .. } => *code,
            AppError::Launch { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_CANNOT_EXECUTE,
                _ => EXIT_GENERAL_FAILURE,
            },
            AppError::InvalidCommand(_)
            | AppError::Config(_)
            | AppError::Io(_) => EXIT_GENERAL_FAILURE,
        }
    }

    /// The step this error belongs to, if any
    pub fn step(&self) -> Option<Step> {
        match self {
            AppError::StepFailed { step, .. } | AppError::Launch { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn step_failed(step: Step, code: i32) -> Self {
        AppError::StepFailed { step, code }
    }

    pub fn launch(step: Step, program: impl Into<String>, source: io::Error) -> Self {
        AppError::Launch {
            step,
            program: program.into(),
            source,
        }
    }

    pub fn invalid_command(msg: impl Into<String>) -> Self {
        AppError::InvalidCommand(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_failure_propagates_child_code() {
        let err = AppError::step_failed(Step::Seed, 2);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.step(), Some(Step::Seed));
        assert_eq!(err.to_string(), "seed step exited with status 2");
    }

    #[test]
    fn test_missing_program_exits_127() {
        let err = AppError::launch(
            Step::Serve,
            "gunicorn",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn test_permission_denied_exits_126() {
        let err = AppError::launch(
            Step::Seed,
            "./seed.sh",
            io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        );
        assert_eq!(err.exit_code(), 126);
    }

    #[test]
    fn test_other_errors_exit_1() {
        assert_eq!(AppError::config("bad").exit_code(), 1);
        assert_eq!(AppError::invalid_command("empty").exit_code(), 1);
        assert_eq!(AppError::from(io::Error::from(io::ErrorKind::BrokenPipe)).exit_code(), 1);
        assert_eq!(AppError::config("bad").step(), None);
    }
}
