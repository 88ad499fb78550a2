//! Process layer - Launching and waiting for child processes.

mod exit;
mod runner;
mod system;

pub use exit::exit_code;
pub use runner::ProcessRunner;
pub use system::SystemRunner;

#[cfg(any(test, feature = "test-utils"))]
pub use runner::MockProcessRunner;
