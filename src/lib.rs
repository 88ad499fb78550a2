//! Boot Sequencer - Container entrypoint for a seeded web application
//!
//! Runs a seed command to completion, then hands off to the application
//! server. A non-zero exit from the seed step stops the sequence and
//! becomes the exit code of the whole launcher.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment-driven configuration and constants
//! - **domain**: Command lines, steps and launch modes
//! - **process**: Child process launching behind the `ProcessRunner` trait
//! - **services**: The startup sequencer
//! - **errors**: Centralized error handling and exit codes
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed, then exec the server (the default)
//! cargo run
//!
//! # Only start the server, as a child process
//! cargo run -- --no-exec serve
//!
//! # Show what would run
//! SERVE_COMMAND="gunicorn -b 0.0.0.0:8000 wsgi:app" cargo run -- plan
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod process;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{CommandSpec, LaunchMode, Step};
pub use errors::{AppError, AppResult};
pub use process::{ProcessRunner, SystemRunner};
pub use services::Sequencer;
