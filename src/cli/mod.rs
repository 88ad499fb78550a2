//! CLI module - Command-line interface for the launcher.
//!
//! Provides commands for:
//! - `run` - Seed, then serve (default)
//! - `seed` - Seed step only
//! - `serve` - Serve step only
//! - `plan` - Show the resolved sequence

pub mod args;

pub use args::{Cli, Commands};
