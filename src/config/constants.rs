//! Application-wide constants
//!
//! Centralized location for default commands, environment variable
//! names and exit codes.

// =============================================================================
// Default Commands
// =============================================================================

/// Seed command run before the server starts
pub const DEFAULT_SEED_COMMAND: &str = "python seed.py";

/// Application server command the sequencer hands off to
pub const DEFAULT_SERVE_COMMAND: &str = "gunicorn wsgi:app";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_SEED_COMMAND: &str = "SEED_COMMAND";

pub const ENV_SERVE_COMMAND: &str = "SERVE_COMMAND";

/// Working directory for both child processes
pub const ENV_WORKDIR: &str = "SEQUENCER_WORKDIR";

pub const ENV_SKIP_SEED: &str = "SKIP_SEED";

/// Forces spawn mode instead of exec for the serve step
pub const ENV_NO_EXEC: &str = "SEQUENCER_NO_EXEC";

/// Values accepted as `true` for boolean variables (case-insensitive)
pub const TRUTHY_VALUES: &[&str] = &["1", "true", "yes", "on"];

/// Values accepted as `false` for boolean variables (case-insensitive)
pub const FALSY_VALUES: &[&str] = &["0", "false", "no", "off", ""];

// =============================================================================
// Logging
// =============================================================================

/// Filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Filter used with --verbose
pub const VERBOSE_LOG_FILTER: &str = "debug";

// =============================================================================
// Exit Codes
// =============================================================================

/// Launcher-internal failure (bad configuration, I/O)
pub const EXIT_GENERAL_FAILURE: i32 = 1;

/// Program found but not executable
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Program not found
pub const EXIT_NOT_FOUND: i32 = 127;

/// Added to the signal number when a child is killed by a signal
pub const EXIT_SIGNAL_BASE: i32 = 128;
