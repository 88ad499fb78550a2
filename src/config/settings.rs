//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_SEED_COMMAND, DEFAULT_SERVE_COMMAND, ENV_NO_EXEC, ENV_SEED_COMMAND,
    ENV_SERVE_COMMAND, ENV_SKIP_SEED, ENV_WORKDIR, FALSY_VALUES, TRUTHY_VALUES,
};
use crate::domain::{CommandSpec, LaunchMode};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed_command: CommandSpec,
    pub serve_command: CommandSpec,
    /// Working directory for both children; inherited when unset
    pub workdir: Option<PathBuf>,
    pub skip_seed: bool,
    pub launch_mode: LaunchMode,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed_command: Option<String>,
    pub serve_command: Option<String>,
    pub workdir: Option<PathBuf>,
    pub skip_seed: bool,
    pub no_exec: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` first when present, so its values also reach the
    /// seed and serve processes through the inherited environment.
    pub fn from_env() -> AppResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(AppError::config(format!("failed to load .env: {}", e))),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_command = lookup(ENV_SEED_COMMAND)
            .unwrap_or_else(|| DEFAULT_SEED_COMMAND.to_string())
            .parse::<CommandSpec>()
            .map_err(|e| AppError::config(format!("{}: {}", ENV_SEED_COMMAND, e)))?;

        let serve_command = lookup(ENV_SERVE_COMMAND)
            .unwrap_or_else(|| DEFAULT_SERVE_COMMAND.to_string())
            .parse::<CommandSpec>()
            .map_err(|e| AppError::config(format!("{}: {}", ENV_SERVE_COMMAND, e)))?;

        let workdir = lookup(ENV_WORKDIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let skip_seed = match lookup(ENV_SKIP_SEED) {
            Some(v) => parse_flag(ENV_SKIP_SEED, &v)?,
            None => false,
        };

        let no_exec = match lookup(ENV_NO_EXEC) {
            Some(v) => parse_flag(ENV_NO_EXEC, &v)?,
            None => false,
        };

        Ok(Self {
            seed_command,
            serve_command,
            workdir,
            skip_seed,
            launch_mode: LaunchMode::resolve(no_exec),
        })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, overrides: Overrides) -> AppResult<Self> {
        if let Some(cmd) = overrides.seed_command {
            self.seed_command = cmd
                .parse()
                .map_err(|e| AppError::config(format!("--seed-cmd: {}", e)))?;
        }
        if let Some(cmd) = overrides.serve_command {
            self.serve_command = cmd
                .parse()
                .map_err(|e| AppError::config(format!("--serve-cmd: {}", e)))?;
        }
        if overrides.workdir.is_some() {
            self.workdir = overrides.workdir;
        }
        if overrides.skip_seed {
            self.skip_seed = true;
        }
        if overrides.no_exec {
            self.launch_mode = LaunchMode::Spawn;
        }
        Ok(self)
    }
}

/// Parse a boolean environment value.
pub fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    if TRUTHY_VALUES.contains(&normalized.as_str()) {
        Ok(true)
    } else if FALSY_VALUES.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(AppError::config(format!(
            "{} must be a boolean (1/0, true/false, yes/no, on/off), got `{}`",
            name, value
        )))
    }
}
