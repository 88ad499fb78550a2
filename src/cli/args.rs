//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Environment
//! variables are read by `Config`; flags here only override them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Overrides;

/// Boot Sequencer - Seed the database, then hand off to the application server
#[derive(Parser, Debug)]
#[command(name = "boot-sequencer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed command line (overrides SEED_COMMAND)
    #[arg(long = "seed-cmd", global = true, value_name = "COMMAND")]
    pub seed_command: Option<String>,

    /// Serve command line (overrides SERVE_COMMAND)
    #[arg(long = "serve-cmd", global = true, value_name = "COMMAND")]
    pub serve_command: Option<String>,

    /// Working directory for both commands (overrides SEQUENCER_WORKDIR)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Skip the seed step
    #[arg(long, global = true)]
    pub skip_seed: bool,

    /// Run the serve command as a child instead of replacing this process
    #[arg(long, global = true)]
    pub no_exec: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Subcommand to run; `run` when none was given
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }

    /// Configuration overrides taken from the global flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            seed_command: self.seed_command.clone(),
            serve_command: self.serve_command.clone(),
            workdir: self.workdir.clone(),
            skip_seed: self.skip_seed,
            no_exec: self.no_exec,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the seed command, then start the server (default)
    Run,

    /// Run only the seed command
    Seed,

    /// Start only the server
    Serve,

    /// Print the commands that would run, in order
    Plan,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
        assert_eq!(Cli::command().get_name(), "boot-sequencer");
    }

    #[test]
    fn test_subcommands_exist() {
        let cmd = Cli::command();
        let subcommands: Vec<_> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        for name in ["run", "seed", "serve", "plan"] {
            assert!(subcommands.contains(&name), "missing '{}' subcommand", name);
        }
    }

    #[test]
    fn test_defaults_to_run() {
        let cli = Cli::try_parse_from(["boot-sequencer"]).unwrap();
        assert_eq!(cli.selected_command(), Commands::Run);
        assert!(!cli.verbose);
        assert!(!cli.skip_seed);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "boot-sequencer",
            "--seed-cmd",
            "python manage.py seed",
            "-C",
            "/srv/app",
            "--no-exec",
            "serve",
        ])
        .unwrap();

        assert_eq!(cli.selected_command(), Commands::Serve);
        let overrides = cli.overrides();
        assert_eq!(overrides.seed_command.as_deref(), Some("python manage.py seed"));
        assert_eq!(overrides.serve_command, None);
        assert_eq!(overrides.workdir, Some(PathBuf::from("/srv/app")));
        assert!(overrides.no_exec);
        assert!(!overrides.skip_seed);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["boot-sequencer", "run", "--skip-seed", "-v"]).unwrap();
        assert_eq!(cli.selected_command(), Commands::Run);
        assert!(cli.skip_seed);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["boot-sequencer", "migrate"]).is_err());
    }
}
