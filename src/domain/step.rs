//! Sequence steps and launch modes.

use std::fmt;

/// One step of the startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Initializes demo/default data before the server starts
    Seed,
    /// Starts the long-running application server
    Serve,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Seed => "seed",
            Step::Serve => "serve",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the serve step takes over from the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Replace the sequencer process image (Unix only)
    Exec,
    /// Run as a child and mirror its exit status
    Spawn,
}

impl LaunchMode {
    /// Platform default unless spawn mode is forced.
    pub fn resolve(no_exec: bool) -> Self {
        if no_exec || !cfg!(unix) {
            LaunchMode::Spawn
        } else {
            LaunchMode::Exec
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchMode::Exec => f.write_str("exec"),
            LaunchMode::Spawn => f.write_str("spawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        assert_eq!(Step::Seed.to_string(), "seed");
        assert_eq!(Step::Serve.to_string(), "serve");
    }

    #[test]
    fn test_no_exec_forces_spawn() {
        assert_eq!(LaunchMode::resolve(true), LaunchMode::Spawn);
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_defaults_to_exec() {
        assert_eq!(LaunchMode::resolve(false), LaunchMode::Exec);
    }
}
