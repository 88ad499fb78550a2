//! Exit status to exit code mapping.

use std::process::ExitStatus;

use crate::config::EXIT_GENERAL_FAILURE;

/// Convert a child's exit status into the code the sequencer propagates.
///
/// A child terminated by signal `n` maps to `128 + n`, as `sh` reports it.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        use crate::config::EXIT_SIGNAL_BASE;

        if let Some(signal) = status.signal() {
            return EXIT_SIGNAL_BASE + signal;
        }
    }

    EXIT_GENERAL_FAILURE
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    #[test]
    fn test_normal_exit_codes() {
        // Raw wait status encodes the exit code in the high byte
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(2 << 8)), 2);
        assert_eq!(exit_code(ExitStatus::from_raw(255 << 8)), 255);
    }

    #[test]
    fn test_signal_exit_codes() {
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
        assert_eq!(exit_code(ExitStatus::from_raw(15)), 143);
    }
}
