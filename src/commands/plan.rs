//! Plan command - Prints the resolved sequence without running it.

use std::io::{self, Write};

use crate::config::Config;
use crate::errors::AppResult;
use crate::process::ProcessRunner;
use crate::services::Sequencer;

use super::system_sequencer;

/// Execute the plan command
pub async fn execute(config: Config) -> AppResult<()> {
    let sequencer = system_sequencer(&config);
    write_plan(&mut io::stdout().lock(), &sequencer)?;
    tracing::debug!(mode = %config.launch_mode, "Plan printed");
    Ok(())
}

/// One `step: command` line per step, in execution order
pub fn render<R: ProcessRunner>(sequencer: &Sequencer<R>) -> String {
    sequencer
        .plan()
        .into_iter()
        .map(|(step, command)| format!("{}: {}\n", step, command))
        .collect()
}

/// Write the rendered plan; a closed or failing writer surfaces as `AppError::Io`
pub fn write_plan<W, R>(out: &mut W, sequencer: &Sequencer<R>) -> AppResult<()>
where
    W: Write,
    R: ProcessRunner,
{
    out.write_all(render(sequencer).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::AppError;
    use crate::process::MockProcessRunner;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn default_sequencer() -> Sequencer<MockProcessRunner> {
        let config = Config::from_lookup(|_| None).unwrap();
        Sequencer::new(Arc::new(MockProcessRunner::new()), &config)
    }

    #[test]
    fn test_render_full_sequence() {
        assert_eq!(
            render(&default_sequencer()),
            "seed: python seed.py\nserve: gunicorn wsgi:app\n"
        );
    }

    #[test]
    fn test_render_without_seed() {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.skip_seed = true;
        let sequencer = Sequencer::new(Arc::new(MockProcessRunner::new()), &config);

        assert_eq!(render(&sequencer), "serve: gunicorn wsgi:app\n");
    }

    #[test]
    fn test_write_plan_to_buffer() {
        let mut out = Vec::new();
        write_plan(&mut out, &default_sequencer()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "seed: python seed.py\nserve: gunicorn wsgi:app\n"
        );
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = write_plan(&mut ClosedPipe, &default_sequencer()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
