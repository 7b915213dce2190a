use log::{debug, error};
use std::process::{Command, ExitStatus};

/// Exit code for every failure that is not the child's own.
pub const GENERIC_FAILURE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("No command to run")]
    EmptyCommand,

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run `args` with inherited stdio and return the child's exit code.
///
/// The trace line goes to stdout regardless of log filtering. Launch failures
/// are logged and reported as [`GENERIC_FAILURE`].
pub fn run(args: &[String]) -> i32 {
    println!("Running: {}", args.join(" "));

    match launch(args) {
        Ok(status) => {
            debug!("Child exited with {}", status);
            exit_code(status)
        }
        Err(e) => {
            error!("{}", e);
            GENERIC_FAILURE
        }
    }
}

/// Spawn the child and block until it exits.
pub fn launch(args: &[String]) -> Result<ExitStatus, RunError> {
    let (program, rest) = args.split_first().ok_or(RunError::EmptyCommand)?;

    Command::new(program)
        .args(rest)
        .status()
        .map_err(|source| RunError::Launch {
            program: program.clone(),
            source,
        })
}

// A child killed by a signal has no code.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(GENERIC_FAILURE)
}
