use env_logger::{Builder, Env, Target};
use log::Level;
use std::io::Write;

/// Overrides the log filter, e.g. `COMPOSE_MIGRATE_LOG=debug`.
pub const LOG_ENV: &str = "COMPOSE_MIGRATE_LOG";

/// Diagnostics go to stderr so stdout carries only the trace line and the
/// child's own output.
pub fn setup_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter))
        .target(Target::Stderr)
        .format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "error: {}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
}
