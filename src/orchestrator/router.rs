//! Maps command names and positional values to the argument list run on the host.
//!
//! [`resolve`] checks the name before anything is launched; [`route`] builds the
//! argument list once the exec target is known.

use crate::model::{ExecTarget, MigrationCommand};

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Full argument list for `command` executed in `target`.
pub fn route(command: &MigrationCommand, target: &ExecTarget) -> Vec<String> {
    let mut args = target.prefix();
    args.extend(command.tool_args());
    args
}

/// Resolve a command name, taking the first of `args` as its positional value.
///
/// Further values are ignored.
pub fn resolve(name: &str, args: &[String]) -> Result<MigrationCommand, RouteError> {
    MigrationCommand::from_name(name, args.first().map(String::as_str))
}

/// [`resolve`] then [`route`].
pub fn route_by_name(
    name: &str,
    args: &[String],
    target: &ExecTarget,
) -> Result<Vec<String>, RouteError> {
    let command = resolve(name, args)?;
    Ok(route(&command, target))
}
