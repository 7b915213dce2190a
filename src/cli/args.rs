use clap::Parser;

use crate::model::variant::DEFAULT_SERVICE;

const COMMANDS_HELP: &str = "\
Commands:
  init                 Create database tables through the application's init routine
  revision [MESSAGE]   Autogenerate a migration [default: \"Auto-generated migration\"]
  upgrade [TARGET]     Apply migrations up to TARGET [default: head]
  downgrade [TARGET]   Roll migrations back to TARGET [default: -1]
  current              Show the current migration revision
  history              Show the migration history
  test                 Run the database connectivity check

Options must come before COMMAND; everything after it is passed through as-is.";

/// CLI entry point for compose-migrate
#[derive(Parser, Debug)]
#[command(
    name = "compose-migrate",
    version,
    about = "Run Alembic migrations inside a Docker Compose service",
    arg_required_else_help = true,
    after_help = COMMANDS_HELP
)]
pub struct Cli {
    /// Service container to exec into
    #[arg(long, env = "COMPOSE_MIGRATE_SERVICE", default_value = DEFAULT_SERVICE)]
    pub service: String,

    /// Compose file passed to docker compose with -f
    #[arg(short = 'f', long, env = "COMPOSE_MIGRATE_FILE")]
    pub file: Option<String>,

    /// Print the command that would run without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command name followed by its optional argument
    #[arg(
        value_name = "COMMAND [ARG]",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    pub fn command_name(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    /// Values after the command name, untouched.
    pub fn command_args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }
}
