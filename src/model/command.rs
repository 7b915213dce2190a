use crate::orchestrator::router::RouteError;

pub const DEFAULT_REVISION_MESSAGE: &str = "Auto-generated migration";
pub const DEFAULT_UPGRADE_TARGET: &str = "head";
pub const DEFAULT_DOWNGRADE_TARGET: &str = "-1";

const MIGRATION_TOOL: &str = "alembic";
const INIT_SNIPPET: &str =
    "import asyncio; from app.database import create_tables; asyncio.run(create_tables())";
const CONNECTIVITY_SCRIPT: &str = "test_db_connection.py";

/// The closed set of commands forwarded into the service container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationCommand {
    Init,
    Revision { message: Option<String> },
    Upgrade { target: Option<String> },
    Downgrade { target: Option<String> },
    Current,
    History,
    Test,
}

impl MigrationCommand {
    /// Builds a command from its name and an optional positional value.
    ///
    /// The positional is taken verbatim and ignored by commands that take none.
    pub fn from_name(name: &str, arg: Option<&str>) -> Result<Self, RouteError> {
        let arg = arg.map(str::to_string);
        let command = match name {
            "init" => Self::Init,
            "revision" => Self::Revision { message: arg },
            "upgrade" => Self::Upgrade { target: arg },
            "downgrade" => Self::Downgrade { target: arg },
            "current" => Self::Current,
            "history" => Self::History,
            "test" => Self::Test,
            other => return Err(RouteError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Revision { .. } => "revision",
            Self::Upgrade { .. } => "upgrade",
            Self::Downgrade { .. } => "downgrade",
            Self::Current => "current",
            Self::History => "history",
            Self::Test => "test",
        }
    }

    pub fn takes_arg(&self) -> bool {
        matches!(
            self,
            Self::Revision { .. } | Self::Upgrade { .. } | Self::Downgrade { .. }
        )
    }

    /// Arguments run inside the service container, defaults applied.
    pub fn tool_args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            Self::Init => vec!["python", "-c", INIT_SNIPPET],
            Self::Revision { message } => vec![
                MIGRATION_TOOL,
                "revision",
                "--autogenerate",
                "-m",
                message.as_deref().unwrap_or(DEFAULT_REVISION_MESSAGE),
            ],
            Self::Upgrade { target } => vec![
                MIGRATION_TOOL,
                "upgrade",
                target.as_deref().unwrap_or(DEFAULT_UPGRADE_TARGET),
            ],
            Self::Downgrade { target } => vec![
                MIGRATION_TOOL,
                "downgrade",
                target.as_deref().unwrap_or(DEFAULT_DOWNGRADE_TARGET),
            ],
            Self::Current => vec![MIGRATION_TOOL, "current"],
            Self::History => vec![MIGRATION_TOOL, "history"],
            Self::Test => vec!["python", CONNECTIVITY_SCRIPT],
        };
        args.into_iter().map(String::from).collect()
    }
}
