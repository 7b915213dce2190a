pub mod command;
pub mod variant;

pub use command::MigrationCommand;
pub use variant::{ExecTarget, OrchestratorVariant};
