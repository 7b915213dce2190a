pub mod process;

pub use process::{GENERIC_FAILURE, RunError, run};
