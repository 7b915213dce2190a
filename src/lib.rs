pub mod cli;
pub mod executor;
pub mod logger;
pub mod model;
pub mod orchestrator;
