//! CLI subcommand implementations.

pub mod analytics;
pub mod batch;
pub mod history;
pub mod interactive;
pub mod stalk;
