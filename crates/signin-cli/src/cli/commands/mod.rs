//! CLI command handlers.

pub mod exec;
pub mod interactive;
