//! CLI subcommands.

pub mod analyze;
pub mod categories;
pub mod config;
pub mod sample;
pub mod validate;
