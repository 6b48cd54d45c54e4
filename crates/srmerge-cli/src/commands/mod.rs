//! Command handlers. Each `execute` returns a [`crate::error::CliResult`].

pub mod completions;
pub mod config;
pub mod merge;
