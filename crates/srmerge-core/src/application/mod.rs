//! Application layer for srmerge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RuleMerger, RuleFileLocator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Discovery invariants and splicing live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{MergeReport, RenderedRules, RuleFileLocator, RuleMerger};

pub use ports::Filesystem;

pub use error::ApplicationError;
