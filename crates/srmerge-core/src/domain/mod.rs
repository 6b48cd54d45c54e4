//! Core domain layer for srmerge.
//!
//! Pure logic only: entry classification, the discovery invariants, and the
//! splice algorithm. All I/O happens behind the ports in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem calls; paths are only compared, never opened
//! - **No async**: Domain logic is synchronous
//! - **Immutable results**: `RuleFileSet` and `Splice` are Clone + PartialEq
pub mod constants;
pub mod entities;
pub mod error;
pub mod splice;

pub use entities::{
    entry::EntryKind,
    rule_set::{RuleFileSet, RuleFileSetBuilder},
};

pub use error::DomainError;

pub use splice::{Splice, indent_fragments, join_fragments, split_trailing_closers};
