//! srmerge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for srmerge, the
//! tool that assembles per-feature security rule fragments into a single
//! deployable rules file.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           srmerge-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (RuleMerger, RuleFileLocator)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     srmerge-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (RuleFileSet, classify, splice)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use srmerge_core::application::RuleMerger;
//!
//! // `filesystem` is any `Box<dyn Filesystem>` adapter.
//! let merger = RuleMerger::new(filesystem);
//! merger
//!     .merge("./rules", "firestore.rules.template", "firestore.rules")
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MergeReport, RenderedRules, RuleFileLocator, RuleMerger, ports::Filesystem,
    };
    pub use crate::domain::{EntryKind, RuleFileSet, Splice};
    pub use crate::error::{SrMergeError, SrMergeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
