//! Application services - orchestrate use cases.

pub mod locator_service;
pub mod merge_service;

pub use locator_service::RuleFileLocator;
pub use merge_service::{MergeReport, RenderedRules, RuleMerger};
