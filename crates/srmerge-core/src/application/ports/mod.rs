//! Application ports (traits) for external dependencies.
//!
//! Adapters in `srmerge-adapters` implement these.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory listing, reads, writes

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
