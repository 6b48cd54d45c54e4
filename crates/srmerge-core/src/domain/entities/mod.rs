pub mod entry;
pub mod rule_set;

pub use entry::*;
pub use rule_set::*;
