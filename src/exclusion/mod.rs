pub mod matcher;

// Re-export main types
pub use matcher::{ExclusionRule, ExclusionSet};
