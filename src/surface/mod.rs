pub mod occurrence;
pub mod scanner;

// Re-export main types
pub use occurrence::{ViolationOccurrence, UNKNOWN_LINE};
pub use scanner::scan;
