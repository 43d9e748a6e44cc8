pub mod auditor;
pub mod classfile;
pub mod config;
pub mod exclusion;
pub mod init;
pub mod output;
pub mod surface;

// Re-export main types for easy access
pub use auditor::InterfaceAuditor;
pub use classfile::{ClassFile, MemberInfo};
pub use exclusion::{ExclusionRule, ExclusionSet};
pub use output::{AuditReport, ClassAudit};
pub use surface::{ViolationOccurrence, UNKNOWN_LINE};
