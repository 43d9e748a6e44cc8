use serde::{Deserialize, Serialize};

/// Sentinel line number for occurrences whose source line is not known.
/// Distinct from every valid line number.
pub const UNKNOWN_LINE: i32 = -1;

/// One non-excluded type token found at one occurrence site of a class's
/// public surface. Immutable once created; the same token may appear in
/// multiple occurrences across different sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationOccurrence {
    /// Name of the offending member. Empty when the token was found in a
    /// bare type context rather than attributed to a named member.
    pub member_name: String,
    /// Originating source line, or [`UNKNOWN_LINE`].
    pub line_number: i32,
    /// Fully-qualified dotted name of the leaked type.
    pub type_token: String,
}

impl ViolationOccurrence {
    pub fn new(member_name: impl Into<String>, line_number: i32, type_token: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
            line_number,
            type_token: type_token.into(),
        }
    }
}
