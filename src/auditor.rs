use std::io::Read;

use anyhow::{Context, Result};

use crate::classfile;
use crate::exclusion::ExclusionSet;
use crate::surface::{self, ViolationOccurrence};

/// Checks class artifacts against one compiled exclusion set.
///
/// Compile once, check many: the auditor holds no per-check state, so one
/// instance can be shared read-only across parallel checks. Each check is a
/// pure function of the artifact bytes and the exclusion rules - the same
/// inputs always yield the same ordered occurrence list.
#[derive(Debug, Clone)]
pub struct InterfaceAuditor {
    exclusions: ExclusionSet,
}

impl InterfaceAuditor {
    /// Compile the given glob strings into an exclusion set.
    pub fn new<I, S>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            exclusions: ExclusionSet::compile(exclusions),
        }
    }

    /// Reuse an already-compiled exclusion set.
    pub fn with_exclusions(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Check one class artifact, returning its violations in discovery
    /// order. Malformed artifacts fail the whole check; no partial results.
    pub fn check_bytes(&self, bytes: &[u8]) -> Result<Vec<ViolationOccurrence>> {
        let class = classfile::parse(bytes)?;
        surface::scan(&class, &self.exclusions)
    }

    /// Check a class artifact from a reader. The input is buffered fully
    /// before decoding begins; there is no streaming decode.
    pub fn check_reader<R: Read>(&self, mut reader: R) -> Result<Vec<ViolationOccurrence>> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .context("failed to read class artifact")?;
        self.check_bytes(&bytes)
    }
}
