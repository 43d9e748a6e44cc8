use anyhow::{Context, Result};

use crate::classfile::descriptor::{parse_field_descriptor, parse_method_descriptor, TypeDescriptor};
use crate::classfile::ClassFile;
use crate::exclusion::ExclusionSet;

use super::{ViolationOccurrence, UNKNOWN_LINE};

/// Scan a decoded class for interface leakage.
///
/// Walks the public/protected surface once: every public or protected field
/// and method of a public or protected class contributes the object-typed
/// tokens of its descriptor, in declaration order (fields first, then
/// methods; per method the return type before the parameters). Tokens
/// matched by the exclusion set are dropped, the rest become occurrences.
///
/// A non-public class reports nothing: its members cannot be part of any
/// consumer-visible surface regardless of their own declared access.
/// Implemented interfaces and checked exceptions are not inspected.
pub fn scan(class: &ClassFile, exclusions: &ExclusionSet) -> Result<Vec<ViolationOccurrence>> {
    let public_class = class.is_public_surface();
    let mut occurrences = Vec::new();

    for field in &class.fields {
        if public_class && field.is_public_or_protected() {
            let ty = parse_field_descriptor(&field.descriptor).with_context(|| {
                format!(
                    "malformed descriptor '{}' for field '{}' in class {}",
                    field.descriptor,
                    field.name,
                    class.class_name()
                )
            })?;
            check_token(&ty, exclusions, &mut occurrences);
        }
    }

    for method in &class.methods {
        if public_class && method.is_public_or_protected() {
            let desc = parse_method_descriptor(&method.descriptor).with_context(|| {
                format!(
                    "malformed descriptor '{}' for method '{}' in class {}",
                    method.descriptor,
                    method.name,
                    class.class_name()
                )
            })?;
            check_token(&desc.return_type, exclusions, &mut occurrences);
            for parameter in &desc.parameters {
                check_token(parameter, exclusions, &mut occurrences);
            }
        }
    }

    Ok(occurrences)
}

/// Append an occurrence for object-typed, non-excluded tokens. Primitives,
/// void and arrays never materialize a token.
fn check_token(
    ty: &TypeDescriptor,
    exclusions: &ExclusionSet,
    occurrences: &mut Vec<ViolationOccurrence>,
) {
    let Some(token) = ty.object_name() else {
        return;
    };
    if exclusions.is_excluded(token) {
        return;
    }
    occurrences.push(ViolationOccurrence::new("", UNKNOWN_LINE, token));
}
