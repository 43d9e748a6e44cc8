use anyhow::{bail, Result};

/// One parsed type from a field or method descriptor.
///
/// Only object references carry a name: primitives, void and arrays are
/// classified but never materialize a type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Void,
    /// B, C, D, F, I, J, S or Z.
    Primitive(char),
    /// Array of any element type and dimension; the element type is
    /// intentionally not inspected.
    Array,
    /// Object reference with its fully-qualified dotted name.
    Object(String),
}

impl TypeDescriptor {
    /// The dotted type token, for object references only.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Object(name) => Some(name),
            _ => None,
        }
    }
}

/// Parsed method descriptor: parameter types in declared order plus the
/// return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub parameters: Vec<TypeDescriptor>,
    pub return_type: TypeDescriptor,
}

/// Parse a field descriptor like `Ljava/util/List;`, `I` or `[[D`.
pub fn parse_field_descriptor(desc: &str) -> Result<TypeDescriptor> {
    let bytes = desc.as_bytes();
    let (ty, consumed) = parse_type(bytes, 0)?;
    if consumed != bytes.len() {
        bail!("trailing characters in field descriptor '{}'", desc);
    }
    if ty == TypeDescriptor::Void {
        bail!("void is not a valid field type in descriptor '{}'", desc);
    }
    Ok(ty)
}

/// Parse a method descriptor like `(Ljava/lang/String;I)V`.
pub fn parse_method_descriptor(desc: &str) -> Result<MethodDescriptor> {
    let bytes = desc.as_bytes();
    if bytes.first() != Some(&b'(') {
        bail!("method descriptor '{}' does not start with '('", desc);
    }
    let mut pos = 1;
    let mut parameters = Vec::new();
    loop {
        match bytes.get(pos) {
            Some(b')') => {
                pos += 1;
                break;
            }
            Some(_) => {
                let (ty, next) = parse_type(bytes, pos)?;
                if ty == TypeDescriptor::Void {
                    bail!("void parameter in method descriptor '{}'", desc);
                }
                parameters.push(ty);
                pos = next;
            }
            None => bail!("unterminated parameter list in method descriptor '{}'", desc),
        }
    }
    let (return_type, consumed) = parse_type(bytes, pos)?;
    if consumed != bytes.len() {
        bail!("trailing characters in method descriptor '{}'", desc);
    }
    Ok(MethodDescriptor {
        parameters,
        return_type,
    })
}

/// Parse one type starting at `pos`, returning it and the index just past it.
fn parse_type(bytes: &[u8], pos: usize) -> Result<(TypeDescriptor, usize)> {
    match bytes.get(pos) {
        Some(b'V') => Ok((TypeDescriptor::Void, pos + 1)),
        Some(&(ch @ (b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z'))) => {
            Ok((TypeDescriptor::Primitive(ch as char), pos + 1))
        }
        Some(b'L') => {
            let start = pos + 1;
            let end = bytes[start..]
                .iter()
                .position(|&b| b == b';')
                .map(|off| start + off);
            match end {
                Some(end) if end > start => {
                    let internal = std::str::from_utf8(&bytes[start..end])?;
                    Ok((TypeDescriptor::Object(internal.replace('/', ".")), end + 1))
                }
                Some(_) => bail!("empty object type in descriptor"),
                None => bail!("unterminated object type in descriptor"),
            }
        }
        Some(b'[') => {
            // consume the dimensions and the element type, report only the
            // array sort
            let mut depth = pos;
            while bytes.get(depth) == Some(&b'[') {
                depth += 1;
            }
            let (_, next) = parse_type(bytes, depth)?;
            Ok((TypeDescriptor::Array, next))
        }
        Some(&other) => bail!("unexpected character '{}' in descriptor", other as char),
        None => bail!("truncated descriptor"),
    }
}
