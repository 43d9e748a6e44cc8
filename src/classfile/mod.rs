use serde::{Deserialize, Serialize};

pub mod descriptor;
pub mod parser;

// Re-export from parser
pub use descriptor::{MethodDescriptor, TypeDescriptor};
pub use parser::parse;

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;

/// Decoded structural model of one class artifact: header plus declared
/// fields and methods, in declaration order. Binary decoding stops here;
/// policy evaluation happens in a separate pass over this model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassFile {
    pub access_flags: u16,
    /// Internal (slash-delimited) qualified name, e.g. `java/util/ArrayList`.
    pub name: String,
    pub fields: Vec<MemberInfo>,
    pub methods: Vec<MemberInfo>,
}

/// One declared field or method: access flags, name and raw descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberInfo {
    pub access_flags: u16,
    pub name: String,
    pub descriptor: String,
}

impl ClassFile {
    /// Whether the class itself is part of a consumer-visible surface.
    pub fn is_public_surface(&self) -> bool {
        self.access_flags & (ACC_PUBLIC | ACC_PROTECTED) != 0
    }

    /// Fully-qualified dotted class name.
    pub fn class_name(&self) -> String {
        self.name.replace('/', ".")
    }

    /// Dotted package name, split at the last separator of the structural
    /// name. Empty string for the default package.
    pub fn package_name(&self) -> String {
        match self.name.rfind('/') {
            Some(idx) => self.name[..idx].replace('/', "."),
            None => String::new(),
        }
    }
}

impl MemberInfo {
    pub fn is_public_or_protected(&self) -> bool {
        self.access_flags & (ACC_PUBLIC | ACC_PROTECTED) != 0
    }
}
