use std::fs;
use std::process::Command;
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_jvm-interface-auditor").to_string();

        Self { dir, binary_path }
    }

    /// Write a synthesized class file under the project's classes directory.
    pub fn write_class(&self, rel_path: &str, bytes: &[u8]) {
        let path = self.dir.path().join("classes").join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create class dir");
        fs::write(path, bytes).expect("Failed to write class file");
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.dir.path().join("interface-audit.toml"), content)
            .expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> std::process::Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run jvm-interface-auditor")
    }

}

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_STATIC: u16 = 0x0008;

/// Builds a minimal but structurally valid class file: constant pool with
/// Utf8/Class entries for the header and members, no attributes.
pub struct ClassFileBuilder {
    access_flags: u16,
    name: String,
    fields: Vec<(u16, String, String)>,
    methods: Vec<(u16, String, String)>,
}

impl ClassFileBuilder {
    pub fn new(internal_name: &str) -> Self {
        Self {
            access_flags: ACC_PUBLIC,
            name: internal_name.to_string(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn access_flags(mut self, flags: u16) -> Self {
        self.access_flags = flags;
        self
    }

    pub fn field(mut self, access: u16, name: &str, descriptor: &str) -> Self {
        self.fields
            .push((access, name.to_string(), descriptor.to_string()));
        self
    }

    pub fn method(mut self, access: u16, name: &str, descriptor: &str) -> Self {
        self.methods
            .push((access, name.to_string(), descriptor.to_string()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut pool: Vec<Vec<u8>> = Vec::new();

        fn push_utf8(pool: &mut Vec<Vec<u8>>, text: &str) -> u16 {
            let mut entry = vec![1u8];
            entry.extend((text.len() as u16).to_be_bytes());
            entry.extend(text.as_bytes());
            pool.push(entry);
            pool.len() as u16
        }
        fn push_class(pool: &mut Vec<Vec<u8>>, name: &str) -> u16 {
            let name_idx = push_utf8(pool, name);
            let mut entry = vec![7u8];
            entry.extend(name_idx.to_be_bytes());
            pool.push(entry);
            pool.len() as u16
        }
        fn encode_members(pool: &mut Vec<Vec<u8>>, members: &[(u16, String, String)]) -> Vec<u8> {
            let mut out = (members.len() as u16).to_be_bytes().to_vec();
            for (access, name, descriptor) in members {
                let name_idx = push_utf8(pool, name);
                let desc_idx = push_utf8(pool, descriptor);
                out.extend(access.to_be_bytes());
                out.extend(name_idx.to_be_bytes());
                out.extend(desc_idx.to_be_bytes());
                out.extend(0u16.to_be_bytes()); // attributes_count
            }
            out
        }

        let this_class = push_class(&mut pool, &self.name);
        let super_class = push_class(&mut pool, "java/lang/Object");
        let field_bytes = encode_members(&mut pool, &self.fields);
        let method_bytes = encode_members(&mut pool, &self.methods);

        let mut bytes = Vec::new();
        bytes.extend(0xCAFE_BABEu32.to_be_bytes());
        bytes.extend(0u16.to_be_bytes()); // minor version
        bytes.extend(52u16.to_be_bytes()); // major version (Java 8)
        bytes.extend(((pool.len() + 1) as u16).to_be_bytes());
        for entry in &pool {
            bytes.extend(entry);
        }
        bytes.extend(self.access_flags.to_be_bytes());
        bytes.extend(this_class.to_be_bytes());
        bytes.extend(super_class.to_be_bytes());
        bytes.extend(0u16.to_be_bytes()); // interfaces_count
        bytes.extend(field_bytes);
        bytes.extend(method_bytes);
        bytes.extend(0u16.to_be_bytes()); // class attributes_count
        bytes
    }
}

/// The classic four-site fixture: public field, method return, method
/// argument, constructor argument, all exposing java.util.ArrayList.
pub fn array_list_test_class() -> Vec<u8> {
    ClassFileBuilder::new("com/acme/ArrayListTestClass")
        .field(ACC_PUBLIC | ACC_STATIC, "field", "Ljava/util/ArrayList;")
        .method(
            ACC_PUBLIC | ACC_STATIC,
            "methodReturn",
            "()Ljava/util/ArrayList;",
        )
        .method(
            ACC_PUBLIC | ACC_STATIC,
            "methodArgument",
            "(Ljava/util/ArrayList;)V",
        )
        .method(ACC_PUBLIC, "<init>", "(Ljava/util/ArrayList;)V")
        .build()
}
