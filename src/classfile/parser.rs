use anyhow::{bail, Context, Result};

use super::{ClassFile, MemberInfo};

const MAGIC: u32 = 0xCAFE_BABE;

/// Constant pool entry, decoded only as far as the structural model needs.
#[derive(Debug, Clone)]
enum Constant {
    Utf8(String),
    Class { name_index: u16 },
    /// Any entry the model never dereferences.
    Other,
    /// Second slot of a long/double entry.
    Unusable,
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .context("unexpected end of class file")?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }
}

/// Decode one class artifact into its structural model.
///
/// The bytes are consumed in a single forward pass with no partial results:
/// any structural defect fails the whole decode. Class-level attributes after
/// the method table are not modeled.
pub fn parse(bytes: &[u8]) -> Result<ClassFile> {
    let mut cursor = Cursor::new(bytes);

    let magic = cursor.u32().context("class file too short for header")?;
    if magic != MAGIC {
        bail!("not a class file (bad magic 0x{:08X})", magic);
    }
    let _minor = cursor.u16()?;
    let _major = cursor.u16()?;

    let pool = parse_constant_pool(&mut cursor)?;

    let access_flags = cursor.u16().context("truncated access flags")?;
    let this_class = cursor.u16().context("truncated this_class index")?;
    let _super_class = cursor.u16().context("truncated super_class index")?;

    let name = resolve_class_name(&pool, this_class)
        .context("unresolvable this_class entry")?;

    // implemented interfaces are skipped, not modeled
    let interfaces_count = cursor.u16().context("truncated interface table")?;
    cursor
        .skip(interfaces_count as usize * 2)
        .context("truncated interface table")?;

    let fields = parse_members(&mut cursor, &pool).context("malformed field table")?;
    let methods = parse_members(&mut cursor, &pool).context("malformed method table")?;

    Ok(ClassFile {
        access_flags,
        name,
        fields,
        methods,
    })
}

fn parse_constant_pool(cursor: &mut Cursor) -> Result<Vec<Constant>> {
    let count = cursor.u16().context("truncated constant pool count")?;
    if count == 0 {
        bail!("constant pool count must be at least 1");
    }
    // entries are 1-indexed; slot 0 is a placeholder
    let mut pool = vec![Constant::Unusable];
    while pool.len() < count as usize {
        let tag = cursor.u8().context("truncated constant pool")?;
        let entry = match tag {
            // CONSTANT_Utf8
            1 => {
                let len = cursor.u16()? as usize;
                let raw = cursor.take(len).context("truncated Utf8 constant")?;
                let text = std::str::from_utf8(raw)
                    .context("invalid UTF-8 in constant pool")?
                    .to_string();
                Constant::Utf8(text)
            }
            // CONSTANT_Integer / CONSTANT_Float
            3 | 4 => {
                cursor.skip(4)?;
                Constant::Other
            }
            // CONSTANT_Long / CONSTANT_Double occupy two slots
            5 | 6 => {
                cursor.skip(8)?;
                pool.push(Constant::Other);
                Constant::Unusable
            }
            // CONSTANT_Class
            7 => Constant::Class {
                name_index: cursor.u16()?,
            },
            // CONSTANT_String / CONSTANT_MethodType / CONSTANT_Module /
            // CONSTANT_Package
            8 | 16 | 19 | 20 => {
                cursor.skip(2)?;
                Constant::Other
            }
            // CONSTANT_Fieldref / Methodref / InterfaceMethodref /
            // NameAndType / Dynamic / InvokeDynamic
            9 | 10 | 11 | 12 | 17 | 18 => {
                cursor.skip(4)?;
                Constant::Other
            }
            // CONSTANT_MethodHandle
            15 => {
                cursor.skip(3)?;
                Constant::Other
            }
            _ => bail!("unknown constant pool tag {}", tag),
        };
        pool.push(entry);
    }
    Ok(pool)
}

fn parse_members(cursor: &mut Cursor, pool: &[Constant]) -> Result<Vec<MemberInfo>> {
    let count = cursor.u16()?;
    let mut members = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let access_flags = cursor.u16()?;
        let name_index = cursor.u16()?;
        let descriptor_index = cursor.u16()?;
        let name = resolve_utf8(pool, name_index).context("unresolvable member name")?;
        let descriptor =
            resolve_utf8(pool, descriptor_index).context("unresolvable member descriptor")?;
        skip_attributes(cursor)?;
        members.push(MemberInfo {
            access_flags,
            name,
            descriptor,
        });
    }
    Ok(members)
}

fn skip_attributes(cursor: &mut Cursor) -> Result<()> {
    let count = cursor.u16()?;
    for _ in 0..count {
        let _name_index = cursor.u16()?;
        let length = cursor.u32()?;
        cursor.skip(length as usize)?;
    }
    Ok(())
}

fn resolve_utf8(pool: &[Constant], index: u16) -> Result<String> {
    match pool.get(index as usize) {
        Some(Constant::Utf8(text)) => Ok(text.clone()),
        _ => bail!("constant pool index {} is not a Utf8 entry", index),
    }
}

fn resolve_class_name(pool: &[Constant], index: u16) -> Result<String> {
    match pool.get(index as usize) {
        Some(Constant::Class { name_index }) => resolve_utf8(pool, *name_index),
        _ => bail!("constant pool index {} is not a Class entry", index),
    }
}
