//! Field enumeration for the option schema.

use crate::error::FixtureError;
use crate::options::RawOptions;
use std::fmt;

/// One field of [`RawOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Package,
    Tags,
    MemCopy,
    Compress,
    DecompressOnce,
    Metadata,
    Mode,
    ModTime,
    AssetDir,
    Restore,
    HashFormat,
    HashEncoding,
    HashKey,
    Debug,
    Dev,
}

impl Field {
    /// All fields in declaration order. Sampling follows this order.
    pub const ALL: [Field; 15] = [
        Field::Package,
        Field::Tags,
        Field::MemCopy,
        Field::Compress,
        Field::DecompressOnce,
        Field::Metadata,
        Field::Mode,
        Field::ModTime,
        Field::AssetDir,
        Field::Restore,
        Field::HashFormat,
        Field::HashEncoding,
        Field::HashKey,
        Field::Debug,
        Field::Dev,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Underlying value type of this field.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::Package | Field::Tags => FieldKind::String,
            Field::HashKey => FieldKind::Bytes,
            Field::Mode => FieldKind::Mode,
            Field::ModTime | Field::HashFormat | Field::HashEncoding => FieldKind::Int,
            Field::MemCopy
            | Field::Compress
            | Field::DecompressOnce
            | Field::Metadata
            | Field::AssetDir
            | Field::Restore
            | Field::Debug
            | Field::Dev => FieldKind::Bool,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Package => "package",
            Field::Tags => "tags",
            Field::MemCopy => "mem_copy",
            Field::Compress => "compress",
            Field::DecompressOnce => "decompress_once",
            Field::Metadata => "metadata",
            Field::Mode => "mode",
            Field::ModTime => "mod_time",
            Field::AssetDir => "asset_dir",
            Field::Restore => "restore",
            Field::HashFormat => "hash_format",
            Field::HashEncoding => "hash_encoding",
            Field::HashKey => "hash_key",
            Field::Debug => "debug",
            Field::Dev => "dev",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    String,
    Bytes,
    /// Signed 64-bit integer.
    Int,
    /// Unsigned 32-bit file mode.
    Mode,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Bool => "bool",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Int => "int",
            FieldKind::Mode => "mode",
        };
        f.write_str(name)
    }
}

/// A sampled value for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Int(i64),
    Mode(u32),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::String(_) => FieldKind::String,
            FieldValue::Bytes(_) => FieldKind::Bytes,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Mode(_) => FieldKind::Mode,
        }
    }
}

impl RawOptions {
    /// Store `value` into `field`.
    ///
    /// Fails with [`FixtureError::FieldTypeMismatch`] if the value's kind is
    /// not the field's kind; `self` is left untouched in that case.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FixtureError> {
        let mismatch = |found: FieldKind| FixtureError::FieldTypeMismatch {
            field,
            expected: field.kind(),
            found,
        };

        match (field, value) {
            (Field::Package, FieldValue::String(v)) => self.package = v,
            (Field::Tags, FieldValue::String(v)) => self.tags = v,
            (Field::MemCopy, FieldValue::Bool(v)) => self.mem_copy = v,
            (Field::Compress, FieldValue::Bool(v)) => self.compress = v,
            (Field::DecompressOnce, FieldValue::Bool(v)) => self.decompress_once = v,
            (Field::Metadata, FieldValue::Bool(v)) => self.metadata = v,
            (Field::Mode, FieldValue::Mode(v)) => self.mode = v,
            (Field::ModTime, FieldValue::Int(v)) => self.mod_time = v,
            (Field::AssetDir, FieldValue::Bool(v)) => self.asset_dir = v,
            (Field::Restore, FieldValue::Bool(v)) => self.restore = v,
            (Field::HashFormat, FieldValue::Int(v)) => self.hash_format = v,
            (Field::HashEncoding, FieldValue::Int(v)) => self.hash_encoding = v,
            (Field::HashKey, FieldValue::Bytes(v)) => self.hash_key = v,
            (Field::Debug, FieldValue::Bool(v)) => self.debug = v,
            (Field::Dev, FieldValue::Bool(v)) => self.dev = v,
            (_, other) => return Err(mismatch(other.kind())),
        }
        Ok(())
    }
}
