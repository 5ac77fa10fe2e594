//! Generator option schema.

use serde::{Deserialize, Serialize};

/// Bits of `mode` that may be set on a valid configuration.
pub const PERMISSION_MASK: u32 = 0o777;

/// Package name used when sanitization leaves nothing behind.
pub const DEFAULT_PACKAGE: &str = "main";

/// How asset names are rewritten with their content hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashFormat {
    /// Hashing disabled.
    #[default]
    NoHash,
    /// Hash computed but the name is left unchanged.
    NameUnchanged,
    /// Hash used as a directory component.
    DirHash,
    /// Hash appended to the file stem.
    NameHashSuffix,
    /// Hash replaces the stem, extension kept.
    HashWithExt,
}

impl HashFormat {
    /// All variants in declaration order.
    pub const ALL: [HashFormat; 5] = [
        HashFormat::NoHash,
        HashFormat::NameUnchanged,
        HashFormat::DirHash,
        HashFormat::NameHashSuffix,
        HashFormat::HashWithExt,
    ];

    /// Number of variants.
    pub const COUNT: u64 = Self::ALL.len() as u64;

    /// Variant at `index`, reduced modulo [`HashFormat::COUNT`].
    pub fn from_index(index: u64) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }

    /// Declaration index of this variant.
    pub fn index(self) -> u64 {
        self as u64
    }

    /// Get a short name for this format.
    pub fn name(self) -> &'static str {
        match self {
            HashFormat::NoHash => "none",
            HashFormat::NameUnchanged => "unchanged",
            HashFormat::DirHash => "dir",
            HashFormat::NameHashSuffix => "namesuffix",
            HashFormat::HashWithExt => "hashext",
        }
    }
}

/// Text encoding of the hash when it is embedded in names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashEncoding {
    #[default]
    Base32Hash,
    Base64Hash,
}

impl HashEncoding {
    /// All variants in declaration order.
    pub const ALL: [HashEncoding; 2] = [HashEncoding::Base32Hash, HashEncoding::Base64Hash];

    /// Number of variants.
    pub const COUNT: u64 = Self::ALL.len() as u64;

    /// Variant at `index`, reduced modulo [`HashEncoding::COUNT`].
    pub fn from_index(index: u64) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }

    pub fn index(self) -> u64 {
        self as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            HashEncoding::Base32Hash => "base32",
            HashEncoding::Base64Hash => "base64",
        }
    }
}

/// Options controlling a single code generator run.
///
/// Every instance produced by [`crate::repair`] or [`crate::Catalogue`]
/// satisfies the cross-field invariants checked by [`crate::validate`].
/// The hash enumerations are typed, so an out-of-range value cannot be held
/// here at all; see [`RawOptions`] for the unconstrained form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerateOptions {
    // === Packaging ===
    /// Name of the emitted package.
    pub package: String,

    /// Build constraint expression written at the top of the output.
    pub tags: String,

    // === Memory and compression ===
    /// Copy asset data instead of referencing the embedded string.
    pub mem_copy: bool,

    pub compress: bool,

    /// Decompress each asset at most once and cache the result.
    pub decompress_once: bool,

    // === Metadata ===
    /// Record size, mode and modification time per asset.
    pub metadata: bool,

    /// Fixed permission bits recorded for every asset (0 = use the file's).
    pub mode: u32,

    /// Fixed modification time in seconds (0 = use the file's).
    pub mod_time: i64,

    // === Asset directory ===
    pub asset_dir: bool,

    /// Emit restore helpers. Only meaningful together with `asset_dir`.
    pub restore: bool,

    // === Hashing ===
    pub hash_format: HashFormat,

    pub hash_encoding: HashEncoding,

    /// Key mixed into the content hash.
    pub hash_key: Vec<u8>,

    // === Debug ===
    /// Read assets from disk at runtime instead of embedding them.
    pub debug: bool,

    /// Like `debug`, but with paths relative to a runtime root.
    pub dev: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            tags: String::new(),
            mem_copy: false,
            compress: false,
            decompress_once: false,
            metadata: false,
            mode: 0,
            mod_time: 0,
            asset_dir: false,
            restore: false,
            hash_format: HashFormat::NoHash,
            hash_encoding: HashEncoding::Base32Hash,
            hash_key: Vec::new(),
            debug: false,
            dev: false,
        }
    }
}

impl GenerateOptions {
    // === Builder methods ===

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_mem_copy(mut self, enabled: bool) -> Self {
        self.mem_copy = enabled;
        self
    }

    pub fn with_compress(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    pub fn with_decompress_once(mut self, enabled: bool) -> Self {
        self.decompress_once = enabled;
        self
    }

    pub fn with_metadata(mut self, enabled: bool) -> Self {
        self.metadata = enabled;
        self
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_mod_time(mut self, mod_time: i64) -> Self {
        self.mod_time = mod_time;
        self
    }

    pub fn with_asset_dir(mut self, enabled: bool) -> Self {
        self.asset_dir = enabled;
        self
    }

    pub fn with_restore(mut self, enabled: bool) -> Self {
        self.restore = enabled;
        self
    }

    pub fn with_hash_format(mut self, format: HashFormat) -> Self {
        self.hash_format = format;
        self
    }

    pub fn with_hash_encoding(mut self, encoding: HashEncoding) -> Self {
        self.hash_encoding = encoding;
        self
    }

    pub fn with_hash_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.hash_key = key.into();
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn with_dev(mut self, enabled: bool) -> Self {
        self.dev = enabled;
        self
    }

    /// Run these options back through [`crate::repair`].
    pub fn repaired(self) -> Self {
        crate::repair(self.into())
    }
}

/// Unconstrained option candidate, as produced by the random sampler.
///
/// Mirrors [`GenerateOptions`] field for field, except that the hash
/// enumerations are carried as their underlying integers so that any sampled
/// value is representable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawOptions {
    pub package: String,
    pub tags: String,
    pub mem_copy: bool,
    pub compress: bool,
    pub decompress_once: bool,
    pub metadata: bool,
    pub mode: u32,
    pub mod_time: i64,
    pub asset_dir: bool,
    pub restore: bool,
    pub hash_format: i64,
    pub hash_encoding: i64,
    pub hash_key: Vec<u8>,
    pub debug: bool,
    pub dev: bool,
}

impl From<GenerateOptions> for RawOptions {
    fn from(options: GenerateOptions) -> Self {
        Self {
            package: options.package,
            tags: options.tags,
            mem_copy: options.mem_copy,
            compress: options.compress,
            decompress_once: options.decompress_once,
            metadata: options.metadata,
            mode: options.mode,
            mod_time: options.mod_time,
            asset_dir: options.asset_dir,
            restore: options.restore,
            hash_format: options.hash_format.index() as i64,
            hash_encoding: options.hash_encoding.index() as i64,
            hash_key: options.hash_key,
            debug: options.debug,
            dev: options.dev,
        }
    }
}
