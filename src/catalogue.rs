//! Hand-picked fixed cases.
//!
//! Names are stable golden-file identifiers; do not rename existing cases.

use crate::options::{GenerateOptions, HashEncoding, HashFormat};

/// A named mutation of the baseline options.
#[derive(Debug, Clone, Copy)]
pub struct FixedCase {
    pub name: &'static str,
    pub mutate: fn(GenerateOptions) -> GenerateOptions,
}

impl FixedCase {
    pub const fn new(name: &'static str, mutate: fn(GenerateOptions) -> GenerateOptions) -> Self {
        Self { name, mutate }
    }

    /// Apply this case to `baseline`.
    pub fn apply(&self, baseline: GenerateOptions) -> GenerateOptions {
        (self.mutate)(baseline)
    }
}

/// The fixed case catalogue.
pub struct Catalogue;

impl Catalogue {
    /// Baseline left as is.
    pub fn default_case(base: GenerateOptions) -> GenerateOptions {
        base
    }

    /// The feature bundle that used to be the generator's default.
    pub fn old_default(_base: GenerateOptions) -> GenerateOptions {
        GenerateOptions {
            package: "main".to_string(),
            mem_copy: true,
            compress: true,
            metadata: true,
            asset_dir: true,
            restore: true,
            decompress_once: true,
            ..GenerateOptions::default()
        }
    }

    pub fn debug(base: GenerateOptions) -> GenerateOptions {
        base.with_debug(true)
    }

    pub fn dev(base: GenerateOptions) -> GenerateOptions {
        base.with_dev(true)
    }

    pub fn tags(base: GenerateOptions) -> GenerateOptions {
        base.with_tags("!x")
    }

    pub fn package(base: GenerateOptions) -> GenerateOptions {
        base.with_package("test")
    }

    pub fn compress(base: GenerateOptions) -> GenerateOptions {
        base.with_compress(true)
    }

    pub fn copy(base: GenerateOptions) -> GenerateOptions {
        base.with_mem_copy(true)
    }

    pub fn metadata(base: GenerateOptions) -> GenerateOptions {
        base.with_metadata(true)
    }

    /// Once-only decompression needs compression to mean anything.
    pub fn decompress_once(base: GenerateOptions) -> GenerateOptions {
        base.with_compress(true).with_decompress_once(true)
    }

    pub fn hash_dir(base: GenerateOptions) -> GenerateOptions {
        base.with_hash_format(HashFormat::DirHash)
    }

    pub fn hash_suffix(base: GenerateOptions) -> GenerateOptions {
        base.with_hash_format(HashFormat::NameHashSuffix)
    }

    pub fn hash_hashext(base: GenerateOptions) -> GenerateOptions {
        base.with_hash_format(HashFormat::HashWithExt)
    }

    pub fn hash_unchanged(base: GenerateOptions) -> GenerateOptions {
        base.with_hash_format(HashFormat::NameUnchanged)
    }

    // Encodings and keys only show up in output once names are hashed.

    pub fn hash_enc_b32(base: GenerateOptions) -> GenerateOptions {
        base.with_hash_encoding(HashEncoding::Base32Hash)
            .with_hash_format(HashFormat::DirHash)
    }

    pub fn hash_enc_b64(base: GenerateOptions) -> GenerateOptions {
        base.with_hash_encoding(HashEncoding::Base64Hash)
            .with_hash_format(HashFormat::DirHash)
    }

    pub fn hash_key(base: GenerateOptions) -> GenerateOptions {
        base.with_hash_key([0x00u8, 0x11, 0x22, 0x33])
            .with_hash_format(HashFormat::DirHash)
    }

    pub fn asset_dir(base: GenerateOptions) -> GenerateOptions {
        base.with_asset_dir(true)
    }

    /// All cases in registration order.
    pub fn all() -> Vec<FixedCase> {
        vec![
            FixedCase::new("default", Self::default_case),
            FixedCase::new("old-default", Self::old_default),
            FixedCase::new("debug", Self::debug),
            FixedCase::new("dev", Self::dev),
            FixedCase::new("tags", Self::tags),
            FixedCase::new("package", Self::package),
            FixedCase::new("compress", Self::compress),
            FixedCase::new("copy", Self::copy),
            FixedCase::new("metadata", Self::metadata),
            FixedCase::new("decompress-once", Self::decompress_once),
            FixedCase::new("hash-dir", Self::hash_dir),
            FixedCase::new("hash-suffix", Self::hash_suffix),
            FixedCase::new("hash-hashext", Self::hash_hashext),
            FixedCase::new("hash-unchanged", Self::hash_unchanged),
            FixedCase::new("hash-enc-b32", Self::hash_enc_b32),
            FixedCase::new("hash-enc-b64", Self::hash_enc_b64),
            FixedCase::new("hash-key", Self::hash_key),
            FixedCase::new("asset-dir", Self::asset_dir),
        ]
    }

    pub fn names() -> Vec<&'static str> {
        Self::all().into_iter().map(|case| case.name).collect()
    }

    pub fn get(name: &str) -> Option<FixedCase> {
        Self::all().into_iter().find(|case| case.name == name)
    }
}
