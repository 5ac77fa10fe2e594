//! Repair of raw candidates into valid options.

use crate::identifier::sanitize;
use crate::options::{
    GenerateOptions, HashEncoding, HashFormat, RawOptions, DEFAULT_PACKAGE, PERMISSION_MASK,
};

/// Map any raw candidate onto options that satisfy every cross-field
/// invariant.
///
/// Total, pure and idempotent: `repair(repair(x).into()) == repair(x)`.
/// Violations are corrected rather than rejected, and the corrections run in
/// a fixed order:
///
/// 1. `package` is sanitized, falling back to `"main"` when nothing is left.
/// 2. `mode` keeps only permission bits.
/// 3. `metadata` is dropped when both `mode` and `mod_time` are set; the
///    mode and time overrides are kept.
/// 4. `hash_format` and `hash_encoding` are reduced modulo their variant
///    counts, which keeps every variant equally reachable from arbitrary
///    integers.
/// 5. `restore` is dropped without `asset_dir`.
/// 6. `debug` and `dev` force `hash_format` to [`HashFormat::NoHash`]. This
///    runs last because it overrides step 4.
pub fn repair(raw: RawOptions) -> GenerateOptions {
    let mut package = sanitize(&raw.package);
    if package.is_empty() {
        package = DEFAULT_PACKAGE.to_string();
    }
    if package != raw.package {
        tracing::trace!(from = %raw.package.escape_debug(), to = %package, "repaired package");
    }

    let mode = raw.mode & PERMISSION_MASK;
    if mode != raw.mode {
        tracing::trace!(from = raw.mode, to = mode, "masked mode");
    }

    let metadata = raw.metadata && (mode == 0 || raw.mod_time == 0);
    if metadata != raw.metadata {
        tracing::trace!(mode, mod_time = raw.mod_time, "disabled metadata");
    }

    // Reduce as unsigned, so negative values wrap into range too.
    let mut hash_format = HashFormat::from_index(raw.hash_format as u64);
    let hash_encoding = HashEncoding::from_index(raw.hash_encoding as u64);

    let restore = raw.restore && raw.asset_dir;
    if restore != raw.restore {
        tracing::trace!("disabled restore without asset_dir");
    }

    if (raw.debug || raw.dev) && hash_format != HashFormat::NoHash {
        tracing::trace!(from = hash_format.name(), "disabled hashing in debug mode");
        hash_format = HashFormat::NoHash;
    }

    GenerateOptions {
        package,
        tags: raw.tags,
        mem_copy: raw.mem_copy,
        compress: raw.compress,
        decompress_once: raw.decompress_once,
        metadata,
        mode,
        mod_time: raw.mod_time,
        asset_dir: raw.asset_dir,
        restore,
        hash_format,
        hash_encoding,
        hash_key: raw.hash_key,
        debug: raw.debug,
        dev: raw.dev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawOptions {
        RawOptions::from(GenerateOptions::default())
    }

    #[test]
    fn test_debug_forces_no_hash() {
        let options = repair(RawOptions {
            debug: true,
            hash_format: HashFormat::HashWithExt.index() as i64,
            ..raw()
        });
        assert_eq!(options.hash_format, HashFormat::NoHash);
    }

    #[test]
    fn test_dev_forces_no_hash_after_reduction() {
        // 7 % 5 == DirHash, which dev must still override.
        let options = repair(RawOptions {
            dev: true,
            hash_format: 7,
            ..raw()
        });
        assert_eq!(options.hash_format, HashFormat::NoHash);
    }

    #[test]
    fn test_restore_requires_asset_dir() {
        let options = repair(RawOptions {
            restore: true,
            asset_dir: false,
            ..raw()
        });
        assert!(!options.restore);

        let options = repair(RawOptions {
            restore: true,
            asset_dir: true,
            ..raw()
        });
        assert!(options.restore);
    }

    #[test]
    fn test_metadata_dropped_with_mode_and_time() {
        let options = repair(RawOptions {
            metadata: true,
            mode: 0o644,
            mod_time: 1000,
            ..raw()
        });
        assert!(!options.metadata);
        assert_eq!(options.mode, 0o644);
        assert_eq!(options.mod_time, 1000);
    }

    #[test]
    fn test_metadata_kept_with_single_override() {
        let with_mode = repair(RawOptions {
            metadata: true,
            mode: 0o600,
            ..raw()
        });
        assert!(with_mode.metadata);

        let with_time = repair(RawOptions {
            metadata: true,
            mod_time: -5,
            ..raw()
        });
        assert!(with_time.metadata);
    }

    #[test]
    fn test_metadata_uses_masked_mode() {
        // Only non-permission bits: masked to 0, so metadata survives.
        let options = repair(RawOptions {
            metadata: true,
            mode: 0o4000 | (1 << 31),
            mod_time: 1000,
            ..raw()
        });
        assert_eq!(options.mode, 0);
        assert!(options.metadata);
    }

    #[test]
    fn test_mode_masked_to_permissions() {
        let options = repair(RawOptions {
            mode: 0o107_755,
            ..raw()
        });
        assert_eq!(options.mode, 0o755);
    }

    #[test]
    fn test_hash_enums_reduced_modulo() {
        let options = repair(RawOptions {
            hash_format: 12,
            hash_encoding: 3,
            ..raw()
        });
        assert_eq!(options.hash_format, HashFormat::DirHash);
        assert_eq!(options.hash_encoding, HashEncoding::Base64Hash);

        let options = repair(RawOptions {
            hash_format: -1,
            hash_encoding: -1,
            ..raw()
        });
        assert_eq!(options.hash_format, HashFormat::from_index(u64::MAX));
        assert_eq!(options.hash_encoding, HashEncoding::Base64Hash);
    }

    #[test]
    fn test_package_sanitized_or_defaulted() {
        let options = repair(RawOptions {
            package: "my-pkg".into(),
            ..raw()
        });
        assert_eq!(options.package, "my_pkg");

        let options = repair(RawOptions {
            package: "42".into(),
            ..raw()
        });
        assert_eq!(options.package, "main");

        let options = repair(RawOptions {
            package: String::new(),
            ..raw()
        });
        assert_eq!(options.package, "main");
    }

    #[test]
    fn test_independent_fields_pass_through() {
        let options = repair(RawOptions {
            tags: "linux && !x".into(),
            mem_copy: true,
            compress: true,
            decompress_once: true,
            hash_key: vec![9, 8, 7],
            ..raw()
        });
        assert_eq!(options.tags, "linux && !x");
        assert!(options.mem_copy && options.compress && options.decompress_once);
        assert_eq!(options.hash_key, vec![9, 8, 7]);
    }

    #[test]
    fn test_valid_options_unchanged() {
        let options = GenerateOptions::default()
            .with_package("assets")
            .with_metadata(true)
            .with_mode(0o644)
            .with_asset_dir(true)
            .with_restore(true)
            .with_hash_format(HashFormat::NameHashSuffix)
            .with_hash_encoding(HashEncoding::Base64Hash);
        assert_eq!(options.clone().repaired(), options);
    }
}
