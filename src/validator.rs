//! Invariant checking for generator options.

use crate::identifier::is_identifier;
use crate::options::{GenerateOptions, HashFormat, PERMISSION_MASK};
use std::fmt;

/// A broken cross-field invariant.
///
/// Hash format and encoding ranges are enforced by their types and have no
/// variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `package` is empty or not an identifier.
    InvalidPackage { package: String },
    /// `mode` carries bits outside [`PERMISSION_MASK`].
    NonPermissionMode { mode: u32 },
    /// `metadata` is set together with both a mode and a time override.
    MetadataWithOverrides { mode: u32, mod_time: i64 },
    /// `restore` without `asset_dir`.
    RestoreWithoutAssetDir,
    /// Hashing enabled in debug or dev mode.
    HashInDebug { hash_format: HashFormat },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::InvalidPackage { package } => {
                write!(f, "package {:?} is not a valid identifier", package)
            }
            InvariantViolation::NonPermissionMode { mode } => {
                write!(f, "mode {:#o} has non-permission bits", mode)
            }
            InvariantViolation::MetadataWithOverrides { mode, mod_time } => write!(
                f,
                "metadata enabled with mode {:#o} and mod_time {}",
                mode, mod_time
            ),
            InvariantViolation::RestoreWithoutAssetDir => {
                write!(f, "restore enabled without asset_dir")
            }
            InvariantViolation::HashInDebug { hash_format } => write!(
                f,
                "hash format {} enabled in debug/dev mode",
                hash_format.name()
            ),
        }
    }
}

/// Collect every invariant `options` breaks. Empty means valid.
pub fn validate(options: &GenerateOptions) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if !is_identifier(&options.package) {
        violations.push(InvariantViolation::InvalidPackage {
            package: options.package.clone(),
        });
    }
    if options.mode & !PERMISSION_MASK != 0 {
        violations.push(InvariantViolation::NonPermissionMode { mode: options.mode });
    }
    if options.metadata && options.mode != 0 && options.mod_time != 0 {
        violations.push(InvariantViolation::MetadataWithOverrides {
            mode: options.mode,
            mod_time: options.mod_time,
        });
    }
    if options.restore && !options.asset_dir {
        violations.push(InvariantViolation::RestoreWithoutAssetDir);
    }
    if (options.debug || options.dev) && options.hash_format != HashFormat::NoHash {
        violations.push(InvariantViolation::HashInDebug {
            hash_format: options.hash_format,
        });
    }

    violations
}
