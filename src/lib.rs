//! Option fixtures for a binary-asset-to-source code generator.
//!
//! This crate provides:
//! - A fixed catalogue of named, hand-picked option sets ([`Catalogue`])
//! - Seeded full-domain sampling of raw option candidates ([`RandomSampler`])
//! - Deterministic repair of candidates into valid options ([`repair`])
//! - A merged, insertion-ordered fixture set for golden-file tests ([`build`])
//!
//! # Quick Start
//!
//! ```
//! use bindata_fixtures::{build, validate, Catalogue};
//!
//! let fixtures = build(&Catalogue::all(), 25).unwrap();
//! assert_eq!(fixtures.len(), Catalogue::all().len() + 25);
//!
//! for fixture in &fixtures {
//!     assert!(validate(&fixture.options).is_empty(), "{}", fixture.name);
//! }
//! ```

mod catalogue;
mod config;
mod error;
pub mod generator;
pub mod identifier;
mod options;
mod registry;
mod repair;
mod validator;

pub use catalogue::{Catalogue, FixedCase};
pub use config::{FixtureConfig, DEFAULT_RANDOM_COUNT};
pub use error::FixtureError;
pub use generator::{Field, FieldKind, FieldValue, RandomSampler, SampleTable};
pub use options::{
    GenerateOptions, HashEncoding, HashFormat, RawOptions, DEFAULT_PACKAGE, PERMISSION_MASK,
};
pub use registry::{build, random_case_name, Fixture, FixtureBuilder, Fixtures};
pub use repair::repair;
pub use validator::{validate, InvariantViolation};
