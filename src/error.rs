//! Error types for fixture construction.
//!
//! Every variant is a defect in the fixture system itself (a broken sample
//! table or a catalogue naming clash), never a property of sampled data:
//! invariant violations in sampled candidates are repaired, not reported.

use crate::generator::{Field, FieldKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The sample table has no generator for a schema field.
    #[error("no generator registered for field `{field}`")]
    MissingGenerator { field: Field },

    /// A generator produced a value of the wrong kind for its field.
    #[error("generator for field `{field}` produced {found} (expected {expected})")]
    FieldTypeMismatch {
        field: Field,
        expected: FieldKind,
        found: FieldKind,
    },

    /// Two fixtures were registered under the same name.
    #[error("duplicate fixture name `{name}`")]
    DuplicateName { name: String },
}
