//! Seeded generation of raw option candidates.

mod field;
mod sampler;

pub use field::{Field, FieldKind, FieldValue};
pub use sampler::{full_domain_generator, Generator, RandomSampler, SampleTable, DEFAULT_MAX_LEN};
