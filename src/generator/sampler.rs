//! Seeded, full-domain sampling of raw option candidates.

use super::field::{Field, FieldKind, FieldValue};
use crate::error::FixtureError;
use crate::options::RawOptions;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Default upper bound on sampled string and byte lengths.
pub const DEFAULT_MAX_LEN: u32 = 50;

/// Generator for a single field: draws one value from the field's domain.
///
/// The second argument bounds the length of sampled strings and byte strings.
pub type Generator = fn(&mut ChaCha8Rng, u32) -> FieldValue;

fn sample_bool(rng: &mut ChaCha8Rng, _max_len: u32) -> FieldValue {
    FieldValue::Bool(rng.gen())
}

fn sample_string(rng: &mut ChaCha8Rng, max_len: u32) -> FieldValue {
    // Length drawn as u32 so the stream does not depend on pointer width.
    let len = rng.gen_range(0..=max_len);
    FieldValue::String((0..len).map(|_| rng.gen::<char>()).collect())
}

fn sample_bytes(rng: &mut ChaCha8Rng, max_len: u32) -> FieldValue {
    let len = rng.gen_range(0..=max_len);
    FieldValue::Bytes((0..len).map(|_| rng.gen::<u8>()).collect())
}

fn sample_int(rng: &mut ChaCha8Rng, _max_len: u32) -> FieldValue {
    FieldValue::Int(rng.gen())
}

fn sample_mode(rng: &mut ChaCha8Rng, _max_len: u32) -> FieldValue {
    FieldValue::Mode(rng.gen())
}

/// Full-domain generator for a value kind.
pub fn full_domain_generator(kind: FieldKind) -> Generator {
    match kind {
        FieldKind::Bool => sample_bool,
        FieldKind::String => sample_string,
        FieldKind::Bytes => sample_bytes,
        FieldKind::Int => sample_int,
        FieldKind::Mode => sample_mode,
    }
}

/// Per-field generator table.
#[derive(Clone)]
pub struct SampleTable {
    generators: [Option<Generator>; Field::COUNT],
}

impl SampleTable {
    /// Table with no generators at all.
    pub fn empty() -> Self {
        Self {
            generators: [None; Field::COUNT],
        }
    }

    /// Every field sampled over the full domain of its kind.
    pub fn full_domain() -> Self {
        Field::ALL.iter().fold(Self::empty(), |table, &field| {
            table.with_generator(field, full_domain_generator(field.kind()))
        })
    }

    pub fn with_generator(mut self, field: Field, generator: Generator) -> Self {
        self.generators[field.index()] = Some(generator);
        self
    }

    pub fn without(mut self, field: Field) -> Self {
        self.generators[field.index()] = None;
        self
    }

    pub fn get(&self, field: Field) -> Option<Generator> {
        self.generators[field.index()]
    }
}

impl Default for SampleTable {
    fn default() -> Self {
        Self::full_domain()
    }
}

impl std::fmt::Debug for SampleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let covered: Vec<Field> = Field::ALL
            .iter()
            .copied()
            .filter(|&field| self.get(field).is_some())
            .collect();
        f.debug_struct("SampleTable")
            .field("covered", &covered)
            .finish()
    }
}

/// Random candidate generator.
///
/// The same seed index always yields the same [`RawOptions`]: the stream comes
/// from [`ChaCha8Rng`], whose output is fixed across platforms and releases.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    table: SampleTable,
    max_len: u32,
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}

impl RandomSampler {
    pub fn new(max_len: u32) -> Self {
        Self {
            table: SampleTable::full_domain(),
            max_len,
        }
    }

    pub fn with_table(mut self, table: SampleTable) -> Self {
        self.table = table;
        self
    }

    pub fn max_len(&self) -> u32 {
        self.max_len
    }

    /// Sample a raw candidate for `seed_index`.
    ///
    /// Cross-field invariants are ignored here; the result is meant for
    /// [`crate::repair`]. Errors are table defects, never data conditions.
    pub fn generate(&self, seed_index: u64) -> Result<RawOptions, FixtureError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed_index);
        let mut raw = RawOptions::default();

        for field in Field::ALL {
            let generator = self
                .table
                .get(field)
                .ok_or(FixtureError::MissingGenerator { field })?;
            raw.set(field, generator(&mut rng, self.max_len))?;
        }

        tracing::trace!(seed_index, "sampled raw candidate");
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sample() {
        let sampler = RandomSampler::default();
        assert_eq!(sampler.generate(7).unwrap(), sampler.generate(7).unwrap());
        assert_eq!(
            RandomSampler::default().generate(7).unwrap(),
            sampler.generate(7).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let sampler = RandomSampler::default();
        let samples: Vec<_> = (0..8).map(|i| sampler.generate(i).unwrap()).collect();
        for (i, a) in samples.iter().enumerate() {
            for b in &samples[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_lengths_bounded_by_max_len() {
        let sampler = RandomSampler::new(4);
        for seed in 0..64 {
            let raw = sampler.generate(seed).unwrap();
            assert!(raw.package.chars().count() <= 4);
            assert!(raw.tags.chars().count() <= 4);
            assert!(raw.hash_key.len() <= 4);
        }
    }

    #[test]
    fn test_zero_max_len_gives_empty_strings() {
        let raw = RandomSampler::new(0).generate(3).unwrap();
        assert!(raw.package.is_empty());
        assert!(raw.tags.is_empty());
        assert!(raw.hash_key.is_empty());
    }

    #[test]
    fn test_samples_cover_invalid_space() {
        // The sampler must not pre-filter: across enough seeds it produces
        // out-of-range hash formats and non-permission mode bits.
        let sampler = RandomSampler::default();
        let samples: Vec<_> = (0..64).map(|i| sampler.generate(i).unwrap()).collect();
        assert!(samples.iter().any(|r| !(0..5).contains(&r.hash_format)));
        assert!(samples.iter().any(|r| r.mode & !0o777 != 0));
        assert!(samples.iter().any(|r| r.restore && !r.asset_dir));
    }

    #[test]
    fn test_missing_generator_is_error() {
        let table = SampleTable::full_domain().without(Field::Tags);
        let sampler = RandomSampler::default().with_table(table);
        assert_eq!(
            sampler.generate(0),
            Err(FixtureError::MissingGenerator { field: Field::Tags })
        );
    }

    #[test]
    fn test_wrong_kind_generator_is_error() {
        let table = SampleTable::full_domain()
            .with_generator(Field::Mode, full_domain_generator(FieldKind::Bool));
        let err = RandomSampler::default()
            .with_table(table)
            .generate(0)
            .unwrap_err();
        assert!(matches!(
            err,
            FixtureError::FieldTypeMismatch {
                field: Field::Mode,
                expected: FieldKind::Mode,
                found: FieldKind::Bool,
            }
        ));
    }

    #[test]
    fn test_custom_generator_overrides_field() {
        fn fixed_package(_: &mut ChaCha8Rng, _: u32) -> FieldValue {
            FieldValue::String("fixed".into())
        }
        let table = SampleTable::full_domain().with_generator(Field::Package, fixed_package);
        let raw = RandomSampler::default().with_table(table).generate(11).unwrap();
        assert_eq!(raw.package, "fixed");
    }
}
