//! Merging fixed and random cases into one named fixture set.

use crate::catalogue::{Catalogue, FixedCase};
use crate::config::FixtureConfig;
use crate::error::FixtureError;
use crate::generator::RandomSampler;
use crate::options::GenerateOptions;
use crate::repair::repair;
use serde::Serialize;
use std::collections::HashMap;

/// A named, registered configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub name: String,
    pub options: GenerateOptions,
}

/// Immutable fixture set, iterated in insertion order.
///
/// Fixed cases come first in catalogue order, followed by `random-#1`,
/// `random-#2`, ... so curated names keep their position when the random
/// count changes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Fixtures {
    entries: Vec<Fixture>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Fixtures {
    fn insert(&mut self, name: String, options: GenerateOptions) -> Result<(), FixtureError> {
        if self.index.contains_key(&name) {
            return Err(FixtureError::DuplicateName { name });
        }
        tracing::debug!(fixture = %name, "registered fixture");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(Fixture { name, options });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&GenerateOptions> {
        self.index.get(name).map(|&i| &self.entries[i].options)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|f| f.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Fixtures {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Name of the `n`-th random fixture (1-based).
pub fn random_case_name(n: u32) -> String {
    format!("random-#{}", n)
}

/// Build the fixture set from `catalogue` plus `random_count` random cases
/// drawn with the default sampler.
pub fn build(catalogue: &[FixedCase], random_count: u32) -> Result<Fixtures, FixtureError> {
    FixtureBuilder::new(FixtureConfig::default().with_random_count(random_count))
        .with_catalogue(catalogue.to_vec())
        .build()
}

/// Configurable fixture set construction.
pub struct FixtureBuilder {
    config: FixtureConfig,
    catalogue: Vec<FixedCase>,
    sampler: RandomSampler,
}

impl FixtureBuilder {
    /// Builder over the full [`Catalogue`] and a full-domain sampler bounded
    /// by `config.max_len`.
    pub fn new(config: FixtureConfig) -> Self {
        Self {
            sampler: RandomSampler::new(config.max_len),
            catalogue: Catalogue::all(),
            config,
        }
    }

    pub fn with_catalogue(mut self, catalogue: Vec<FixedCase>) -> Self {
        self.catalogue = catalogue;
        self
    }

    /// Replace the sampler. `config.max_len` is not applied to it.
    pub fn with_sampler(mut self, sampler: RandomSampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Build the fixture set.
    ///
    /// Fails on the first sampler defect or duplicate name; no partial set is
    /// returned.
    pub fn build(&self) -> Result<Fixtures, FixtureError> {
        let mut fixtures = Fixtures::default();

        for case in &self.catalogue {
            fixtures.insert(case.name.to_string(), case.apply(GenerateOptions::default()))?;
        }

        for (n, options) in (1..=self.config.random_count).zip(self.random_cases()?) {
            fixtures.insert(random_case_name(n), options)?;
        }

        tracing::debug!(
            fixed = self.catalogue.len(),
            random = self.config.random_count,
            "built fixture set"
        );
        Ok(fixtures)
    }

    /// Repaired random cases in seed order; case `n` uses seed `n - 1`.
    fn random_cases(&self) -> Result<Vec<GenerateOptions>, FixtureError> {
        let seeds = 0..u64::from(self.config.random_count);
        let sample = |seed: u64| self.sampler.generate(seed).map(repair);

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;
            return seeds.into_par_iter().map(sample).collect();
        }

        #[cfg(not(feature = "parallel"))]
        if self.config.parallel {
            tracing::debug!("parallel sampling unavailable, sampling sequentially");
        }

        seeds.map(sample).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate;

    #[test]
    fn test_catalogue_then_random_order() {
        let fixtures = build(&Catalogue::all(), 3).unwrap();
        let names: Vec<_> = fixtures.names().collect();

        let mut expected = Catalogue::names();
        expected.extend(["random-#1", "random-#2", "random-#3"]);
        assert_eq!(names, expected);
    }

    #[test]
    fn test_random_case_uses_previous_seed() {
        let fixtures = build(&[], 2).unwrap();
        let sampler = RandomSampler::default();
        assert_eq!(
            fixtures.get("random-#1"),
            Some(&repair(sampler.generate(0).unwrap()))
        );
        assert_eq!(
            fixtures.get("random-#2"),
            Some(&repair(sampler.generate(1).unwrap()))
        );
    }

    #[test]
    fn test_zero_random_count() {
        let fixtures = build(&Catalogue::all(), 0).unwrap();
        assert_eq!(fixtures.len(), Catalogue::all().len());
        assert!(!fixtures.contains("random-#1"));
    }

    #[test]
    fn test_empty() {
        let fixtures = build(&[], 0).unwrap();
        assert!(fixtures.is_empty());
        assert_eq!(fixtures.iter().count(), 0);
    }

    #[test]
    fn test_collision_with_catalogue_name() {
        fn noop(base: GenerateOptions) -> GenerateOptions {
            base
        }
        let catalogue = vec![FixedCase::new("random-#2", noop)];
        assert_eq!(
            build(&catalogue, 3).unwrap_err(),
            FixtureError::DuplicateName {
                name: "random-#2".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_catalogue_entry() {
        let mut catalogue = Catalogue::all();
        catalogue.push(FixedCase::new("debug", Catalogue::dev));
        assert!(matches!(
            build(&catalogue, 0),
            Err(FixtureError::DuplicateName { name }) if name == "debug"
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = FixtureBuilder::new(FixtureConfig::default().with_random_count(40))
            .build()
            .unwrap();
        let parallel = FixtureBuilder::new(
            FixtureConfig::default()
                .with_random_count(40)
                .with_parallel(true),
        )
        .build()
        .unwrap();
        assert_eq!(
            sequential.iter().collect::<Vec<_>>(),
            parallel.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_all_fixtures_valid() {
        let fixtures = build(&Catalogue::all(), 100).unwrap();
        for fixture in &fixtures {
            assert!(
                validate(&fixture.options).is_empty(),
                "{}: {:?}",
                fixture.name,
                fixture.options
            );
        }
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let fixtures = build(&Catalogue::all()[..2], 0).unwrap();
        let json = serde_json::to_value(&fixtures).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["name"], "default");
        assert_eq!(list[1]["name"], "old-default");
        assert_eq!(list[1]["options"]["restore"], true);
    }
}
