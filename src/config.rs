//! Configuration for a fixture build.

use crate::generator::DEFAULT_MAX_LEN;

/// Number of random fixtures generated unless configured otherwise.
pub const DEFAULT_RANDOM_COUNT: u32 = 25;

/// Complete configuration for a fixture build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Number of seed-derived fixtures added after the catalogue.
    pub random_count: u32,

    /// Upper bound on sampled string and byte lengths.
    pub max_len: u32,

    /// Sample random fixtures on the rayon pool. The result is identical to
    /// a sequential build.
    pub parallel: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            random_count: DEFAULT_RANDOM_COUNT,
            max_len: DEFAULT_MAX_LEN,
            parallel: false,
        }
    }
}

impl FixtureConfig {
    /// Only the fixed catalogue, no random fixtures.
    pub fn catalogue_only() -> Self {
        Self::default().with_random_count(0)
    }

    // === Builder methods ===

    pub fn with_random_count(mut self, count: u32) -> Self {
        self.random_count = count;
        self
    }

    pub fn with_max_len(mut self, max_len: u32) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }
}
