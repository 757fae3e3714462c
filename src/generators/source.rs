//! Seeded, restartable sample drawing.

use std::fmt::Debug;

use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};
use thiserror::Error;

use super::combinators::Generator;

/// Seed used when a caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x0123_4567_89ab_cdef;

/// Sample-drawing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The generator rejected more candidates than the configured budget.
    #[error("sample budget exhausted: {0}")]
    Exhausted(String),
}

/// A deterministic stream of samples drawn from generators.
///
/// Two sources built from the same seed draw identical sequences; restarting
/// reseeds the source rather than resuming it.
pub struct SampleSource {
    runner: TestRunner,
    seed: u64,
}

impl SampleSource {
    /// Builds a source from a seed.
    pub fn new(seed: u64) -> Self {
        let config = Config {
            failure_persistence: None,
            ..Config::default()
        };
        Self {
            runner: TestRunner::new_with_rng(config, rng_for_seed(seed)),
            seed,
        }
    }

    /// The seed this source was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reseeds the source, replaying the sequence from the beginning.
    pub fn restart(&mut self) {
        *self = Self::new(self.seed);
    }

    /// Draws the next sample from `generator`.
    ///
    /// Never fails for in-range generator configuration; a filter that
    /// rejects past the candidate budget reports [`DrawError::Exhausted`].
    pub fn draw<A: Debug>(&mut self, generator: &Generator<A>) -> Result<A, DrawError> {
        generator
            .as_strategy()
            .new_tree(&mut self.runner)
            .map(|tree| tree.current())
            .map_err(|reason| DrawError::Exhausted(reason.to_string()))
    }
}

impl Debug for SampleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleSource")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Expands a 64-bit seed into the 256-bit ChaCha key proptest's RNG expects.
pub(crate) fn rng_for_seed(seed: u64) -> TestRng {
    let mut bytes = [0u8; 32];
    for (index, chunk) in bytes.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&(seed ^ index as u64).to_le_bytes());
    }
    TestRng::from_seed(RngAlgorithm::ChaCha, &bytes)
}
