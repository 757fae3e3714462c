//! Executable law properties and their outcomes.

use std::fmt;

use proptest::strategy::Strategy;
use proptest::test_runner::{Config, TestCaseError, TestError, TestRunner};
use serde::{Deserialize, Serialize};

use crate::generators::source::{DEFAULT_SEED, rng_for_seed};

/// Sampling configuration for a law check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Number of independent samples drawn per property.
    pub samples: u32,
    /// Seed for the sample stream; same seed, same verdict.
    pub seed: u64,
    /// Budget of rejected candidates tolerated before a case aborts.
    pub max_rejects: u32,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            seed: DEFAULT_SEED,
            max_rejects: 1024,
        }
    }
}

impl CheckConfig {
    /// Set the sample count.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the rejected-candidate budget.
    pub fn with_max_rejects(mut self, max_rejects: u32) -> Self {
        self.max_rejects = max_rejects;
        self
    }
}

/// The sample that disproved a law, with both evaluated sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counterexample {
    /// Shrunk operand values, one per law operand.
    pub operands: Vec<String>,
    /// Which equation failed and what both sides evaluated to.
    pub message: String,
}

/// Terminal outcome of one law check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LawOutcome {
    /// Every sample satisfied the law.
    Passed {
        /// Samples drawn.
        samples: u32,
    },
    /// A sample disproved the law.
    Failed {
        /// The disproving sample.
        counterexample: Counterexample,
    },
    /// The sample budget was exhausted before a verdict.
    Aborted {
        /// Why the case aborted.
        reason: String,
    },
}

impl LawOutcome {
    /// True for [`LawOutcome::Passed`].
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

/// A named, executable law bound to one algebra instance and one generator.
pub struct Property {
    name: String,
    check: Box<dyn Fn(&CheckConfig) -> LawOutcome>,
}

impl Property {
    /// Wraps a check closure under a law name.
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&CheckConfig) -> LawOutcome + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    /// The law name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefixes the law name, e.g. to distinguish the additive and
    /// multiplicative halves of a semiring suite.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.name = format!("{prefix} {}", self.name);
        self
    }

    /// Executes the law under `config`.
    pub fn check(&self, config: &CheckConfig) -> LawOutcome {
        (self.check)(config)
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Shared law executor: draws `config.samples` values from `strategy`,
/// applies `test` to each, and shrinks the first violation down to a minimal
/// counterexample. Zero samples pass vacuously.
pub(crate) fn run_law<S, D>(
    config: &CheckConfig,
    strategy: &S,
    describe: D,
    test: impl Fn(S::Value) -> Result<(), TestCaseError>,
) -> LawOutcome
where
    S: Strategy,
    S::Value: Clone,
    D: Fn(&S::Value) -> Vec<String>,
{
    if config.samples == 0 {
        return LawOutcome::Passed { samples: 0 };
    }
    let proptest_config = Config {
        cases: config.samples,
        max_local_rejects: config.max_rejects,
        max_global_rejects: config.max_rejects,
        failure_persistence: None,
        ..Config::default()
    };
    let mut runner = TestRunner::new_with_rng(proptest_config, rng_for_seed(config.seed));
    match runner.run(strategy, |value| test(value)) {
        Ok(()) => LawOutcome::Passed {
            samples: config.samples,
        },
        Err(TestError::Fail(reason, value)) => LawOutcome::Failed {
            counterexample: Counterexample {
                operands: describe(&value),
                message: reason.to_string(),
            },
        },
        Err(TestError::Abort(reason)) => LawOutcome::Aborted {
            reason: reason.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn always_fails() -> Property {
        Property::new("never holds", |config: &CheckConfig| {
            let strategy = any::<i32>();
            run_law(
                config,
                &strategy,
                |v| vec![format!("{v:?}")],
                |_| Err(TestCaseError::fail("forced failure")),
            )
        })
    }

    #[test]
    fn zero_samples_pass_vacuously() {
        let config = CheckConfig::default().with_samples(0);
        assert_eq!(always_fails().check(&config), LawOutcome::Passed { samples: 0 });
    }

    #[test]
    fn failures_carry_a_counterexample() {
        let config = CheckConfig::default();
        match always_fails().check(&config) {
            LawOutcome::Failed { counterexample } => {
                assert_eq!(counterexample.operands.len(), 1);
                assert!(counterexample.message.contains("forced failure"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_outcome() {
        let config = CheckConfig::default().with_seed(31);
        let first = always_fails().check(&config);
        let second = always_fails().check(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn config_builders_override_defaults() {
        let config = CheckConfig::default()
            .with_samples(7)
            .with_seed(9)
            .with_max_rejects(3);
        assert_eq!(config.samples, 7);
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_rejects, 3);
    }

    #[test]
    fn prefixed_renames_without_changing_behavior() {
        let property = always_fails().prefixed("additive");
        assert_eq!(property.name(), "additive never holds");
    }
}
