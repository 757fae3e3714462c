//! Suite execution and result aggregation.
//!
//! The runner iterates every registered (algebra class, instance) pair,
//! executes its law battery, and collects structured per-case results. Law
//! violations are reported, never thrown: the only terminal states a case
//! can reach are passed, failed (with a counterexample) or aborted (sample
//! budget exhausted). Checks are pure and deterministic given the seed, so
//! there are no retries.

pub mod registry;
pub mod report;

use serde::Serialize;

use crate::law::property::{CheckConfig, Counterexample, LawOutcome, Property};

pub use registry::builtin_suites;
pub use report::{ReportFormat, RunSummary, render_report};

/// Terminal status of one law case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Every sample satisfied the law.
    Passed,
    /// A sample disproved the law.
    Failed,
    /// The sample budget was exhausted before a verdict.
    Aborted,
}

impl CaseStatus {
    /// True for [`CaseStatus::Passed`].
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Result of one law case, with the failing sample attached when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// The instance under test, e.g. `i32 semiring`.
    pub subject: String,
    /// The law name, e.g. `additive associativity`.
    pub law: String,
    /// Terminal status.
    pub status: CaseStatus,
    /// Samples configured for the case.
    pub samples: u32,
    /// Minimal disproving sample, present on failure.
    pub counterexample: Option<Counterexample>,
    /// Abort reason, present when the budget ran out.
    pub reason: Option<String>,
}

impl CaseReport {
    fn from_outcome(subject: &str, law: &str, config: &CheckConfig, outcome: LawOutcome) -> Self {
        let (status, samples, counterexample, reason) = match outcome {
            LawOutcome::Passed { samples } => (CaseStatus::Passed, samples, None, None),
            LawOutcome::Failed { counterexample } => (
                CaseStatus::Failed,
                config.samples,
                Some(counterexample),
                None,
            ),
            LawOutcome::Aborted { reason } => {
                (CaseStatus::Aborted, config.samples, None, Some(reason))
            }
        };
        Self {
            subject: subject.to_string(),
            law: law.to_string(),
            status,
            samples,
            counterexample,
            reason,
        }
    }
}

/// One instance under test together with its law battery.
pub struct LawSuite {
    subject: String,
    properties: Vec<Property>,
}

impl LawSuite {
    /// Binds a named subject to its properties.
    pub fn new(subject: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            subject: subject.into(),
            properties,
        }
    }

    /// The instance label.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The law battery.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Executes every law in the suite under `config`.
    pub fn run(&self, config: &CheckConfig) -> Vec<CaseReport> {
        self.properties
            .iter()
            .map(|property| {
                let outcome = property.check(config);
                CaseReport::from_outcome(&self.subject, property.name(), config, outcome)
            })
            .collect()
    }
}

impl std::fmt::Debug for LawSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LawSuite")
            .field("subject", &self.subject)
            .field("properties", &self.properties.len())
            .finish()
    }
}

/// Aggregated result of a full run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Seed the run was executed with.
    pub seed: u64,
    /// Samples per case.
    pub samples: u32,
    /// Every executed case.
    pub cases: Vec<CaseReport>,
    /// Aggregate counts.
    pub summary: RunSummary,
}

/// Executes every suite sequentially and aggregates the results.
///
/// Evaluation is pure and cases are independent, so order never affects
/// verdicts; running cases in parallel would be a scheduling optimization
/// only.
pub fn run_suites(suites: &[LawSuite], config: &CheckConfig) -> RunReport {
    let cases: Vec<CaseReport> = suites.iter().flat_map(|suite| suite.run(config)).collect();
    let summary = RunSummary::from_cases(&cases);
    RunReport {
        seed: config.seed,
        samples: config.samples,
        cases,
        summary,
    }
}
