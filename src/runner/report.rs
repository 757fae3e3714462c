//! Human-readable and machine-friendly report rendering.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::{CaseReport, CaseStatus, RunReport};

/// Supported output formats for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown summary.
    Markdown,
    /// JSON with all cases inline.
    Json,
}

/// Failure to parse a [`ReportFormat`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format `{0}`, expected `md` or `json`")]
pub struct ParseFormatError(String);

impl FromStr for ReportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("md"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Aggregated case counts for a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Executed cases.
    pub total: usize,
    /// Cases that passed.
    pub passed: usize,
    /// Cases disproved by a counterexample.
    pub failed: usize,
    /// Cases that exhausted their sample budget.
    pub aborted: usize,
    /// Percentage of cases that passed; 100 for an empty run.
    pub pass_rate: f64,
}

impl RunSummary {
    /// Builds the summary from executed cases.
    pub fn from_cases(cases: &[CaseReport]) -> Self {
        let mut out = Self {
            total: cases.len(),
            passed: 0,
            failed: 0,
            aborted: 0,
            pass_rate: 100.0,
        };
        for case in cases {
            match case.status {
                CaseStatus::Passed => out.passed += 1,
                CaseStatus::Failed => out.failed += 1,
                CaseStatus::Aborted => out.aborted += 1,
            }
        }
        if out.total > 0 {
            out.pass_rate = (out.passed as f64) * 100.0 / (out.total as f64);
        }
        out
    }

    /// True when no case failed or aborted.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.aborted == 0
    }
}

fn status_to_str(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Passed => "passed",
        CaseStatus::Failed => "failed",
        CaseStatus::Aborted => "aborted",
    }
}

/// Renders a run report in the requested format.
pub fn render_report(report: &RunReport, format: ReportFormat) -> String {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "seed": report.seed,
            "samples": report.samples,
            "summary": report.summary,
            "cases": report.cases,
        }))
        .expect("report JSON should serialize"),
        ReportFormat::Markdown => {
            let mut out = String::from("# Law Check Report\n\n");
            out.push_str(&format!(
                "- seed: {}\n- samples per case: {}\n\n",
                report.seed, report.samples
            ));

            out.push_str("## Summary\n\n| metric | count |\n|---|---:|\n");
            out.push_str(&format!("| total | {} |\n", report.summary.total));
            out.push_str(&format!("| passed | {} |\n", report.summary.passed));
            out.push_str(&format!("| failed | {} |\n", report.summary.failed));
            out.push_str(&format!("| aborted | {} |\n", report.summary.aborted));
            out.push_str(&format!(
                "| pass rate | {:.2}% |\n",
                report.summary.pass_rate
            ));

            let troubled: Vec<&CaseReport> = report
                .cases
                .iter()
                .filter(|case| !case.status.is_pass())
                .collect();
            if !troubled.is_empty() {
                out.push_str("\n## Violations\n\n");
                for case in troubled {
                    out.push_str(&format!("### {} / {}\n\n", case.subject, case.law));
                    out.push_str(&format!("- **status**: {}\n", status_to_str(case.status)));
                    if let Some(ref counterexample) = case.counterexample {
                        out.push_str(&format!(
                            "- **operands**: {}\n",
                            counterexample.operands.join(", ")
                        ));
                        out.push_str(&format!("- **detail**: {}\n", counterexample.message));
                    }
                    if let Some(ref reason) = case.reason {
                        out.push_str(&format!("- **reason**: {reason}\n"));
                    }
                    out.push('\n');
                }
            }

            out
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::law::property::Counterexample;

    use super::*;

    fn case(subject: &str, law: &str, status: CaseStatus) -> CaseReport {
        CaseReport {
            subject: subject.to_string(),
            law: law.to_string(),
            status,
            samples: 100,
            counterexample: match status {
                CaseStatus::Failed => Some(Counterexample {
                    operands: vec!["1".to_string(), "2".to_string()],
                    message: "left != right".to_string(),
                }),
                _ => None,
            },
            reason: match status {
                CaseStatus::Aborted => Some("budget exhausted".to_string()),
                _ => None,
            },
        }
    }

    fn sample_report() -> RunReport {
        let cases = vec![
            case("i32 semiring", "additive associativity", CaseStatus::Passed),
            case("bogus", "identity", CaseStatus::Failed),
            case("filtered", "identity", CaseStatus::Aborted),
        ];
        let summary = RunSummary::from_cases(&cases);
        RunReport {
            seed: 7,
            samples: 100,
            cases,
            summary,
        }
    }

    #[test]
    fn summary_counts_every_status() {
        let report = sample_report();
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.aborted, 1);
        assert!(!report.summary.is_clean());
        assert!((report.summary.pass_rate - 100.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_run_has_full_pass_rate() {
        let summary = RunSummary::from_cases(&[]);
        assert_eq!(summary.pass_rate, 100.0);
        assert!(summary.is_clean());
    }

    #[test]
    fn markdown_report_lists_violations() {
        let md = render_report(&sample_report(), ReportFormat::Markdown);
        assert!(md.contains("# Law Check Report"));
        assert!(md.contains("| passed | 1 |"));
        assert!(md.contains("## Violations"));
        assert!(md.contains("bogus / identity"));
        assert!(md.contains("left != right"));
        assert!(md.contains("budget exhausted"));
    }

    #[test]
    fn json_report_serializes_cases_and_summary() {
        let json = render_report(&sample_report(), ReportFormat::Json);
        assert!(json.contains("\"seed\": 7"));
        assert!(json.contains("\"failed\": 1"));
        assert!(json.contains("\"counterexample\""));
        assert!(json.contains("\"status\": \"aborted\""));
    }

    #[test]
    fn format_parses_known_names_only() {
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("markdown".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}
