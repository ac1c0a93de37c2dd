//! Pipeline reporting output: workflow-command lines for the CI runner and
//! a machine-readable JSON summary.

use std::fmt::Write;

use serde::Serialize;

use crate::model::Metric;

/// The six raw ratios, keyed for machine consumption. Written next to the
/// badges as `coverage-summary.json`.
#[derive(Debug, Serialize)]
pub struct CoverageSummary {
    pub coverage: f64,
    pub branches: f64,
    pub lines: f64,
    pub coverage_tested: f64,
    pub branches_tested: f64,
    pub lines_tested: f64,
}

impl CoverageSummary {
    #[must_use]
    pub fn from_ratios(ratios: &[(Metric, f64); 6]) -> Self {
        Self {
            coverage: ratios[0].1,
            branches: ratios[1].1,
            lines: ratios[2].1,
            coverage_tested: ratios[3].1,
            branches_tested: ratios[4].1,
            lines_tested: ratios[5].1,
        }
    }
}

/// Format the `::set-output` lines consumed by the CI pipeline, one per
/// metric. Values are raw fractional ratios, not percentages.
#[must_use]
pub fn format_outputs(ratios: &[(Metric, f64); 6]) -> String {
    let mut out = String::new();
    for (metric, ratio) in ratios {
        writeln!(out, "::set-output name={}::{}", metric.key(), ratio).unwrap();
    }
    out
}
