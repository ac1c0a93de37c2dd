//! In-memory representation of JaCoCo class-coverage counts and the six
//! derived metrics. The parser produces `CoverageRow`s which are folded
//! into a `CoverageTotals` accumulator.

use crate::error::{CovbadgeError, Result};

/// Compute a coverage rate, returning `None` when the total is zero.
#[must_use]
pub fn rate(covered: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(covered as f64 / total as f64)
    }
}

/// A missed/covered pair for one category of one class row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub missed: u64,
    pub covered: u64,
}

impl Counter {
    #[must_use]
    pub fn new(missed: u64, covered: u64) -> Self {
        Self { missed, covered }
    }

    /// A class counts as tested for a category iff anything was covered,
    /// even when nothing was missed.
    #[must_use]
    pub fn is_tested(&self) -> bool {
        self.covered > 0
    }
}

/// One data record of a JaCoCo CSV report.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageRow {
    pub instructions: Counter,
    pub branches: Counter,
    pub lines: Counter,
}

/// Per-category accumulators, split by tested status.
///
/// The split is driven by the covered count alone: a class with covered > 0
/// in a category routes both its missed and covered totals for that category
/// into `tested`, otherwise into `untested`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusSplit {
    pub tested: Counter,
    pub untested: Counter,
}

impl StatusSplit {
    /// Fold one row's counter into the matching accumulator.
    pub fn record(&mut self, counter: Counter) {
        let slot = if counter.is_tested() {
            &mut self.tested
        } else {
            &mut self.untested
        };
        slot.missed += counter.missed;
        slot.covered += counter.covered;
    }

    /// covered / (covered + missed) across both status classes.
    #[must_use]
    pub fn overall(&self) -> Option<f64> {
        let covered = self.tested.covered + self.untested.covered;
        let missed = self.tested.missed + self.untested.missed;
        rate(covered, covered + missed)
    }

    /// covered / (covered + missed) over tested classes only.
    #[must_use]
    pub fn tested_only(&self) -> Option<f64> {
        rate(self.tested.covered, self.tested.covered + self.tested.missed)
    }
}

/// Coverage categories of a JaCoCo report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Instructions,
    Branches,
    Lines,
}

impl Category {
    /// Text for the label segment of the badge.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Instructions => "coverage",
            Category::Branches => "branches",
            Category::Lines => "lines",
        }
    }
}

/// Whether a metric spans all classes or only tested ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Overall,
    TestedOnly,
}

/// One of the six derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub category: Category,
    pub variant: Variant,
}

/// All six metrics, in reporting order.
pub const METRICS: [Metric; 6] = [
    Metric {
        category: Category::Instructions,
        variant: Variant::Overall,
    },
    Metric {
        category: Category::Branches,
        variant: Variant::Overall,
    },
    Metric {
        category: Category::Lines,
        variant: Variant::Overall,
    },
    Metric {
        category: Category::Instructions,
        variant: Variant::TestedOnly,
    },
    Metric {
        category: Category::Branches,
        variant: Variant::TestedOnly,
    },
    Metric {
        category: Category::Lines,
        variant: Variant::TestedOnly,
    },
];

impl Metric {
    /// Key used in pipeline output lines and the JSON summary.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match (self.category, self.variant) {
            (Category::Instructions, Variant::Overall) => "coverage",
            (Category::Branches, Variant::Overall) => "branches",
            (Category::Lines, Variant::Overall) => "lines",
            (Category::Instructions, Variant::TestedOnly) => "coverage_tested",
            (Category::Branches, Variant::TestedOnly) => "branches_tested",
            (Category::Lines, Variant::TestedOnly) => "lines_tested",
        }
    }

    /// Badge file name appended to the caller-supplied output prefix.
    #[must_use]
    pub fn badge_suffix(&self) -> &'static str {
        match (self.category, self.variant) {
            (Category::Instructions, Variant::Overall) => "jacoco.svg",
            (Category::Branches, Variant::Overall) => "jacocoBranches.svg",
            (Category::Lines, Variant::Overall) => "jacocoLines.svg",
            (Category::Instructions, Variant::TestedOnly) => "jacocoTested.svg",
            (Category::Branches, Variant::TestedOnly) => "jacocoBranchesTested.svg",
            (Category::Lines, Variant::TestedOnly) => "jacocoLinesTested.svg",
        }
    }

    /// Text for the label segment of the badge.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Aggregate counts for a whole report.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageTotals {
    pub instructions: StatusSplit,
    pub branches: StatusSplit,
    pub lines: StatusSplit,
}

impl CoverageTotals {
    /// Fold one row in. Tested status is derived independently per
    /// category, never globally per row.
    pub fn add(&mut self, row: &CoverageRow) {
        self.instructions.record(row.instructions);
        self.branches.record(row.branches);
        self.lines.record(row.lines);
    }

    #[must_use]
    pub fn split(&self, category: Category) -> &StatusSplit {
        match category {
            Category::Instructions => &self.instructions,
            Category::Branches => &self.branches,
            Category::Lines => &self.lines,
        }
    }

    /// Evaluate a single metric. A zero denominator is a data condition
    /// (e.g. a report with no branches) and surfaces as an error rather
    /// than being coerced to 0% or 100%.
    pub fn ratio(&self, metric: Metric) -> Result<f64> {
        let split = self.split(metric.category);
        let value = match metric.variant {
            Variant::Overall => split.overall(),
            Variant::TestedOnly => split.tested_only(),
        };
        value.ok_or(CovbadgeError::UndefinedRatio(metric.key()))
    }

    /// Evaluate all six metrics in reporting order.
    pub fn ratios(&self) -> Result<[(Metric, f64); 6]> {
        let mut out = [(METRICS[0], 0.0); 6];
        for (slot, metric) in out.iter_mut().zip(METRICS) {
            *slot = (metric, self.ratio(metric)?);
        }
        Ok(out)
    }
}
