//! Coverage aggregation: a single streaming pass over the report rows
//! produces `CoverageTotals`, from which the six metrics are derived.

use std::io::BufRead;

use crate::error::Result;
use crate::model::{CoverageTotals, Metric};
use crate::parser;

/// Stream a report and fold every data record into the accumulators.
pub fn compute(reader: &mut dyn BufRead) -> Result<CoverageTotals> {
    let mut totals = CoverageTotals::default();
    parser::parse_streaming(reader, &mut |row| {
        totals.add(&row);
        Ok(())
    })?;
    Ok(totals)
}

/// One-pass convenience: aggregate and evaluate all six metrics.
pub fn compute_ratios(reader: &mut dyn BufRead) -> Result<[(Metric, f64); 6]> {
    compute(reader)?.ratios()
}
