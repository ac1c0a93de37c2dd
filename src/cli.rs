//! Command handler for the covbadge CLI.
//!
//! `cmd_generate` returns the pipeline output as a `String`, making it easy
//! to test without capturing stdout.

use std::fs;
use std::io::BufReader;
use std::path::Path;

use crate::badge;
use crate::coverage;
use crate::error::{CovbadgeError, Result};
use crate::report;

/// Name of the JSON summary artifact, appended to the output prefix like
/// the badge suffixes.
const SUMMARY_SUFFIX: &str = "coverage-summary.json";

/// Read a JaCoCo CSV report, write the six badge files and the JSON
/// summary at `output_prefix`, and return the pipeline output lines.
///
/// Writes are sequential; a failure aborts the run, but artifacts already
/// written stay on disk.
pub fn cmd_generate(report_path: &Path, output_prefix: &str) -> Result<String> {
    let file = fs::File::open(report_path)
        .map_err(|_| CovbadgeError::InputNotFound(report_path.display().to_string()))?;

    let ratios = coverage::compute_ratios(&mut BufReader::new(file))?;

    for (metric, ratio) in &ratios {
        let (display, color) = badge::classify(*ratio);
        let svg = badge::render(&display, color, metric.label());
        let path = format!("{}{}", output_prefix, metric.badge_suffix());
        write_artifact(&path, svg.as_bytes())?;
    }

    let summary = report::CoverageSummary::from_ratios(&ratios);
    let json = serde_json::to_string_pretty(&summary)?;
    write_artifact(&format!("{output_prefix}{SUMMARY_SUFFIX}"), json.as_bytes())?;

    Ok(report::format_outputs(&ratios))
}

/// Write one output artifact, creating parent directories on demand.
fn write_artifact(path: &str, contents: &[u8]) -> Result<()> {
    let target = Path::new(path);
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CovbadgeError::OutputWrite {
                path: path.to_string(),
                source: e,
            })?;
        }
    }
    fs::write(target, contents).map_err(|e| CovbadgeError::OutputWrite {
        path: path.to_string(),
        source: e,
    })
}
