use std::path::PathBuf;

use tempfile::TempDir;

/// Standard JaCoCo CSV column header.
pub const HEADER: &str = "GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,LINE_COVERED,COMPLEXITY_MISSED,COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED\n";

/// Write a report into a fresh temp dir, returning the dir handle and the
/// report path. The caller must hold onto `TempDir` to keep it alive.
pub fn setup_report(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jacoco.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
