//! Parser for JaCoCo CSV class-coverage reports.
//!
//! Report layout (one record per class):
//!   GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,
//!   BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,LINE_COVERED,
//!   COMPLEXITY_MISSED,COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED
//!
//! The first record is the column header and is never counted. Only columns
//! 3..=8 (0-indexed) are used; everything after LINE_COVERED is ignored.
//! Double-quoted fields may contain commas.

use std::io::BufRead;

use crate::error::{CovbadgeError, Result};
use crate::model::{Counter, CoverageRow};

/// A record needs at least the nine columns through LINE_COVERED.
const MIN_FIELDS: usize = 9;

/// Parse a full report from raw bytes.
pub fn parse(input: &[u8]) -> Result<Vec<CoverageRow>> {
    let mut rows = Vec::new();
    parse_streaming(&mut &*input, &mut |row| {
        rows.push(row);
        Ok(())
    })?;
    Ok(rows)
}

/// Streaming parser — calls `emit` once per data record. Reads
/// line-by-line from a buffered reader so the full report need not be in
/// memory at once.
pub fn parse_streaming(
    reader: &mut dyn BufRead,
    emit: &mut dyn FnMut(CoverageRow) -> Result<()>,
) -> Result<()> {
    let mut raw_line = String::new();
    let mut line_number = 0usize;
    let mut seen_header = false;

    loop {
        raw_line.clear();
        let n = match reader.read_line(&mut raw_line) {
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(CovbadgeError::MalformedInput {
                    row: line_number + 1,
                    reason: "input is not valid UTF-8".to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        if n == 0 {
            break; // EOF
        }
        line_number += 1;

        let line = raw_line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        // The first record is the column header.
        if !seen_header {
            seen_header = true;
            continue;
        }

        emit(parse_record(line, line_number)?)?;
    }

    Ok(())
}

/// Parse one data record into a `CoverageRow`.
fn parse_record(line: &str, line_number: usize) -> Result<CoverageRow> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return Err(CovbadgeError::MalformedInput {
            row: line_number,
            reason: format!(
                "expected at least {} fields, found {}",
                MIN_FIELDS,
                fields.len()
            ),
        });
    }

    let count = |index: usize| -> Result<u64> {
        let field = &fields[index];
        field
            .parse::<u64>()
            .map_err(|_| CovbadgeError::MalformedInput {
                row: line_number,
                reason: format!("field {index} is not a non-negative integer: '{field}'"),
            })
    };

    Ok(CoverageRow {
        instructions: Counter::new(count(3)?, count(4)?),
        branches: Counter::new(count(5)?, count(6)?),
        lines: Counter::new(count(7)?, count(8)?),
    })
}

/// Split one CSV record into fields. A double-quoted field may contain
/// commas; a doubled quote inside a quoted field is a literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let input = include_bytes!("../tests/fixtures/sample_jacoco.csv");
        let rows = parse(input).unwrap();

        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].instructions, Counter::new(12, 148));
        assert_eq!(rows[0].branches, Counter::new(3, 17));
        assert_eq!(rows[0].lines, Counter::new(4, 38));

        // Fully untested class
        assert_eq!(rows[3].instructions, Counter::new(88, 0));
        assert_eq!(rows[3].branches, Counter::new(6, 0));
        assert_eq!(rows[3].lines, Counter::new(21, 0));
    }

    #[test]
    fn test_header_is_never_counted() {
        let input = b"GROUP,PACKAGE,CLASS,A,B,C,D,E,F\n";
        let rows = parse(input).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = b"G,P,C,IM,IC,BM,BC,LM,LC\n\ndemo,pkg,Foo,1,2,3,4,5,6\n\n";
        let rows = parse(input).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lines, Counter::new(5, 6));
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = b"G,P,C,IM,IC,BM,BC,LM,LC\r\ndemo,pkg,Foo,0,10,0,4,0,6\r\n";
        let rows = parse(input).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].instructions, Counter::new(0, 10));
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let input = b"G,P,C,IM,IC,BM,BC,LM,LC\ndemo,pkg,\"Foo, inner\",1,2,3,4,5,6\n";
        let rows = parse(input).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].instructions, Counter::new(1, 2));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let input = b"G,P,C,IM,IC,BM,BC,LM,LC,CM,CC,MM,MC\ndemo,pkg,Foo,1,2,3,4,5,6,7,8,9,10\n";
        let rows = parse(input).unwrap();
        assert_eq!(rows[0].branches, Counter::new(3, 4));
    }

    #[test]
    fn test_too_few_fields() {
        let input = b"G,P,C,IM,IC,BM,BC,LM,LC\ndemo,pkg,Foo,1,2,3\n";
        let err = parse(input).unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("line 2"), "unexpected error: {msg}");
        assert!(msg.contains("found 6"), "unexpected error: {msg}");
    }

    #[test]
    fn test_non_integer_field() {
        let input = b"G,P,C,IM,IC,BM,BC,LM,LC\ndemo,pkg,Foo,1,2,3,4,five,6\n";
        let err = parse(input).unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("line 2"), "unexpected error: {msg}");
        assert!(msg.contains("five"), "unexpected error: {msg}");
    }

    #[test]
    fn test_negative_count_is_malformed() {
        let input = b"G,P,C,IM,IC,BM,BC,LM,LC\ndemo,pkg,Foo,-1,2,3,4,5,6\n";
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_empty_input() {
        let rows = parse(b"").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("a,b,c"), ["a", "b", "c"]);
        assert_eq!(split_fields("a,\"b,c\",d"), ["a", "b,c", "d"]);
        assert_eq!(split_fields("a,\"say \"\"hi\"\"\",b"), ["a", "say \"hi\"", "b"]);
        assert_eq!(split_fields(""), [""]);
    }
}
