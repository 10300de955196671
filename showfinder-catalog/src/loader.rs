//! Tab-separated title catalog parser.
//!
//! Reads the flattened `title.basics` export: one title per line, tab
//! separated, first non-empty line is a header. `\N` marks an unknown value.
//! Parsing never fails; bad numbers become `0` and short lines are dropped.

use csv::StringRecord;
use serde::Serialize;

use crate::record::ShowRecord;
use crate::title_type::TitleType;

/// Placeholder for an unknown field value.
pub const UNKNOWN_FIELD: &str = "\\N";

/// Number of columns a line needs to produce a record (genres is the last).
pub const REQUIRED_FIELDS: usize = 9;

// Column positions:
// 0: tconst
// 1: titleType
// 2: primaryTitle
// 3: originalTitle
// 4: isAdult
// 5: startYear
// 6: endYear
// 7: runtimeMinutes
// 8: genres
const COL_IS_ADULT: usize = 4;
const COL_START_YEAR: usize = 5;
const COL_END_YEAR: usize = 6;
const COL_RUNTIME: usize = 7;
const COL_GENRES: usize = 8;

/// Counts gathered while loading a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Non-empty lines after the header
    pub lines: usize,
    /// Lines that produced a record
    pub records: usize,
    /// Lines dropped for having fewer than nine fields
    pub skipped: usize,
}

/// Parse catalog content into records, in source order.
pub fn parse_catalog(content: &str) -> Vec<ShowRecord> {
    parse_catalog_with_report(content).0
}

/// Parse catalog content, also returning line counts.
pub fn parse_catalog_with_report(content: &str) -> (Vec<ShowRecord>, LoadReport) {
    // Only '\n' ends a line: a stray '\r' is data, and a line holding just
    // "\r" is not blank. Blank lines are skipped before the header is taken.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for result in reader.records() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping unreadable catalog line: {e}");
                continue;
            }
        };

        report.lines += 1;
        match record_from_row(&row) {
            Some(record) => records.push(record),
            None => {
                report.skipped += 1;
                log::trace!(
                    "Skipping catalog line {}: {} of {REQUIRED_FIELDS} fields",
                    row.position().map_or(0, |p| p.line()),
                    row.len(),
                );
            }
        }
    }

    report.records = records.len();
    log::debug!(
        "Loaded {} titles from {} lines ({} skipped)",
        report.records,
        report.lines,
        report.skipped,
    );

    (records, report)
}

/// Parse a single data line (no header handling).
///
/// Returns `None` if the line has fewer than nine tab-separated fields.
pub fn parse_line(line: &str) -> Option<ShowRecord> {
    let row: StringRecord = line.split('\t').collect();
    record_from_row(&row)
}

fn record_from_row(row: &StringRecord) -> Option<ShowRecord> {
    let is_adult = row.get(COL_IS_ADULT) == Some("1");
    let start_year = parse_number(row.get(COL_START_YEAR));
    let end_year = parse_number(row.get(COL_END_YEAR));
    let runtime_minutes = parse_number(row.get(COL_RUNTIME));

    let genres = row.get(COL_GENRES)?.split(',').map(str::to_string).collect();
    let get = |i: usize| row.get(i).unwrap_or("").to_string();

    Some(ShowRecord {
        show_id: get(0),
        title_type: TitleType::parse(row.get(1).unwrap_or("")),
        primary_title: get(2),
        original_title: get(3),
        is_adult,
        start_year,
        end_year,
        runtime_minutes,
        genres,
    })
}

/// Parse an integer column, falling back to `0` when the field is missing,
/// `\N`, or not a number. Surrounding whitespace is ignored.
fn parse_number(field: Option<&str>) -> i32 {
    match field {
        Some(UNKNOWN_FIELD) | None => 0,
        Some(s) => s.trim().parse().unwrap_or(0),
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
