//! CSV redirect sources.
//!
//! ```text
//! /docs,https://docs.example.com
//! /blog,"https://blog.example.com"
//! ```
//!
//! Inline payloads are split on newlines and commas with no escaping, so a
//! comma inside a value is not supported there. Files go through a
//! quoting-aware reader. In both modes a row must have exactly two columns
//! and blank lines are skipped.

use std::fs::File;
use std::path::Path;

use super::record::unquote;
use super::{Format, LoadError, RedirectSource, Record};

/// Decode two-column `path,url` rows.
pub fn decode(source: &RedirectSource) -> Result<Vec<Record>, LoadError> {
    match source {
        RedirectSource::Inline(payload) => decode_lines(payload),
        RedirectSource::File(path) => decode_file(path),
    }
}

fn decode_lines(payload: &str) -> Result<Vec<Record>, LoadError> {
    let mut records = Vec::new();

    for (index, line) in payload.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split(',').collect();
        let [path, destination] = columns.as_slice() else {
            return Err(LoadError::MalformedRow {
                line: index + 1,
                found: columns.len(),
            });
        };

        records.push(Record::new(path, unquote(destination.trim())));
    }

    Ok(records)
}

fn decode_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::unavailable(path, e))?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| classify(path, e))?;
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }
        if row.len() != 2 {
            return Err(LoadError::MalformedRow {
                line: row.position().map(|p| p.line() as usize).unwrap_or_default(),
                found: row.len(),
            });
        }

        records.push(Record::new(&row[0], unquote(row[1].trim())));
    }

    Ok(records)
}

fn classify(path: &Path, err: ::csv::Error) -> LoadError {
    let reason = err.to_string();
    match err.into_kind() {
        ::csv::ErrorKind::Io(io) => LoadError::unavailable(path, io),
        _ => LoadError::decode(Format::Csv, reason),
    }
}
