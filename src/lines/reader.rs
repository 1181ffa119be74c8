use std::path::Path;

use tracing::{debug, info};

use crate::common::io::read_file;
use crate::error::{Error, Result};

/// Records loaded from a name list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOutcome {
    /// Trimmed, non-empty lines in file order.
    pub records: Vec<String>,
    /// Lines dropped because they were empty after trimming.
    pub blank_lines: usize,
}

/// Read a name list from `path`. See [`parse_records`].
pub fn read_records(path: &Path) -> Result<ReadOutcome> {
    let data = read_file(path).map_err(|e| Error::read(path, e))?;
    let outcome = parse_records(&data);
    info!(
        path = %path.display(),
        records = outcome.records.len(),
        blank_lines = outcome.blank_lines,
        "read name list"
    );
    Ok(outcome)
}

/// Split `data` into lines, trim each one and keep the non-empty ones.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; a final line without a
/// terminator still counts. Trimming strips every character up to and
/// including U+0020 from both ends. Invalid UTF-8 is replaced with U+FFFD.
pub fn parse_records(data: &[u8]) -> ReadOutcome {
    let mut outcome = ReadOutcome::default();
    for line in split_lines(data) {
        let text = String::from_utf8_lossy(line);
        let trimmed = trim_record(&text);
        if trimmed.is_empty() {
            outcome.blank_lines += 1;
        } else {
            outcome.records.push(trimmed.to_owned());
        }
    }
    if outcome.blank_lines > 0 {
        debug!(blank_lines = outcome.blank_lines, "skipped blank lines");
    }
    outcome
}

#[inline]
fn trim_record(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Iterate over the lines of `data` without their terminators.
fn split_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0usize;
    let mut ends = memchr::memchr2_iter(b'\n', b'\r', data);
    std::iter::from_fn(move || {
        loop {
            match ends.next() {
                Some(pos) => {
                    // "\r\n" is one terminator: the '\n' right after a '\r'
                    // that already ended a line is skipped.
                    if data[pos] == b'\n' && pos > 0 && data[pos - 1] == b'\r' && pos == start {
                        start = pos + 1;
                        continue;
                    }
                    let line = &data[start..pos];
                    start = pos + 1;
                    return Some(line);
                }
                None => {
                    if start < data.len() {
                        let line = &data[start..];
                        start = data.len();
                        return Some(line);
                    }
                    return None;
                }
            }
        }
    })
}

#[cfg(test)]
pub(super) fn lines_of(data: &[u8]) -> Vec<&[u8]> {
    split_lines(data).collect()
}
