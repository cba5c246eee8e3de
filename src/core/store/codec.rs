//! Flat-file record format.
//!
//! Each record occupies exactly three lines: identifier, secret, annotation.
//! There is no header and no escaping, so fields cannot contain newlines.

use crate::core::record::Record;

/// Number of lines one record occupies.
pub const LINES_PER_RECORD: usize = 3;

/// Parse file contents into records, in file order.
///
/// Lines are split on `\n` only; a `\r` is field content and is kept.
///
/// Returns `Err(line_count)` when the number of lines is not a multiple of
/// [`LINES_PER_RECORD`].
pub fn decode(contents: &str, default_identifier: &str) -> std::result::Result<Vec<Record>, usize> {
    let lines: Vec<&str> = contents.split_terminator('\n').collect();
    if lines.len() % LINES_PER_RECORD != 0 {
        return Err(lines.len());
    }

    Ok(lines
        .chunks_exact(LINES_PER_RECORD)
        .map(|chunk| Record::new(chunk[0], chunk[1], chunk[2], default_identifier))
        .collect())
}

/// Serialize records, one field per newline-terminated line.
pub fn encode(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(record.identifier());
        out.push('\n');
        out.push_str(record.secret());
        out.push('\n');
        out.push_str(record.annotation());
        out.push('\n');
    }
    out
}
