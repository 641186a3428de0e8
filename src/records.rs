//! Line-oriented integer-pair records.
//!
//! All external tables this crate consumes or produces share one textual
//! shape: two whitespace-separated non-negative integers per line
//! (`n bound`, `n complexity`, `base remainder`). A corrupted line aborts
//! the whole read: every downstream complexity value depends on every
//! table entry being exact, so there is no meaningful partial result.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

/// Failure while reading a record stream.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("line {line}: expected two integer fields, found {fields}")]
    FieldCount { line: usize, fields: usize },
    #[error("line {line}: invalid integer field")]
    BadInteger {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Read `(a, b)` pairs, one per line, until end of stream.
///
/// Blank lines are tolerated (trailing newlines in hand-maintained tables);
/// anything else that does not parse as exactly two integers fails fast
/// with the offending 1-based line number.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<(u64, u64)>, RecordError> {
    let mut pairs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(RecordError::FieldCount {
                line: idx + 1,
                fields: fields.len(),
            });
        }
        let parse = |s: &str| {
            s.parse::<u64>().map_err(|source| RecordError::BadInteger {
                line: idx + 1,
                source,
            })
        };
        pairs.push((parse(fields[0])?, parse(fields[1])?));
    }
    Ok(pairs)
}

/// Read pairs from a file path.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(u64, u64)>, RecordError> {
    read_pairs(BufReader::new(File::open(path)?))
}

/// Write `(a, b)` pairs in the same `a b` line format `read_pairs` accepts.
pub fn write_pairs<W: Write>(
    writer: W,
    pairs: impl IntoIterator<Item = (u64, u64)>,
) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for (a, b) in pairs {
        writeln!(writer, "{a} {b}")?;
    }
    writer.flush()
}
