//! Error types for snapshot encoding and loading.

use std::fmt;
use std::io;

/// Errors that can occur while writing or loading a snapshot.
///
/// Header problems fail the whole load fast; record problems carry the
/// 1-based line and 0-based cell column they were found at, so a caller
/// can report exactly which cell of a hand-edited file is broken.
#[derive(Debug)]
pub enum SnapshotError {
    /// An I/O error from the underlying reader or writer.
    Io(io::Error),
    /// The header line is missing or does not parse.
    MalformedHeader {
        /// What was wrong with it.
        detail: String,
    },
    /// The text ended before the header's row count was satisfied.
    TruncatedGrid {
        /// Rows promised by the header.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },
    /// A grid line holds the wrong number of cell records.
    RecordCountMismatch {
        /// 1-based line number in the snapshot.
        line: usize,
        /// Records promised by the header.
        expected: usize,
        /// Records actually present.
        found: usize,
    },
    /// A single cell record does not decode.
    MalformedRecord {
        /// 1-based line number in the snapshot.
        line: usize,
        /// 0-based cell column within the line.
        column: usize,
        /// What was wrong with it.
        detail: String,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedHeader { detail } => write!(f, "malformed header: {detail}"),
            Self::TruncatedGrid { expected, found } => {
                write!(f, "truncated grid: header promised {expected} rows, found {found}")
            }
            Self::RecordCountMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: expected {expected} cell records, found {found}"
            ),
            Self::MalformedRecord {
                line,
                column,
                detail,
            } => write!(f, "line {line}, cell {column}: {detail}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
