//! Snapshot reader over any buffered byte source.

use crate::codec::{decode_header, decode_row, new_grid, Header};
use crate::error::SnapshotError;
use croft_grid::FarmGrid;
use std::io::BufRead;

/// Reads snapshot text from a byte stream.
///
/// The header is read and validated on [`SnapshotReader::open`], so a
/// caller can inspect the farm kind and dimensions before committing to
/// the full load. Generic over `R: BufRead` so tests can use `&[u8]` and
/// production code a `BufReader<File>`.
#[derive(Debug)]
pub struct SnapshotReader<R: BufRead> {
    reader: R,
    header: Header,
}

impl<R: BufRead> SnapshotReader<R> {
    /// Open a snapshot stream, reading and validating the header line.
    pub fn open(mut reader: R) -> Result<Self, SnapshotError> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(SnapshotError::MalformedHeader {
                detail: "empty snapshot".into(),
            });
        }
        let header = decode_header(strip_line_ending(&line))?;
        Ok(Self { reader, header })
    }

    /// The validated header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Read the record lines and rebuild the grid.
    ///
    /// Exactly `header.rows` lines are consumed; the header governs the
    /// load, not the stream length.
    pub fn load(mut self) -> Result<FarmGrid, SnapshotError> {
        let mut grid = new_grid(&self.header)?;
        let mut line = String::new();
        for row in 0..self.header.rows {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(SnapshotError::TruncatedGrid {
                    expected: self.header.rows,
                    found: row,
                });
            }
            decode_row(&self.header, &mut grid, row, strip_line_ending(&line))?;
        }
        Ok(grid)
    }
}

/// Strip one trailing `\n` (and a preceding `\r`, for foreign editors)
/// without touching the record's own trailing spaces.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
