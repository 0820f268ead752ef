//! Snapshot writer over any byte sink.

use crate::codec::encode_snapshot;
use crate::error::SnapshotError;
use croft_grid::FarmGrid;
use std::io::Write;

/// Writes snapshot text to a byte stream.
///
/// Generic over `W: Write` so tests can target `Vec<u8>` and production
/// code a `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use croft_core::FarmKind;
/// use croft_grid::FarmGrid;
/// use croft_snapshot::{SnapshotReader, SnapshotWriter};
///
/// let grid = FarmGrid::new(FarmKind::Plant, 1, 2).unwrap();
/// let mut buf = Vec::new();
/// SnapshotWriter::new(&mut buf).write_grid(&grid).unwrap();
///
/// let restored = SnapshotReader::open(buf.as_slice()).unwrap().load().unwrap();
/// assert_eq!(restored.export_status(), grid.export_status());
/// ```
#[derive(Debug)]
pub struct SnapshotWriter<W: Write> {
    writer: W,
}

impl<W: Write> SnapshotWriter<W> {
    /// Create a writer over the given sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Encode the grid and write the full snapshot, flushing the sink.
    pub fn write_grid(&mut self, grid: &FarmGrid) -> Result<(), SnapshotError> {
        self.writer.write_all(encode_snapshot(grid).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
