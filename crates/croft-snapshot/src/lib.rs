//! Line-oriented text snapshots of Croft farm grids.
//!
//! The format is the persistence interface of the simulation:
//!
//! ```text
//! plant,2,2
//! berry,o,Stage: 2|wheat,ἴ,Stage: 0
//! ground, |coffee,%,Stage: 4
//! ```
//!
//! One header line (`farmKind,rows,columns`), then exactly `rows` lines of
//! `columns` cell records joined by `|`. Each record is the cell's status
//! fields joined by `,`: ground cells are `ground, `, plants carry a
//! `Stage:` field, animals carry `Fed:` and `Collected:`. Text produced by
//! this codec is a fixed point: `encode(decode(text)) == text`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_header, decode_snapshot, encode_snapshot, Header};
pub use error::SnapshotError;
pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;
