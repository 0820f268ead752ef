//! Text encode/decode for the snapshot format.
//!
//! The encoder walks the grid's status export row by row; the decoder is
//! driven entirely by the header — it consumes exactly the promised number
//! of lines and records, and anything that does not parse is reported with
//! its line and cell position rather than skipped.

use crate::error::SnapshotError;
use croft_core::{Catalog, Entity, FarmKind};
use croft_grid::FarmGrid;

/// The decoded snapshot header: farm kind and grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Farm kind of the stored grid.
    pub farm: FarmKind,
    /// Row count the record lines must satisfy.
    pub rows: usize,
    /// Record count each line must satisfy.
    pub columns: usize,
}

// ── Encoding ────────────────────────────────────────────────────

/// Encode a grid as snapshot text: header line, then one line per row.
///
/// Every line is `\n`-terminated. The output is canonical: decoding it and
/// encoding the result reproduces it byte for byte.
pub fn encode_snapshot(grid: &FarmGrid) -> String {
    let mut out = format!(
        "{},{},{}\n",
        grid.farm_kind(),
        grid.rows(),
        grid.columns()
    );
    let status = grid.export_status();
    for row in 0..grid.rows() {
        let start = row * grid.columns();
        let line = status[start..start + grid.columns()]
            .iter()
            .map(|fields| fields.join(","))
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

// ── Decoding ────────────────────────────────────────────────────

/// Decode and validate the header line (no trailing newline).
pub fn decode_header(line: &str) -> Result<Header, SnapshotError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(SnapshotError::MalformedHeader {
            detail: format!(
                "expected `farmKind,rows,columns`, got {} fields",
                fields.len()
            ),
        });
    }
    let farm = FarmKind::from_name(fields[0]).ok_or_else(|| SnapshotError::MalformedHeader {
        detail: format!("unknown farm kind '{}'", fields[0]),
    })?;
    let rows = parse_dimension(fields[1], "row count")?;
    let columns = parse_dimension(fields[2], "column count")?;
    Ok(Header {
        farm,
        rows,
        columns,
    })
}

fn parse_dimension(field: &str, what: &str) -> Result<usize, SnapshotError> {
    let value: usize = field.parse().map_err(|_| SnapshotError::MalformedHeader {
        detail: format!("{what} '{field}' is not a number"),
    })?;
    if value == 0 {
        return Err(SnapshotError::MalformedHeader {
            detail: format!("{what} must be positive"),
        });
    }
    Ok(value)
}

/// Decode full snapshot text into a grid.
///
/// The header governs consumption: exactly `rows` record lines are read
/// and anything after them is ignored. Header failures abort immediately;
/// record failures name the offending line and cell.
pub fn decode_snapshot(text: &str) -> Result<FarmGrid, SnapshotError> {
    let mut lines = text.lines();
    let header_line = lines.next().ok_or_else(|| SnapshotError::MalformedHeader {
        detail: "empty snapshot".into(),
    })?;
    let header = decode_header(header_line)?;

    let mut grid = new_grid(&header)?;
    for row in 0..header.rows {
        let line = lines.next().ok_or(SnapshotError::TruncatedGrid {
            expected: header.rows,
            found: row,
        })?;
        decode_row(&header, &mut grid, row, line)?;
    }
    Ok(grid)
}

/// Build the all-ground grid a decode populates.
pub(crate) fn new_grid(header: &Header) -> Result<FarmGrid, SnapshotError> {
    FarmGrid::new(header.farm, header.rows, header.columns).map_err(|e| {
        SnapshotError::MalformedHeader {
            detail: e.to_string(),
        }
    })
}

/// Decode one record line into row `row` of the grid.
pub(crate) fn decode_row(
    header: &Header,
    grid: &mut FarmGrid,
    row: usize,
    line: &str,
) -> Result<(), SnapshotError> {
    // Grid lines start after the header, and error positions are 1-based.
    let line_no = row + 2;
    let records: Vec<&str> = line.split('|').collect();
    if records.len() != header.columns {
        return Err(SnapshotError::RecordCountMismatch {
            line: line_no,
            expected: header.columns,
            found: records.len(),
        });
    }
    for (column, record) in records.iter().enumerate() {
        if let Some(entity) = decode_record(header.farm, line_no, column, record)? {
            grid.cell_mut(row, column)
                .expect("row and column iterate within the header dimensions")
                .place(entity)
                .expect("freshly built grid has no occupants");
        }
    }
    Ok(())
}

/// Decode one cell record. `Ok(None)` is ground.
fn decode_record(
    farm: FarmKind,
    line: usize,
    column: usize,
    record: &str,
) -> Result<Option<Entity>, SnapshotError> {
    let malformed = |detail: String| SnapshotError::MalformedRecord {
        line,
        column,
        detail,
    };
    let fields: Vec<&str> = record.split(',').collect();

    if fields[0] == "ground" {
        if fields.len() != 2 || fields[1] != " " {
            return Err(malformed("ground record must be exactly `ground, `".into()));
        }
        return Ok(None);
    }

    let kind = Catalog::builtin()
        .kind_by_name(fields[0])
        .ok_or_else(|| malformed(format!("unknown entity '{}'", fields[0])))?;
    if kind.category != farm {
        return Err(malformed(format!(
            "a {} record cannot appear on a {farm} farm",
            kind.category
        )));
    }

    let entity = match kind.category {
        FarmKind::Plant => {
            if fields.len() != 3 {
                return Err(malformed(format!(
                    "plant record needs 3 fields, got {}",
                    fields.len()
                )));
            }
            let raw = fields[2]
                .strip_prefix("Stage: ")
                .ok_or_else(|| malformed(format!("expected `Stage: N`, got '{}'", fields[2])))?;
            let stage: usize = raw
                .parse()
                .map_err(|_| malformed(format!("growth stage '{raw}' is not a number")))?;
            Entity::restore_plant(kind, stage).ok_or_else(|| {
                malformed(format!(
                    "stage {stage} is out of range for {} (max {})",
                    kind.name,
                    kind.max_stage()
                ))
            })?
        }
        FarmKind::Animal => {
            if fields.len() != 4 {
                return Err(malformed(format!(
                    "animal record needs 4 fields, got {}",
                    fields.len()
                )));
            }
            let fed = parse_flag(fields[2], "Fed: ").map_err(malformed)?;
            let collected = parse_flag(fields[3], "Collected: ").map_err(malformed)?;
            Entity::restore_animal(kind, fed, collected)
                .expect("kind category was checked against the farm above")
        }
    };

    let expected = entity.display_symbol().to_string();
    if fields[1] != expected {
        return Err(malformed(format!(
            "recorded symbol '{}' does not match the entity state (expected '{expected}')",
            fields[1]
        )));
    }
    Ok(Some(entity))
}

fn parse_flag(field: &str, prefix: &str) -> Result<bool, String> {
    let value = field
        .strip_prefix(prefix)
        .ok_or_else(|| format!("expected `{prefix}…`, got '{field}'"))?;
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected `true` or `false`, got '{other}'")),
    }
}
