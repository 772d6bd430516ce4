//! Field export (`i j k x y z`) at one simulation time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use foundry_core::{FieldKind, SimTime};
use foundry_grid::SpatialGrid;
use tracing::{debug, warn};

use crate::error::IoError;

/// Text written in place of the three components when a point has no
/// value at the requested time.
pub const MISSING_SAMPLE: &str = "NaN NaN NaN";

/// Outcome of a field export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldExport {
    /// Records written, one per point.
    pub records: usize,
    /// Records written with the [`MISSING_SAMPLE`] marker.
    pub missing: usize,
}

/// Write `i j k x y z` for every point, in canonical order.
///
/// Points with no `kind` value recorded at exactly `time` get
/// [`MISSING_SAMPLE`] in place of the components.
pub fn write_field<W: Write>(
    grid: &SpatialGrid,
    kind: FieldKind,
    time: SimTime,
    mut writer: W,
) -> Result<FieldExport, IoError> {
    let mut export = FieldExport::default();
    for (key, p) in grid.iter() {
        match p.field(kind, time) {
            Some(v) => writeln!(writer, "{key} {v}")?,
            None => {
                writeln!(writer, "{key} {MISSING_SAMPLE}")?;
                export.missing += 1;
            }
        }
        export.records += 1;
    }
    writer.flush()?;
    if export.missing > 0 {
        warn!(
            field = kind.short_name(),
            time = %time,
            missing = export.missing,
            "field export has points without a value at this time"
        );
    }
    Ok(export)
}

/// [`write_field`] to a new file at `path`.
pub fn write_field_to_path(
    grid: &SpatialGrid,
    kind: FieldKind,
    time: SimTime,
    path: &Path,
) -> Result<FieldExport, IoError> {
    let file = File::create(path).map_err(|e| IoError::from(e).at_path(path))?;
    let export = write_field(grid, kind, time, BufWriter::new(file)).map_err(|e| e.at_path(path))?;
    debug!(
        path = %path.display(),
        field = kind.short_name(),
        records = export.records,
        "field written"
    );
    Ok(export)
}
