//! Voltage dataset import and export (`i j k conductivity voltage`).

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use foundry_core::GridKey;
use foundry_grid::{GridGeometry, SpatialGrid, VoltageSeed};
use tracing::debug;

use crate::error::{parse_tokens, IoError};

/// Read every `i j k conductivity voltage` record.
///
/// Blank lines are skipped. Any other line must hold exactly five numbers.
pub fn read_voltage_seeds<R: BufRead>(reader: R) -> Result<Vec<VoltageSeed>, IoError> {
    let mut seeds = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let v: Vec<f64> = parse_tokens(n + 1, &line, "i j k conductivity voltage", &[5])?;
        seeds.push(VoltageSeed::new(GridKey::new(v[0], v[1], v[2]), v[3], v[4]));
    }
    Ok(seeds)
}

/// Build a grid with `geometry` seeded from the dataset at `path`.
///
/// Fails if the file cannot be read, a record is malformed, or a record
/// names a coordinate that is not a lattice site.
pub fn load_grid(path: &Path, geometry: GridGeometry) -> Result<SpatialGrid, IoError> {
    let file = File::open(path).map_err(|e| IoError::from(e).at_path(path))?;
    let seeds = read_voltage_seeds(BufReader::new(file)).map_err(|e| e.at_path(path))?;
    debug!(path = %path.display(), records = seeds.len(), "voltage dataset read");
    Ok(SpatialGrid::from_seeds(geometry, seeds)?)
}

/// Write `i j k conductivity voltage` for every point, in canonical order.
///
/// Returns the number of records written.
pub fn write_voltages<W: Write>(grid: &SpatialGrid, mut writer: W) -> Result<usize, IoError> {
    for (key, p) in grid.iter() {
        writeln!(writer, "{key} {} {}", p.conductivity(), p.voltage())?;
    }
    writer.flush()?;
    Ok(grid.len())
}

/// [`write_voltages`] to a new file at `path`.
pub fn write_voltages_to_path(grid: &SpatialGrid, path: &Path) -> Result<usize, IoError> {
    let file = File::create(path).map_err(|e| IoError::from(e).at_path(path))?;
    let records = write_voltages(grid, BufWriter::new(file)).map_err(|e| e.at_path(path))?;
    debug!(path = %path.display(), records, "voltages written");
    Ok(records)
}
