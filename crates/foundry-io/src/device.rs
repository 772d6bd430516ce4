//! Device-point import: electrode columns given as `i j` pairs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::RangeInclusive;
use std::path::Path;

use foundry_grid::SpatialGrid;
use indexmap::IndexSet;
use tracing::debug;

use crate::error::{parse_tokens, IoError};

/// Electrode columns of a device, in first-seen order without duplicates.
///
/// Each `(i, j)` pair stands for a vertical column of cells. Applying the
/// device marks every cell of the column whose K coordinate lies in the
/// axial span as an electrode at the given voltage.
///
/// ```
/// use foundry_grid::SpatialGrid;
/// use foundry_io::DevicePoints;
///
/// let device = DevicePoints::read("1 1\n1 1\n2 1\n".as_bytes()).unwrap();
/// assert_eq!(device.len(), 2);
///
/// let mut grid = SpatialGrid::with_bounds(4, 0.0, 3.0).unwrap();
/// let summary = device.apply(&mut grid, 1.0, 1.0..=2.0);
/// assert_eq!(summary.cells_marked, 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DevicePoints {
    columns: IndexSet<(i64, i64)>,
}

/// Result of [`DevicePoints::apply`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceImportSummary {
    /// Distinct columns in the device.
    pub columns: usize,
    /// Columns whose `(i, j)` lies on the grid.
    pub columns_on_grid: usize,
    /// Cells marked as electrodes.
    pub cells_marked: usize,
}

impl DevicePoints {
    /// Axial span marked when none is given.
    pub const DEFAULT_K_SPAN: RangeInclusive<f64> = 45.0..=55.0;

    /// Read `i j` integer pairs, one per line.
    ///
    /// A third number on a line is accepted and ignored; the axial extent
    /// comes from the span passed to [`apply`](Self::apply). Blank lines
    /// are skipped and repeated pairs are kept once.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, IoError> {
        let mut columns = IndexSet::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let v: Vec<i64> = parse_tokens(n + 1, &line, "i j", &[2, 3])?;
            columns.insert((v[0], v[1]));
        }
        Ok(Self { columns })
    }

    /// [`read`](Self::read) from the file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let file = File::open(path).map_err(|e| IoError::from(e).at_path(path))?;
        let device = Self::read(BufReader::new(file)).map_err(|e| e.at_path(path))?;
        debug!(path = %path.display(), columns = device.len(), "device points read");
        Ok(device)
    }

    /// Number of distinct columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the device has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns in first-seen order.
    pub fn columns(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.columns.iter().copied()
    }

    /// Mark the device on `grid`: conductivity 1 and `voltage` for every
    /// cell of each column with K coordinate in `k_span`.
    ///
    /// Columns that fall outside the grid are skipped.
    pub fn apply(
        &self,
        grid: &mut SpatialGrid,
        voltage: f64,
        k_span: RangeInclusive<f64>,
    ) -> DeviceImportSummary {
        let geo = *grid.geometry();
        let ks: Vec<u32> = (0..geo.points_per_axis())
            .filter(|&n| k_span.contains(&geo.coordinate(n)))
            .collect();

        let mut summary = DeviceImportSummary {
            columns: self.len(),
            ..DeviceImportSummary::default()
        };
        for (i, j) in self.columns() {
            let (Some(li), Some(lj)) = (
                geo.locate_coordinate(i as f64),
                geo.locate_coordinate(j as f64),
            ) else {
                continue;
            };
            summary.columns_on_grid += 1;
            for &k in &ks {
                let key = geo.key(foundry_core::LatticeIndex::new(li, lj, k));
                grid.set_conductivity(key, 1.0);
                grid.set_voltage(key, voltage);
                summary.cells_marked += 1;
            }
        }
        debug!(
            columns = summary.columns,
            on_grid = summary.columns_on_grid,
            cells = summary.cells_marked,
            "device applied"
        );
        summary
    }
}
