//! The simulation driver: seed, relax, step, export.
//!
//! [`RunConfig`] selects the stages; [`run`] executes them in order:
//!
//! 1. Build the grid from a [`Seed`].
//! 2. Mark device columns, if any.
//! 3. Relax the voltages.
//! 4. Compute the initial electric field (closing a rod gap afterwards).
//! 5. Advance the fields by the requested number of steps.
//! 6. Write the requested exports and compute state digests.

use std::error::Error;
use std::fmt;
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use foundry_core::{FieldKind, PhysicalConstants, SimTime, StepError};
use foundry_grid::{GridError, GridGeometry, SpatialGrid};
use foundry_io::{
    field_digest, load_grid, voltage_digest, write_field_to_path, write_voltages_to_path,
    DeviceImportSummary, DevicePoints, IoError,
};
use foundry_solver::{
    ConfigError, FieldTimeStepper, RelaxError, RelaxationReport, StepMetrics, StepperConfig,
    VoltageRelaxation,
};
use tracing::info;

use crate::scenario;

// ── RunConfig ──────────────────────────────────────────────────────

/// Where the initial voltages and electrodes come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// `i j k conductivity voltage` dataset.
    Dataset(PathBuf),
    /// Electrode rod through the centre column; see [`scenario::rod`].
    Rod {
        /// Rod voltage.
        voltage: f64,
        /// Leave the centre cell out until the initial field is computed.
        gap: bool,
    },
    /// No electrodes, all voltages 0.
    Empty,
}

/// Device-point import settings.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceImport {
    /// File of `i j` pairs.
    pub path: PathBuf,
    /// Voltage of the marked cells.
    pub voltage: f64,
    /// K coordinates marked in each column.
    pub k_span: RangeInclusive<f64>,
}

/// Which files a run writes into [`RunConfig::output_dir`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Exports {
    /// Write `initial-voltages` after relaxation.
    pub voltages: bool,
    /// Field kinds to write, one file per recorded time.
    pub fields: Vec<FieldKind>,
}

impl Exports {
    /// Returns `true` if nothing is exported.
    pub fn is_empty(&self) -> bool {
        !self.voltages && self.fields.is_empty()
    }
}

/// Configuration of one driver run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Points per dimension. Default: 101.
    pub points_per_dim: u32,
    /// Lower lattice bound, shared by all axes. Default: 0.
    pub start: f64,
    /// Upper lattice bound, shared by all axes. Default: 100.
    pub end: f64,
    /// Initial voltages and electrodes. Default: an ungapped rod at 1 V.
    pub seed: Seed,
    /// Optional device columns applied after seeding.
    pub device: Option<DeviceImport>,
    /// Relax the voltages before the initial field. Default: `false`.
    pub relax: bool,
    /// Relaxation comparison precision. Default: 3.
    pub decimal_places: u32,
    /// Relaxation sweep cap. Default: none.
    pub max_sweeps: Option<u64>,
    /// Compute the initial electric field. Default: `true`.
    pub initial_field: bool,
    /// Time steps to advance. Default: 3.
    pub steps: u64,
    /// Time increment. Default: 0.00125.
    pub dt: f64,
    /// Drude scattering time τ. Default: 0.25.
    pub scattering_time: f64,
    /// Directory for exports. Required when any export is requested.
    pub output_dir: Option<PathBuf>,
    /// Files to write.
    pub exports: Exports,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            points_per_dim: 101,
            start: 0.0,
            end: 100.0,
            seed: Seed::Rod {
                voltage: 1.0,
                gap: false,
            },
            device: None,
            relax: false,
            decimal_places: VoltageRelaxation::DEFAULT_DECIMAL_PLACES,
            max_sweeps: None,
            initial_field: true,
            steps: 3,
            dt: StepperConfig::DEFAULT_DT,
            scattering_time: PhysicalConstants::default().drude_scattering_time,
            output_dir: None,
            exports: Exports::default(),
        }
    }
}

impl RunConfig {
    /// Check driver-level consistency.
    ///
    /// Solver parameters are validated by the solvers themselves when the
    /// run builds them.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.steps > 0 && !self.initial_field {
            return Err(RunError::InvalidConfig {
                reason: "stepping requires the initial electric field".into(),
            });
        }
        if !self.exports.is_empty() && self.output_dir.is_none() {
            return Err(RunError::InvalidConfig {
                reason: "exports requested without an output directory".into(),
            });
        }
        if let Some(device) = &self.device {
            if device.k_span.is_empty() {
                return Err(RunError::InvalidConfig {
                    reason: format!(
                        "device K span {}..={} is empty",
                        device.k_span.start(),
                        device.k_span.end()
                    ),
                });
            }
        }
        Ok(())
    }

    fn stepper_config(&self) -> StepperConfig {
        StepperConfig {
            dt: self.dt,
            constants: PhysicalConstants {
                drude_scattering_time: self.scattering_time,
                ..PhysicalConstants::default()
            },
        }
    }
}

// ── RunSummary ─────────────────────────────────────────────────────

/// What a run did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Points in the grid.
    pub points: usize,
    /// Device import outcome, if a device was applied.
    pub device: Option<DeviceImportSummary>,
    /// Relaxation report, if relaxation ran.
    pub relaxation: Option<RelaxationReport>,
    /// Metrics of each time step, in order.
    pub steps: Vec<StepMetrics>,
    /// Current time at the end of the run.
    pub final_time: SimTime,
    /// Digest of conductivities and voltages at the end of the run.
    pub voltage_digest: u64,
    /// Digest of each field kind at [`final_time`](Self::final_time).
    pub field_digests: Vec<(FieldKind, u64)>,
    /// Files written, in order.
    pub files_written: Vec<PathBuf>,
}

impl RunSummary {
    /// Recorded times, starting at zero: the initial state plus one per step.
    pub fn times(&self) -> impl Iterator<Item = SimTime> + '_ {
        std::iter::once(SimTime::ZERO).chain(self.steps.iter().map(|m| m.time))
    }
}

// ── run ────────────────────────────────────────────────────────────

/// Execute every stage `config` selects.
pub fn run(config: &RunConfig) -> Result<RunSummary, RunError> {
    config.validate()?;
    let relaxation = VoltageRelaxation::builder().decimal_places(config.decimal_places);
    let relaxation = match config.max_sweeps {
        Some(cap) => relaxation.max_sweeps(cap),
        None => relaxation,
    }
    .build()?;
    let mut stepper = FieldTimeStepper::new(config.stepper_config())?;

    let geometry = GridGeometry::new(config.points_per_dim, config.start, config.end)?;
    let mut grid = seed_grid(&config.seed, geometry)?;
    info!(
        points = grid.len(),
        per_axis = geometry.points_per_axis(),
        spacing = geometry.spacing_delta(),
        "grid created"
    );

    let mut summary = RunSummary {
        points: grid.len(),
        ..RunSummary::default()
    };

    if let Some(device) = &config.device {
        info!(path = %device.path.display(), "importing device points");
        let points = DevicePoints::from_path(&device.path)?;
        summary.device = Some(points.apply(&mut grid, device.voltage, device.k_span.clone()));
    }

    if config.relax {
        info!("relaxing initial voltages");
        let report = relaxation.relax(&mut grid)?;
        info!(
            sweeps = report.sweeps,
            initially_unconverged = report.initial_unconverged(),
            "initial voltages relaxed"
        );
        summary.relaxation = Some(report);
    }

    if config.exports.voltages {
        let path = output_path(config, "initial-voltages")?;
        write_voltages_to_path(&grid, &path)?;
        summary.files_written.push(path);
    }

    if config.initial_field {
        info!("computing initial electric field");
        stepper.compute_initial_electric_field(&mut grid)?;
    }
    // The gap only closes once E(0) has been taken across the open rod.
    if let Seed::Rod { gap: true, .. } = config.seed {
        if stepper.is_initial_field_computed() {
            info!("closing gap between the ends of the rod");
            scenario::close_gap(&mut grid);
        }
    }

    for _ in 0..config.steps {
        info!(time = %stepper.next_time(), dt = stepper.dt(), "advancing fields");
        summary.steps.push(stepper.advance_one_step(&mut grid)?);
    }
    summary.final_time = stepper.current_time();

    let times: Vec<SimTime> = summary.times().collect();
    for &kind in &config.exports.fields {
        for &time in &times {
            let path = output_path(config, &field_file_name(kind, time))?;
            write_field_to_path(&grid, kind, time, &path)?;
            summary.files_written.push(path);
        }
    }

    summary.voltage_digest = voltage_digest(&grid);
    summary.field_digests = FieldKind::ALL
        .iter()
        .map(|&kind| (kind, field_digest(&grid, kind, summary.final_time)))
        .collect();
    info!(
        final_time = %summary.final_time,
        steps = summary.steps.len(),
        files = summary.files_written.len(),
        "run complete"
    );
    Ok(summary)
}

fn seed_grid(seed: &Seed, geometry: GridGeometry) -> Result<SpatialGrid, RunError> {
    Ok(match seed {
        Seed::Dataset(path) => {
            info!(path = %path.display(), "creating points from voltage dataset");
            load_grid(path, geometry)?
        }
        Seed::Rod { voltage, gap } => scenario::rod(geometry, *voltage, *gap),
        Seed::Empty => SpatialGrid::new(geometry),
    })
}

/// File name of a field export: `e-field0.001250`, `b-field…`, `j-field…`.
pub fn field_file_name(kind: FieldKind, time: SimTime) -> String {
    format!("{}-field{:.6}", kind.short_name(), time.as_f64())
}

fn output_path(config: &RunConfig, name: &str) -> Result<PathBuf, RunError> {
    let dir = config
        .output_dir
        .as_ref()
        .ok_or_else(|| RunError::InvalidConfig {
            reason: "exports requested without an output directory".into(),
        })?;
    fs::create_dir_all(dir).map_err(|e| IoError::from(e).at_path(dir))?;
    Ok(dir.join(name))
}

// ── RunError ───────────────────────────────────────────────────────

/// Errors from [`run`], one variant per layer.
#[derive(Debug)]
pub enum RunError {
    /// Driver settings are inconsistent.
    InvalidConfig {
        /// What is wrong.
        reason: String,
    },
    /// Grid construction or seeding failed.
    Grid(GridError),
    /// Reading or writing a file failed.
    Io(IoError),
    /// A solver parameter is invalid.
    Config(ConfigError),
    /// Relaxation hit its sweep cap.
    Relax(RelaxError),
    /// Time stepping failed.
    Step(StepError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid run configuration: {reason}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Relax(e) => write!(f, "relaxation: {e}"),
            Self::Step(e) => write!(f, "step: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig { .. } => None,
            Self::Grid(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Relax(e) => Some(e),
            Self::Step(e) => Some(e),
        }
    }
}

impl From<GridError> for RunError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<IoError> for RunError {
    fn from(e: IoError) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RelaxError> for RunError {
    fn from(e: RelaxError) -> Self {
        Self::Relax(e)
    }
}

impl From<StepError> for RunError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}
