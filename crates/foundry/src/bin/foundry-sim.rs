//! Foundry simulation driver.
//!
//! Seeds a lattice, optionally relaxes its voltages, computes the initial
//! electric field and advances B, E and J.
//!
//! Usage: `foundry-sim [--voltages FILE | --rod VOLTAGE [--gap] | --empty] [--steps N] [--out DIR]`
//!
//! With no seed flag the lattice gets a 1 V rod through the centre column.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use foundry::io::DevicePoints;
use foundry::types::FieldKind;
use foundry::{run, DeviceImport, Exports, RunConfig, Seed};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportField {
    /// Electric field
    E,
    /// Magnetic field
    B,
    /// Current density
    J,
}

impl From<ExportField> for FieldKind {
    fn from(f: ExportField) -> Self {
        match f {
            ExportField::E => FieldKind::Electric,
            ExportField::B => FieldKind::Magnetic,
            ExportField::J => FieldKind::Current,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "foundry-sim")]
#[command(about = "Run an FDTD electromagnetic field simulation on a uniform 3D lattice")]
struct Args {
    /// Points per dimension
    #[arg(long, default_value = "101")]
    points_per_dim: u32,

    /// Lower lattice bound
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    start: f64,

    /// Upper lattice bound
    #[arg(long, default_value = "100", allow_hyphen_values = true)]
    end: f64,

    /// Seed voltages from an `i j k conductivity voltage` dataset
    #[arg(long, conflicts_with = "rod")]
    voltages: Option<PathBuf>,

    /// Seed an electrode rod through the centre column at this voltage
    #[arg(long, allow_hyphen_values = true)]
    rod: Option<f64>,

    /// Leave a gap at the rod midpoint, closed after the initial field
    #[arg(long, conflicts_with_all = ["voltages", "empty"])]
    gap: bool,

    /// Start with no electrodes and all voltages at 0
    #[arg(long, conflicts_with_all = ["voltages", "rod"])]
    empty: bool,

    /// Mark device columns from a file of `i j` pairs
    #[arg(long)]
    device: Option<PathBuf>,

    /// Voltage of imported device cells
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    device_voltage: f64,

    /// Lowest K coordinate marked in each device column
    #[arg(long, default_value_t = *DevicePoints::DEFAULT_K_SPAN.start())]
    device_k_min: f64,

    /// Highest K coordinate marked in each device column
    #[arg(long, default_value_t = *DevicePoints::DEFAULT_K_SPAN.end())]
    device_k_max: f64,

    /// Relax the initial voltages before computing the initial field
    #[arg(long)]
    relax: bool,

    /// Decimal places compared when testing relaxation convergence
    #[arg(long, default_value = "3")]
    decimal_places: u32,

    /// Give up relaxing after this many sweeps
    #[arg(long)]
    max_sweeps: Option<u64>,

    /// Number of time steps
    #[arg(long, default_value = "3")]
    steps: u64,

    /// Time increment
    #[arg(long, default_value = "0.00125")]
    dt: f64,

    /// Drude scattering time
    #[arg(long, default_value = "0.25")]
    scattering_time: f64,

    /// Directory for output files
    #[arg(long = "out")]
    output_dir: Option<PathBuf>,

    /// Write the voltages after relaxation
    #[arg(long)]
    export_voltages: bool,

    /// Fields to write at every recorded time
    #[arg(long, value_enum, value_delimiter = ',')]
    export: Vec<ExportField>,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let defaults = RunConfig::default();
        let seed = match (self.voltages, self.rod, self.empty) {
            (Some(path), _, _) => Seed::Dataset(path),
            (None, _, true) => Seed::Empty,
            (None, voltage, false) => match defaults.seed {
                Seed::Rod { voltage: v, .. } => Seed::Rod {
                    voltage: voltage.unwrap_or(v),
                    gap: self.gap,
                },
                other => other,
            },
        };
        let device = self.device.map(|path| DeviceImport {
            path,
            voltage: self.device_voltage,
            k_span: self.device_k_min..=self.device_k_max,
        });
        RunConfig {
            points_per_dim: self.points_per_dim,
            start: self.start,
            end: self.end,
            seed,
            device,
            relax: self.relax,
            decimal_places: self.decimal_places,
            max_sweeps: self.max_sweeps,
            initial_field: defaults.initial_field,
            steps: self.steps,
            dt: self.dt,
            scattering_time: self.scattering_time,
            output_dir: self.output_dir,
            exports: Exports {
                voltages: self.export_voltages,
                fields: self.export.into_iter().map(FieldKind::from).collect(),
            },
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,foundry_solver=info,foundry_io=info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    init_logging();

    let config = Args::parse().into_config();
    info!("starting simulation");

    match run(&config) {
        Ok(summary) => {
            for m in &summary.steps {
                info!(
                    time = %m.time,
                    total_us = m.total_us,
                    "step"
                );
            }
            info!(
                voltage_digest = %format!("{:016x}", summary.voltage_digest),
                files = summary.files_written.len(),
                "simulation complete"
            );
        }
        Err(e) => {
            error!("simulation failed: {e}");
            process::exit(1);
        }
    }
}
