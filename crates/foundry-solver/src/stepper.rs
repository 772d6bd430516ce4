//! Fourth-order Runge–Kutta time stepping of the coupled B, E and J fields.

use std::time::Instant;

use foundry_core::{FieldError, FieldKind, SimTime, StepError, Vector3};
use foundry_grid::{GridPoint, Rk4Scratch, SpatialGrid};
use tracing::{debug, info};

use crate::config::{ConfigError, StepperConfig};
use crate::curl::{curl, history_sample as sample, voltage_gradient, CurlSource};
use crate::metrics::StepMetrics;

/// Advances the fields of a [`SpatialGrid`] in fixed time increments.
///
/// Lifecycle:
///
/// 1. [`compute_initial_electric_field`](Self::compute_initial_electric_field)
///    once, after the voltages are final.
/// 2. [`advance_one_step`](Self::advance_one_step) any number of times.
///    Each step updates B, then E, then J over the full grid and then
///    moves the current time forward by Δt.
///
/// Every Runge–Kutta stage is a full sweep computed into a buffer before
/// any point is written, so a stage reads only values of the previous
/// stage at neighbouring points.
#[derive(Clone, Debug)]
pub struct FieldTimeStepper {
    config: StepperConfig,
    current_time: SimTime,
    initial_field_computed: bool,
}

fn negate_nonzero(v: Vector3) -> Vector3 {
    if v != Vector3::ZERO {
        -v
    } else {
        v
    }
}

/// Weighted Runge–Kutta increment `dt/6 · (k1 + 2k2 + 2k3 + k4)`.
fn rk4_increment(dt: f64, k1: Vector3, k2: Vector3, k3: Vector3, k4: Vector3) -> Vector3 {
    (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}

fn elapsed_us(since: Instant) -> u64 {
    since.elapsed().as_micros() as u64
}

impl FieldTimeStepper {
    /// Create a stepper at time zero.
    ///
    /// Returns `Err` if the configuration fails
    /// [`validate`](StepperConfig::validate).
    pub fn new(config: StepperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            current_time: SimTime::ZERO,
            initial_field_computed: false,
        })
    }

    /// Time increment Δt.
    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    /// Time of the most recent completed step.
    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    /// Time the next step will produce. Does not advance.
    pub fn next_time(&self) -> SimTime {
        SimTime(self.current_time.0 + self.dt())
    }

    /// Whether the initial electric field has been computed.
    pub fn is_initial_field_computed(&self) -> bool {
        self.initial_field_computed
    }

    /// Record `E(0) = -∇V` at every point.
    ///
    /// Points that already hold a value at time 0 keep it. Returns
    /// `Err(StepError::InitialFieldAlreadyComputed)` on a second call.
    pub fn compute_initial_electric_field(&mut self, grid: &mut SpatialGrid) -> Result<(), StepError> {
        if self.initial_field_computed {
            return Err(StepError::InitialFieldAlreadyComputed);
        }
        let fields: Vec<Vector3> = grid
            .points()
            .iter()
            .map(|p| voltage_gradient(grid, p))
            .collect();
        for (p, e) in grid.points_mut().iter_mut().zip(fields) {
            p.record_field(FieldKind::Electric, SimTime::ZERO, e);
        }
        self.initial_field_computed = true;
        info!(points = grid.len(), "initial electric field computed");
        Ok(())
    }

    /// Advance B, E and J by one time increment.
    ///
    /// Returns the metrics of the step; [`StepMetrics::time`] is the new
    /// current time, equal to [`next_time`](Self::next_time) before the
    /// call. Fails with `StepError::InitialFieldNotComputed` before the
    /// initial field exists and with `StepError::Field` if a field value
    /// the update needs is not recorded.
    pub fn advance_one_step(&mut self, grid: &mut SpatialGrid) -> Result<StepMetrics, StepError> {
        if !self.initial_field_computed {
            return Err(StepError::InitialFieldNotComputed);
        }
        let started = Instant::now();
        let time = self.current_time;
        let next = self.next_time();

        let phase = Instant::now();
        self.advance_magnetic(grid, time, next)?;
        let magnetic_us = elapsed_us(phase);

        let phase = Instant::now();
        self.advance_electric(grid, time, next)?;
        let electric_us = elapsed_us(phase);

        let phase = Instant::now();
        self.advance_current(grid, time, next)?;
        let current_us = elapsed_us(phase);

        self.current_time = next;
        let metrics = StepMetrics {
            time: next,
            points: grid.len(),
            magnetic_us,
            electric_us,
            current_us,
            total_us: elapsed_us(started),
        };
        debug!(
            time = %next,
            magnetic_us,
            electric_us,
            current_us,
            total_us = metrics.total_us,
            "fields advanced"
        );
        Ok(metrics)
    }

    /// One Runge–Kutta stage of the magnetic update: evaluate `stage` at
    /// every point, then store the results in the scratch vectors.
    fn magnetic_stage<F, W>(grid: &mut SpatialGrid, stage: F, write: W) -> Result<(), FieldError>
    where
        F: Fn(&SpatialGrid, &GridPoint) -> Result<(Vector3, Vector3), FieldError>,
        W: Fn(&mut Rk4Scratch, Vector3, Vector3),
    {
        let results = grid
            .points()
            .iter()
            .map(|p| stage(grid, p))
            .collect::<Result<Vec<_>, _>>()?;
        for (p, (k, y)) in grid.points_mut().iter_mut().zip(results) {
            write(p.scratch_mut(), k, y);
        }
        Ok(())
    }

    fn advance_magnetic(&self, grid: &mut SpatialGrid, time: SimTime, next: SimTime) -> Result<(), FieldError> {
        let dt = self.config.dt;
        let half = dt / 2.0;

        Self::magnetic_stage(
            grid,
            |g, p| {
                let k1 = negate_nonzero(curl(g, CurlSource::Electric, p, time)?);
                Ok((k1, sample(p, FieldKind::Electric, time)? + k1 * half))
            },
            |s, k, y| {
                s.k1 = k;
                s.y1 = y;
            },
        )?;
        Self::magnetic_stage(
            grid,
            |g, p| {
                let k2 = negate_nonzero(curl(g, CurlSource::Stage1, p, time)?);
                Ok((k2, sample(p, FieldKind::Electric, time)? + k2 * half))
            },
            |s, k, y| {
                s.k2 = k;
                s.y2 = y;
            },
        )?;
        Self::magnetic_stage(
            grid,
            |g, p| {
                let k3 = negate_nonzero(curl(g, CurlSource::Stage2, p, time)?);
                Ok((k3, sample(p, FieldKind::Electric, time)? + k3 * dt))
            },
            |s, k, y| {
                s.k3 = k;
                s.y3 = y;
            },
        )?;
        Self::magnetic_stage(
            grid,
            |g, p| {
                let k4 = negate_nonzero(curl(g, CurlSource::Stage3, p, time)?);
                Ok((k4, Vector3::ZERO))
            },
            |s, k, _| s.k4 = k,
        )?;

        let updated = grid
            .points()
            .iter()
            .map(|p| {
                let s = p.scratch();
                Ok(sample(p, FieldKind::Magnetic, time)? + rk4_increment(dt, s.k1, s.k2, s.k3, s.k4))
            })
            .collect::<Result<Vec<_>, FieldError>>()?;
        for (p, b) in grid.points_mut().iter_mut().zip(updated) {
            p.record_field(FieldKind::Magnetic, next, b);
        }
        Ok(())
    }

    fn advance_electric(&self, grid: &mut SpatialGrid, time: SimTime, next: SimTime) -> Result<(), FieldError> {
        let dt = self.config.dt;
        let half = dt / 2.0;
        let c2 = self.config.constants.speed_of_light_squared();
        let mu0 = self.config.constants.vacuum_permeability;

        let updated = grid
            .points()
            .iter()
            .map(|p| {
                let scalar = c2 / p.permittivity();
                let e = sample(p, FieldKind::Electric, time)?;
                let j = sample(p, FieldKind::Current, time)?;
                let k1 = scalar * (curl(grid, CurlSource::Magnetic, p, time)? - mu0 * j);
                let y1 = e + k1 * half;
                let k2 = scalar * y1;
                let y2 = e + k2 * half;
                let k3 = scalar * y2;
                let y3 = e + k3 * dt;
                let k4 = scalar * y3;
                Ok(e + rk4_increment(dt, k1, k2, k3, k4))
            })
            .collect::<Result<Vec<_>, FieldError>>()?;
        for (p, e) in grid.points_mut().iter_mut().zip(updated) {
            p.record_field(FieldKind::Electric, next, e);
        }
        Ok(())
    }

    fn advance_current(&self, grid: &mut SpatialGrid, time: SimTime, next: SimTime) -> Result<(), FieldError> {
        let dt = self.config.dt;
        let half = dt / 2.0;
        let scalar = self.config.constants.scattering_rate();

        let updated = grid
            .points()
            .iter()
            .map(|p| {
                let j = sample(p, FieldKind::Current, time)?;
                let e = sample(p, FieldKind::Electric, time)?;
                let k1 = scalar * (e * p.conductivity() - j);
                let y1 = j + k1 * half;
                let k2 = scalar * y1;
                // The second estimate advances along k1, not k2.
                let y2 = j + k1 * half;
                let k3 = scalar * y2;
                let y3 = j + k3 * dt;
                let k4 = scalar * y3;
                Ok(j + rk4_increment(dt, k1, k2, k3, k4))
            })
            .collect::<Result<Vec<_>, FieldError>>()?;
        for (p, j) in grid.points_mut().iter_mut().zip(updated) {
            // Zero goes in first for non-conductors and the later write is dropped.
            if p.conductivity() == 0.0 {
                p.record_field(FieldKind::Current, next, Vector3::ZERO);
            }
            p.record_field(FieldKind::Current, next, j);
        }
        Ok(())
    }
}
