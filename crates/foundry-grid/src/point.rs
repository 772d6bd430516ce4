//! Per-site physical state.

use foundry_core::{FieldHistory, FieldKind, GridKey, LatticeIndex, SimTime, Vector3};

use crate::classification::Classification;

/// Runge-Kutta scratch vectors of the magnetic-field integration.
///
/// Overwritten on every step and never part of the time history. The
/// intermediate estimates `y1..y3` are what the curl stencil reads for
/// the stage 2-4 slopes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rk4Scratch {
    /// First slope.
    pub k1: Vector3,
    /// Second slope.
    pub k2: Vector3,
    /// Third slope.
    pub k3: Vector3,
    /// Fourth slope.
    pub k4: Vector3,
    /// Estimate after the first slope.
    pub y1: Vector3,
    /// Estimate after the second slope.
    pub y2: Vector3,
    /// Estimate after the third slope.
    pub y3: Vector3,
}

/// State of one lattice site.
///
/// Position, permittivity and classification are fixed at creation.
/// Voltage and conductivity are mutable; a conductivity above zero marks
/// the point as an electrode. The magnetic field and current density
/// start with a zero entry at time 0, the electric field starts empty.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPoint {
    index: LatticeIndex,
    key: GridKey,
    permittivity: f64,
    classification: Classification,
    voltage: f64,
    conductivity: f64,
    electric: FieldHistory,
    magnetic: FieldHistory,
    current: FieldHistory,
    scratch: Rk4Scratch,
}

impl GridPoint {
    /// Create a point with zero voltage and conductivity.
    pub fn new(
        index: LatticeIndex,
        key: GridKey,
        permittivity: f64,
        classification: Classification,
    ) -> Self {
        Self {
            index,
            key,
            permittivity,
            classification,
            voltage: 0.0,
            conductivity: 0.0,
            electric: FieldHistory::new(),
            magnetic: FieldHistory::zero_at_start(),
            current: FieldHistory::zero_at_start(),
            scratch: Rk4Scratch::default(),
        }
    }

    /// Lattice position.
    pub fn index(&self) -> LatticeIndex {
        self.index
    }

    /// Real-valued coordinates.
    pub fn key(&self) -> GridKey {
        self.key
    }

    /// Relative permittivity.
    pub fn permittivity(&self) -> f64 {
        self.permittivity
    }

    /// Position class within the cube.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Voltage.
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Set the voltage.
    pub fn set_voltage(&mut self, voltage: f64) {
        self.voltage = voltage;
    }

    /// Conductivity. Zero for non-electrodes.
    pub fn conductivity(&self) -> f64 {
        self.conductivity
    }

    /// Set the conductivity.
    pub fn set_conductivity(&mut self, conductivity: f64) {
        self.conductivity = conductivity;
    }

    /// `true` when the conductivity is positive.
    pub fn is_electrode(&self) -> bool {
        self.conductivity > 0.0
    }

    /// History of one field.
    pub fn history(&self, kind: FieldKind) -> &FieldHistory {
        match kind {
            FieldKind::Electric => &self.electric,
            FieldKind::Magnetic => &self.magnetic,
            FieldKind::Current => &self.current,
        }
    }

    fn history_mut(&mut self, kind: FieldKind) -> &mut FieldHistory {
        match kind {
            FieldKind::Electric => &mut self.electric,
            FieldKind::Magnetic => &mut self.magnetic,
            FieldKind::Current => &mut self.current,
        }
    }

    /// Value of `kind` at exactly `time`, if recorded.
    pub fn field(&self, kind: FieldKind, time: SimTime) -> Option<Vector3> {
        self.history(kind).at(time)
    }

    /// Record `value` for `kind` at `time`. The first value recorded at a
    /// time is kept; returns `false` if one was already present.
    pub fn record_field(&mut self, kind: FieldKind, time: SimTime, value: Vector3) -> bool {
        self.history_mut(kind).record(time, value)
    }

    /// Runge-Kutta scratch state.
    pub fn scratch(&self) -> &Rk4Scratch {
        &self.scratch
    }

    /// Mutable Runge-Kutta scratch state.
    pub fn scratch_mut(&mut self) -> &mut Rk4Scratch {
        &mut self.scratch
    }
}
