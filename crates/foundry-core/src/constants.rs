//! Fixed physical constants and the [`PhysicalConstants`] bundle handed
//! to the field stepper.

use std::f64::consts::PI;

/// Speed of light in m/s, truncated to an integer (`3 × 10⁸`).
pub const SPEED_OF_LIGHT: f64 = (3 * 100_000_000_i64) as f64;

/// Vacuum permeability μ0 = 4π × 10⁻⁷ H/m.
pub const VACUUM_PERMEABILITY: f64 = 4.0 * PI * 1.0e-7;

/// Default Drude scattering time τ.
pub const DRUDE_SCATTERING_TIME: f64 = 0.25;

/// Relative permittivity of points above the axial midpoint (vacuum).
pub const VACUUM_PERMITTIVITY: f64 = 1.0;

/// Relative permittivity of points below the axial midpoint
/// (gallium arsenide substrate).
pub const MATERIAL_PERMITTIVITY: f64 = 12.0;

/// Relative permittivity of points lying exactly on the axial midpoint.
pub const MIDPLANE_PERMITTIVITY: f64 = 1.0;

/// Physical constants used by the time stepper.
///
/// Constructed once and passed into the stepper at construction; the
/// [`Default`] value carries the fixed constants above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Speed of light `c`.
    pub speed_of_light: f64,
    /// Vacuum permeability `μ0`.
    pub vacuum_permeability: f64,
    /// Drude scattering time `τ` of the conduction model.
    pub drude_scattering_time: f64,
}

impl PhysicalConstants {
    /// `c²`, the numerator of the electric-field update scalar.
    pub fn speed_of_light_squared(&self) -> f64 {
        self.speed_of_light * self.speed_of_light
    }

    /// `1 / τ`, the current-density relaxation rate.
    pub fn scattering_rate(&self) -> f64 {
        1.0 / self.drude_scattering_time
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            speed_of_light: SPEED_OF_LIGHT,
            vacuum_permeability: VACUUM_PERMEABILITY,
            drude_scattering_time: DRUDE_SCATTERING_TIME,
        }
    }
}
