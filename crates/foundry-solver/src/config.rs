//! Stepper configuration, validation, and configuration errors.

use std::error::Error;
use std::fmt;

use foundry_core::PhysicalConstants;

// ── StepperConfig ──────────────────────────────────────────────────

/// Configuration of a [`FieldTimeStepper`](crate::FieldTimeStepper).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepperConfig {
    /// Fixed time increment Δt. Default: 0.00125.
    pub dt: f64,
    /// Physical constants of the update equations.
    pub constants: PhysicalConstants,
}

impl StepperConfig {
    /// Default time increment.
    pub const DEFAULT_DT: f64 = 0.00125;

    /// Config with time increment `dt` and the default constants.
    pub fn with_dt(dt: f64) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        let tau = self.constants.drude_scattering_time;
        if !tau.is_finite() || tau <= 0.0 {
            return Err(ConfigError::InvalidScatteringTime { value: tau });
        }
        let c = self.constants.speed_of_light;
        if !c.is_finite() || c <= 0.0 {
            return Err(ConfigError::InvalidSpeedOfLight { value: c });
        }
        Ok(())
    }
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            dt: Self::DEFAULT_DT,
            constants: PhysicalConstants::default(),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating solver configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// dt is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// The Drude scattering time is NaN, infinite, zero, or negative.
    InvalidScatteringTime {
        /// The invalid value.
        value: f64,
    },
    /// The speed of light is NaN, infinite, zero, or negative.
    InvalidSpeedOfLight {
        /// The invalid value.
        value: f64,
    },
    /// The relaxation comparison precision is beyond what `f64` resolves.
    InvalidDecimalPlaces {
        /// The requested number of decimal places.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// A relaxation sweep cap of zero.
    InvalidSweepLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeStep { value } => {
                write!(f, "time step must be finite and positive, got {value}")
            }
            Self::InvalidScatteringTime { value } => {
                write!(f, "scattering time must be finite and positive, got {value}")
            }
            Self::InvalidSpeedOfLight { value } => {
                write!(f, "speed of light must be finite and positive, got {value}")
            }
            Self::InvalidDecimalPlaces { value, max } => {
                write!(f, "decimal places {value} exceeds maximum {max}")
            }
            Self::InvalidSweepLimit => write!(f, "sweep limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = StepperConfig::default();
        assert_eq!(cfg.dt, 0.00125);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_time_step() {
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                StepperConfig::with_dt(dt).validate(),
                Err(ConfigError::InvalidTimeStep { .. })
            ));
        }
    }

    #[test]
    fn rejects_bad_constants() {
        let mut cfg = StepperConfig::default();
        cfg.constants.drude_scattering_time = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidScatteringTime { .. })
        ));

        let mut cfg = StepperConfig::default();
        cfg.constants.speed_of_light = -3.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidSpeedOfLight { .. })
        ));
    }
}
