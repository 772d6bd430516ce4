//! Externally supplied per-point voltage and conductivity.

use foundry_core::GridKey;

/// One record of an initial voltage dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoltageSeed {
    /// Coordinates of the point.
    pub key: GridKey,
    /// Conductivity; positive marks an electrode.
    pub conductivity: f64,
    /// Voltage.
    pub voltage: f64,
}

impl VoltageSeed {
    /// Create a seed record.
    pub fn new(key: GridKey, conductivity: f64, voltage: f64) -> Self {
        Self {
            key,
            conductivity,
            voltage,
        }
    }
}
