//! Field kinds stored in per-point histories.

use std::fmt;

/// Which time-indexed field history a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    /// Electric field **E**.
    Electric,
    /// Magnetic field **B**.
    Magnetic,
    /// Current density **J**.
    Current,
}

impl FieldKind {
    /// All field kinds in `E, B, J` order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Electric, FieldKind::Magnetic, FieldKind::Current];

    /// Short lowercase name used in file names and log events.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Electric => "e",
            Self::Magnetic => "b",
            Self::Current => "j",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electric => write!(f, "electric field"),
            Self::Magnetic => write!(f, "magnetic field"),
            Self::Current => write!(f, "current density"),
        }
    }
}
