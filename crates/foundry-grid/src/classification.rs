//! Position of a point within the cube.

use std::fmt;

/// Where a point sits relative to the cube's bounds.
///
/// Assigned once at grid generation from the number of axes on which the
/// point lies on a bound:
///
/// | axes on a bound | classification |
/// |-----------------|----------------|
/// | 0 | [`Normal`](Self::Normal) |
/// | 1, the K axis at its start | [`Bottom`](Self::Bottom) |
/// | 1, the K axis at its end | [`Top`](Self::Top) |
/// | 1, the I or J axis | [`SideFace`](Self::SideFace) |
/// | 2 | [`Edge`](Self::Edge) |
/// | 3 | [`Corner`](Self::Corner) |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Interior point.
    Normal,
    /// On exactly two bounds.
    Edge,
    /// On a bound along every axis.
    Corner,
    /// On the end K bound only.
    Top,
    /// On the start K bound only.
    Bottom,
    /// On an I or J bound only.
    SideFace,
    /// Not yet classified.
    #[default]
    Unclassified,
    /// Reported for positions that are not on the grid.
    Null,
}

impl Classification {
    /// Classify a point from per-axis bound membership.
    ///
    /// `k_at_start` and `k_at_end` are only consulted when exactly one axis
    /// is on a bound; if both are true the start bound wins.
    pub fn from_bounds(on_bound: [bool; 3], k_at_start: bool, k_at_end: bool) -> Self {
        match on_bound.iter().filter(|&&b| b).count() {
            0 => Self::Normal,
            2 => Self::Edge,
            3 => Self::Corner,
            _ if k_at_start => Self::Bottom,
            _ if k_at_end => Self::Top,
            _ => Self::SideFace,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Edge => "edge",
            Self::Corner => "corner",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::SideFace => "side face",
            Self::Unclassified => "unclassified",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}
