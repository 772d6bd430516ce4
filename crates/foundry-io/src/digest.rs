//! State digests for run-to-run comparison.
//!
//! Uses FNV-1a over the raw `f64` bits of grid state. Digests are not
//! cryptographically secure. Two runs with bit-identical state give equal
//! digests.

use foundry_core::{FieldKind, SimTime};
use foundry_grid::SpatialGrid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Folded in for a point with no sample at the requested time.
const MISSING_MARKER: u64 = u64::MAX;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn fnv1a_f64(hash: u64, v: f64) -> u64 {
    fnv1a_u64(hash, v.to_bits())
}

/// Digest of the grid shape plus every point's conductivity and voltage,
/// in canonical order.
pub fn voltage_digest(grid: &SpatialGrid) -> u64 {
    let geo = grid.geometry();
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, geo.points_per_axis());
    hash = fnv1a_f64(hash, geo.start_bound());
    hash = fnv1a_f64(hash, geo.spacing_delta());
    for p in grid.points() {
        hash = fnv1a_f64(hash, p.conductivity());
        hash = fnv1a_f64(hash, p.voltage());
    }
    hash
}

/// Digest of the `kind` field at exactly `time` over every point.
///
/// The field kind and time are folded in first, so equal vectors under a
/// different kind or time hash differently.
pub fn field_digest(grid: &SpatialGrid, kind: FieldKind, time: SimTime) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, kind as u32);
    hash = fnv1a_f64(hash, time.as_f64());
    for p in grid.points() {
        match p.field(kind, time) {
            Some(v) => {
                for c in v.to_array() {
                    hash = fnv1a_f64(hash, c);
                }
            }
            None => hash = fnv1a_u64(hash, MISSING_MARKER),
        }
    }
    hash
}
