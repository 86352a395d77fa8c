// Re-export glam for convenience
pub use glam::*;

// rayroom math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Mirror `v` about the unit normal `n`.
///
/// Returns `v - 2 (v · n) n`. A direction heading into the surface comes back
/// out of it with the same length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}
