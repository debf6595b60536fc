//! Normalization and mirror reflection of 3D vectors.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// # Panics
///
/// Panics if `v` has zero or non-finite length. Every direction handed to the
/// renderer is validated at construction, so hitting this is a bug in the
/// caller rather than a property of the scene.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.length();
    assert!(
        length > 0.0 && length.is_finite(),
        "cannot normalize vector {v} with length {length}"
    );
    v / length
}

/// Mirror `v` about the unit normal `n`.
///
/// Returns `normalize(v - 2 (v·n) n)`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    normalize(v - 2.0 * v.dot(n) * n)
}
