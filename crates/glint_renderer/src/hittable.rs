//! Object3D trait and Hit record for ray-object intersection.

use crate::{Material, Ray};
use glint_math::Vec3;
use std::fmt;

/// Result of a successful ray-object intersection.
///
/// `object` is the primitive actually struck. For aggregates such as
/// [`crate::Mesh`] this is the constituent triangle, not the aggregate.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Primitive that was hit
    pub object: &'a dyn Object3D,
    /// Ray parameter t of the intersection (distance, since rays are unit length)
    pub distance: f32,
}

impl<'a> Hit<'a> {
    #[inline]
    pub fn new(object: &'a dyn Object3D, distance: f32) -> Self {
        Self { object, distance }
    }
}

impl fmt::Debug for Hit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hit")
            .field("distance", &self.distance)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Object3D: Send + Sync {
    /// Outward surface normal (unit length) at a point on the surface.
    fn compute_normal(&self, point: Vec3) -> Vec3;

    /// Intersect the ray with this object.
    ///
    /// Returns the hit primitive and the strictly positive ray parameter of
    /// the nearest intersection, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>>;

    /// Surface material used to shade hits on this object.
    fn material(&self) -> &Material;
}

/// Threshold below which a ray counts as parallel to a supporting plane.
pub(crate) const PARALLEL_EPSILON: f32 = 1e-8;

/// Intersect a ray with the infinite plane through `point` with unit `normal`.
///
/// Shared by [`crate::Plane`] and [`crate::Triangle`].
#[inline]
pub(crate) fn intersect_plane(ray: &Ray, normal: Vec3, point: Vec3) -> Option<f32> {
    let denom = normal.dot(ray.direction());
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (point - ray.origin()).dot(normal) / denom;
    (t > 0.0 && t.is_finite()).then_some(t)
}
