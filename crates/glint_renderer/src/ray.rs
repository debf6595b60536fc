//! Ray type for ray tracing.
//!
//! A ray is defined by an origin point and a unit direction vector.

use crate::hittable::{Hit, Object3D};
use glint_math::{normalize, Vec3};

/// A ray with origin and unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vec3,
    /// Direction vector (always normalized)
    direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized here.
    ///
    /// # Panics
    ///
    /// Panics if `direction` has zero length.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: normalize(direction),
        }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute the point along the ray at parameter t.
    ///
    /// Only points strictly in front of the origin are valid hit points, so
    /// `None` is returned for `t <= 0`.
    #[inline]
    pub fn at(&self, t: f32) -> Option<Vec3> {
        (t > 0.0).then(|| self.origin + t * self.direction)
    }

    /// Find the closest object hit by this ray.
    ///
    /// Every object is tested; on exact ties the earliest object wins.
    pub fn nearest_intersection<'a, I, O>(&self, objects: I) -> Option<Hit<'a>>
    where
        I: IntoIterator<Item = &'a O>,
        O: Object3D + ?Sized + 'a,
    {
        let mut nearest: Option<Hit<'a>> = None;

        for object in objects {
            let Some(hit) = object.intersect(self) else {
                continue;
            };
            if !hit.distance.is_finite() {
                continue;
            }
            if nearest.map_or(true, |best| hit.distance < best.distance) {
                nearest = Some(hit);
            }
        }

        nearest
    }
}
