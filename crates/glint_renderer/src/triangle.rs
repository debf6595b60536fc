//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then checks the hit point against
//! each edge with a cross-product half-plane test.

use crate::{
    error::{Result, SceneError},
    hittable::{intersect_plane, Hit, Object3D},
    Material, Ray,
};
use glint_math::Vec3;

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    a: Vec3,
    b: Vec3,
    c: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal is `(b - a) x (c - a)`, so counter-clockwise vertices (seen
    /// from the front) face the viewer.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: Material) -> Result<Self> {
        let normal = (b - a)
            .cross(c - a)
            .try_normalize()
            .ok_or(SceneError::DegenerateTriangle)?;

        Ok(Self {
            a,
            b,
            c,
            normal,
            material,
        })
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Whether a point on the supporting plane lies inside the triangle.
    ///
    /// Points on an edge count as inside.
    fn contains(&self, p: Vec3) -> bool {
        let edges = [(self.a, self.b), (self.b, self.c), (self.c, self.a)];
        edges
            .iter()
            .all(|&(from, to)| (to - from).cross(p - from).dot(self.normal) >= 0.0)
    }
}

impl Object3D for Triangle {
    fn compute_normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let t = intersect_plane(ray, self.normal, self.a)?;
        let p = ray.at(t)?;
        self.contains(p).then(|| Hit::new(self, t))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
