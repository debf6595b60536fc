//! Infinite plane primitive.

use crate::{
    error::{Result, SceneError},
    hittable::{intersect_plane, Hit, Object3D},
    Material, Ray,
};
use glint_math::Vec3;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    normal: Vec3,
    point: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(normal: Vec3, point: Vec3, material: Material) -> Result<Self> {
        let normal = normal
            .try_normalize()
            .ok_or(SceneError::ZeroLengthVector { what: "plane normal" })?;

        Ok(Self {
            normal,
            point,
            material,
        })
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }
}

impl Object3D for Plane {
    fn compute_normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        intersect_plane(ray, self.normal, self.point).map(|t| Hit::new(self, t))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
