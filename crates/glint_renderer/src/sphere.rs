//! Sphere primitive for ray tracing.

use crate::{
    error::{Result, SceneError},
    hittable::{Hit, Object3D},
    Material, Ray,
};
use glint_math::{normalize, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Object3D for Sphere {
    fn compute_normal(&self, point: Vec3) -> Vec3 {
        normalize(point - self.center)
    }

    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        // |D|^2 t^2 + 2 D·(O-C) t + |O-C|^2 - r^2 = 0
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the near root, fall back to the far one (origin inside)
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);
        [near, far]
            .into_iter()
            .find(|&t| t > 0.0)
            .map(|t| Hit::new(self, t))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
