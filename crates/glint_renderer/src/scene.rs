//! Scene description consumed by the renderer.

use crate::{hittable::Object3D, light::LightSource, Color};
use glint_math::Vec3;
use std::fmt;

/// Camera, lights and geometry of a render.
///
/// A scene is assembled up front and only read while rendering.
pub struct Scene {
    /// Camera position (eye point)
    pub camera: Vec3,
    ambient: Color,
    lights: Vec<Box<dyn LightSource>>,
    objects: Vec<Box<dyn Object3D>>,
}

impl Scene {
    /// Create an empty scene viewed from `camera`.
    pub fn new(camera: Vec3) -> Self {
        Self {
            camera,
            ambient: Color::ZERO,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Set the global ambient light.
    ///
    /// Negative or NaN components are replaced by zero.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        let clamped = ambient.max(Color::ZERO);
        if clamped != ambient {
            log::warn!("Ambient light {} has negative components, using {}", ambient, clamped);
        }
        self.ambient = clamped;
        self
    }

    /// Global ambient light, never negative.
    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Add a light to the scene.
    pub fn with_light(mut self, light: impl LightSource + 'static) -> Self {
        self.add_light(Box::new(light));
        self
    }

    /// Add an object to the scene.
    pub fn with_object(mut self, object: impl Object3D + 'static) -> Self {
        self.add_object(Box::new(object));
        self
    }

    pub fn add_light(&mut self, light: Box<dyn LightSource>) {
        self.lights.push(light);
    }

    pub fn add_object(&mut self, object: Box<dyn Object3D>) {
        self.objects.push(object);
    }

    pub fn lights(&self) -> &[Box<dyn LightSource>] {
        &self.lights
    }

    pub fn objects(&self) -> &[Box<dyn Object3D>] {
        &self.objects
    }

    /// Iterate the objects as trait objects, ready for
    /// [`crate::Ray::nearest_intersection`].
    pub fn object_refs(&self) -> impl Iterator<Item = &dyn Object3D> + '_ {
        self.objects.iter().map(|object| object.as_ref())
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("camera", &self.camera)
            .field("ambient", &self.ambient)
            .field("lights", &self.lights.len())
            .field("objects", &self.objects.len())
            .finish_non_exhaustive()
    }
}
