//! Phong surface material.
//!
//! A material is attached to a primitive when the primitive is created and
//! never changes afterwards, so a scene can be shared freely across render
//! threads.

use crate::error::{Result, SceneError};
use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Local illumination coefficients of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
    reflection: f32,
}

impl Material {
    /// Start building a material. All coefficients default to zero except
    /// shininess, which defaults to 10.
    pub fn builder() -> MaterialBuilder {
        MaterialBuilder::default()
    }

    /// Build a material in one call.
    pub fn new(
        ambient: Color,
        diffuse: Color,
        specular: Color,
        shininess: f32,
        reflection: f32,
    ) -> Result<Self> {
        Self::builder()
            .ambient(ambient)
            .diffuse(diffuse)
            .specular(specular)
            .shininess(shininess)
            .reflection(reflection)
            .build()
    }

    #[inline]
    pub fn ambient(&self) -> Color {
        self.ambient
    }

    #[inline]
    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    #[inline]
    pub fn specular(&self) -> Color {
        self.specular
    }

    /// Specular exponent.
    #[inline]
    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Fraction of the mirror-reflected color added to the local shading.
    #[inline]
    pub fn reflection(&self) -> f32 {
        self.reflection
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::ZERO,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            shininess: 10.0,
            reflection: 0.0,
        }
    }
}

/// Builder for [`Material`]. Ranges are checked in [`MaterialBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct MaterialBuilder {
    material: Material,
}

impl MaterialBuilder {
    pub fn ambient(mut self, color: Color) -> Self {
        self.material.ambient = color;
        self
    }

    pub fn diffuse(mut self, color: Color) -> Self {
        self.material.diffuse = color;
        self
    }

    pub fn specular(mut self, color: Color) -> Self {
        self.material.specular = color;
        self
    }

    pub fn shininess(mut self, shininess: f32) -> Self {
        self.material.shininess = shininess;
        self
    }

    pub fn reflection(mut self, reflection: f32) -> Self {
        self.material.reflection = reflection;
        self
    }

    /// Validate and produce the material.
    pub fn build(self) -> Result<Material> {
        let m = self.material;

        for (name, color) in [
            ("ambient", m.ambient),
            ("diffuse", m.diffuse),
            ("specular", m.specular),
        ] {
            if !color.is_finite() || color.min_element() < 0.0 || color.max_element() > 1.0 {
                return Err(SceneError::InvalidMaterial(format!(
                    "{name} color {color} is outside [0, 1]"
                )));
            }
        }

        if !m.shininess.is_finite() || m.shininess < 0.0 {
            return Err(SceneError::InvalidMaterial(format!(
                "shininess must be non-negative, got {}",
                m.shininess
            )));
        }

        if !(0.0..=1.0).contains(&m.reflection) {
            return Err(SceneError::InvalidMaterial(format!(
                "reflection must be in [0, 1], got {}",
                m.reflection
            )));
        }

        Ok(m)
    }
}
