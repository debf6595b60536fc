//! Light sources.
//!
//! Direction parameters follow one convention for every light: they point
//! from the scene toward the light.

use crate::{
    error::{Result, SceneError},
    Color, Ray,
};
use glint_math::{normalize, Vec3};

/// Check that a light intensity has finite, non-negative components.
fn validate_intensity(intensity: Color) -> Result<Color> {
    if !intensity.is_finite() || intensity.min_element() < 0.0 {
        return Err(SceneError::InvalidIntensity(intensity));
    }
    Ok(intensity)
}

/// Trait for lights that illuminate a shading point.
pub trait LightSource: Send + Sync {
    /// Ray from `point` toward the light.
    fn light_ray(&self, point: Vec3) -> Ray;

    /// Distance from `point` to the light. Infinite for lights at infinity.
    fn distance_from_light(&self, point: Vec3) -> f32;

    /// Light intensity arriving at `point`.
    fn intensity_at(&self, point: Vec3) -> Color;
}

/// Distance falloff `1 / (kc + kl*d + kq*d^2)` for positional lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    kc: f32,
    kl: f32,
    kq: f32,
}

impl Attenuation {
    /// Create attenuation constants.
    ///
    /// `kc` must be positive and `kl`, `kq` non-negative, which keeps the
    /// denominator positive at every distance.
    pub fn new(kc: f32, kl: f32, kq: f32) -> Result<Self> {
        let valid = [kc, kl, kq].iter().all(|k| k.is_finite() && *k >= 0.0) && kc > 0.0;
        if !valid {
            return Err(SceneError::InvalidAttenuation { kc, kl, kq });
        }
        Ok(Self { kc, kl, kq })
    }

    /// No falloff at all.
    pub const NONE: Attenuation = Attenuation {
        kc: 1.0,
        kl: 0.0,
        kq: 0.0,
    };

    /// Constant coefficient.
    #[inline]
    pub fn kc(&self) -> f32 {
        self.kc
    }

    /// Linear coefficient.
    #[inline]
    pub fn kl(&self) -> f32 {
        self.kl
    }

    /// Quadratic coefficient.
    #[inline]
    pub fn kq(&self) -> f32 {
        self.kq
    }

    /// Denominator of the falloff at distance `d`.
    #[inline]
    pub fn factor(&self, d: f32) -> f32 {
        self.kc + self.kl * d + self.kq * d * d
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::NONE
    }
}

/// A light at infinity shining along a fixed direction.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    intensity: Color,
    /// Unit vector toward the light
    direction: Vec3,
}

impl DirectionalLight {
    pub fn new(intensity: Color, direction: Vec3) -> Result<Self> {
        let intensity = validate_intensity(intensity)?;
        let direction = direction.try_normalize().ok_or(SceneError::ZeroLengthVector {
            what: "directional light direction",
        })?;
        Ok(Self {
            intensity,
            direction,
        })
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}

impl LightSource for DirectionalLight {
    fn light_ray(&self, point: Vec3) -> Ray {
        Ray::new(point, self.direction)
    }

    fn distance_from_light(&self, _point: Vec3) -> f32 {
        f32::INFINITY
    }

    fn intensity_at(&self, _point: Vec3) -> Color {
        self.intensity
    }
}

/// An omnidirectional light with distance attenuation.
#[derive(Debug, Clone)]
pub struct PointLight {
    intensity: Color,
    position: Vec3,
    attenuation: Attenuation,
}

impl PointLight {
    pub fn new(intensity: Color, position: Vec3, attenuation: Attenuation) -> Result<Self> {
        Ok(Self {
            intensity: validate_intensity(intensity)?,
            position,
            attenuation,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl LightSource for PointLight {
    fn light_ray(&self, point: Vec3) -> Ray {
        Ray::new(point, self.position - point)
    }

    fn distance_from_light(&self, point: Vec3) -> f32 {
        point.distance(self.position)
    }

    fn intensity_at(&self, point: Vec3) -> Color {
        let d = self.distance_from_light(point);
        self.intensity / self.attenuation.factor(d)
    }
}

/// A positional light whose intensity falls off away from its axis.
#[derive(Debug, Clone)]
pub struct SpotLight {
    intensity: Color,
    position: Vec3,
    /// Beam axis: the negated direction parameter
    axis: Vec3,
    attenuation: Attenuation,
}

impl SpotLight {
    /// Create a spot light.
    ///
    /// `direction` points from the lit region back toward the light, as for
    /// [`DirectionalLight`]; the beam travels along its negation.
    pub fn new(
        intensity: Color,
        position: Vec3,
        direction: Vec3,
        attenuation: Attenuation,
    ) -> Result<Self> {
        let intensity = validate_intensity(intensity)?;
        let direction = direction.try_normalize().ok_or(SceneError::ZeroLengthVector {
            what: "spot light direction",
        })?;
        Ok(Self {
            intensity,
            position,
            axis: -direction,
            attenuation,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Direction the beam travels in.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }
}

impl LightSource for SpotLight {
    fn light_ray(&self, point: Vec3) -> Ray {
        Ray::new(point, self.position - point)
    }

    fn distance_from_light(&self, point: Vec3) -> f32 {
        point.distance(self.position)
    }

    /// Behind the light (cosine to the axis below zero) nothing arrives.
    fn intensity_at(&self, point: Vec3) -> Color {
        let d = self.distance_from_light(point);
        if d == 0.0 {
            return self.intensity / self.attenuation.factor(d);
        }
        let to_point = normalize(point - self.position);
        let cone = self.axis.dot(to_point).max(0.0);
        self.intensity * cone / self.attenuation.factor(d)
    }
}
