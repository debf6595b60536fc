//! Errors raised while assembling a scene or preparing a render.
//!
//! Nothing in here is produced while tracing a pixel: degenerate rays and
//! missed geometry resolve to "no hit" instead.

use thiserror::Error;

/// Errors that can occur when constructing scene data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{what} must have non-zero, finite length")]
    ZeroLengthVector { what: &'static str },

    #[error("invalid attenuation (kc={kc}, kl={kl}, kq={kq}): kc must be > 0 and kl, kq >= 0")]
    InvalidAttenuation { kc: f32, kl: f32, kq: f32 },

    #[error("light intensity {0} must be finite and non-negative")]
    InvalidIntensity(glint_math::Vec3),

    #[error("mesh has no faces")]
    EmptyMesh,

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("triangle vertices are collinear or coincident")]
    DegenerateTriangle,

    #[error("mesh face {face} references vertex {index} but only {vertex_count} vertices exist")]
    MeshFaceOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("mesh face {0} is degenerate")]
    DegenerateMeshFace(usize),

    #[error("invalid material: {0}")]
    InvalidMaterial(String),

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
}

/// Result alias for scene construction.
pub type Result<T> = std::result::Result<T, SceneError>;
