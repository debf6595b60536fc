//! Glint math - vector helpers shared by the renderer.

// Re-export glam for convenience
pub use glam::*;

mod vector;
pub use vector::{normalize, reflect};
