//! Virtual screen that primary rays pass through.

use crate::Ray;
use glint_math::Vec3;

/// Distance from the camera to the screen along -Z.
pub const SCREEN_DISTANCE: f32 = 1.0;

/// Screen rectangle in front of the camera.
///
/// The screen spans x in [-1, 1] and y in [-1/aspect, 1/aspect] relative to
/// the camera, so the aspect ratio of the image is preserved. Pixel centers
/// are spread evenly with the outermost pixels on the edges.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    camera: Vec3,
    width: u32,
    height: u32,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Screen {
    /// Create the screen for an image of `width` x `height` pixels.
    pub fn new(camera: Vec3, width: u32, height: u32) -> Self {
        let ratio = width as f32 / height as f32;
        Self {
            camera,
            width,
            height,
            left: -1.0,
            top: 1.0 / ratio,
            right: 1.0,
            bottom: -1.0 / ratio,
        }
    }

    /// World-space point of pixel (x, y), with row 0 at the top.
    pub fn pixel_position(&self, x: u32, y: u32) -> Vec3 {
        let sx = lerp_index(self.left, self.right, self.width, x);
        let sy = lerp_index(self.top, self.bottom, self.height, y);
        Vec3::new(
            self.camera.x + sx,
            self.camera.y + sy,
            self.camera.z - SCREEN_DISTANCE,
        )
    }

    /// Primary ray from the camera through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.camera, self.pixel_position(x, y) - self.camera)
    }
}

/// The `i`-th of `n` evenly spaced samples from `start` to `end` inclusive.
#[inline]
fn lerp_index(start: f32, end: f32, n: u32, i: u32) -> f32 {
    if n <= 1 {
        return start;
    }
    start + (end - start) * (i as f32 / (n - 1) as f32)
}
