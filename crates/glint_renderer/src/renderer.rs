//! Core ray tracing renderer.
//!
//! Implements Whitted-style recursive ray tracing with:
//! - One primary ray per pixel through a virtual screen
//! - Phong shading with hard shadows
//! - Mirror reflection with configurable depth

use crate::{
    error::{Result, SceneError},
    shading::shade,
    Color, Scene, Screen,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum recursion depth; 0 renders black
    pub max_depth: u32,
    /// Tile size used by the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 3,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Check that the configuration describes a renderable image.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Clamp every component of a color to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::ONE)
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = clamp_color(color) * 255.0;
    [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
}

/// Render a single pixel.
///
/// The returned color is already clamped to [0, 1].
pub fn render_pixel(scene: &Scene, screen: &Screen, x: u32, y: u32, max_depth: u32) -> Color {
    let ray = screen.primary_ray(x, y);

    let Some(hit) = ray.nearest_intersection(scene.object_refs()) else {
        return Color::ZERO;
    };
    let Some(hit_point) = ray.at(hit.distance) else {
        return Color::ZERO;
    };

    clamp_color(shade(scene, Some(hit.object), &ray, hit_point, max_depth, 0))
}

/// Image buffer for storing render output, row-major from the top row.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| color_to_rgb(c)).collect()
    }

    /// Write the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// This is the single-threaded reference renderer; see
/// [`crate::render_parallel`] for the bucketed version.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer> {
    config.validate()?;
    log_render_start(scene, config);

    let start = Instant::now();
    let screen = Screen::new(scene.camera, config.width, config.height);
    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            let color = render_pixel(scene, &screen, x, y, config.max_depth);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

pub(crate) fn log_render_start(scene: &Scene, config: &RenderConfig) {
    log::info!(
        "Rendering {}x{} (max depth {}) with {} objects and {} lights",
        config.width,
        config.height,
        config.max_depth,
        scene.objects().len(),
        scene.lights().len()
    );
    if scene.lights().is_empty() {
        log::warn!("Scene has no lights, only ambient shading will be visible");
    }
}
