//! Glint renderer - recursive ray tracing on the CPU.
//!
//! Casts one primary ray per pixel through a virtual screen, finds the
//! nearest primitive by brute force, shades it with the Phong model and
//! hard shadows, and follows mirror reflections up to a fixed depth.
//!
//! # Example
//!
//! ```
//! use glint_renderer::{
//!     render, Attenuation, Color, Material, PointLight, RenderConfig, Scene, Sphere, Vec3,
//! };
//!
//! let red = Material::builder()
//!     .ambient(Color::new(0.1, 0.0, 0.0))
//!     .diffuse(Color::new(0.8, 0.0, 0.0))
//!     .build()?;
//!
//! let scene = Scene::new(Vec3::new(0.0, 0.0, 1.0))
//!     .with_ambient(Color::ONE)
//!     .with_light(PointLight::new(Color::ONE, Vec3::new(1.0, 1.0, 1.0), Attenuation::NONE)?)
//!     .with_object(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, red)?);
//!
//! let config = RenderConfig { width: 16, height: 12, ..Default::default() };
//! let image = render(&scene, &config)?;
//! assert_eq!(image.pixels.len(), 16 * 12);
//! # Ok::<(), glint_renderer::SceneError>(())
//! ```

mod bucket;
mod camera;
mod error;
mod hittable;
mod light;
mod material;
mod mesh;
mod plane;
mod ray;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Screen, SCREEN_DISTANCE};
pub use error::{Result, SceneError};
pub use hittable::{Hit, Object3D};
pub use light::{Attenuation, DirectionalLight, LightSource, PointLight, SpotLight};
pub use material::{Color, Material, MaterialBuilder};
pub use mesh::Mesh;
pub use plane::Plane;
pub use ray::Ray;
pub use renderer::{clamp_color, color_to_rgb, render, render_pixel, ImageBuffer, RenderConfig};
pub use scene::Scene;
pub use shading::{shade, SURFACE_BIAS};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export vector helpers from glint_math
pub use glint_math::{normalize, reflect, Vec3};
