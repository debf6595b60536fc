//! Built-in demo scenes.

use anyhow::{bail, Result};
use glint_renderer::{
    Attenuation, Color, DirectionalLight, Material, Mesh, Plane, PointLight, Scene, SpotLight,
    Sphere, Vec3,
};

/// Names accepted by [`build`].
pub const SCENE_NAMES: [&str; 3] = ["showcase", "pyramid", "mirrors"];

/// Build a demo scene by name.
pub fn build(name: &str) -> Result<Scene> {
    match name {
        "showcase" => showcase(),
        "pyramid" => pyramid(),
        "mirrors" => mirrors(),
        other => bail!(
            "unknown scene '{}', expected one of: {}",
            other,
            SCENE_NAMES.join(", ")
        ),
    }
}

/// Blue floor, green back wall, a red mirror sphere and a small green sphere.
fn showcase() -> Result<Scene> {
    let floor = Material::new(
        Color::new(0.3, 0.5, 1.0),
        Color::new(0.3, 0.5, 1.0),
        Color::ONE,
        100.0,
        0.5,
    )?;
    let wall = Material::new(
        Color::new(0.0, 0.5, 0.0),
        Color::new(0.0, 1.0, 0.0),
        Color::ONE,
        100.0,
        0.5,
    )?;
    let red = Material::new(Color::X, Color::X, Color::splat(0.3), 100.0, 1.0)?;
    let green = Material::new(Color::Y, Color::Y, Color::splat(0.3), 100.0, 0.2)?;

    Ok(Scene::new(Vec3::new(0.0, 0.0, 1.0))
        .with_ambient(Color::splat(0.1))
        .with_object(Plane::new(Vec3::Y, Vec3::new(0.0, -1.0, 0.0), floor)?)
        .with_object(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, -3.0), wall)?)
        .with_object(Sphere::new(Vec3::new(-0.5, 0.2, -1.0), 0.5, red)?)
        .with_object(Sphere::new(Vec3::new(0.8, 0.0, -0.5), 0.3, green)?)
        .with_light(PointLight::new(
            Color::ONE,
            Vec3::new(1.0, 1.5, 1.0),
            Attenuation::new(0.1, 0.1, 0.1)?,
        )?)
        .with_light(DirectionalLight::new(Color::ONE, Vec3::ONE)?))
}

/// A square pyramid mesh on a reflective floor under a spot light.
fn pyramid() -> Result<Scene> {
    let gold = Material::builder()
        .ambient(Color::new(0.3, 0.25, 0.05))
        .diffuse(Color::new(0.9, 0.7, 0.2))
        .specular(Color::splat(0.8))
        .shininess(40.0)
        .reflection(0.1)
        .build()?;
    let floor = Material::builder()
        .ambient(Color::splat(0.1))
        .diffuse(Color::splat(0.6))
        .specular(Color::splat(0.2))
        .reflection(0.3)
        .build()?;

    let vertices = vec![
        Vec3::new(-0.6, -0.8, -1.4),
        Vec3::new(0.6, -0.8, -1.4),
        Vec3::new(0.6, -0.8, -2.6),
        Vec3::new(-0.6, -0.8, -2.6),
        Vec3::new(0.0, 0.5, -2.0),
    ];
    // Counter-clockwise seen from outside so every normal faces out
    let faces = vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]];

    Ok(Scene::new(Vec3::new(0.0, 0.0, 1.0))
        .with_ambient(Color::splat(0.2))
        .with_object(Plane::new(Vec3::Y, Vec3::new(0.0, -0.8, 0.0), floor)?)
        .with_object(Mesh::new(vertices, faces, gold)?)
        .with_light(SpotLight::new(
            Color::new(1.0, 0.95, 0.9),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(0.5, 1.0, 1.0),
            Attenuation::new(1.0, 0.05, 0.02)?,
        )?)
        .with_light(DirectionalLight::new(Color::splat(0.3), Vec3::new(-1.0, 1.0, 1.0))?))
}

/// Three tinted mirror spheres over a matte floor.
fn mirrors() -> Result<Scene> {
    let floor = Material::builder()
        .ambient(Color::new(0.1, 0.1, 0.12))
        .diffuse(Color::new(0.5, 0.5, 0.55))
        .build()?;

    let mut scene = Scene::new(Vec3::new(0.0, 0.2, 1.5))
        .with_ambient(Color::splat(0.3))
        .with_object(Plane::new(Vec3::Y, Vec3::new(0.0, -0.6, 0.0), floor)?)
        .with_light(PointLight::new(
            Color::ONE,
            Vec3::new(-1.0, 2.0, 1.0),
            Attenuation::new(0.5, 0.1, 0.05)?,
        )?);

    let tints = [
        Color::new(0.9, 0.2, 0.2),
        Color::new(0.2, 0.9, 0.2),
        Color::new(0.2, 0.2, 0.9),
    ];
    for (i, tint) in tints.into_iter().enumerate() {
        let material = Material::builder()
            .ambient(tint * 0.2)
            .diffuse(tint * 0.5)
            .specular(Color::ONE)
            .shininess(200.0)
            .reflection(0.7)
            .build()?;
        let x = (i as f32 - 1.0) * 0.9;
        scene.add_object(Box::new(Sphere::new(Vec3::new(x, -0.2, -1.5), 0.4, material)?));
    }

    Ok(scene)
}
