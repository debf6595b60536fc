//! End-to-end checks of the renderer through the public API.

use glint_renderer::{
    render, render_parallel, shade, Attenuation, Color, DirectionalLight, Material, Mesh, Object3D,
    Plane, PointLight, Ray, RenderConfig, Scene, SceneError, SpotLight, Sphere, Vec3,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config(width: u32, height: u32, max_depth: u32) -> RenderConfig {
    RenderConfig {
        width,
        height,
        max_depth,
        bucket_size: 4,
    }
}

/// Bright, fully reflective material that saturates under direct light.
fn hot_mirror() -> Material {
    Material::builder()
        .ambient(Color::ONE)
        .diffuse(Color::ONE)
        .specular(Color::ONE)
        .shininess(1.0)
        .reflection(1.0)
        .build()
        .unwrap()
}

/// A floor, a back wall, two reflective spheres, one point light and one
/// directional light.
fn showcase_scene() -> Scene {
    let floor = Material::new(
        Color::new(0.3, 0.5, 1.0),
        Color::new(0.3, 0.5, 1.0),
        Color::ONE,
        100.0,
        0.5,
    )
    .unwrap();
    let wall = Material::new(Color::new(0.0, 0.5, 0.0), Color::new(0.0, 1.0, 0.0), Color::ONE, 100.0, 0.5)
        .unwrap();
    let red = Material::new(Color::X, Color::X, Color::splat(0.3), 100.0, 1.0).unwrap();
    let green = Material::new(Color::Y, Color::Y, Color::splat(0.3), 100.0, 0.2).unwrap();

    Scene::new(Vec3::new(0.0, 0.0, 1.0))
        .with_ambient(Color::splat(0.1))
        .with_object(Plane::new(Vec3::Y, Vec3::new(0.0, -1.0, 0.0), floor).unwrap())
        .with_object(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, -3.0), wall).unwrap())
        .with_object(Sphere::new(Vec3::new(-0.5, 0.2, -1.0), 0.5, red).unwrap())
        .with_object(Sphere::new(Vec3::new(0.8, 0.0, -0.5), 0.3, green).unwrap())
        .with_light(PointLight::new(
            Color::ONE,
            Vec3::new(1.0, 1.5, 1.0),
            Attenuation::new(0.1, 0.1, 0.1).unwrap(),
        ).unwrap())
        .with_light(DirectionalLight::new(Color::ONE, Vec3::ONE).unwrap())
}

#[test]
fn empty_scene_renders_black() {
    init_logging();
    let scene = Scene::new(Vec3::new(0.0, 0.0, 1.0)).with_ambient(Color::ONE);

    let image = render(&scene, &config(7, 5, 3)).unwrap();

    assert_eq!(image.width, 7);
    assert_eq!(image.height, 5);
    assert_eq!(image.pixels.len(), 35);
    assert!(image.pixels.iter().all(|&c| c == Color::ZERO));
}

#[test]
fn zero_resolution_is_rejected() {
    let scene = Scene::new(Vec3::ZERO);
    let err = render(&scene, &config(0, 4, 1)).unwrap_err();
    assert_eq!(err, SceneError::InvalidResolution { width: 0, height: 4 });
    assert!(render_parallel(&scene, &config(4, 0, 1)).is_err());
}

#[test]
fn output_is_clamped() {
    init_logging();
    let scene = Scene::new(Vec3::new(0.0, 0.0, 1.0))
        .with_ambient(Color::splat(5.0))
        .with_light(PointLight::new(Color::splat(10.0), Vec3::new(0.0, 2.0, 1.0), Attenuation::NONE).unwrap())
        .with_light(DirectionalLight::new(Color::splat(10.0), Vec3::ONE).unwrap())
        .with_object(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.6, hot_mirror()).unwrap())
        .with_object(Plane::new(Vec3::Y, Vec3::new(0.0, -1.0, 0.0), hot_mirror()).unwrap());

    let image = render(&scene, &config(16, 12, 4)).unwrap();

    for c in &image.pixels {
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0, "pixel {c} out of range");
    }
    // Saturation actually happened somewhere
    assert!(image.pixels.iter().any(|c| c.max_element() == 1.0));
}

#[test]
fn showcase_colors_stay_in_range() {
    let image = render(&showcase_scene(), &config(24, 18, 3)).unwrap();
    assert!(image
        .pixels
        .iter()
        .all(|c| c.is_finite() && c.min_element() >= 0.0 && c.max_element() <= 1.0));
    // The floor and wall cover the frame, nothing should be pure black
    assert!(image.pixels.iter().all(|c| c.max_element() > 0.0));
}

#[test]
fn parallel_matches_serial() {
    init_logging();
    let scene = showcase_scene();
    let config = config(23, 17, 3);

    let serial = render(&scene, &config).unwrap();
    let parallel = render_parallel(&scene, &config).unwrap();

    assert_eq!(serial, parallel);
}

#[test]
fn reflection_needs_depth_beyond_one() {
    // Mirror floor reflecting a lit sphere above it
    let mirror = Material::builder().reflection(1.0).build().unwrap();
    let lit = Material::builder().ambient(Color::ONE).build().unwrap();
    let plane = Plane::new(Vec3::Y, Vec3::ZERO, mirror).unwrap();
    let scene = Scene::new(Vec3::ZERO)
        .with_ambient(Color::splat(0.5))
        .with_object(Sphere::new(Vec3::new(0.0, 3.0, 0.0), 1.0, lit).unwrap());
    let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);

    // max_depth = 0: nothing at all, so no reflective term either
    assert_eq!(shade(&scene, Some(&plane), &ray, Vec3::ZERO, 0, 0), Color::ZERO);
    // max_depth = 1: direct shading only, the mirror itself is black
    assert_eq!(shade(&scene, Some(&plane), &ray, Vec3::ZERO, 1, 0), Color::ZERO);
    // max_depth = 2: the reflected sphere appears
    let color = shade(&scene, Some(&plane), &ray, Vec3::ZERO, 2, 0);
    assert!((color - Color::splat(0.5)).length() < 1e-4);
}

#[test]
fn zero_depth_renders_black() {
    let image = render(&showcase_scene(), &config(8, 6, 0)).unwrap();
    assert!(image.pixels.iter().all(|&c| c == Color::ZERO));
}

#[test]
fn shadow_leaves_only_ambient() {
    let receiver = Material::new(Color::splat(0.5), Color::ONE, Color::ONE, 10.0, 0.0).unwrap();
    let blocker = Material::builder().build().unwrap();
    let floor = Plane::new(Vec3::Y, Vec3::ZERO, receiver).unwrap();

    let scene = Scene::new(Vec3::new(0.0, 1.0, 3.0))
        .with_ambient(Color::new(0.2, 0.4, 0.6))
        .with_light(PointLight::new(Color::ONE, Vec3::new(0.0, 4.0, 0.0), Attenuation::NONE).unwrap())
        .with_object(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, blocker).unwrap());

    let target = Vec3::ZERO;
    let ray = Ray::new(scene.camera, target - scene.camera);
    let color = shade(&scene, Some(&floor), &ray, target, 3, 0);

    assert!((color - Color::new(0.1, 0.2, 0.3)).length() < 1e-5);

    // Without the blocker the light gets through
    let open = Scene::new(scene.camera)
        .with_ambient(scene.ambient())
        .with_light(PointLight::new(Color::ONE, Vec3::new(0.0, 4.0, 0.0), Attenuation::NONE).unwrap());
    let lit = shade(&open, Some(&floor), &ray, target, 3, 0);
    assert!(lit.x > color.x + 0.5);
}

#[test]
fn spot_light_lights_only_its_cone() {
    let matte = Material::builder().diffuse(Color::ONE).build().unwrap();
    let floor = Plane::new(Vec3::Y, Vec3::ZERO, matte).unwrap();
    // Hanging above the origin, beam aimed down and 45 degrees toward -X
    let spot = SpotLight::new(
        Color::ONE,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Attenuation::NONE,
    )
    .unwrap();
    let scene = Scene::new(Vec3::new(0.0, 5.0, 0.0)).with_light(spot);

    let under = Vec3::new(-1.0, 0.0, 0.0);
    let ray = Ray::new(scene.camera, under - scene.camera);
    assert!(shade(&scene, Some(&floor), &ray, under, 1, 0).x > 0.0);

    // Far along +X the point is behind the beam
    let behind = Vec3::new(10.0, 0.0, 0.0);
    let ray = Ray::new(scene.camera, behind - scene.camera);
    assert_eq!(shade(&scene, Some(&floor), &ray, behind, 1, 0), Color::ZERO);
}

#[test]
fn mesh_hits_report_triangles() {
    let material = Material::builder().ambient(Color::ONE).build().unwrap();
    // Square pyramid with apex toward the camera
    let vertices = vec![
        Vec3::new(-1.0, -1.0, -3.0),
        Vec3::new(1.0, -1.0, -3.0),
        Vec3::new(1.0, 1.0, -3.0),
        Vec3::new(-1.0, 1.0, -3.0),
        Vec3::new(0.0, 0.0, -2.0),
    ];
    let faces = vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]];
    let mesh = Mesh::new(vertices, faces, material).unwrap();
    assert_eq!(mesh.triangle_count(), 4);

    let ray = Ray::new(Vec3::new(0.3, 0.0, 0.0), Vec3::NEG_Z);
    let hit = mesh.intersect(&ray).unwrap();
    let triangle = &mesh.triangles()[1];
    assert!(std::ptr::eq(
        hit.object as *const dyn Object3D as *const (),
        triangle as *const _ as *const ()
    ));
    // Triangle faces the camera and carries the mesh material
    assert!(hit.object.compute_normal(Vec3::ZERO).z > 0.0);
    assert_eq!(hit.object.material(), &material);

    let scene = Scene::new(Vec3::new(0.0, 0.0, 1.0))
        .with_ambient(Color::splat(0.25))
        .with_object(mesh);
    // Pixel (9, 8) looks at x = 0.125 on the screen, inside the right face
    let image = render(&scene, &config(17, 17, 1)).unwrap();
    assert!((image.get(9, 8) - Color::splat(0.25)).length() < 1e-5);
    assert_eq!(image.get(0, 0), Color::ZERO);
}
