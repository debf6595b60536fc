//! Phong illumination with hard shadows and recursive mirror reflection.

use crate::{hittable::Object3D, Color, Ray, Scene};
use glint_math::{reflect, Vec3};

/// Offset along the surface normal for rays leaving a surface, so they do
/// not immediately re-hit it.
pub const SURFACE_BIAS: f32 = 1e-4;

/// Compute the color seen along `ray` where it hits `object` at `hit_point`.
///
/// Returns black when there is no object or when `depth` has reached
/// `max_depth`. Otherwise adds the ambient term, the diffuse and specular
/// terms of every light that is not shadowed, and `reflection` times the
/// color seen along the mirrored ray one level deeper.
///
/// The result is not clamped.
pub fn shade(
    scene: &Scene,
    object: Option<&dyn Object3D>,
    ray: &Ray,
    hit_point: Vec3,
    max_depth: u32,
    depth: u32,
) -> Color {
    let Some(object) = object else {
        return Color::ZERO;
    };
    if depth >= max_depth {
        return Color::ZERO;
    }

    let material = object.material();
    let normal = facing_normal(object.compute_normal(hit_point), ray);
    let shifted = hit_point + SURFACE_BIAS * normal;
    let to_viewer = -ray.direction();

    let mut color = material.ambient() * scene.ambient();

    for light in scene.lights() {
        let light_ray = light.light_ray(shifted);
        let occluded = light_ray
            .nearest_intersection(scene.object_refs())
            .is_some_and(|hit| hit.distance <= light.distance_from_light(hit_point));
        if occluded {
            continue;
        }

        let intensity = light.intensity_at(hit_point);
        let to_light = light_ray.direction();

        let diffuse = normal.dot(to_light).max(0.0);
        color += material.diffuse() * intensity * diffuse;

        let mirrored = reflect(-to_light, normal);
        let specular = mirrored.dot(to_viewer).max(0.0).powf(material.shininess());
        color += material.specular() * intensity * specular;
    }

    if material.reflection() > 0.0 {
        let reflected = Ray::new(shifted, reflect(ray.direction(), normal));
        if let Some(hit) = reflected.nearest_intersection(scene.object_refs()) {
            if let Some(next_point) = reflected.at(hit.distance) {
                color += shade(
                    scene,
                    Some(hit.object),
                    &reflected,
                    next_point,
                    max_depth,
                    depth + 1,
                ) * material.reflection();
            }
        }
    }

    color
}

/// Flip `normal` so it points against the incoming ray.
#[inline]
fn facing_normal(normal: Vec3, ray: &Ray) -> Vec3 {
    if normal.dot(ray.direction()) > 0.0 {
        -normal
    } else {
        normal
    }
}
