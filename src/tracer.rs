use std::f32::INFINITY;

use crate::geometry::Hit;
use crate::math::{distance, dot, Color, Ray};
use crate::scene::Scene;

/// Tests every object in the scene and keeps the hit closest to the ray
/// origin. A strictly-less comparison keeps the earliest of equal-distance
/// objects.
pub fn nearest_hit<'a>(r: Ray, scene: &'a Scene) -> Option<Hit<'a>> {
    let mut min_distance = INFINITY;
    let mut first_hit: Option<Hit<'a>> = None;

    for primitive in scene.primitives.iter() {
        if let Some(hit) = primitive.intersect(r) {
            let hit_distance = distance(r.origin, hit.point);
            if hit_distance < min_distance {
                min_distance = hit_distance;
                first_hit = Some(hit);
            }
        }
    }

    first_hit
}

/// Recursive shading: resolve the nearest hit, bounce a mirror reflection
/// while `max_depth` allows, blend with the surface color and add emission.
/// Pure and deterministic; recursion is bounded by `max_depth` alone.
pub fn trace(r: Ray, scene: &Scene, max_depth: u32) -> Color {
    let mut hit = match nearest_hit(r, scene) {
        Some(hit) => hit,
        None => return Color::ZERO,
    };

    // make the normal face against the incoming ray
    if dot(r.direction, hit.normal) > 0.0 {
        hit.normal = -hit.normal;
    }

    let mut surface_color = Color::ZERO;

    if max_depth > 0 {
        // mirror the incoming direction about the (unit) normal
        let reflect_dir = r.direction - hit.normal * 2.0 * dot(r.direction, hit.normal);
        let reflect_ray = Ray::new(hit.point, reflect_dir);

        let reflection = trace(reflect_ray, scene, max_depth - 1);

        // non-physical additive bias, chosen for the visual effect
        surface_color = reflection * hit.object.surface_color() + Color::splat(0.3);
    }

    surface_color + hit.object.emission_color()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Sphere;
    use crate::math::{Point3, Vec3};

    fn single_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            4.0,
            Point3::new(0.0, 0.0, -20.0),
            Color::new(1.0, 0.32, 0.36),
        )));
        scene
    }

    fn forward() -> Ray {
        Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_scene_is_background() {
        let scene = Scene::new();
        assert_eq!(trace(forward(), &scene, 5), Color::ZERO);
        assert_eq!(trace(forward(), &scene, 0), Color::ZERO);
    }

    #[test]
    fn test_nearest_hit_resolution() {
        let mut scene = single_sphere_scene();
        // a nearer sphere along the same ray
        scene.add(Box::new(Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -10.0),
            Color::new(0.9, 0.9, 0.9),
        )));

        let hit = nearest_hit(forward(), &scene).expect("both spheres lie on the ray");
        assert_eq!(hit.point, Point3::new(0.0, 0.0, -9.0));
        assert_eq!(hit.object.surface_color(), Color::new(0.9, 0.9, 0.9));
    }

    #[test]
    fn test_equal_distance_tie_breaks_to_first() {
        // two tangent spheres touching the ray at the same point
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            2.0,
            Point3::new(0.0, 2.0, -10.0),
            Color::new(1.0, 0.0, 0.0),
        )));
        scene.add(Box::new(Sphere::new(
            2.0,
            Point3::new(0.0, -2.0, -10.0),
            Color::new(0.0, 1.0, 0.0),
        )));

        let hit = nearest_hit(forward(), &scene).expect("tangent rays hit");
        assert_eq!(hit.object.surface_color(), Color::new(1.0, 0.0, 0.0));
        assert_eq!(hit.normal, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_depth_zero_skips_reflection() {
        let scene = single_sphere_scene();
        assert_eq!(trace(forward(), &scene, 0), Color::ZERO);
    }

    #[test]
    fn test_depth_zero_returns_emission() {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::emissive(
            3.0,
            Point3::new(0.0, 0.0, -30.0),
            Color::ZERO,
            Color::splat(3.0),
        )));
        assert_eq!(trace(forward(), &scene, 0), Color::splat(3.0));
    }

    #[test]
    fn test_reflection_additive_bias() {
        // black sphere, reflection ray escapes to the background:
        // 0 * 0 + (0.3, 0.3, 0.3) + 0
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            4.0,
            Point3::new(0.0, 0.0, -20.0),
            Color::ZERO,
        )));
        assert_eq!(trace(forward(), &scene, 1), Color::splat(0.3));
    }

    #[test]
    fn test_reflection_sees_emitter() {
        // mirror bounce straight back through the origin into an emitter
        // placed behind the camera
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            4.0,
            Point3::new(0.0, 0.0, -20.0),
            Color::splat(1.0),
        )));
        scene.add(Box::new(Sphere::emissive(
            2.0,
            Point3::new(0.0, 0.0, 10.0),
            Color::ZERO,
            Color::splat(3.0),
        )));

        // depth 1: reflection hits the emitter at depth 0, which contributes
        // its emission only; blended as 3 * 1 + 0.3
        assert_eq!(trace(forward(), &scene, 1), Color::splat(3.3));
    }

    #[test]
    fn test_normal_faces_incoming_ray() {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            3.0,
            Point3::new(1.0, -2.0, -15.0),
            Color::splat(0.5),
        )));
        scene.add(Box::new(Sphere::new(
            2.0,
            Point3::new(-4.0, 1.0, -12.0),
            Color::splat(0.5),
        )));

        for _ in 0..200 {
            let direction = Vec3::new(
                rand::random::<f32>() - 0.5,
                rand::random::<f32>() - 0.5,
                -rand::random::<f32>(),
            )
            .normalized();
            let r = Ray::new(Point3::ZERO, direction);
            if let Some(hit) = nearest_hit(r, &scene) {
                assert!(
                    dot(r.direction, hit.normal) <= 0.0,
                    "{:?} {:?}",
                    r.direction,
                    hit.normal
                );
            }
        }
    }

    #[test]
    fn test_deep_recursion_terminates() {
        // two spheres facing each other so reflections ping-pong between
        // them; max_depth is the only termination guarantee
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            4.0,
            Point3::new(0.0, 0.0, -20.0),
            Color::splat(0.9),
        )));
        scene.add(Box::new(Sphere::new(
            2.0,
            Point3::new(0.0, 0.0, 4.0),
            Color::splat(0.9),
        )));

        let color = trace(forward(), &scene, 64);
        assert!(
            color.x.is_finite() && color.y.is_finite() && color.z.is_finite(),
            "{:?}",
            color
        );
        // every bounce adds at least the 0.3 bias
        assert!(color.x >= 0.3);
    }
}
