//! The built-in reference scene.

use std::sync::Arc;
use umbra_renderer::{Camera, Color, Material, Plane, PointLight, Scene, Sphere, Vec3};

/// Three balls on a green floor inside a checkered dome, lit by one point
/// light.
pub fn build_reference_scene() -> Scene {
    let mut scene = Scene::new();

    scene.set_camera(
        Camera::new()
            .with_position(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Y)
            .with_fov(70.0),
    );

    scene.add_light(PointLight::new(Vec3::new(2.0, 2.0, 3.0), Color::splat(500.0)));

    // Mirror balls
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.7, 0.0),
        0.5,
        Arc::new(Material::mirror(Color::new(0.4, 0.6, 0.8))),
    ));
    scene.add(Sphere::new(
        Vec3::new(0.7, 0.0, 0.0),
        0.5,
        Arc::new(Material::mirror(Color::new(0.8, 0.6, 0.4))),
    ));

    scene.add(Sphere::new(
        Vec3::new(-0.7, 0.0, 0.0),
        0.5,
        Arc::new(Material::diffuse(Color::splat(0.6))),
    ));
    scene.add(Plane::new(
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::Y,
        Arc::new(Material::diffuse(Color::new(0.0, 0.8, 0.0))),
    ));

    // Dome enclosing everything
    scene.add(Sphere::checkered(
        Vec3::ZERO,
        5.0,
        Arc::new(Material::diffuse(Color::new(0.3, 0.4, 0.9))),
        Arc::new(Material::diffuse(Color::new(0.9, 0.4, 0.3))),
    ));

    log::debug!(
        "Built reference scene: {} objects, {} lights",
        scene.objects().len(),
        scene.lights().len()
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_renderer::{render, Hittable, Ray, RenderConfig, Shape};

    const EYE: Vec3 = Vec3::new(0.0, 0.0, 2.0);

    #[test]
    fn test_reference_scene_contents() {
        let scene = build_reference_scene();

        assert_eq!(scene.objects().len(), 5);
        assert_eq!(scene.lights().len(), 1);

        let center = scene.camera().get_ray(300.0, 300.0);
        assert_eq!(center.origin(), EYE);
        assert!((center.direction() + Vec3::Z).length() < 1e-4);

        let spheres = scene
            .objects()
            .iter()
            .filter(|o| matches!(o, Shape::Sphere(_)))
            .count();
        assert_eq!(spheres, 4);

        for object in scene.objects() {
            for material in object.materials() {
                assert!(material.is_energy_conserving());
            }
        }
    }

    #[test]
    fn test_every_ray_hits_the_dome() {
        let scene = build_reference_scene();
        for dir in [Vec3::X, Vec3::Y, -Vec3::Z, Vec3::new(1.0, 1.0, 1.0)] {
            let ray = Ray::new(EYE, dir);
            let hit = scene.first_intersect(&ray).expect("dome encloses the camera");
            assert!(hit.normal.dot(ray.direction()) <= 0.0);
        }

        let dome = scene.objects().last().unwrap();
        assert!(dome.hit(&Ray::new(Vec3::ZERO, Vec3::Z)).is_some());
    }

    #[test]
    fn test_small_reference_render() {
        let config = RenderConfig {
            width: 8,
            height: 6,
            samples_per_pixel: 2,
            ..RenderConfig::default()
        };
        let scene = build_reference_scene();
        let image = render(&scene, &config).unwrap();

        assert_eq!((image.width, image.height), (8, 6));
        assert!(image.pixels.iter().all(|p| p.is_finite()));
        assert!(image.pixels.iter().any(|p| p.length() > 0.0));
    }
}
