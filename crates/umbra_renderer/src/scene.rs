//! Scene container and the recursive radiance estimator.

use crate::{
    gen_f64, sample_diffuse, sample_mirror, Camera, Color, HitRecord, Hittable, PointLight,
    RenderConfig, Shape,
};
use rand::RngCore;
use std::f64::consts::PI;
use umbra_math::{Ray, EPSILON};

/// Objects, lights and camera of one render.
///
/// Built once before rendering and only read afterwards, so it can be
/// shared across worker threads by reference.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Shape>,
    lights: Vec<PointLight>,
    camera: Camera,
}

impl Scene {
    /// Create an empty scene with a default camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Into<Shape>) {
        let object = object.into();
        for material in object.materials() {
            if !material.is_energy_conserving() {
                log::warn!(
                    "Material reflects more than it receives: diffuse={:?} mirror={:?}",
                    material.diffuse_albedo,
                    material.mirror_albedo
                );
            }
        }
        self.objects.push(object);
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Replace the camera. Its resolution is overridden by the render config.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn objects(&self) -> &[Shape] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Nearest intersection along `ray` over all objects.
    pub fn first_intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut best: Option<HitRecord<'_>> = None;
        for object in &self.objects {
            if let Some(hit) = object.hit(ray) {
                if best.map_or(true, |b| hit.t < b.t) {
                    best = Some(hit);
                }
            }
        }
        best
    }

    /// Estimate the radiance arriving along `ray`.
    ///
    /// Adds direct light from every visible point light, then continues the
    /// path with at most one diffuse or mirror bounce chosen by Russian
    /// roulette. Returns black past `config.max_depth` or on a miss.
    pub fn trace(
        &self,
        ray: &Ray,
        depth: u32,
        config: &RenderConfig,
        rng: &mut dyn RngCore,
    ) -> Color {
        if depth >= config.max_depth {
            return Color::ZERO;
        }
        let Some(hit) = self.first_intersect(ray) else {
            return Color::ZERO;
        };

        let n = hit.normal;
        let material = hit.material;
        let origin = hit.p + n * EPSILON;

        let mut radiance = self.direct_light(&hit);

        let diffuse_prob = material.diffuse_select_prob();
        let mirror_prob = material.mirror_select_prob();

        let rnd = gen_f64(rng);
        if rnd < diffuse_prob {
            let sample = sample_diffuse(n, ray.direction(), rng);
            let cos_theta = n.dot(sample.direction);
            if cos_theta >= EPSILON {
                let incoming = self.trace(&Ray::new(origin, sample.direction), depth + 1, config, rng);
                radiance += incoming * material.diffuse_albedo / PI * cos_theta
                    / sample.pdf
                    / diffuse_prob;
            }
        } else if rnd < diffuse_prob + mirror_prob {
            let sample = sample_mirror(n, ray.direction());
            let incoming = self.trace(&Ray::new(origin, sample.direction), depth + 1, config, rng);
            radiance += incoming * material.mirror_albedo / sample.pdf / mirror_prob;
        }
        // Otherwise the path is absorbed

        radiance
    }

    /// Diffuse reflection of every unoccluded point light at `hit`.
    fn direct_light(&self, hit: &HitRecord<'_>) -> Color {
        let n = hit.normal;
        let shadow_origin = hit.p + n * EPSILON;
        let mut radiance = Color::ZERO;

        for light in &self.lights {
            let to_light = light.direction_from(hit.p);
            let light_distance = light.distance_to(hit.p);

            let occluded = self
                .first_intersect(&Ray::new(shadow_origin, to_light))
                .is_some_and(|shadow| shadow.t >= EPSILON && shadow.t <= light_distance);
            if occluded {
                continue;
            }

            let cos_theta = n.dot(to_light);
            if cos_theta >= EPSILON {
                radiance += hit.material.diffuse_albedo / PI
                    * cos_theta
                    * light.irradiance_at(hit.p);
            }
        }

        radiance
    }
}
