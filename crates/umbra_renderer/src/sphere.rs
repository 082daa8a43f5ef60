//! Sphere primitive for ray tracing.

use crate::{
    hittable::{face_forward, HitRecord, Hittable},
    Material,
};
use std::f64::consts::PI;
use std::sync::Arc;
use umbra_math::{Interval, Ray, Vec3};

/// Checkerboard cells along u (polar angle).
const CHECKER_U: f64 = 6.0;
/// Checkerboard cells along v (azimuth).
const CHECKER_V: f64 = 8.0;

/// A sphere primitive, optionally textured with a two-material checkerboard.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<Material>,
    checker: Option<Arc<Material>>,
}

impl Sphere {
    /// Create a new sphere with a single material.
    pub fn new(center: Vec3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
            checker: None,
        }
    }

    /// Create a sphere whose odd checkerboard cells use `material2`.
    pub fn checkered(
        center: Vec3,
        radius: f64,
        material: Arc<Material>,
        material2: Arc<Material>,
    ) -> Self {
        Self {
            checker: Some(material2),
            ..Self::new(center, radius, material)
        }
    }

    /// The base material, followed by the checker material if any.
    pub fn materials(&self) -> Vec<&Material> {
        std::iter::once(self.material.as_ref())
            .chain(self.checker.as_deref())
            .collect()
    }

    /// Spherical (u, v) of a unit direction, both in [0, 1].
    ///
    /// u runs from +Y (0) to -Y (1); v follows the azimuth around Y.
    fn get_sphere_uv(n: Vec3) -> (f64, f64) {
        let u = n.y.clamp(-1.0, 1.0).acos() / PI;
        let v = (n.z.atan2(n.x) / PI + 1.0) / 2.0;
        (u, v)
    }

    /// Pick the material for a hit with the given (ray-facing) normal.
    fn material_at(&self, normal: Vec3) -> &Material {
        match &self.checker {
            Some(material2) => {
                let (u, v) = Self::get_sphere_uv(normal);
                let cell_u = (u * CHECKER_U) as i64;
                let cell_v = (v * CHECKER_V) as i64;
                if (cell_u % 2) != (cell_v % 2) {
                    material2.as_ref()
                } else {
                    self.material.as_ref()
                }
            }
            None => self.material.as_ref(),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest strictly positive root; the far root covers rays starting inside
        let mut root = (-half_b - sqrtd) / a;
        if !Interval::POSITIVE.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !Interval::POSITIVE.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let normal = face_forward((p - self.center) / self.radius, ray.direction());

        Some(HitRecord {
            t: root,
            p,
            normal,
            material: self.material_at(normal),
        })
    }
}
