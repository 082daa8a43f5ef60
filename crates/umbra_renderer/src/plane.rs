//! Infinite plane primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use std::sync::Arc;
use umbra_math::{Ray, Vec3, VecExt, EPSILON};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. `normal` is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize_guarded(),
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let n_dot_d = self.normal.dot(ray.direction());
        if n_dot_d.abs() < EPSILON {
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin()) / n_dot_d;
        if t < EPSILON {
            return None;
        }

        Some(HitRecord::new(ray, t, self.normal, &self.material))
    }
}
