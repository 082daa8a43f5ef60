use crate::{Vec3, VecExt};

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction, so intersection code can
/// read `t` as a distance along the ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` need not be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_guarded(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation_normalizes() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, Vec3::new(0.0, 5.0, 0.0));

        assert_eq!(ray.origin, origin);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        assert!(ray.direction.x.abs() < 1e-12);
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert!((ray.at(2.0) - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);
        assert!(ray.at(-1.0).x < 0.0);
    }

    #[test]
    fn test_ray_getters() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z);

        assert_eq!(ray.origin(), ray.origin);
        assert_eq!(ray.direction(), ray.direction);
    }
}
