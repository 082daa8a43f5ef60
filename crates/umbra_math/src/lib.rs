//! Double-precision math types for the Umbra path tracer.

// Re-export glam's f64 vector as the working vector type
pub use glam::DVec3 as Vec3;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::VecExt;

/// Limit below which a quantity is treated as zero.
///
/// Used for self-intersection offsets, parallel-ray rejection and
/// normalization guards throughout the renderer.
pub const EPSILON: f64 = 1e-5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);

        let mut acc = Vec3::ZERO;
        acc += a;
        acc += b;
        assert_eq!(acc, a + b);
    }
}
