//! BRDF importance sampling for the diffuse and mirror lobes.

use crate::gen_f64;
use rand::RngCore;
use std::f64::consts::PI;
use umbra_math::{Vec3, VecExt, EPSILON};

/// A sampled outgoing direction with the density it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionSample {
    pub direction: Vec3,
    /// Probability density of `direction`. For the mirror lobe this stands
    /// in for a Dirac delta and is always 1.
    pub pdf: f64,
}

/// Sample a cosine-distributed direction in the hemisphere around `normal`.
///
/// Draws a point in the unit disk and lifts it onto the hemisphere, which
/// gives `pdf = cos(theta) / pi`.
pub fn sample_diffuse(normal: Vec3, _in_dir: Vec3, rng: &mut dyn RngCore) -> DirectionSample {
    let (tangent, bitangent) = tangent_frame(normal);

    let p = random_in_unit_disk(rng);
    let z = (1.0 - p.x * p.x - p.y * p.y).max(0.0).sqrt();

    DirectionSample {
        direction: normal * z + tangent * p.x + bitangent * p.y,
        pdf: z / PI,
    }
}

/// Perfect specular reflection of `in_dir` about `normal`.
pub fn sample_mirror(normal: Vec3, in_dir: Vec3) -> DirectionSample {
    DirectionSample {
        direction: reflect(in_dir, normal),
        pdf: 1.0,
    }
}

/// Reflect a vector about a normal.
#[inline]
pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * n.dot(v))
}

/// Build two unit vectors spanning the plane perpendicular to `normal`.
fn tangent_frame(normal: Vec3) -> (Vec3, Vec3) {
    let mut tangent = normal.cross(Vec3::X);
    if tangent.length() < EPSILON {
        // normal is parallel to X
        tangent = normal.cross(Vec3::Z);
    }
    let tangent = tangent.normalize_guarded();
    let bitangent = normal.cross(tangent);
    (tangent, bitangent)
}

/// Rejection-sample a point in the unit disk (z = 0).
fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f64(rng) * 2.0 - 1.0, gen_f64(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_diffuse_samples_in_hemisphere() {
        let mut rng = StdRng::seed_from_u64(7);
        let normal = Vec3::new(0.3, 0.9, -0.2).normalize();

        for _ in 0..1000 {
            let s = sample_diffuse(normal, -normal, &mut rng);
            let cos = s.direction.dot(normal);

            assert!(cos >= -1e-9, "sample below the surface: cos={}", cos);
            assert!((s.direction.length() - 1.0).abs() < 1e-4);
            assert!((s.pdf - cos / PI).abs() < 1e-4);
        }
    }

    #[test]
    fn test_diffuse_mean_cosine() {
        // E[cos] under the cosine-weighted density is 2/3
        let mut rng = StdRng::seed_from_u64(11);
        let n = 20_000;
        let mean = (0..n)
            .map(|_| sample_diffuse(Vec3::Y, -Vec3::Y, &mut rng).direction.y)
            .sum::<f64>()
            / n as f64;

        assert!((mean - 2.0 / 3.0).abs() < 0.02, "mean cos = {}", mean);
    }

    #[test]
    fn test_tangent_frame_fallback() {
        // N parallel to the first trial axis must use the second one
        for normal in [Vec3::X, -Vec3::X] {
            let (t, b) = tangent_frame(normal);
            assert!((t.length() - 1.0).abs() < 1e-4);
            assert!((b.length() - 1.0).abs() < 1e-4);
            assert!(t.dot(normal).abs() < 1e-9);
            assert!(b.dot(normal).abs() < 1e-9);
            assert!(t.dot(b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mirror_reflection() {
        let in_dir = Vec3::new(1.0, -1.0, 0.0).normalize();
        let s = sample_mirror(Vec3::Y, in_dir);

        assert_eq!(s.pdf, 1.0);
        assert!((s.direction - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-12);
    }

    #[test]
    fn test_random_in_unit_disk() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = random_in_unit_disk(&mut rng);
            assert!(p.length_squared() <= 1.0);
            assert_eq!(p.z, 0.0);
        }
    }
}
