//! Surface reflectance description.

use umbra_math::{Vec3, VecExt};

/// Color type alias (RGB radiance or reflectance, linear).
pub type Color = Vec3;

/// A surface split into a Lambertian part and a perfect mirror part.
///
/// Each albedo is the per-channel fraction of incident light reflected by
/// that lobe. Their sum should stay at or below one per channel; this is
/// not enforced, see [`Material::is_energy_conserving`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Fraction of light reflected diffusely
    pub diffuse_albedo: Color,
    /// Fraction of light reflected like a mirror
    pub mirror_albedo: Color,
}

impl Material {
    /// Create a material from its two albedos.
    pub fn new(diffuse_albedo: Color, mirror_albedo: Color) -> Self {
        Self {
            diffuse_albedo,
            mirror_albedo,
        }
    }

    /// A purely diffuse material.
    pub fn diffuse(albedo: Color) -> Self {
        Self::new(albedo, Color::ZERO)
    }

    /// A purely specular material.
    pub fn mirror(albedo: Color) -> Self {
        Self::new(Color::ZERO, albedo)
    }

    /// Probability of continuing a path with a diffuse bounce.
    #[inline]
    pub fn diffuse_select_prob(&self) -> f64 {
        self.diffuse_albedo.average()
    }

    /// Probability of continuing a path with a mirror bounce.
    #[inline]
    pub fn mirror_select_prob(&self) -> f64 {
        self.mirror_albedo.average()
    }

    /// True if no channel reflects more than it receives.
    pub fn is_energy_conserving(&self) -> bool {
        let total = self.diffuse_albedo + self.mirror_albedo;
        self.diffuse_albedo.min_element() >= 0.0
            && self.mirror_albedo.min_element() >= 0.0
            && total.max_element() <= 1.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}
