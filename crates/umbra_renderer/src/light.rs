//! Point light source.

use crate::Color;
use std::f64::consts::PI;
use umbra_math::{Vec3, VecExt, EPSILON};

/// An isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Radiant power per channel
    pub power: Color,
}

impl PointLight {
    pub fn new(position: Vec3, power: Color) -> Self {
        Self { position, power }
    }

    /// Distance from `point` to the light.
    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f64 {
        (self.position - point).length()
    }

    /// Unit direction from `point` towards the light.
    #[inline]
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize_guarded()
    }

    /// Irradiance arriving at `point`: power / (4 pi d^2).
    ///
    /// d^2 is floored at `EPSILON` so a point on the light stays finite.
    pub fn irradiance_at(&self, point: Vec3) -> Color {
        let distance2 = (self.position - point).length_squared().max(EPSILON);
        self.power / (4.0 * PI * distance2)
    }
}
