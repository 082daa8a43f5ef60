//! Camera for ray generation.

use crate::gen_f64;
use rand::RngCore;
use umbra_math::{Ray, Vec3, VecExt};

/// Pinhole camera mapping continuous pixel coordinates to world rays.
///
/// Pixel `(0, 0)` is the bottom-left corner of the image; `y` grows
/// upwards along the camera's up vector.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    eye: Vec3,
    look_at: Vec3,
    vup: Vec3,

    /// Field of view in degrees (horizontal/vertical for square images)
    fov: f64,

    // Image plane basis, rebuilt by every builder
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a new camera with default settings, ready to use.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 600,
            image_height: 600,
            eye: Vec3::new(0.0, 0.0, 2.0),
            look_at: Vec3::ZERO,
            vup: Vec3::Y,
            fov: 70.0,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.initialize();
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, eye: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.eye = eye;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self.initialize();
        self
    }

    /// Rebuild right/up vectors spanning the image plane through `look_at`,
    /// each scaled to half the visible extent.
    fn initialize(&mut self) {
        let w = self.eye - self.look_at;
        let half_extent = w.length() * (self.fov.to_radians() / 2.0).tan();
        let aspect = self.image_width as f64 / self.image_height.max(1) as f64;

        self.right = self.vup.cross(w).normalize_guarded() * half_extent * aspect;
        self.up = w.cross(self.right).normalize_guarded() * half_extent;
    }

    /// Ray through the continuous pixel coordinate `(x, y)`.
    ///
    /// Integer parts select the pixel, fractional parts the point inside it.
    pub fn get_ray(&self, x: f64, y: f64) -> Ray {
        let sx = 2.0 * x / self.image_width as f64 - 1.0;
        let sy = 2.0 * y / self.image_height as f64 - 1.0;
        let dir = self.look_at + self.right * sx + self.up * sy - self.eye;
        Ray::new(self.eye, dir)
    }

    /// Ray through a uniformly jittered point inside pixel `(i, j)`.
    pub fn sample_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        self.get_ray(i as f64 + gen_f64(rng), j as f64 + gen_f64(rng))
    }

}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
