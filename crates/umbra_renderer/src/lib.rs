//! Umbra Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer estimating radiance with direct point-light
//! sampling and Russian-roulette terminated diffuse/mirror bounces.

mod camera;
mod config;
mod hittable;
mod image_buffer;
mod light;
mod material;
mod plane;
mod renderer;
mod sampling;
mod scene;
mod sphere;
pub mod tga;

pub use camera::Camera;
pub use config::{ConfigError, RenderConfig};
pub use hittable::{HitRecord, Hittable, Shape};
pub use image_buffer::{ImageBuffer, OutputError};
pub use light::PointLight;
pub use material::{Color, Material};
pub use plane::Plane;
pub use renderer::{color_to_rgb, render, render_into, render_pixel, row_rng, RenderError};
pub use sampling::{sample_diffuse, sample_mirror, DirectionSample};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from umbra_math
pub use umbra_math::{Interval, Ray, Vec3, VecExt, EPSILON};

use rand::{Rng, RngCore};

/// Draw a uniform f64 in [0, 1).
#[inline]
pub(crate) fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}
