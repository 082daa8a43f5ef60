//! Per-pixel sampling loop and parallel image rendering.
//!
//! Rows are rendered in parallel with rayon. Each row draws from its own
//! `StdRng` seeded from the config seed and the row index, so a given seed
//! reproduces the same image no matter how rows are scheduled.

use crate::{Camera, Color, ConfigError, ImageBuffer, RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use thiserror::Error;
use umbra_math::Interval;

/// Convert a linear color to 8-bit RGB.
///
/// Channels are clamped to [0, 1] and rounded to the nearest step.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let to_byte = |c: f64| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Generator for row `y` of a render seeded with `seed`.
pub fn row_rng(seed: u64, y: u32) -> StdRng {
    StdRng::seed_from_u64(splitmix64(seed ^ splitmix64(y as u64)))
}

/// SplitMix64 finalizer, spreads nearby inputs across the seed space.
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Errors that can occur before any pixel is traced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Image buffer is {actual_width}x{actual_height}, config asks for {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Average `samples_per_pixel` jittered rays of `camera` through pixel `(x, y)`.
///
/// Zero samples yield black.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel == 0 {
        return Color::ZERO;
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let ray = camera.sample_ray(x, y, rng);
        pixel_color += scene.trace(&ray, 0, config, rng);
    }

    pixel_color / config.samples_per_pixel as f64
}

/// Render the scene into a caller-owned buffer.
///
/// The buffer must be `config.width` x `config.height`. The scene camera is
/// framed to that resolution.
pub fn render_into(
    scene: &Scene,
    config: &RenderConfig,
    image: &mut ImageBuffer,
) -> Result<(), RenderError> {
    config.validate()?;
    if (image.width, image.height) != (config.width, config.height) {
        return Err(RenderError::SizeMismatch {
            width: config.width,
            height: config.height,
            actual_width: image.width,
            actual_height: image.height,
        });
    }

    let camera = scene
        .camera()
        .clone()
        .with_resolution(config.width, config.height);

    log::info!(
        "Rendering {}x{} @ {} spp (max depth {}, {} objects, {} lights)",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        scene.objects().len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let rows_done = AtomicUsize::new(0);
    let width = config.width as usize;
    let height = config.height as usize;
    let report_every = (height / 10).max(1);

    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let mut rng = row_rng(config.seed, y);
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(scene, &camera, config, x as u32, y, &mut rng);
            }

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("Scanline {} done", y);
            if done % report_every == 0 || done == height {
                log::info!("{}/{} rows ({:.0}%)", done, height, 100.0 * done as f64 / height as f64);
            }
        });

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Render the entire scene to a new `config.width` x `config.height` buffer.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, RenderError> {
    config.validate()?;
    let mut image = ImageBuffer::new(config.width, config.height);
    render_into(scene, config, &mut image)?;
    Ok(image)
}
