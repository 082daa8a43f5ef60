//! Render the reference scene to an image file.
//!
//! Usage: `umbra [config.json]`

mod scene;

use anyhow::{Context, Result};
use std::time::Instant;
use umbra_renderer::{render, RenderConfig};

fn load_config() -> Result<RenderConfig> {
    match std::env::args_os().nth(1) {
        Some(path) => RenderConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load config {}", path.to_string_lossy())),
        None => Ok(RenderConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Starting Umbra");

    let config = load_config()?;

    let start = Instant::now();
    let scene = scene::build_reference_scene();
    log::info!("Scene built in {:?}", start.elapsed());

    let image = render(&scene, &config).context("Render failed")?;

    // The render is done; a failed write is reported but not fatal
    if let Err(e) = image.save(&config.output) {
        log::error!("Failed to save {}: {}", config.output.display(), e);
    }

    Ok(())
}
