//! Render a built-in scene to a PNG file.
//!
//! Usage: glint [--serial] [scene] [output.png] [config.json]

mod scenes;

use anyhow::{Context, Result};
use glint_renderer::{render, render_parallel, RenderConfig};
use std::path::Path;
use std::time::Instant;

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: RenderConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn print_usage() {
    println!("Usage: glint [--serial] [scene] [output.png] [config.json]");
    println!("\nScenes: {}", scenes::SCENE_NAMES.join(", "));
    println!("\nExamples:");
    println!("  glint showcase showcase.png");
    println!("  glint pyramid pyramid.png render.json");
    println!("\nLogging is controlled with RUST_LOG (default: info).");
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut serial = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--serial" => serial = true,
            _ => positional.push(arg),
        }
    }

    let scene_name = positional.first().map_or("showcase", String::as_str);
    let output = positional.get(1).map_or("output.png", String::as_str);
    let config = match positional.get(2) {
        Some(path) => load_config(Path::new(path))?,
        None => RenderConfig::default(),
    };

    let start = Instant::now();
    let scene = scenes::build(scene_name)?;
    log::info!("Built scene '{}' in {:?}", scene_name, start.elapsed());

    let image = if serial {
        render(&scene, &config)?
    } else {
        render_parallel(&scene, &config)?
    };

    image
        .save_png(output)
        .with_context(|| format!("failed to write {}", output))?;

    Ok(())
}
