//! magma CLI - builds the magma ball and fire shell meshes headlessly
//!
//! Loads demo settings, builds both cube meshes and reports their layout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Mat4, Vec3};

use magma_core::{CubeMesh, DemoSettings, MagmaScene};
use magma_renderer::{EffectUniforms, FrameInputs, RendererConfig};

#[derive(Parser)]
#[command(name = "magma")]
#[command(about = "Build the subdivided cube meshes of the magma demo", long_about = None)]
struct Cli {
    /// Settings file (RON); defaults are used when omitted
    settings: Option<PathBuf>,

    /// Override the ball size
    #[arg(long, allow_negative_numbers = true)]
    size: Option<f32>,

    /// Override the subdivision level
    #[arg(short, long, allow_negative_numbers = true)]
    subdivisions: Option<i32>,

    /// Center of both meshes
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    center: Option<Vec<f32>>,

    /// Write the effective settings to this file and exit
    #[arg(long)]
    write_defaults: Option<PathBuf>,
}

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "magma=info,magma_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = effective_settings(&cli)?;

    if let Some(path) = &cli.write_defaults {
        return write_settings(&settings, path);
    }

    let center = match cli.center.as_deref() {
        Some(&[x, y, z]) => Vec3::new(x, y, z),
        _ => Vec3::ZERO,
    };

    tracing::info!(
        "Building magma scene: size={}, tessellations={}",
        settings.magma.size,
        settings.tessellations
    );
    let scene = MagmaScene::from_settings(center, &settings).context("Failed to build meshes")?;

    print_cube("Magma ball", scene.ball());
    print_cube("Fire shell", scene.shell());

    let renderer_config = RendererConfig::default();
    let frame = FrameInputs {
        model: Mat4::IDENTITY,
        view_proj: renderer_config.camera.view_proj(1.0),
        ..FrameInputs::default()
    };
    let uniforms = EffectUniforms::from_settings(&settings, &frame)?;
    println!(
        "Effect uniforms: {} bytes, base color {:?}",
        std::mem::size_of_val(&uniforms),
        uniforms.color
    );

    Ok(())
}

/// Settings file or defaults, with command line overrides applied
fn effective_settings(cli: &Cli) -> Result<DemoSettings> {
    let mut settings = match &cli.settings {
        Some(path) => DemoSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => DemoSettings::default(),
    };
    if let Some(size) = cli.size {
        settings.magma.size = size;
    }
    if let Some(subdivisions) = cli.subdivisions {
        settings.tessellations = subdivisions;
    }
    settings.validate_mesh().context("Invalid mesh parameters")?;
    settings.clamp_to_ranges();
    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

fn write_settings(settings: &DemoSettings, path: &Path) -> Result<()> {
    settings
        .save(path)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    println!("Wrote settings to {}", path.display());
    Ok(())
}

fn print_cube(label: &str, cube: &CubeMesh) {
    let Some(data) = cube.data() else {
        println!("{label}: not built");
        return;
    };
    let (min, max) = data.bounds();
    println!("{label}:");
    println!("  Center: {:?}", cube.center().to_array());
    println!("  Size: {}", cube.size());
    println!("  Subdivisions: {}", cube.subdivisions());
    println!("  Vertices: {}", data.vertex_count());
    println!("  Triangles: {}", data.triangle_count());
    println!("  Indices: {}", data.index_count());
    println!("  Arena: {} bytes", data.as_bytes().len());
    println!("  Bounds: {:?} .. {:?}", min, max);
}
