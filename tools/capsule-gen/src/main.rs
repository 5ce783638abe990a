//! capsule-gen - Generate UV capsule meshes
//!
//! # Usage
//!
//! ```bash
//! # Default capsule as OBJ on stdout
//! capsule-gen > capsule.obj
//!
//! # Tall capsule with three middle rings and flat shading
//! capsule-gen --depth 3 --rings 3 --shading flat -o tall.obj
//!
//! # Start from a preset, override one value, write JSON
//! capsule-gen --config capsule.toml --longitudes 48 --format json -o capsule.json
//! ```
//!
//! # Preset (capsule.toml)
//!
//! ```toml
//! [capsule]
//! longitudes = 32
//! latitudes = 16
//! rings = 0
//! depth = 1.0
//! radius = 0.5
//! uv_profile = "aspect"   # aspect, fixed or uniform
//!
//! [output]
//! name = "Capsule"
//! shading = "smooth"      # smooth or flat
//! format = "obj"          # obj or json
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug` for layout details), so stdout only
//! carries the mesh.

mod config;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nether_capsule::{GeometryData, generate, write_obj, write_obj_to};
use tracing::info;

use crate::config::{CapsuleConfig, OutputFormat, OutputSection, Overrides};

/// capsule-gen - Generate UV capsule meshes
#[derive(Parser)]
#[command(name = "capsule-gen")]
#[command(about = "Generate UV capsule meshes as OBJ or JSON")]
#[command(version)]
struct Cli {
    /// Path to a capsule.toml preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> Result<()> {
    // Initialize logging (stderr keeps stdout clean for mesh output)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CapsuleConfig::load(path)?,
        None => CapsuleConfig::default(),
    };
    config.apply(cli.overrides);

    let capsule = generate(&config.capsule).context("Failed to generate capsule")?;
    info!(
        "Generated {} ({} positions, {} uvs, {} normals, {} faces)",
        config.output.name,
        capsule.positions().len(),
        capsule.uvs().len(),
        capsule.normals().len(),
        capsule.faces().len()
    );

    write_output(&capsule, &config.output)
}

fn write_output(capsule: &GeometryData, output: &OutputSection) -> Result<()> {
    match (&output.path, output.format) {
        (Some(path), OutputFormat::Obj) => write_obj(capsule, path, &output.name, output.shading)
            .with_context(|| format!("Failed to write OBJ: {}", path.display())),
        (Some(path), OutputFormat::Json) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_json(capsule, BufWriter::new(file))
                .with_context(|| format!("Failed to write JSON: {}", path.display()))?;
            info!("Wrote {}", path.display());
            Ok(())
        }
        (None, OutputFormat::Obj) => {
            write_obj_to(capsule, io::stdout().lock(), &output.name, output.shading)
                .context("Failed to write OBJ to stdout")
        }
        (None, OutputFormat::Json) => {
            write_json(capsule, io::stdout().lock()).context("Failed to write JSON to stdout")
        }
    }
}

fn write_json<W: Write>(capsule: &GeometryData, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, capsule)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
