//! capsule.toml preset parsing
//!
//! Every key is optional. Missing keys fall back to the built-in defaults,
//! and command line flags are layered on top with [`CapsuleConfig::apply`].

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use nether_capsule::{CapsuleParams, Shading, UvProfile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// capsule.toml preset structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CapsuleConfig {
    pub capsule: CapsuleParams,
    pub output: OutputSection,
}

/// Output settings section
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Object name written to the `o` record
    pub name: String,
    /// Smoothing group for OBJ output
    pub shading: Shading,
    pub format: OutputFormat,
    /// Destination file (stdout when unset)
    pub path: Option<PathBuf>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            name: "Capsule".to_string(),
            shading: Shading::default(),
            format: OutputFormat::default(),
            path: None,
        }
    }
}

/// Mesh output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Wavefront OBJ with separate v/vt/vn indices
    #[default]
    Obj,
    /// Multi-indexed geometry as JSON
    Json,
}

/// Command line overrides; each flag replaces the matching preset key
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Number of meridians (clamped to >= 3)
    #[arg(long, allow_negative_numbers = true)]
    pub longitudes: Option<i32>,

    /// Number of latitudes across both hemispheres (clamped to >= 2, made even)
    #[arg(long, allow_negative_numbers = true)]
    pub latitudes: Option<i32>,

    /// Number of middle cylinder rings
    #[arg(long, allow_negative_numbers = true)]
    pub rings: Option<i32>,

    /// Cylinder height
    #[arg(long, allow_negative_numbers = true)]
    pub depth: Option<f32>,

    /// Radius of the cylinder and hemispheres
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f32>,

    /// Texture layout: aspect, fixed or uniform
    #[arg(long)]
    pub uv_profile: Option<UvProfile>,

    /// Smooth or flat shading
    #[arg(long)]
    pub shading: Option<Shading>,

    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Object name in the output file
    #[arg(long)]
    pub name: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CapsuleConfig {
    /// Load preset from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read capsule preset: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid capsule preset: {}", path.display()))
    }

    /// Parse preset from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse capsule.toml")
    }

    /// Layer command line flags over the preset
    pub fn apply(&mut self, overrides: Overrides) {
        let capsule = &mut self.capsule;
        if let Some(longitudes) = overrides.longitudes {
            capsule.longitudes = longitudes;
        }
        if let Some(latitudes) = overrides.latitudes {
            capsule.latitudes = latitudes;
        }
        if let Some(rings) = overrides.rings {
            capsule.rings = rings;
        }
        if let Some(depth) = overrides.depth {
            capsule.depth = depth;
        }
        if let Some(radius) = overrides.radius {
            capsule.radius = radius;
        }
        if let Some(uv_profile) = overrides.uv_profile {
            capsule.uv_profile = uv_profile;
        }

        let output = &mut self.output;
        if let Some(shading) = overrides.shading {
            output.shading = shading;
        }
        if let Some(format) = overrides.format {
            output.format = format;
        }
        if let Some(name) = overrides.name {
            output.name = name;
        }
        if overrides.output.is_some() {
            output.path = overrides.output;
        }
    }
}
