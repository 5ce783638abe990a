//! Capsule parameters and their normalization
//!
//! [`CapsuleParams`] holds whatever the caller (UI field, TOML preset, CLI
//! flag) supplied. [`CapsuleParams::normalize`] clamps it into a
//! [`GeometryParameters`] the generator can always work with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CapsuleError;
use crate::{
    DEFAULT_DEPTH, DEFAULT_LATITUDES, DEFAULT_LONGITUDES, DEFAULT_RADIUS, DEFAULT_RINGS,
    MIN_DEPTH, MIN_LATITUDES, MIN_LONGITUDES, MIN_RADIUS,
};

/// How texture space is split vertically between the caps and the cylinder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UvProfile {
    /// UVs follow the ratio of cap height to total height
    #[default]
    #[serde(alias = "ASPECT", alias = "Aspect")]
    Aspect,
    /// Caps and cylinder each take a third of the texture
    #[serde(alias = "FIXED", alias = "Fixed")]
    Fixed,
    /// Every latitude and ring row gets the same texture height
    #[serde(alias = "UNIFORM", alias = "Uniform")]
    Uniform,
}

impl UvProfile {
    /// All profiles, in declaration order
    pub const ALL: [UvProfile; 3] = [UvProfile::Aspect, UvProfile::Fixed, UvProfile::Uniform];

    /// Lowercase name used in presets and on the command line
    pub fn name(self) -> &'static str {
        match self {
            UvProfile::Aspect => "aspect",
            UvProfile::Fixed => "fixed",
            UvProfile::Uniform => "uniform",
        }
    }
}

impl fmt::Display for UvProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UvProfile {
    type Err = CapsuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UvProfile::ALL
            .into_iter()
            .find(|profile| profile.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CapsuleError::UnknownVariant {
                kind: "uv profile",
                value: s.to_string(),
                expected: "aspect, fixed, uniform",
            })
    }
}

/// Raw capsule parameters, possibly out of range
///
/// Counts are signed so that values typed into a UI field or a preset
/// (including negatives) survive until normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleParams {
    /// Number of meridians around the Z axis
    pub longitudes: i32,
    /// Number of latitudes across both hemispheres
    pub latitudes: i32,
    /// Number of middle rings in the cylinder
    pub rings: i32,
    /// Cylinder height
    pub depth: f32,
    /// Cylinder and hemisphere radius
    pub radius: f32,
    /// Vertical texture coordinate distribution
    pub uv_profile: UvProfile,
}

impl Default for CapsuleParams {
    fn default() -> Self {
        Self {
            longitudes: DEFAULT_LONGITUDES,
            latitudes: DEFAULT_LATITUDES,
            rings: DEFAULT_RINGS,
            depth: DEFAULT_DEPTH,
            radius: DEFAULT_RADIUS,
            uv_profile: UvProfile::default(),
        }
    }
}

impl CapsuleParams {
    /// Clamp every field into its valid range
    ///
    /// Nothing is rejected: out of range values are raised to their minimum
    /// (NaN included) and an odd latitude count is bumped to the next even
    /// number so the capsule splits into two equal hemispheres.
    pub fn normalize(&self) -> GeometryParameters {
        let radius = clamp_real("radius", self.radius, MIN_RADIUS);
        let depth = clamp_real("depth", self.depth, MIN_DEPTH);
        let rings = clamp_count("rings", self.rings, 0);
        let longitudes = clamp_count("longitudes", self.longitudes, MIN_LONGITUDES);

        let mut latitudes = clamp_count("latitudes", self.latitudes, MIN_LATITUDES);
        if latitudes % 2 != 0 {
            warn!(
                "latitudes must be even, raising {} to {}",
                latitudes,
                latitudes + 1
            );
            latitudes += 1;
        }

        GeometryParameters {
            longitudes,
            latitudes,
            rings,
            depth,
            radius,
            uv_profile: self.uv_profile,
        }
    }
}

fn clamp_real(name: &str, value: f32, min: f32) -> f32 {
    if value.is_nan() || value < min {
        warn!("{} must be >= {}, clamping {} to {}", name, min, value, min);
        min
    } else {
        value
    }
}

fn clamp_count(name: &str, value: i32, min: u32) -> u32 {
    match u32::try_from(value) {
        Ok(count) if count >= min => count,
        _ => {
            warn!("{} must be >= {}, clamping {} to {}", name, min, value, min);
            min
        }
    }
}

/// Normalized capsule parameters
///
/// Produced by [`CapsuleParams::normalize`]. The fields are public so hosts
/// can build one directly; [`GeometryParameters::validate`] is run before
/// generation in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryParameters {
    /// Number of meridians (>= 3)
    pub longitudes: u32,
    /// Number of latitudes across both hemispheres (>= 2, even)
    pub latitudes: u32,
    /// Number of middle cylinder rings
    pub rings: u32,
    /// Cylinder height (> 0)
    pub depth: f32,
    /// Radius (> 0)
    pub radius: f32,
    /// Vertical texture coordinate distribution
    pub uv_profile: UvProfile,
}

impl GeometryParameters {
    /// Latitudes per hemisphere
    pub fn half_latitudes(&self) -> u32 {
        self.latitudes / 2
    }

    /// Check the invariants [`CapsuleParams::normalize`] guarantees
    ///
    /// # Errors
    ///
    /// Returns [`CapsuleError::InvalidParameter`] if:
    /// - longitudes < 3 or latitudes < 2 (a zero count would divide by zero
    ///   in the angular step)
    /// - latitudes is odd
    /// - depth or radius is not a finite positive number
    /// - the resulting mesh cannot be addressed with `u32` indices
    pub fn validate(&self) -> Result<(), CapsuleError> {
        if self.longitudes < MIN_LONGITUDES {
            return Err(CapsuleError::invalid(
                "longitudes",
                format!("must be at least {}, got {}", MIN_LONGITUDES, self.longitudes),
            ));
        }
        if self.latitudes < MIN_LATITUDES {
            return Err(CapsuleError::invalid(
                "latitudes",
                format!("must be at least {}, got {}", MIN_LATITUDES, self.latitudes),
            ));
        }
        if self.latitudes % 2 != 0 {
            return Err(CapsuleError::invalid(
                "latitudes",
                format!("must be even, got {}", self.latitudes),
            ));
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(CapsuleError::invalid(
                "depth",
                format!("must be finite and > 0, got {}", self.depth),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(CapsuleError::invalid(
                "radius",
                format!("must be finite and > 0, got {}", self.radius),
            ));
        }

        // UVs are the longest array: 2L + (L + 1)(T + R)
        let lons = u128::from(self.longitudes);
        let uv_count =
            2 * lons + (lons + 1) * (u128::from(self.latitudes) + u128::from(self.rings));
        if uv_count > u128::from(u32::MAX) {
            return Err(CapsuleError::invalid(
                "longitudes",
                format!("mesh needs {} texture coordinates, exceeding u32 indices", uv_count),
            ));
        }

        Ok(())
    }
}
