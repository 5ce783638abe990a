//! Vertical texture coordinate split between caps and cylinder

use crate::params::{GeometryParameters, UvProfile};

/// Vertical texture coordinates of the two equators
///
/// The north cap spans `north..1`, the cylinder `south..north` and the south
/// cap `0..south`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorV {
    /// V coordinate of the north equator row
    pub north: f32,
    /// V coordinate of the south equator row
    pub south: f32,
}

impl EquatorV {
    /// Resolve the equator coordinates for a parameter set
    pub fn for_params(params: &GeometryParameters) -> Self {
        let south = params.uv_profile.south_equator_v(params);
        Self {
            north: 1.0 - south,
            south,
        }
    }
}

impl UvProfile {
    /// V coordinate of the south equator, always in (0, 1)
    ///
    /// - `Fixed`: one third
    /// - `Aspect`: `radius / (depth + 2 * radius)`, cap height over total height
    /// - `Uniform`: `half_latitudes / (rings + 1 + latitudes)`, one equal slot
    ///   per latitude or ring row
    pub fn south_equator_v(self, params: &GeometryParameters) -> f32 {
        match self {
            UvProfile::Fixed => 1.0 / 3.0,
            UvProfile::Aspect => {
                // f64 keeps `2 * radius` finite for radii near f32::MAX
                let radius = f64::from(params.radius);
                (radius / (f64::from(params.depth) + 2.0 * radius)) as f32
            }
            UvProfile::Uniform => {
                params.half_latitudes() as f32 / (params.rings + 1 + params.latitudes) as f32
            }
        }
    }
}
