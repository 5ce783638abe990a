//! Vertex, texture coordinate and normal synthesis
//!
//! Runs the three filling phases in order over buffers sized by the
//! [`Layout`]:
//! 1. poles and equators (also caches per-longitude trigonometry)
//! 2. hemisphere latitude rows
//! 3. middle cylinder rings (only when `rings > 0`)
//!
//! Each phase writes its own regions and never touches another's.

mod cylinder;
mod equator;
mod hemisphere;

#[cfg(test)]
mod tests;

use glam::{Vec2, Vec3};
use tracing::trace;

use crate::layout::Layout;
use crate::params::GeometryParameters;
use crate::profile::EquatorV;

/// Output arrays being filled
pub(crate) struct Buffers {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
}

impl Buffers {
    fn new(layout: &Layout) -> Self {
        Self {
            positions: vec![Vec3::ZERO; layout.positions],
            uvs: vec![Vec2::splat(0.5); layout.uvs],
            normals: vec![Vec3::Z; layout.normals],
        }
    }
}

/// Per-longitude values shared by every latitude row
pub(crate) struct AngleCache {
    /// `(sin θ, cos θ)` for each of the `L` longitudes
    pub sin_cos_theta: Vec<(f32, f32)>,
    /// Horizontal texture coordinate for each of the `L + 1` UV columns
    pub s_tex: Vec<f32>,
}

/// Fill positions, texture coordinates and normals for a planned layout
pub(crate) fn synthesize(
    params: &GeometryParameters,
    layout: &Layout,
    equator_v: EquatorV,
) -> Buffers {
    let mut buffers = Buffers::new(layout);

    let cache = equator::fill_poles_and_equators(params, layout, equator_v, &mut buffers);
    trace!("filled poles and equators");

    hemisphere::fill_hemispheres(params, layout, equator_v, &cache, &mut buffers);
    trace!("filled {} rows per hemisphere", layout.hemisphere_rows());

    if layout.has_middle_rings() {
        cylinder::fill_cylinder(layout, equator_v, &cache, &mut buffers);
        trace!("filled {} cylinder rings", layout.rings);
    }

    buffers
}
