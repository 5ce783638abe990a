//! Middle cylinder rings, interpolated between the two equators
//!
//! No normals are written here; cylinder quads reuse the radial equator row.

use glam::Vec2;

use super::{AngleCache, Buffers};
use crate::layout::Layout;
use crate::profile::EquatorV;

pub(super) fn fill_cylinder(
    layout: &Layout,
    equator_v: EquatorV,
    cache: &AngleCache,
    buffers: &mut Buffers,
) {
    let lons = layout.longitudes;
    let strips = layout.cylinder_strips();

    // m runs 1..=rings, so fac never reaches 0 or 1 and the equators stay put
    let to_fac = 1.0 / strips as f32;
    let mut v_offset = layout.v_cylinder;
    let mut vt_offset = layout.vt_cylinder;

    for m in 1..strips {
        let fac = m as f32 * to_fac;
        let cmpl_fac = 1.0 - fac;
        let t_tex = cmpl_fac * equator_v.north + fac * equator_v.south;

        for j in 0..lons {
            let north = buffers.positions[layout.v_north_equator + j];
            let south = buffers.positions[layout.v_south_equator + j];
            buffers.positions[v_offset] = north * cmpl_fac + south * fac;
            v_offset += 1;
        }

        for &s in &cache.s_tex {
            buffers.uvs[vt_offset] = Vec2::new(s, t_tex);
            vt_offset += 1;
        }
    }
}
