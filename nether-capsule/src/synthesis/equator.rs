//! Poles, equators and polar texture rows

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::{AngleCache, Buffers};
use crate::layout::Layout;
use crate::params::GeometryParameters;
use crate::profile::EquatorV;

pub(super) fn fill_poles_and_equators(
    params: &GeometryParameters,
    layout: &Layout,
    equator_v: EquatorV,
    buffers: &mut Buffers,
) -> AngleCache {
    let lons = layout.longitudes;
    let half_depth = params.depth * 0.5;
    let summit = half_depth + params.radius;

    buffers.positions[0] = Vec3::new(0.0, 0.0, summit);
    buffers.positions[layout.v_south_pole] = Vec3::new(0.0, 0.0, -summit);
    buffers.normals[0] = Vec3::Z;
    buffers.normals[layout.vn_south_pole] = Vec3::NEG_Z;

    let to_theta = TAU / lons as f32;
    let to_tex_horizontal = 1.0 / lons as f32;
    let mut sin_cos_theta = Vec::with_capacity(lons);

    for j in 0..lons {
        let theta = j as f32 * to_theta;
        let (sin_theta, cos_theta) = theta.sin_cos();
        sin_cos_theta.push((sin_theta, cos_theta));

        // Fan apex UVs sit halfway between the two base UVs, hence the half
        // column offset; there is one fewer column than on the other rows
        let s_tex = (j as f32 + 0.5) * to_tex_horizontal;
        buffers.uvs[j] = Vec2::new(s_tex, 1.0);
        buffers.uvs[layout.vt_south_polar + j] = Vec2::new(s_tex, 0.0);

        let x = params.radius * cos_theta;
        let y = params.radius * sin_theta;
        buffers.positions[layout.v_north_equator + j] = Vec3::new(x, y, half_depth);
        buffers.positions[layout.v_south_equator + j] = Vec3::new(x, y, -half_depth);

        buffers.normals[layout.vn_equator + j] = Vec3::new(cos_theta, sin_theta, 0.0);
    }

    // Column L repeats column 0's angle but with s = 1 to close the seam
    let mut s_tex = Vec::with_capacity(lons + 1);
    for j in 0..=lons {
        let s = j as f32 * to_tex_horizontal;
        s_tex.push(s);
        buffers.uvs[layout.vt_north_equator + j] = Vec2::new(s, equator_v.north);
        buffers.uvs[layout.vt_south_equator + j] = Vec2::new(s, equator_v.south);
    }

    AngleCache {
        sin_cos_theta,
        s_tex,
    }
}
