//! Interior latitude rows of both hemispheres
//!
//! Row `i` of the north hemisphere (counted from the pole) mirrors row `i` of
//! the south hemisphere (counted from the equator): with `φ = i·π/T`,
//! `sin φ_N = -cos φ` and `cos φ_N = sin φ`. One `sin_cos` call per latitude
//! serves both rows.

use std::f32::consts::PI;
use std::ops::Range;

use glam::{Vec2, Vec3};

use super::{AngleCache, Buffers};
use crate::layout::Layout;
use crate::params::GeometryParameters;
use crate::profile::EquatorV;

/// Output rows for one latitude index, north and south
struct BandRows<'a> {
    latitude: usize,
    north_positions: &'a mut [Vec3],
    south_positions: &'a mut [Vec3],
    north_normals: &'a mut [Vec3],
    south_normals: &'a mut [Vec3],
    north_uvs: &'a mut [Vec2],
    south_uvs: &'a mut [Vec2],
}

/// Values shared by every latitude row
struct BandContext<'a> {
    radius: f32,
    half_depth: f32,
    to_phi: f32,
    to_tex_vertical: f32,
    equator_v: EquatorV,
    cache: &'a AngleCache,
}

pub(super) fn fill_hemispheres(
    params: &GeometryParameters,
    layout: &Layout,
    equator_v: EquatorV,
    cache: &AngleCache,
    buffers: &mut Buffers,
) {
    if layout.hemisphere_rows() == 0 {
        return;
    }

    let ctx = BandContext {
        radius: params.radius,
        half_depth: params.depth * 0.5,
        to_phi: PI / params.latitudes as f32,
        to_tex_vertical: 1.0 / layout.half_latitudes as f32,
        equator_v,
        cache,
    };

    let rows = split_rows(layout, buffers);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        rows.into_par_iter().for_each(|band| fill_band(band, &ctx));
    }

    #[cfg(not(feature = "parallel"))]
    rows.into_iter().for_each(|band| fill_band(band, &ctx));
}

/// Carve the hemisphere regions into disjoint per-latitude rows
fn split_rows<'a>(layout: &Layout, buffers: &'a mut Buffers) -> Vec<BandRows<'a>> {
    let lons = layout.longitudes;

    let (north_positions, south_positions) = disjoint_regions(
        &mut buffers.positions,
        layout.north_band_positions(),
        layout.south_band_positions(),
    );
    let (north_normals, south_normals) = disjoint_regions(
        &mut buffers.normals,
        layout.north_band_normals(),
        layout.south_band_normals(),
    );
    let (north_uvs, south_uvs) = disjoint_regions(
        &mut buffers.uvs,
        layout.north_band_uvs(),
        layout.south_band_uvs(),
    );

    let north = north_positions
        .chunks_exact_mut(lons)
        .zip(north_normals.chunks_exact_mut(lons))
        .zip(north_uvs.chunks_exact_mut(lons + 1));
    let south = south_positions
        .chunks_exact_mut(lons)
        .zip(south_normals.chunks_exact_mut(lons))
        .zip(south_uvs.chunks_exact_mut(lons + 1));

    north
        .zip(south)
        .enumerate()
        .map(|(k, (north, south))| {
            let ((north_positions, north_normals), north_uvs) = north;
            let ((south_positions, south_normals), south_uvs) = south;
            BandRows {
                latitude: k + 1,
                north_positions,
                south_positions,
                north_normals,
                south_normals,
                north_uvs,
                south_uvs,
            }
        })
        .collect()
}

/// Borrow two non-overlapping ranges of one buffer, `first` before `second`
fn disjoint_regions<T>(
    buffer: &mut [T],
    first: Range<usize>,
    second: Range<usize>,
) -> (&mut [T], &mut [T]) {
    debug_assert!(first.end <= second.start);
    let (head, tail) = buffer.split_at_mut(second.start);
    (&mut head[first], &mut tail[..second.len()])
}

fn fill_band(band: BandRows<'_>, ctx: &BandContext<'_>) {
    let phi = band.latitude as f32 * ctx.to_phi;

    let (sin_phi_south, cos_phi_south) = phi.sin_cos();
    let sin_phi_north = -cos_phi_south;
    let cos_phi_north = sin_phi_south;

    let rho_cos_phi_north = ctx.radius * cos_phi_north;
    let offset_z_north = ctx.half_depth - ctx.radius * sin_phi_north;

    let rho_cos_phi_south = ctx.radius * cos_phi_south;
    let offset_z_south = -ctx.half_depth - ctx.radius * sin_phi_south;

    for (j, &(sin_theta, cos_theta)) in ctx.cache.sin_cos_theta.iter().enumerate() {
        band.north_positions[j] = Vec3::new(
            rho_cos_phi_north * cos_theta,
            rho_cos_phi_north * sin_theta,
            offset_z_north,
        );
        band.south_positions[j] = Vec3::new(
            rho_cos_phi_south * cos_theta,
            rho_cos_phi_south * sin_theta,
            offset_z_south,
        );

        band.north_normals[j] = Vec3::new(
            cos_phi_north * cos_theta,
            cos_phi_north * sin_theta,
            -sin_phi_north,
        );
        band.south_normals[j] = Vec3::new(
            cos_phi_south * cos_theta,
            cos_phi_south * sin_theta,
            -sin_phi_south,
        );
    }

    let t = band.latitude as f32 * ctx.to_tex_vertical;
    let t_tex_north = (1.0 - t) + t * ctx.equator_v.north;
    let t_tex_south = ctx.equator_v.south * (1.0 - t);

    for (j, &s) in ctx.cache.s_tex.iter().enumerate() {
        band.north_uvs[j] = Vec2::new(s, t_tex_north);
        band.south_uvs[j] = Vec2::new(s, t_tex_south);
    }
}
