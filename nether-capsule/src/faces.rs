//! Face assembly
//!
//! Triangle fans at the poles, quad strips everywhere else. Position and
//! normal columns wrap at `L`; UV columns never wrap because every non-polar
//! UV row carries an explicit seam column `L`.

use crate::layout::Layout;
use crate::types::Face;

/// Index offsets of two adjacent rows in each array
#[derive(Clone, Copy)]
struct StripRows {
    v: (usize, usize),
    vt: (usize, usize),
    vn: (usize, usize),
}

pub(crate) fn assemble_faces(layout: &Layout) -> Vec<Face> {
    let lons = layout.longitudes;
    let lons_p1 = lons + 1;
    let mut faces = Vec::with_capacity(layout.faces);

    // North fan: apex UVs occupy the first L coordinates, the cap row follows
    for j in 0..lons {
        let j_next = (j + 1) % lons;
        faces.push(Face::triangle(
            [0, idx(1 + j), idx(1 + j_next)],
            [
                idx(j),
                idx(layout.vt_north_hemisphere + j),
                idx(layout.vt_north_hemisphere + j + 1),
            ],
            [0, idx(1 + j), idx(1 + j_next)],
        ));
    }

    for i in 0..layout.hemisphere_rows() {
        let v_curr = layout.v_north_hemisphere + i * lons;
        let vt_curr = layout.vt_north_hemisphere + i * lons_p1;
        let vn_curr = layout.vn_north_hemisphere + i * lons;
        push_strip(
            &mut faces,
            lons,
            StripRows {
                v: (v_curr, v_curr + lons),
                vt: (vt_curr, vt_curr + lons_p1),
                vn: (vn_curr, vn_curr + lons),
            },
        );
    }

    // The cylinder wall normal only depends on longitude, so both edges of
    // every strip use the equator row
    for m in 0..layout.cylinder_strips() {
        let v_curr = layout.v_north_equator + m * lons;
        let vt_curr = layout.vt_north_equator + m * lons_p1;
        push_strip(
            &mut faces,
            lons,
            StripRows {
                v: (v_curr, v_curr + lons),
                vt: (vt_curr, vt_curr + lons_p1),
                vn: (layout.vn_equator, layout.vn_equator),
            },
        );
    }

    // South strips start at the equator; its normals are the shared equator row
    for i in 0..layout.hemisphere_rows() {
        let v_curr = layout.v_south_equator + i * lons;
        let vt_curr = layout.vt_south_equator + i * lons_p1;
        let vn_curr = layout.vn_equator + i * lons;
        push_strip(
            &mut faces,
            lons,
            StripRows {
                v: (v_curr, v_curr + lons),
                vt: (vt_curr, vt_curr + lons_p1),
                vn: (vn_curr, vn_curr + lons),
            },
        );
    }

    for j in 0..lons {
        let j_next = (j + 1) % lons;
        faces.push(Face::triangle(
            [
                idx(layout.v_south_pole),
                idx(layout.v_south_cap + j_next),
                idx(layout.v_south_cap + j),
            ],
            [
                idx(layout.vt_south_polar + j),
                idx(layout.vt_south_cap + j + 1),
                idx(layout.vt_south_cap + j),
            ],
            [
                idx(layout.vn_south_pole),
                idx(layout.vn_south_cap + j_next),
                idx(layout.vn_south_cap + j),
            ],
        ));
    }

    debug_assert_eq!(faces.len(), layout.faces);
    faces
}

/// Quads `(curr[j], next[j], next[j+1], curr[j+1])` for one pair of rows
fn push_strip(faces: &mut Vec<Face>, lons: usize, rows: StripRows) {
    let StripRows { v, vt, vn } = rows;

    for j in 0..lons {
        let j_next_vt = j + 1;
        let j_next = j_next_vt % lons;

        faces.push(Face::quad(
            [
                idx(v.0 + j),
                idx(v.1 + j),
                idx(v.1 + j_next),
                idx(v.0 + j_next),
            ],
            [
                idx(vt.0 + j),
                idx(vt.1 + j),
                idx(vt.1 + j_next_vt),
                idx(vt.0 + j_next_vt),
            ],
            [
                idx(vn.0 + j),
                idx(vn.1 + j),
                idx(vn.1 + j_next),
                idx(vn.0 + j_next),
            ],
        ));
    }
}

/// Array sizes are checked against `u32` before assembly
#[inline]
fn idx(i: usize) -> u32 {
    i as u32
}
