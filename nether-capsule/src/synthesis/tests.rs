//! Tests for vertex, texture coordinate and normal synthesis

use glam::Vec3;

use super::synthesize;
use crate::layout::Layout;
use crate::profile::EquatorV;
use crate::{CapsuleParams, GeometryData, UvProfile, generate};

const EPSILON: f32 = 1e-5;

fn capsule(longitudes: i32, latitudes: i32, rings: i32, uv_profile: UvProfile) -> GeometryData {
    generate(&CapsuleParams {
        longitudes,
        latitudes,
        rings,
        depth: 1.0,
        radius: 0.5,
        uv_profile,
    })
    .unwrap()
}

fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

#[test]
fn test_deterministic() {
    let params = CapsuleParams {
        longitudes: 17,
        latitudes: 10,
        rings: 3,
        depth: 2.5,
        radius: 0.8,
        uv_profile: UvProfile::Uniform,
    }
    .normalize();
    let layout = Layout::plan(&params).unwrap();
    let equator_v = EquatorV::for_params(&params);

    let first = synthesize(&params, &layout, equator_v);
    let second = synthesize(&params, &layout, equator_v);
    assert_eq!(first.positions, second.positions);
    assert_eq!(first.uvs, second.uvs);
    assert_eq!(first.normals, second.normals);
}

#[test]
fn test_minimal_capsule() {
    let data = capsule(4, 4, 0, UvProfile::Aspect);
    assert_eq!(data.positions().len(), 18);
    assert_eq!(data.faces().len(), 20);
    assert_eq!(data.positions()[0], Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(data.positions()[17], Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(data.normals()[0], Vec3::Z);
    assert_eq!(data.normals()[data.layout().vn_south_pole], Vec3::NEG_Z);
}

#[test]
fn test_equator_normals_radial() {
    let data = capsule(7, 6, 1, UvProfile::Fixed);
    let layout = *data.layout();

    for j in 0..7 {
        let n = data.normals()[layout.vn_equator + j];
        let theta = j as f32 * std::f32::consts::TAU / 7.0;
        assert_eq!(n.z, 0.0);
        assert!((n.length() - 1.0).abs() < EPSILON);
        assert!(approx_eq(n, Vec3::new(theta.cos(), theta.sin(), 0.0)));
    }
}

#[test]
fn test_equator_positions() {
    let data = capsule(6, 8, 0, UvProfile::Aspect);
    let layout = *data.layout();

    for j in 0..6 {
        let north = data.positions()[layout.v_north_equator + j];
        let south = data.positions()[layout.v_south_equator + j];
        assert_eq!(north.z, 0.5);
        assert_eq!(south.z, -0.5);
        assert_eq!(north.truncate(), south.truncate());
        assert!((north.truncate().length() - 0.5).abs() < EPSILON);
    }
}

#[test]
fn test_normals_unit_length() {
    for (lons, lats, rings) in [(3, 2, 0), (5, 6, 2), (32, 16, 0)] {
        let data = capsule(lons, lats, rings, UvProfile::Aspect);
        for (i, n) in data.normals().iter().enumerate() {
            assert!((n.length() - 1.0).abs() < EPSILON, "normal {i} = {n}");
        }
    }
}

#[test]
fn test_hemisphere_rows_on_spheres() {
    let data = capsule(9, 12, 1, UvProfile::Aspect);
    let layout = *data.layout();
    let north_center = Vec3::new(0.0, 0.0, 0.5);
    let south_center = Vec3::new(0.0, 0.0, -0.5);

    for p in &data.positions()[layout.north_band_positions()] {
        assert!(((*p - north_center).length() - 0.5).abs() < EPSILON);
        assert!(p.z > 0.5);
    }
    for p in &data.positions()[layout.south_band_positions()] {
        assert!(((*p - south_center).length() - 0.5).abs() < EPSILON);
        assert!(p.z < -0.5);
    }
}

#[test]
fn test_hemisphere_normals_match_positions() {
    let data = capsule(8, 10, 0, UvProfile::Aspect);
    let layout = *data.layout();
    let north = layout.north_band_positions();
    let south = layout.south_band_positions();

    for (k, i) in north.enumerate() {
        let expected = (data.positions()[i] - Vec3::new(0.0, 0.0, 0.5)) / 0.5;
        assert!(approx_eq(data.normals()[layout.vn_north_hemisphere + k], expected));
    }
    for (k, i) in south.enumerate() {
        let expected = (data.positions()[i] - Vec3::new(0.0, 0.0, -0.5)) / 0.5;
        assert!(approx_eq(data.normals()[layout.vn_south_hemisphere + k], expected));
    }
}

#[test]
fn test_cylinder_rings_interpolate() {
    let data = capsule(4, 4, 2, UvProfile::Aspect);
    let layout = *data.layout();
    assert_eq!(layout.cylinder_strips(), 3);

    for j in 0..4 {
        let first = data.positions()[layout.v_cylinder + j];
        let second = data.positions()[layout.v_cylinder + 4 + j];
        let equator = data.positions()[layout.v_north_equator + j];

        assert!((first.z - 1.0 / 6.0).abs() < EPSILON);
        assert!((second.z + 1.0 / 6.0).abs() < EPSILON);
        assert!((first.truncate() - equator.truncate()).length() < EPSILON);
    }
}

#[test]
fn test_fixed_profile_equator_uvs() {
    let data = capsule(4, 4, 0, UvProfile::Fixed);
    let layout = *data.layout();

    for j in 0..=4 {
        let north = data.uvs()[layout.vt_north_equator + j];
        let south = data.uvs()[layout.vt_south_equator + j];
        assert!((north.y - 2.0 / 3.0).abs() < EPSILON);
        assert!((south.y - 1.0 / 3.0).abs() < EPSILON);
        assert!((north.x - j as f32 / 4.0).abs() < EPSILON);
    }
}

#[test]
fn test_aspect_profile_equator_uvs() {
    let data = capsule(4, 4, 0, UvProfile::Aspect);
    let layout = *data.layout();
    assert!((data.uvs()[layout.vt_north_equator].y - 0.75).abs() < EPSILON);
    assert!((data.uvs()[layout.vt_south_equator].y - 0.25).abs() < EPSILON);
}

#[test]
fn test_polar_uvs_offset_half_column() {
    let data = capsule(4, 4, 0, UvProfile::Aspect);
    let layout = *data.layout();

    for j in 0..4 {
        let expected_u = (j as f32 + 0.5) / 4.0;
        let north = data.uvs()[j];
        let south = data.uvs()[layout.vt_south_polar + j];
        assert!((north.x - expected_u).abs() < EPSILON);
        assert!((south.x - expected_u).abs() < EPSILON);
        assert_eq!(north.y, 1.0);
        assert_eq!(south.y, 0.0);
    }
}

#[test]
fn test_hemisphere_row_v_values() {
    for profile in UvProfile::ALL {
        let data = capsule(5, 10, 1, profile);
        let layout = *data.layout();
        let equator_v = EquatorV::for_params(data.params());
        let half = layout.half_latitudes as f32;

        for k in 0..layout.hemisphere_rows() {
            let t = (k + 1) as f32 / half;
            let north_v = 1.0 + t * (equator_v.north - 1.0);
            let south_v = equator_v.south * (1.0 - t);

            for j in 0..=5 {
                let north = data.uvs()[layout.vt_north_hemisphere + k * 6 + j];
                let south = data.uvs()[layout.vt_south_hemisphere + k * 6 + j];
                assert!((north.y - north_v).abs() < EPSILON, "{profile} north row {k}: {north}");
                assert!((south.y - south_v).abs() < EPSILON, "{profile} south row {k}: {south}");
            }
        }
    }
}

#[test]
fn test_cylinder_ring_v_values() {
    let data = capsule(4, 4, 2, UvProfile::Aspect);
    let layout = *data.layout();

    // Aspect with depth 1 and radius 0.5: equators at 0.75 and 0.25
    let expected = [0.75 - 0.5 / 3.0, 0.75 - 1.0 / 3.0];
    for (m, v) in expected.into_iter().enumerate() {
        for j in 0..=4 {
            let uv = data.uvs()[layout.vt_cylinder + m * 5 + j];
            assert!((uv.y - v).abs() < EPSILON, "ring {m}: {uv}");
            assert!((uv.x - j as f32 / 4.0).abs() < EPSILON);
        }
    }
}

#[test]
fn test_uvs_in_unit_square_and_descending() {
    let data = capsule(6, 8, 3, UvProfile::Uniform);
    let layout = *data.layout();

    for uv in data.uvs() {
        assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y), "{uv}");
    }

    // Column 0 of every row from the north cap down to the south cap
    let mut rows = vec![];
    for i in 0..layout.hemisphere_rows() {
        rows.push(layout.vt_north_hemisphere + i * 7);
    }
    rows.push(layout.vt_north_equator);
    for m in 0..layout.rings {
        rows.push(layout.vt_cylinder + m * 7);
    }
    rows.push(layout.vt_south_equator);
    for i in 0..layout.hemisphere_rows() {
        rows.push(layout.vt_south_hemisphere + i * 7);
    }
    for pair in rows.windows(2) {
        assert!(data.uvs()[pair[0]].y > data.uvs()[pair[1]].y);
    }
}

#[test]
fn test_outward_winding() {
    for (lons, lats, rings) in [(3, 2, 0), (4, 4, 0), (12, 8, 2), (5, 14, 1)] {
        let data = capsule(lons, lats, rings, UvProfile::Aspect);
        let half_depth = data.params().depth * 0.5;

        for (k, face) in data.faces().iter().enumerate() {
            let p: Vec<Vec3> = face
                .position_indices()
                .iter()
                .map(|&i| data.positions()[i as usize])
                .collect();
            let normal = if face.is_triangle() {
                (p[1] - p[0]).cross(p[2] - p[0])
            } else {
                (p[2] - p[0]).cross(p[3] - p[1])
            };

            let centroid = p.iter().copied().sum::<Vec3>() / p.len() as f32;
            let axis_point = Vec3::new(0.0, 0.0, centroid.z.clamp(-half_depth, half_depth));
            assert!(
                normal.dot(centroid - axis_point) > 0.0,
                "face {k} winds inward ({lons}, {lats}, {rings})"
            );
        }
    }
}

#[test]
fn test_smallest_capsule_bounds() {
    let data = capsule(3, 2, 0, UvProfile::Fixed);
    let layout = *data.layout();
    assert_eq!(layout.hemisphere_rows(), 0);
    assert_eq!(data.positions().len(), 8);
    assert_eq!(data.faces().len(), 9);

    for face in data.faces() {
        for corner in face.corners() {
            assert!((corner.position as usize) < data.positions().len());
            assert!((corner.uv as usize) < data.uvs().len());
            assert!((corner.normal as usize) < data.normals().len());
        }
    }
}
