//! Closed-form array layout of a capsule mesh
//!
//! Every region of the position, UV and normal arrays (and of the face list)
//! starts at an offset that follows from the parameters alone. The offsets
//! are computed once here and then threaded through the synthesis phases.
//!
//! With `L` longitudes, `H` latitudes per hemisphere and `R` middle rings:
//!
//! ```text
//! positions: pole | (H-1) north rows | N equator | R rings | S equator | (H-1) south rows | pole
//!            1      L each             L           L each    L           L each             1
//! uvs:       N polar row | (H-1) rows | N equator | R rings | S equator | (H-1) rows | S polar row
//!            L             L+1 each     L+1         L+1 each  L+1         L+1 each     L
//! normals:   pole | (H-1) north rows | equator | (H-1) south rows | pole
//! ```
//!
//! The hemisphere row nearest each pole is the cap ring. With `H == 1` there
//! are no hemisphere rows and the pole fans attach to the equators directly.

use std::ops::Range;

use crate::error::CapsuleError;
use crate::params::GeometryParameters;

/// Region offsets and totals for one parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Longitudes (`L`)
    pub longitudes: usize,
    /// Latitudes per hemisphere (`H`)
    pub half_latitudes: usize,
    /// Middle cylinder rings (`R`)
    pub rings: usize,

    /// First north hemisphere row (the north cap ring)
    pub v_north_hemisphere: usize,
    /// North equator row
    pub v_north_equator: usize,
    /// First middle cylinder ring
    pub v_cylinder: usize,
    /// South equator row
    pub v_south_equator: usize,
    /// First south hemisphere row
    pub v_south_hemisphere: usize,
    /// South cap ring (row next to the south pole)
    pub v_south_cap: usize,
    /// South pole
    pub v_south_pole: usize,
    /// Total positions
    pub positions: usize,

    /// First north hemisphere row (the north cap row)
    pub vt_north_hemisphere: usize,
    /// North equator row
    pub vt_north_equator: usize,
    /// First middle cylinder row
    pub vt_cylinder: usize,
    /// South equator row
    pub vt_south_equator: usize,
    /// First south hemisphere row
    pub vt_south_hemisphere: usize,
    /// South cap row (row next to the south polar row)
    pub vt_south_cap: usize,
    /// South polar row (`L` apex coordinates)
    pub vt_south_polar: usize,
    /// Total texture coordinates
    pub uvs: usize,

    /// First north hemisphere row
    pub vn_north_hemisphere: usize,
    /// Shared radial equator row
    pub vn_equator: usize,
    /// First south hemisphere row
    pub vn_south_hemisphere: usize,
    /// South cap ring
    pub vn_south_cap: usize,
    /// South pole
    pub vn_south_pole: usize,
    /// Total normals
    pub normals: usize,

    /// First north hemisphere quad
    pub f_north_hemisphere: usize,
    /// First cylinder quad
    pub f_cylinder: usize,
    /// First south hemisphere quad
    pub f_south_hemisphere: usize,
    /// First south fan triangle
    pub f_south_fan: usize,
    /// Total faces
    pub faces: usize,
}

impl Layout {
    /// Plan the layout for a parameter set
    ///
    /// # Errors
    ///
    /// Returns [`CapsuleError::InvalidParameter`] if `params` fails
    /// [`GeometryParameters::validate`] (e.g. zero latitudes).
    pub fn plan(params: &GeometryParameters) -> Result<Self, CapsuleError> {
        params.validate()?;

        let lons = params.longitudes as usize;
        let lons_p1 = lons + 1;
        let half_lats = params.half_latitudes() as usize;
        let half_lats_n1 = half_lats - 1;
        let rings = params.rings as usize;

        let v_north_hemisphere = 1;
        let v_north_equator = v_north_hemisphere + lons * half_lats_n1;
        let v_cylinder = v_north_equator + lons;
        let v_south_equator = v_cylinder + lons * rings;
        let v_south_hemisphere = v_south_equator + lons;
        let v_south_pole = v_south_hemisphere + lons * half_lats_n1;

        let vt_north_hemisphere = lons;
        let vt_north_equator = vt_north_hemisphere + lons_p1 * half_lats_n1;
        let vt_cylinder = vt_north_equator + lons_p1;
        let vt_south_equator = vt_cylinder + lons_p1 * rings;
        let vt_south_hemisphere = vt_south_equator + lons_p1;
        let vt_south_polar = vt_south_hemisphere + lons_p1 * half_lats_n1;

        let vn_north_hemisphere = 1;
        let vn_equator = vn_north_hemisphere + lons * half_lats_n1;
        let vn_south_hemisphere = vn_equator + lons;
        let vn_south_pole = vn_south_hemisphere + lons * half_lats_n1;

        let f_north_hemisphere = lons;
        let f_cylinder = f_north_hemisphere + lons * half_lats_n1;
        let f_south_hemisphere = f_cylinder + lons * (rings + 1);
        let f_south_fan = f_south_hemisphere + lons * half_lats_n1;

        Ok(Self {
            longitudes: lons,
            half_latitudes: half_lats,
            rings,

            v_north_hemisphere,
            v_north_equator,
            v_cylinder,
            v_south_equator,
            v_south_hemisphere,
            v_south_cap: v_south_pole - lons,
            v_south_pole,
            positions: v_south_pole + 1,

            vt_north_hemisphere,
            vt_north_equator,
            vt_cylinder,
            vt_south_equator,
            vt_south_hemisphere,
            vt_south_cap: vt_south_polar - lons_p1,
            vt_south_polar,
            uvs: vt_south_polar + lons,

            vn_north_hemisphere,
            vn_equator,
            vn_south_hemisphere,
            vn_south_cap: vn_south_pole - lons,
            vn_south_pole,
            normals: vn_south_pole + 1,

            f_north_hemisphere,
            f_cylinder,
            f_south_hemisphere,
            f_south_fan,
            faces: f_south_fan + lons,
        })
    }

    /// Whether the cylinder has interior rings
    pub fn has_middle_rings(&self) -> bool {
        self.rings > 0
    }

    /// Number of interior latitude rows per hemisphere
    pub fn hemisphere_rows(&self) -> usize {
        self.half_latitudes - 1
    }

    /// Number of quad strips between the two equators (always >= 1)
    pub fn cylinder_strips(&self) -> usize {
        self.rings + 1
    }

    /// Position range of the north hemisphere rows
    pub fn north_band_positions(&self) -> Range<usize> {
        self.v_north_hemisphere..self.v_north_equator
    }

    /// Position range of the south hemisphere rows
    pub fn south_band_positions(&self) -> Range<usize> {
        self.v_south_hemisphere..self.v_south_pole
    }

    /// Normal range of the north hemisphere rows
    pub fn north_band_normals(&self) -> Range<usize> {
        self.vn_north_hemisphere..self.vn_equator
    }

    /// Normal range of the south hemisphere rows
    pub fn south_band_normals(&self) -> Range<usize> {
        self.vn_south_hemisphere..self.vn_south_pole
    }

    /// UV range of the north hemisphere rows
    pub fn north_band_uvs(&self) -> Range<usize> {
        self.vt_north_hemisphere..self.vt_north_equator
    }

    /// UV range of the south hemisphere rows
    pub fn south_band_uvs(&self) -> Range<usize> {
        self.vt_south_hemisphere..self.vt_south_polar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CapsuleParams, UvProfile};

    fn plan(longitudes: i32, latitudes: i32, rings: i32) -> Layout {
        Layout::plan(
            &CapsuleParams {
                longitudes,
                latitudes,
                rings,
                depth: 1.0,
                radius: 0.5,
                uv_profile: UvProfile::Fixed,
            }
            .normalize(),
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_capsule_counts() {
        let layout = plan(4, 4, 0);
        assert_eq!(layout.positions, 18);
        assert_eq!(layout.faces, 20);
        // 4 + 5 + 5 + 5 + 5 + 4
        assert_eq!(layout.uvs, 28);
        // pole + cap + equator + cap + pole
        assert_eq!(layout.normals, 14);
    }

    #[test]
    fn test_count_formulas() {
        for lons in 3..10 {
            for lats in (2..14).step_by(2) {
                for rings in 0..4 {
                    let layout = plan(lons, lats, rings);
                    let (l, h, r) = (lons as usize, lats as usize / 2, rings as usize);

                    assert_eq!(layout.positions, 2 + 2 * l * (h - 1) + l * (2 + r));
                    assert_eq!(layout.uvs, 2 * l + 2 * (l + 1) * (h - 1) + (l + 1) * (2 + r));
                    assert_eq!(layout.normals, 2 + l * (2 * h - 1));
                    assert_eq!(layout.faces, 2 * l + 2 * l * (h - 1) + l * (r + 1));

                    if h >= 2 {
                        let caps_apart = 2 + 2 * l + 2 * l * (h - 2) + l * (2 + r);
                        assert_eq!(layout.positions, caps_apart);
                    }
                }
            }
        }
    }

    #[test]
    fn test_region_order() {
        let layout = plan(6, 10, 2);
        assert_eq!(layout.v_north_hemisphere, 1);
        assert!(layout.v_north_hemisphere < layout.v_north_equator);
        assert_eq!(layout.v_cylinder, layout.v_north_equator + 6);
        assert_eq!(layout.v_south_equator, layout.v_cylinder + 12);
        assert_eq!(layout.v_south_hemisphere, layout.v_south_equator + 6);
        assert_eq!(layout.v_south_cap + 6, layout.v_south_pole);
        assert_eq!(layout.v_south_pole + 1, layout.positions);

        assert_eq!(layout.vt_north_hemisphere, 6);
        assert_eq!(layout.vt_cylinder, layout.vt_north_equator + 7);
        assert_eq!(layout.vt_south_equator, layout.vt_cylinder + 14);
        assert_eq!(layout.vt_south_cap + 7, layout.vt_south_polar);
        assert_eq!(layout.vt_south_polar + 6, layout.uvs);

        assert_eq!(layout.vn_south_hemisphere, layout.vn_equator + 6);
        assert_eq!(layout.vn_south_pole + 1, layout.normals);
    }

    #[test]
    fn test_rings_insert_rows() {
        let without = plan(8, 8, 0);
        let with = plan(8, 8, 2);
        assert!(!without.has_middle_rings());
        assert!(with.has_middle_rings());
        assert_eq!(without.v_cylinder, without.v_south_equator);
        assert_eq!(with.positions - without.positions, 16);
        assert_eq!(with.uvs - without.uvs, 18);
        assert_eq!(with.normals, without.normals);
        assert_eq!(with.cylinder_strips(), 3);
        assert_eq!(with.faces - without.faces, 16);
    }

    #[test]
    fn test_plan_rejects_zero_counts() {
        let base = CapsuleParams::default().normalize();

        let zero_latitudes = GeometryParameters {
            latitudes: 0,
            ..base
        };
        assert!(matches!(
            Layout::plan(&zero_latitudes),
            Err(CapsuleError::InvalidParameter { name: "latitudes", .. })
        ));

        let zero_longitudes = GeometryParameters {
            longitudes: 0,
            ..base
        };
        assert!(matches!(
            Layout::plan(&zero_longitudes),
            Err(CapsuleError::InvalidParameter { name: "longitudes", .. })
        ));
    }

    #[test]
    fn test_two_latitudes_has_no_hemisphere_rows() {
        let layout = plan(3, 2, 0);
        assert_eq!(layout.hemisphere_rows(), 0);
        assert_eq!(layout.v_north_equator, 1);
        assert_eq!(layout.v_south_cap, layout.v_south_equator);
        assert_eq!(layout.vt_north_equator, layout.vt_north_hemisphere);
        assert_eq!(layout.vt_south_cap, layout.vt_south_equator);
        assert_eq!(layout.vn_south_cap, layout.vn_equator);
        assert_eq!(layout.positions, 8);
        assert_eq!(layout.faces, 9);
        assert!(layout.north_band_positions().is_empty());
        assert!(layout.south_band_uvs().is_empty());
    }
}
