//! Nether-Capsule: procedural UV capsule mesh generator for Nethercore
//!
//! Builds a capsule (a cylinder capped by two hemispheres) aligned with the
//! Z axis and centered at the origin. Positions, texture coordinates and
//! normals live in three independent arrays and every face corner indexes
//! each of them separately, the same way OBJ `f v/vt/vn` records do.
//!
//! # Key Features
//!
//! - **Closed-form layout**: every array region has a precomputed offset, so
//!   generation is a single pass with no reallocation
//! - **Seam-aware UVs**: one extra texture column per row closes the seam
//!   without duplicating positions or normals
//! - **Three UV profiles**: fixed thirds, aspect-correct, or uniform rows
//! - **Triangle export**: [`GeometryData::to_triangle_mesh`] flattens to
//!   single-indexed vertex/index buffers with smooth or flat shading
//!
//! # Usage
//!
//! ```ignore
//! use nether_capsule::{CapsuleParams, Shading, UvProfile, generate};
//!
//! let params = CapsuleParams {
//!     longitudes: 24,
//!     latitudes: 12,
//!     rings: 2,
//!     depth: 2.0,
//!     radius: 0.5,
//!     uv_profile: UvProfile::Aspect,
//! };
//! let capsule = generate(&params).unwrap();
//!
//! println!("Positions: {}", capsule.positions().len());
//! println!("Faces: {}", capsule.faces().len());
//!
//! let mesh = capsule.to_triangle_mesh(Shading::Smooth);
//! upload(mesh.vertex_bytes(), &mesh.indices);
//! ```

mod error;
mod export;
mod faces;
mod layout;
mod params;
mod profile;
mod synthesis;
mod triangle_mesh;
mod types;

use tracing::debug;

pub use error::CapsuleError;
pub use export::{write_obj, write_obj_to};
pub use layout::Layout;
pub use params::{CapsuleParams, GeometryParameters, UvProfile};
pub use profile::EquatorV;
pub use triangle_mesh::{MeshVertex, Shading, TriangleMesh};
pub use types::{Corner, Face, GeometryData};

// =============================================================================
// Constants
// =============================================================================

/// Minimum number of longitudes
pub const MIN_LONGITUDES: u32 = 3;

/// Minimum number of latitudes (one per hemisphere)
pub const MIN_LATITUDES: u32 = 2;

/// Minimum radius after normalization
pub const MIN_RADIUS: f32 = 1e-6;

/// Minimum cylinder depth after normalization
pub const MIN_DEPTH: f32 = 1e-5;

/// Default number of longitudes
pub const DEFAULT_LONGITUDES: i32 = 32;

/// Default number of latitudes
pub const DEFAULT_LATITUDES: i32 = 16;

/// Default number of middle cylinder rings
pub const DEFAULT_RINGS: i32 = 0;

/// Default cylinder depth
pub const DEFAULT_DEPTH: f32 = 1.0;

/// Default radius
pub const DEFAULT_RADIUS: f32 = 0.5;

// =============================================================================
// Generation
// =============================================================================

/// Normalize `params` and generate a capsule
///
/// Out of range values are clamped (see [`CapsuleParams::normalize`]), so
/// this only fails for an infinite depth or radius, or if the mesh would be
/// too large for `u32` indices.
pub fn generate(params: &CapsuleParams) -> Result<GeometryData, CapsuleError> {
    GeometryData::from_params(&params.normalize())
}

impl GeometryData {
    /// Generate a capsule from normalized parameters
    ///
    /// # Errors
    ///
    /// Returns [`CapsuleError::InvalidParameter`] if `params` fails
    /// [`GeometryParameters::validate`].
    pub fn from_params(params: &GeometryParameters) -> Result<Self, CapsuleError> {
        let layout = Layout::plan(params)?;
        debug!(
            "generating capsule: {} longitudes, {} latitudes, {} rings, {} profile \
             ({} positions, {} uvs, {} normals, {} faces)",
            params.longitudes,
            params.latitudes,
            params.rings,
            params.uv_profile,
            layout.positions,
            layout.uvs,
            layout.normals,
            layout.faces
        );

        let equator_v = EquatorV::for_params(params);
        let buffers = synthesis::synthesize(params, &layout, equator_v);
        let faces = faces::assemble_faces(&layout);

        Ok(Self {
            params: *params,
            layout,
            positions: buffers.positions,
            uvs: buffers.uvs,
            normals: buffers.normals,
            faces,
        })
    }
}
