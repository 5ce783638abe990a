//! Generated capsule geometry
//!
//! Output types shared by the generator, the triangle conversion and the OBJ
//! writer.

use glam::{Vec2, Vec3};
use serde::Serialize;
use smallvec::SmallVec;

use crate::layout::Layout;
use crate::params::GeometryParameters;

/// One polygon corner: indices into the position, UV and normal arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    /// Index into [`GeometryData::positions`]
    pub position: u32,
    /// Index into [`GeometryData::uvs`]
    pub uv: u32,
    /// Index into [`GeometryData::normals`]
    pub normal: u32,
}

/// A triangle or quad with independent position, UV and normal indices
///
/// The three index lists always have the same length. Corners are ordered
/// counter-clockwise when seen from outside the capsule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Face {
    #[serde(rename = "position_indices")]
    positions: SmallVec<[u32; 4]>,
    #[serde(rename = "uv_indices")]
    uvs: SmallVec<[u32; 4]>,
    #[serde(rename = "normal_indices")]
    normals: SmallVec<[u32; 4]>,
}

impl Face {
    /// Create a three-corner face
    pub fn triangle(positions: [u32; 3], uvs: [u32; 3], normals: [u32; 3]) -> Self {
        Self {
            positions: SmallVec::from_slice(&positions),
            uvs: SmallVec::from_slice(&uvs),
            normals: SmallVec::from_slice(&normals),
        }
    }

    /// Create a four-corner face
    pub fn quad(positions: [u32; 4], uvs: [u32; 4], normals: [u32; 4]) -> Self {
        Self {
            positions: SmallVec::from_buf(positions),
            uvs: SmallVec::from_buf(uvs),
            normals: SmallVec::from_buf(normals),
        }
    }

    /// Position indices, one per corner
    pub fn position_indices(&self) -> &[u32] {
        &self.positions
    }

    /// Texture coordinate indices, one per corner
    pub fn uv_indices(&self) -> &[u32] {
        &self.uvs
    }

    /// Normal indices, one per corner
    pub fn normal_indices(&self) -> &[u32] {
        &self.normals
    }

    /// Number of corners (3 or 4)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; faces have at least three corners
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether this face is a pole-fan triangle
    pub fn is_triangle(&self) -> bool {
        self.len() == 3
    }

    /// Corner `i` as an index triple
    pub fn corner(&self, i: usize) -> Corner {
        Corner {
            position: self.positions[i],
            uv: self.uvs[i],
            normal: self.normals[i],
        }
    }

    /// Iterate over the corners in winding order
    pub fn corners(&self) -> impl Iterator<Item = Corner> + '_ {
        (0..self.len()).map(|i| self.corner(i))
    }
}

/// A complete capsule mesh snapshot
///
/// Built by [`generate`](crate::generate) or [`GeometryData::from_params`];
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryData {
    pub(crate) params: GeometryParameters,
    #[serde(skip)]
    pub(crate) layout: Layout,
    pub(crate) positions: Vec<Vec3>,
    pub(crate) uvs: Vec<Vec2>,
    pub(crate) normals: Vec<Vec3>,
    pub(crate) faces: Vec<Face>,
}

impl GeometryData {
    /// Normalized parameters this mesh was generated from
    pub fn params(&self) -> &GeometryParameters {
        &self.params
    }

    /// Region offsets of the arrays below
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Texture coordinates (one extra column per row for the seam)
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Unit vertex normals
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Faces in emission order: north fan, north hemisphere, cylinder,
    /// south hemisphere, south fan
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of triangles after splitting every quad in two
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|face| face.len() - 2).sum()
    }
}
