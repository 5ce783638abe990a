//! Conversion to a single-indexed triangle mesh
//!
//! GPUs want one index per vertex, while [`GeometryData`] indexes positions,
//! UVs and normals separately. This module flattens the polygons into
//! interleaved [`MeshVertex`] data plus a `u32` index list.
//!
//! - `Smooth`: corners sharing the same (position, uv, normal) triple share a
//!   vertex, so the seam and the poles split while everything else welds
//! - `Flat`: every triangle gets three vertices carrying its face normal
//!
//! # Tangents
//!
//! Every vertex carries a tangent for normal mapping. The tangent follows the
//! direction of increasing U and is orthogonal to the vertex normal; `w` is
//! the handedness (+1.0 or -1.0) of the bitangent, which follows increasing V.
//! Smooth vertices average the UV gradients of every triangle using them.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CapsuleError;
use crate::types::{Corner, Face, GeometryData};

/// Smooth (shared vertex normals) or flat (per-face normals) shading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// Interpolated per-vertex normals
    #[default]
    #[serde(alias = "SMOOTH", alias = "Smooth")]
    Smooth,
    /// One normal per triangle
    #[serde(alias = "FLAT", alias = "Flat")]
    Flat,
}

impl Shading {
    /// Lowercase name used in presets and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Shading::Smooth => "smooth",
            Shading::Flat => "flat",
        }
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shading {
    type Err = CapsuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smooth" => Ok(Shading::Smooth),
            "flat" => Ok(Shading::Flat),
            _ => Err(CapsuleError::UnknownVariant {
                kind: "shading",
                value: s.to_string(),
                expected: "smooth, flat",
            }),
        }
    }
}

/// Interleaved vertex: position, UV, normal, tangent (48 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position as [x, y, z]
    pub position: [f32; 3],
    /// Texture coordinate as [u, v]
    pub uv: [f32; 2],
    /// Normal as [x, y, z]
    pub normal: [f32; 3],
    /// Tangent as [x, y, z, handedness]
    pub tangent: [f32; 4],
}

/// Single-indexed triangle list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex data
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices, three per triangle, counter-clockwise from outside
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex buffer bytes, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index buffer bytes (`u32`, native endian)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl GeometryData {
    /// Triangulate into a single-indexed mesh
    ///
    /// Quads `(a, b, c, d)` split into `(a, b, c)` and `(a, c, d)`.
    pub fn to_triangle_mesh(&self, shading: Shading) -> TriangleMesh {
        let mesh = match shading {
            Shading::Smooth => self.weld_corners(),
            Shading::Flat => self.split_faces(),
        };
        debug!(
            "triangulated capsule ({}): {} vertices, {} triangles",
            shading,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        mesh
    }

    fn weld_corners(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh {
            vertices: Vec::with_capacity(self.uvs.len()),
            indices: Vec::with_capacity(self.triangle_count() * 3),
        };
        let mut welded: HashMap<Corner, u32> = HashMap::with_capacity(self.uvs.len());
        // Accumulated (tangent, bitangent) directions per welded vertex
        let mut gradients: Vec<(Vec3, Vec3)> = Vec::with_capacity(self.uvs.len());

        for triangle in self.faces.iter().flat_map(fan_triangles) {
            let (tangent, bitangent) = self.uv_gradient(triangle);
            for corner in triangle {
                let index = *welded.entry(corner).or_insert_with(|| {
                    let index = mesh.vertices.len() as u32;
                    mesh.vertices.push(self.vertex(corner, self.normals[corner.normal as usize]));
                    gradients.push((Vec3::ZERO, Vec3::ZERO));
                    index
                });
                let sum = &mut gradients[index as usize];
                sum.0 += tangent;
                sum.1 += bitangent;
                mesh.indices.push(index);
            }
        }

        for (vertex, (tangent, bitangent)) in mesh.vertices.iter_mut().zip(gradients) {
            vertex.tangent = orthonormal_tangent(Vec3::from(vertex.normal), tangent, bitangent);
        }

        mesh
    }

    fn split_faces(&self) -> TriangleMesh {
        let triangle_count = self.triangle_count();
        let mut mesh = TriangleMesh {
            vertices: Vec::with_capacity(triangle_count * 3),
            indices: Vec::with_capacity(triangle_count * 3),
        };

        for triangle in self.faces.iter().flat_map(fan_triangles) {
            let [p0, p1, p2] = triangle.map(|corner| self.positions[corner.position as usize]);
            let face_normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
            let (tangent, bitangent) = self.uv_gradient(triangle);
            let face_tangent = orthonormal_tangent(face_normal, tangent, bitangent);

            for corner in triangle {
                mesh.indices.push(mesh.vertices.len() as u32);
                mesh.vertices.push(MeshVertex {
                    tangent: face_tangent,
                    ..self.vertex(corner, face_normal)
                });
            }
        }

        mesh
    }

    fn vertex(&self, corner: Corner, normal: Vec3) -> MeshVertex {
        MeshVertex {
            position: self.positions[corner.position as usize].to_array(),
            uv: self.uvs[corner.uv as usize].to_array(),
            normal: normal.to_array(),
            tangent: [1.0, 0.0, 0.0, 1.0],
        }
    }

    /// Object-space directions of increasing U and V across one triangle
    ///
    /// Zero for triangles whose UVs are degenerate.
    fn uv_gradient(&self, triangle: [Corner; 3]) -> (Vec3, Vec3) {
        let [p0, p1, p2] = triangle.map(|corner| self.positions[corner.position as usize]);
        let [uv0, uv1, uv2]: [Vec2; 3] = triangle.map(|corner| self.uvs[corner.uv as usize]);

        let (e1, e2) = (p1 - p0, p2 - p0);
        let (d1, d2) = (uv1 - uv0, uv2 - uv0);
        let det = d1.perp_dot(d2);
        if det.abs() < f32::MIN_POSITIVE {
            return (Vec3::ZERO, Vec3::ZERO);
        }

        let r = det.recip();
        ((e1 * d2.y - e2 * d1.y) * r, (e2 * d1.x - e1 * d2.x) * r)
    }
}

/// Gram-Schmidt the tangent against the normal and derive handedness
fn orthonormal_tangent(normal: Vec3, tangent: Vec3, bitangent: Vec3) -> [f32; 4] {
    let mut t = (tangent - normal * normal.dot(tangent)).normalize_or_zero();
    if t == Vec3::ZERO {
        t = normal.any_orthonormal_vector();
    }
    let handedness = if normal.cross(t).dot(bitangent) < 0.0 {
        -1.0
    } else {
        1.0
    };
    [t.x, t.y, t.z, handedness]
}

/// Fan triangulation around corner 0
fn fan_triangles(face: &Face) -> impl Iterator<Item = [Corner; 3]> + '_ {
    (1..face.len() - 1).map(move |k| [face.corner(0), face.corner(k), face.corner(k + 1)])
}
