//! Source-mesh contract and dense per-corner attribute storage.
//!
//! This module provides:
//! - [`SourceMesh`] - The read-only mesh view buffer builders consume
//! - [`CornerMesh`] - A dense implementation storing attributes per corner
//!
//! Attributes (normal, texture coordinates, color) live on triangle
//! corners rather than on vertices, so adjacent triangles are free to
//! disagree across hard edges and UV seams while still sharing positions.

use crate::math::{Vec2, Vec3, Vec3d};

use super::error::MeshError;

/// RGBA color with 8 bits per channel, laid out `[r, g, b, a]`.
pub type Color4b = [u8; 4];

/// Opaque white, the default corner color.
pub const WHITE: Color4b = [255, 255, 255, 255];

/// Read-only view of an indexed triangle mesh with per-corner attributes.
///
/// Buffer builders consume meshes through this trait. Implementations
/// guarantee that attribute accessors return exactly three entries in the
/// same corner order as [`triangle`], and that every vertex index returned
/// by [`triangle`] lies in `[0, vertex_count)`. Builders are entitled to
/// assume both; they do not re-validate per corner.
///
/// Accessors must remain stable (no concurrent mutation) for the duration
/// of one build call. Builders never mutate the mesh.
///
/// [`triangle`]: SourceMesh::triangle
pub trait SourceMesh {
    /// Number of triangles.
    fn triangle_count(&self) -> usize;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// The three vertex indices of triangle `tid`, in winding order.
    fn triangle(&self, tid: usize) -> [u32; 3];

    /// Position of vertex `vid`, in double precision.
    fn position(&self, vid: u32) -> Vec3d;

    /// Per-corner normals of triangle `tid`.
    fn tri_vertex_normals(&self, tid: usize) -> [Vec3; 3];

    /// Per-corner texture coordinates of triangle `tid` (single channel).
    fn tri_vertex_uvs(&self, tid: usize) -> [Vec2; 3];

    /// Per-corner colors of triangle `tid`.
    fn tri_vertex_colors(&self, tid: usize) -> [Color4b; 3];
}

/// A dense indexed triangle mesh with per-corner render attributes.
///
/// Positions are stored once per vertex in double precision; normals,
/// texture coordinates, and colors are stored per triangle corner, in
/// parallel arrays indexed by triangle id.
///
/// # Example
///
/// ```
/// use meshweld_core::math::{Vec2, Vec3, Vec3d};
/// use meshweld_core::mesh::{CornerMesh, SourceMesh, WHITE};
///
/// let mut mesh = CornerMesh::new();
/// let a = mesh.add_vertex(Vec3d::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(Vec3d::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(Vec3d::new(0.0, 1.0, 0.0));
/// let tid = mesh.add_triangle([a, b, c]);
/// mesh.set_tri_vertex_normals(tid, [Vec3::z(); 3]);
/// mesh.set_tri_vertex_uvs(tid, [Vec2::zeros(); 3]);
/// mesh.set_tri_vertex_colors(tid, [WHITE; 3]);
///
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CornerMesh {
    positions: Vec<Vec3d>,
    triangles: Vec<[u32; 3]>,
    normals: Vec<[Vec3; 3]>,
    uvs: Vec<[Vec2; 3]>,
    colors: Vec<[Color4b; 3]>,
}

impl CornerMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with reserved capacity.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
            normals: Vec::with_capacity(triangles),
            uvs: Vec::with_capacity(triangles),
            colors: Vec::with_capacity(triangles),
        }
    }

    /// Assemble a mesh from pre-built arrays, validating their shape.
    ///
    /// Every attribute array must have one entry per triangle, and every
    /// triangle vertex index must lie in `[0, positions.len())`.
    pub fn from_parts(
        positions: Vec<Vec3d>,
        triangles: Vec<[u32; 3]>,
        normals: Vec<[Vec3; 3]>,
        uvs: Vec<[Vec2; 3]>,
        colors: Vec<[Color4b; 3]>,
    ) -> Result<Self, MeshError> {
        let expected = triangles.len();
        for (attribute, actual) in [
            ("normals", normals.len()),
            ("uvs", uvs.len()),
            ("colors", colors.len()),
        ] {
            if actual != expected {
                return Err(MeshError::AttributeCountMismatch {
                    attribute,
                    expected,
                    actual,
                });
            }
        }

        let vertex_count = positions.len();
        for (tid, tri) in triangles.iter().enumerate() {
            for &vid in tri {
                if vid as usize >= vertex_count {
                    return Err(MeshError::VertexIndexOutOfRange {
                        triangle: tid,
                        vertex: vid,
                        vertex_count,
                    });
                }
            }
        }

        Ok(Self {
            positions,
            triangles,
            normals,
            uvs,
            colors,
        })
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, position: Vec3d) -> u32 {
        let vid = self.positions.len() as u32;
        self.positions.push(position);
        vid
    }

    /// Overwrite the position of an existing vertex.
    ///
    /// Useful for deforming a mesh in place, e.g. when producing animation
    /// frames that share topology and attributes.
    pub fn set_position(&mut self, vid: u32, position: Vec3d) {
        self.positions[vid as usize] = position;
    }

    /// Append a triangle and return its id.
    ///
    /// Corner attributes start out as zero normals and uvs with opaque
    /// white color; use the `set_tri_vertex_*` setters to fill them in,
    /// or [`add_triangle_with_attributes`] to set everything at once.
    ///
    /// [`add_triangle_with_attributes`]: Self::add_triangle_with_attributes
    pub fn add_triangle(&mut self, vertices: [u32; 3]) -> usize {
        self.add_triangle_with_attributes(
            vertices,
            [Vec3::zeros(); 3],
            [Vec2::zeros(); 3],
            [WHITE; 3],
        )
    }

    /// Append a triangle together with its corner attributes.
    pub fn add_triangle_with_attributes(
        &mut self,
        vertices: [u32; 3],
        normals: [Vec3; 3],
        uvs: [Vec2; 3],
        colors: [Color4b; 3],
    ) -> usize {
        for &vid in &vertices {
            debug_assert!(
                (vid as usize) < self.positions.len(),
                "triangle references vertex {vid} but the mesh has {} vertices",
                self.positions.len()
            );
        }
        let tid = self.triangles.len();
        self.triangles.push(vertices);
        self.normals.push(normals);
        self.uvs.push(uvs);
        self.colors.push(colors);
        tid
    }

    /// Set the per-corner normals of a triangle.
    pub fn set_tri_vertex_normals(&mut self, tid: usize, normals: [Vec3; 3]) {
        self.normals[tid] = normals;
    }

    /// Set the per-corner texture coordinates of a triangle.
    pub fn set_tri_vertex_uvs(&mut self, tid: usize, uvs: [Vec2; 3]) {
        self.uvs[tid] = uvs;
    }

    /// Set the per-corner colors of a triangle.
    pub fn set_tri_vertex_colors(&mut self, tid: usize, colors: [Color4b; 3]) {
        self.colors[tid] = colors;
    }
}

impl SourceMesh for CornerMesh {
    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn triangle(&self, tid: usize) -> [u32; 3] {
        self.triangles[tid]
    }

    fn position(&self, vid: u32) -> Vec3d {
        self.positions[vid as usize]
    }

    fn tri_vertex_normals(&self, tid: usize) -> [Vec3; 3] {
        self.normals[tid]
    }

    fn tri_vertex_uvs(&self, tid: usize) -> [Vec2; 3] {
        self.uvs[tid]
    }

    fn tri_vertex_colors(&self, tid: usize) -> [Color4b; 3] {
        self.colors[tid]
    }
}
