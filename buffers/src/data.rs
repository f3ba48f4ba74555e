//! Finished render buffers.
//!
//! [`MeshRenderBuffers`] is the output of a build: a flat vertex array, an
//! index array with three entries per source triangle, and the triangle
//! count. The container is plain data — an uploader takes ownership of it
//! (or reads its byte views) to create and manage actual GPU buffers;
//! nothing here touches a graphics API.

use crate::vertex::RenderVertex;

/// Vertex and index buffer content for one mesh, ready for GPU upload.
///
/// `indices[3t + j]` is corner `j` of source triangle `t`; triangle order
/// and winding mirror the source mesh exactly. Every index value lies in
/// `[0, vertices.len())`.
#[derive(Clone, Default, PartialEq)]
pub struct MeshRenderBuffers {
    /// Interleaved vertex buffer content.
    pub vertices: Vec<RenderVertex>,
    /// Index buffer content, three entries per triangle.
    pub indices: Vec<u32>,
    /// Number of triangles the buffers were built from.
    pub triangle_count: u32,
}

impl MeshRenderBuffers {
    /// Buffers for an empty mesh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of vertices in the vertex buffer.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of entries in the index buffer.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Check whether the buffers hold no geometry.
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }

    /// Vertex buffer content as bytes, [`RenderVertex::STRIDE`] per vertex.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer content as bytes, 4 bytes per index (u32 indices).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl std::fmt::Debug for MeshRenderBuffers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshRenderBuffers")
            .field("triangle_count", &self.triangle_count)
            .field("vertex_count", &self.vertices.len())
            .field("index_count", &self.indices.len())
            .finish()
    }
}

// Built buffers cross thread boundaries on their way to an uploader.
static_assertions::assert_impl_all!(MeshRenderBuffers: Send, Sync);
