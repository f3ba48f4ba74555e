//! Mesh-to-render-buffer build strategies.
//!
//! Two strategies convert a [`SourceMesh`] into [`MeshRenderBuffers`]:
//!
//! - [`build_fastest`] emits three new vertices per triangle, no merging.
//! - [`build_local_optimize`] welds corners that repeat a recently seen
//!   source vertex with identical attributes, using a [`RecencyCache`].
//!
//! Both preserve triangle order and winding exactly: output index
//! `3t + j` resolves to corner `j` of input triangle `t`. Both are pure,
//! synchronous, and single-threaded over an immutable mesh; distinct
//! meshes (e.g. animation frames) can be built concurrently as long as
//! each call owns its own output buffers and cache.

use bytemuck::Zeroable;

use meshweld_core::math::vec3d_to_f32;
use meshweld_core::mesh::SourceMesh;

use crate::cache::RecencyCache;
use crate::data::MeshRenderBuffers;
use crate::vertex::RenderVertex;

/// Which build strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildStrategy {
    /// Three new vertices per triangle, no optimization at all.
    Fastest,
    /// Weld repeated corners through a bounded recency cache.
    #[default]
    LocalOptimize,
}

/// Options for [`build_render_buffers`].
///
/// # Example
///
/// ```
/// use meshweld_buffers::{BufferBuildOptions, BuildStrategy};
///
/// let options = BufferBuildOptions::new()
///     .with_strategy(BuildStrategy::LocalOptimize)
///     .with_cache_capacity(64);
/// assert_eq!(options.cache_capacity, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferBuildOptions {
    /// Strategy to run.
    pub strategy: BuildStrategy,
    /// Ring capacity used by [`BuildStrategy::LocalOptimize`].
    pub cache_capacity: usize,
}

impl BufferBuildOptions {
    /// Default options: welding enabled with the default cache capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the build strategy.
    pub fn with_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the recency-cache capacity for the welding strategy.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Default for BufferBuildOptions {
    fn default() -> Self {
        Self {
            strategy: BuildStrategy::default(),
            cache_capacity: RecencyCache::DEFAULT_CAPACITY,
        }
    }
}

/// Build render buffers from a mesh with the options' strategy.
pub fn build_render_buffers(mesh: &impl SourceMesh, options: &BufferBuildOptions) -> MeshRenderBuffers {
    match options.strategy {
        BuildStrategy::Fastest => build_fastest(mesh),
        BuildStrategy::LocalOptimize => build_local_optimize(mesh, options.cache_capacity),
    }
}

/// Build render buffers emitting three new vertices per triangle.
///
/// The output vertex count is always exactly `3 × triangle_count`; a mesh
/// with no triangles yields empty buffers. Each vertex gets its corner's
/// attributes and a tangent basis derived from the corner normal.
pub fn build_fastest(mesh: &impl SourceMesh) -> MeshRenderBuffers {
    let triangle_count = mesh.triangle_count();
    if triangle_count == 0 {
        return MeshRenderBuffers::empty();
    }

    let mut vertices = Vec::with_capacity(triangle_count * 3);
    let mut indices = Vec::with_capacity(triangle_count * 3);

    for tid in 0..triangle_count {
        let triangle = mesh.triangle(tid);
        let normals = mesh.tri_vertex_normals(tid);
        let uvs = mesh.tri_vertex_uvs(tid);
        let colors = mesh.tri_vertex_colors(tid);

        for j in 0..3 {
            let mut vertex = RenderVertex::zeroed();
            vertex.position = vec3d_to_f32(&mesh.position(triangle[j])).into();
            vertex.normal = normals[j].into();
            vertex.uv = uvs[j].into();
            vertex.color = colors[j];
            vertex.set_tangent_basis_from_normal();

            indices.push(vertices.len() as u32);
            vertices.push(vertex);
        }
    }

    MeshRenderBuffers {
        vertices,
        indices,
        triangle_count: triangle_count as u32,
    }
}

/// Build render buffers, welding repeated corners through a recency cache.
///
/// For each corner, the cache is probed for the corner's source vertex
/// id. On a hit with matching attributes (color, normal, uv) the cached
/// buffer index is reused and no vertex is appended. Otherwise the corner
/// becomes a new vertex — position finalized, tangent basis derived from
/// the normal — and is recorded in the ring slot under the insertion
/// cursor, evicting whatever was there.
///
/// The cache is bounded: a source vertex that reappears after more than
/// `cache_capacity` insertions is no longer in the window and is emitted
/// again. The output vertex count is therefore at most, and usually well
/// below, `3 × triangle_count`.
pub fn build_local_optimize(mesh: &impl SourceMesh, cache_capacity: usize) -> MeshRenderBuffers {
    let triangle_count = mesh.triangle_count();
    if triangle_count == 0 {
        return MeshRenderBuffers::empty();
    }

    let mut cache = RecencyCache::with_capacity(cache_capacity);
    // Worst case: no corner welds at all.
    let mut vertices = Vec::with_capacity(triangle_count * 3);
    let mut indices = Vec::with_capacity(triangle_count * 3);
    let mut merged = 0usize;

    for tid in 0..triangle_count {
        let triangle = mesh.triangle(tid);
        let normals = mesh.tri_vertex_normals(tid);
        let uvs = mesh.tri_vertex_uvs(tid);
        let colors = mesh.tri_vertex_colors(tid);

        for j in 0..3 {
            let vid = triangle[j];

            // Candidate with welding attributes only; position and
            // tangents are filled in once the corner turns out to need a
            // new vertex.
            let mut candidate = RenderVertex::zeroed();
            candidate.normal = normals[j].into();
            candidate.uv = uvs[j].into();
            candidate.color = colors[j];

            let reused = match cache.find(vid) {
                Some((buffer_index, cached)) if candidate.attributes_match(cached) => {
                    merged += 1;
                    Some(buffer_index)
                }
                _ => None,
            };

            let index = match reused {
                Some(index) => index,
                None => {
                    candidate.position = vec3d_to_f32(&mesh.position(vid)).into();
                    candidate.set_tangent_basis_from_normal();
                    let index = vertices.len() as u32;
                    vertices.push(candidate);
                    cache.insert(vid, index, candidate);
                    index
                }
            };
            indices.push(index);
        }
    }

    log::debug!(
        "welded {merged} of {} corners, emitted {} vertices",
        triangle_count * 3,
        vertices.len()
    );

    MeshRenderBuffers {
        vertices,
        indices,
        triangle_count: triangle_count as u32,
    }
}

/// Build one set of render buffers per frame mesh.
///
/// Useful for multi-frame content (e.g. a pre-baked animation) where
/// every frame is its own mesh. Frames are built independently — each
/// gets its own cache and output buffers — so callers that want to
/// parallelize can map over frames themselves instead.
pub fn build_frame_buffers<M: SourceMesh>(
    frames: &[M],
    options: &BufferBuildOptions,
) -> Vec<MeshRenderBuffers> {
    frames
        .iter()
        .map(|frame| build_render_buffers(frame, options))
        .collect()
}
