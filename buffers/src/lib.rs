//! # Meshweld Buffers
//!
//! Render vertex/index buffer construction for the meshweld toolkit.
//!
//! This crate turns a [`SourceMesh`] — an indexed triangle mesh with
//! per-corner normal/uv/color attributes — into flat, GPU-uploadable
//! buffer content:
//!
//! - [`RenderVertex`] - Interleaved vertex with full tangent basis
//! - [`MeshRenderBuffers`] - Finished vertex + index buffer content
//! - [`build_render_buffers`] - Strategy-dispatching entry point
//! - [`RecencyCache`] - Bounded ring cache backing the welding strategy
//!
//! Two strategies are available (see [`BuildStrategy`]): `Fastest` emits
//! three vertices per triangle with no merging; `LocalOptimize` welds
//! corners that repeat a recently seen source vertex with identical
//! attributes. Uploading the finished buffers to a GPU is the consumer's
//! job; this crate stops at plain data.

mod build;
mod cache;
mod data;
mod vertex;

pub use build::{
    BufferBuildOptions, BuildStrategy, build_fastest, build_frame_buffers, build_local_optimize,
    build_render_buffers,
};
pub use cache::RecencyCache;
pub use data::MeshRenderBuffers;
pub use vertex::{RenderVertex, VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic};

// Re-export the source-mesh contract for consumers that only depend on
// this crate.
pub use meshweld_core::mesh::SourceMesh;
