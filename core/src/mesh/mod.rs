//! CPU-side mesh types and generators.
//!
//! This module provides the source side of render-buffer construction:
//!
//! - [`SourceMesh`] - Read-only contract consumed by buffer builders
//! - [`CornerMesh`] - Dense triangle mesh with per-corner attributes
//! - [`MeshError`] - Validation errors for bulk mesh construction
//! - Generators for common shapes (quad, sphere, fan)

mod data;
mod error;
pub mod generators;

pub use data::{Color4b, CornerMesh, SourceMesh, WHITE};
pub use error::MeshError;
