//! Error types for mesh construction.

/// Errors that can occur when assembling a mesh from raw arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A per-corner attribute array does not have one entry per triangle.
    AttributeCountMismatch {
        /// Which attribute array is wrong ("normals", "uvs", "colors").
        attribute: &'static str,
        /// Expected number of entries (the triangle count).
        expected: usize,
        /// Actual number of entries.
        actual: usize,
    },
    /// A triangle references a vertex index outside the vertex array.
    VertexIndexOutOfRange {
        /// Index of the offending triangle.
        triangle: usize,
        /// The out-of-range vertex index.
        vertex: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttributeCountMismatch {
                attribute,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{attribute} array has {actual} entries, expected {expected} (one per triangle)"
                )
            }
            Self::VertexIndexOutOfRange {
                triangle,
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "triangle {triangle} references vertex {vertex}, but the mesh has {vertex_count} vertices"
                )
            }
        }
    }
}

impl std::error::Error for MeshError {}
