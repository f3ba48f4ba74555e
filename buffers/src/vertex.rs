//! The interleaved render vertex and its layout metadata.
//!
//! [`RenderVertex`] is the element type of the vertex buffers produced by
//! the builders in this crate. It is `#[repr(C)]` and bytemuck-Pod, so a
//! finished buffer can be handed to an uploader byte-for-byte; the
//! attribute table from [`RenderVertex::layout`] tells the uploader where
//! each attribute lives within the stride.

use meshweld_core::math::{Vec3, make_perp_vectors};

/// A single interleaved vertex in a finished render buffer.
///
/// Carries a full tangent basis (`tangent_x`, `tangent_y`, `normal`), one
/// texture-coordinate channel, and an RGBA8 color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// First tangent-plane basis vector.
    pub tangent_x: [f32; 3],
    /// Second tangent-plane basis vector.
    pub tangent_y: [f32; 3],
    /// Unit normal, the third basis vector.
    pub normal: [f32; 3],
    /// Texture coordinates (single channel).
    pub uv: [f32; 2],
    /// RGBA color, 8 bits per channel.
    pub color: [u8; 4],
}

impl RenderVertex {
    /// Size in bytes of one vertex in the interleaved buffer.
    pub const STRIDE: usize = std::mem::size_of::<RenderVertex>();

    /// Compare the attributes that decide whether two corners can share a
    /// buffer vertex: color, normal, and uv.
    ///
    /// Position is excluded: two corners referencing the same source
    /// vertex always have the same position, so comparing it would be
    /// redundant. The tangents are a pure function of the normal and are
    /// excluded for the same reason.
    pub fn attributes_match(&self, other: &RenderVertex) -> bool {
        self.color == other.color && self.normal == other.normal && self.uv == other.uv
    }

    /// Fill in the tangent basis from the current normal.
    pub(crate) fn set_tangent_basis_from_normal(&mut self) {
        let normal = Vec3::from(self.normal);
        let (tangent_x, tangent_y) = make_perp_vectors(&normal);
        self.tangent_x = tangent_x.into();
        self.tangent_y = tangent_y.into();
    }

    /// Attribute table for the interleaved layout, in field order.
    ///
    /// Offsets are byte offsets from the start of a vertex; the stride is
    /// [`RenderVertex::STRIDE`].
    pub fn layout() -> [VertexAttribute; 6] {
        [
            VertexAttribute::new(VertexAttributeSemantic::Position, VertexAttributeFormat::Float3, 0),
            VertexAttribute::new(VertexAttributeSemantic::TangentX, VertexAttributeFormat::Float3, 12),
            VertexAttribute::new(VertexAttributeSemantic::TangentY, VertexAttributeFormat::Float3, 24),
            VertexAttribute::new(VertexAttributeSemantic::Normal, VertexAttributeFormat::Float3, 36),
            VertexAttribute::new(VertexAttributeSemantic::TexCoord0, VertexAttributeFormat::Float2, 48),
            VertexAttribute::new(VertexAttributeSemantic::Color, VertexAttributeFormat::Unorm8x4, 56),
        ]
    }
}

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position.
    Position,
    /// First tangent-plane basis vector.
    TangentX,
    /// Second tangent-plane basis vector.
    TangentY,
    /// Vertex normal.
    Normal,
    /// Texture coordinates set 0.
    TexCoord0,
    /// Vertex color.
    Color,
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 8-bit unsigned integers (normalized to 0.0-1.0).
    Unorm8x4,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        match self {
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Unorm8x4 => 4,
        }
    }
}

/// A single attribute in the interleaved vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset from the start of a vertex.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u32) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[test]
    fn test_stride() {
        // 4 float3 basis/position fields + float2 uv + unorm8x4 color
        assert_eq!(RenderVertex::STRIDE, 60);
    }

    #[test]
    fn test_layout_is_packed() {
        let layout = RenderVertex::layout();
        let mut offset = 0u32;
        for attr in &layout {
            assert_eq!(attr.offset, offset);
            offset += attr.format.size() as u32;
        }
        assert_eq!(offset as usize, RenderVertex::STRIDE);
    }

    #[test]
    fn test_attributes_match_ignores_position_and_tangents() {
        let mut a = RenderVertex::zeroed();
        a.normal = [0.0, 0.0, 1.0];
        a.uv = [0.25, 0.75];
        a.color = [10, 20, 30, 255];

        let mut b = a;
        b.position = [5.0, 6.0, 7.0];
        b.tangent_x = [1.0, 0.0, 0.0];
        b.tangent_y = [0.0, 1.0, 0.0];
        assert!(a.attributes_match(&b));
    }

    #[test]
    fn test_attributes_match_detects_differences() {
        let mut a = RenderVertex::zeroed();
        a.normal = [0.0, 0.0, 1.0];
        a.uv = [0.25, 0.75];
        a.color = [10, 20, 30, 255];

        let mut different_normal = a;
        different_normal.normal = [0.0, 1.0, 0.0];
        assert!(!a.attributes_match(&different_normal));

        let mut different_uv = a;
        different_uv.uv = [0.5, 0.75];
        assert!(!a.attributes_match(&different_uv));

        let mut different_color = a;
        different_color.color = [10, 20, 30, 128];
        assert!(!a.attributes_match(&different_color));
    }

    #[test]
    fn test_tangent_basis_from_normal() {
        let mut v = RenderVertex::zeroed();
        v.normal = [0.0, 0.0, 1.0];
        v.set_tangent_basis_from_normal();

        let tx = Vec3::from(v.tangent_x);
        let ty = Vec3::from(v.tangent_y);
        let n = Vec3::from(v.normal);
        assert!((tx.norm() - 1.0).abs() < 1e-5);
        assert!((ty.norm() - 1.0).abs() < 1e-5);
        // Right-handed with the normal.
        assert!((tx.cross(&ty) - n).norm() < 1e-5);
    }
}
