//! Mesh generators for common shapes.
//!
//! These generators produce [`CornerMesh`] values with fully populated
//! per-corner attributes. Corners copy the attributes of the vertex they
//! reference, so shared edges carry identical attributes and weld cleanly.

use std::f64::consts::PI;

use crate::math::{Vec2, Vec3, Vec3d};

use super::data::{CornerMesh, WHITE};

/// Generate a quad on the XY plane, split into two triangles.
///
/// The quad is centered at the origin with the given half-width and
/// half-height, faces +Z, and shares two vertices between its triangles.
/// UV coordinates go from (0,0) at top-left to (1,1) at bottom-right.
pub fn generate_quad(half_width: f64, half_height: f64) -> CornerMesh {
    let mut mesh = CornerMesh::with_capacity(4, 2);

    let corners = [
        (Vec3d::new(-half_width, -half_height, 0.0), Vec2::new(0.0, 1.0)),
        (Vec3d::new(half_width, -half_height, 0.0), Vec2::new(1.0, 1.0)),
        (Vec3d::new(half_width, half_height, 0.0), Vec2::new(1.0, 0.0)),
        (Vec3d::new(-half_width, half_height, 0.0), Vec2::new(0.0, 0.0)),
    ];
    for (position, _) in &corners {
        mesh.add_vertex(*position);
    }

    for tri in [[0u32, 1, 2], [2, 3, 0]] {
        mesh.add_triangle_with_attributes(
            tri,
            [Vec3::z(); 3],
            [
                corners[tri[0] as usize].1,
                corners[tri[1] as usize].1,
                corners[tri[2] as usize].1,
            ],
            [WHITE; 3],
        );
    }

    mesh
}

/// Generate a UV sphere.
///
/// Creates a sphere with the given radius, number of longitudinal
/// segments, and number of latitudinal rings. Normals are smooth (unit
/// radial direction), so every shared vertex carries identical corner
/// attributes everywhere it appears.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `segments` - Number of longitudinal segments (around the equator)
/// * `rings` - Number of latitudinal rings (from pole to pole)
pub fn generate_sphere(radius: f64, segments: u32, rings: u32) -> CornerMesh {
    let vertex_count = ((rings + 1) * (segments + 1)) as usize;
    let triangle_count = (rings * segments * 2) as usize;
    let mut mesh = CornerMesh::with_capacity(vertex_count, triangle_count);

    let mut attributes = Vec::with_capacity(vertex_count);
    for ring in 0..=rings {
        let theta = ring as f64 * PI / rings as f64;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for segment in 0..=segments {
            let phi = segment as f64 * 2.0 * PI / segments as f64;

            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            mesh.add_vertex(Vec3d::new(x * radius, y * radius, z * radius));
            attributes.push((
                Vec3::new(x as f32, y as f32, z as f32),
                Vec2::new(
                    segment as f32 / segments as f32,
                    ring as f32 / rings as f32,
                ),
            ));
        }
    }

    let mut add_triangle = |tri: [u32; 3]| {
        let normals = [
            attributes[tri[0] as usize].0,
            attributes[tri[1] as usize].0,
            attributes[tri[2] as usize].0,
        ];
        let uvs = [
            attributes[tri[0] as usize].1,
            attributes[tri[1] as usize].1,
            attributes[tri[2] as usize].1,
        ];
        mesh.add_triangle_with_attributes(tri, normals, uvs, [WHITE; 3]);
    };

    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * (segments + 1) + segment;
            let next = current + segments + 1;

            add_triangle([current, next, current + 1]);
            add_triangle([current + 1, next, next + 1]);
        }
    }

    mesh
}

/// Generate a triangle fan around a central hub vertex.
///
/// `triangle_count` triangles wind a full turn around the hub at the
/// origin, with rim vertices at the given radius on the XY plane. The hub
/// corner carries identical attributes in every triangle, which makes the
/// fan a good probe for bounded-recency welding: a builder whose cache
/// window is smaller than the fan re-emits the hub after eviction.
pub fn generate_fan(triangle_count: u32, radius: f64) -> CornerMesh {
    let mut mesh = CornerMesh::with_capacity(triangle_count as usize + 2, triangle_count as usize);

    let hub = mesh.add_vertex(Vec3d::zeros());
    let hub_uv = Vec2::new(0.5, 0.5);

    let mut rim_uvs = Vec::with_capacity(triangle_count as usize + 1);
    for i in 0..=triangle_count {
        let angle = i as f64 * 2.0 * PI / triangle_count as f64;
        let (sin, cos) = angle.sin_cos();
        mesh.add_vertex(Vec3d::new(cos * radius, sin * radius, 0.0));
        rim_uvs.push(Vec2::new(
            0.5 + 0.5 * cos as f32,
            0.5 + 0.5 * sin as f32,
        ));
    }

    for i in 0..triangle_count {
        mesh.add_triangle_with_attributes(
            [hub, i + 1, i + 2],
            [Vec3::z(); 3],
            [hub_uv, rim_uvs[i as usize], rim_uvs[i as usize + 1]],
            [WHITE; 3],
        );
    }

    mesh
}
