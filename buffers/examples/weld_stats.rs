//! Prints vertex-welding statistics for a few generated meshes.
//!
//! Run with `RUST_LOG=debug` to also see the builder's per-mesh weld log:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example weld_stats
//! ```

use meshweld_buffers::{RecencyCache, build_fastest, build_local_optimize};
use meshweld_core::mesh::SourceMesh;
use meshweld_core::mesh::generators::{generate_fan, generate_quad, generate_sphere};

fn main() {
    env_logger::init();
    meshweld_core::init();

    let meshes = [
        ("quad", generate_quad(1.0, 1.0)),
        ("fan_40", generate_fan(40, 1.0)),
        ("sphere_16x8", generate_sphere(1.0, 16, 8)),
        ("sphere_64x32", generate_sphere(1.0, 64, 32)),
    ];

    for (label, mesh) in &meshes {
        let fastest = build_fastest(mesh);
        let welded = build_local_optimize(mesh, RecencyCache::DEFAULT_CAPACITY);
        let saved = fastest.vertex_count() - welded.vertex_count();
        println!(
            "{label}: {} triangles, {} -> {} vertices ({saved} welded away)",
            mesh.triangle_count(),
            fastest.vertex_count(),
            welded.vertex_count(),
        );
    }
}
