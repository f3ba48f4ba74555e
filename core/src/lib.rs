//! # Meshweld Core
//!
//! CPU-side mesh model for the meshweld render-buffer toolkit.

pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library startup. Optional; handy in examples and tools.
pub fn init() {
    log::info!("Meshweld Core v{} initialized", VERSION);
}
