//! Procedural blob: rest geometry, per-day state and per-frame displacement.

mod displacement;
mod mesh;
mod state;
mod system;

pub use displacement::{
    compute_frame, compute_frame_into, displace_vertex, fractal_noise, FrameOutput,
    MIN_DISPLACEMENT,
};
pub use mesh::{compute_flat_normals, BaseGeometry, Vertex};
pub use state::{test_seed_key, BlobState, Palette, GOLDEN_ANGLE_DEG};
pub use system::BlobSystem;
