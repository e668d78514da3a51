//! High-level blob system owning the rest geometry, day state and frame buffers.

use super::displacement::{compute_frame_into, FrameOutput};
use super::mesh::{BaseGeometry, Vertex};
use super::state::BlobState;
use crate::error::BlobError;
use crate::params::BlobShape;

/// Blob simulation driven once per frame by the host
pub struct BlobSystem {
    base: BaseGeometry,
    state: BlobState,
    frame: FrameOutput,
    vertices: Vec<Vertex>,
    /// Bumped on every reseed
    generation: u64,
}

impl BlobSystem {
    /// Create a blob for `seed_string` on the given rest geometry
    pub fn new(base: BaseGeometry, seed_string: &str, shape: BlobShape) -> Self {
        let state = BlobState::with_shape(seed_string, shape);
        let vertex_count = base.vertex_count();
        log::info!(
            "Blob '{}' ready ({} vertices, seed {})",
            seed_string,
            vertex_count,
            state.seed
        );

        Self {
            base,
            state,
            frame: FrameOutput::with_capacity(vertex_count),
            vertices: Vec::with_capacity(vertex_count),
            generation: 0,
        }
    }

    /// Replace the day state wholesale, keeping the current shape parameters.
    ///
    /// The previous state (and its noise field) is dropped here; callers must not
    /// hold frame data across a reseed.
    pub fn reseed(&mut self, seed_string: &str) {
        let shape = self.state.shape.clone();
        self.state = BlobState::with_shape(seed_string, shape);
        self.frame.positions.clear();
        self.frame.colors.clear();
        self.frame.normals.clear();
        self.vertices.clear();
        self.generation += 1;
        log::info!("Reseeded blob with '{}' (seed {})", seed_string, self.state.seed);
    }

    /// Recompute the surface for day progress `t` and animation time `elapsed_time`.
    ///
    /// Returns the interleaved vertices ready for upload.
    pub fn update(&mut self, t: f64, elapsed_time: f64) -> Result<&[Vertex], BlobError> {
        compute_frame_into(&mut self.frame, &self.base, &self.state, t, elapsed_time)?;
        self.frame.write_vertices(&mut self.vertices);
        Ok(&self.vertices)
    }

    /// Spin about the vertical axis at `elapsed_time` (radians)
    pub fn rotation_angle(&self, elapsed_time: f64) -> f32 {
        (self.state.shape.rotation_speed * elapsed_time) as f32
    }

    pub fn state(&self) -> &BlobState {
        &self.state
    }

    pub fn base(&self) -> &BaseGeometry {
        &self.base
    }

    /// Changes whenever the state (and with it the palette) is replaced
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
