//! Per-frame radial displacement and height-gradient coloring.
//!
//! Every call starts from the rest pose in [`BaseGeometry`], so nothing drifts
//! between frames and any (state, t, elapsed) tuple always yields the same frame.

use glam::DVec3;

use super::mesh::{compute_flat_normals, BaseGeometry, Vertex};
use super::state::BlobState;
use crate::color::lerp_rgb;
use crate::error::BlobError;

/// Weight, frequency multiplier and z-phase speed of each noise octave
const OCTAVES: [Octave; 3] = [
    Octave {
        weight: 1.0,
        frequency: 1.0,
        phase_speed: 0.1,
    },
    Octave {
        weight: 0.5,
        frequency: 2.0,
        phase_speed: 0.15,
    },
    Octave {
        weight: 0.25,
        frequency: 4.0,
        phase_speed: 0.2,
    },
];

/// Smallest radial scale a vertex may shrink to; keeps it on its own ray
pub const MIN_DISPLACEMENT: f64 = 1e-3;

/// Height range mapped onto the base → accent gradient
const COLOR_HEIGHT_OFFSET: f32 = 2.0;
const COLOR_HEIGHT_SPAN: f32 = 4.0;

struct Octave {
    weight: f64,
    frequency: f64,
    phase_speed: f64,
}

/// Displaced geometry for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    /// Flat normals recomputed from `positions`
    pub normals: Vec<[f32; 3]>,
}

impl FrameOutput {
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Interleave into GPU vertices, reusing `out`.
    pub fn write_vertices(&self, out: &mut Vec<Vertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.normals)
                .zip(&self.colors)
                .map(|((&position, &normal), &color)| Vertex {
                    position,
                    normal,
                    color,
                }),
        );
    }
}

/// Compute a fresh frame.
///
/// `t` is the day progress in [0, 1); `elapsed_time` is the animation clock in
/// seconds. Non-finite inputs are rejected before any vertex is computed.
pub fn compute_frame(
    base: &BaseGeometry,
    state: &BlobState,
    t: f64,
    elapsed_time: f64,
) -> Result<FrameOutput, BlobError> {
    let mut frame = FrameOutput::with_capacity(base.vertex_count());
    compute_frame_into(&mut frame, base, state, t, elapsed_time)?;
    Ok(frame)
}

/// Compute a frame into caller-owned buffers (resized to match `base`).
pub fn compute_frame_into(
    frame: &mut FrameOutput,
    base: &BaseGeometry,
    state: &BlobState,
    t: f64,
    elapsed_time: f64,
) -> Result<(), BlobError> {
    ensure_finite("t", t)?;
    ensure_finite("elapsed_time", elapsed_time)?;

    let amplitude = state.shape.amplitude_at(t);
    let frequency = state.shape.frequency_at(t);
    ensure_finite("amplitude", amplitude)?;
    ensure_finite("frequency", frequency)?;
    // The finest octave samples at the highest frequency and phase
    let finest = &OCTAVES[OCTAVES.len() - 1];
    ensure_finite("octave_frequency", frequency * finest.frequency)?;
    ensure_finite("octave_phase", elapsed_time * finest.phase_speed)?;

    frame.positions.clear();
    frame.colors.clear();

    let palette = &state.palette;
    for &rest in base.positions() {
        let displaced = displace_vertex(state, rest, amplitude, frequency, elapsed_time)?;

        let ct = ((displaced[1] + COLOR_HEIGHT_OFFSET) / COLOR_HEIGHT_SPAN).clamp(0.0, 1.0);
        frame.positions.push(displaced);
        let color = lerp_rgb(palette.base, palette.accent, ct);
        frame.colors.push(color.map(|c| c.clamp(0.0, 1.0)));
    }

    compute_flat_normals(&frame.positions, &mut frame.normals);
    Ok(())
}

/// Displace one rest position along its own direction from the origin.
///
/// A non-finite displacement is reported rather than clamped away.
pub fn displace_vertex(
    state: &BlobState,
    rest: [f32; 3],
    amplitude: f64,
    frequency: f64,
    elapsed_time: f64,
) -> Result<[f32; 3], BlobError> {
    let origin = DVec3::new(rest[0] as f64, rest[1] as f64, rest[2] as f64);
    let dir = origin.try_normalize().unwrap_or(DVec3::Z);

    let noise_value = fractal_noise(state, dir, frequency, elapsed_time);
    let raw = 1.0 + noise_value * amplitude;
    ensure_finite("displacement", raw)?;
    let displacement = raw.max(MIN_DISPLACEMENT);

    let moved = origin * displacement;
    Ok([moved.x as f32, moved.y as f32, moved.z as f32])
}

/// Three-octave noise sum on the unit direction, scrolling along z with time.
pub fn fractal_noise(state: &BlobState, dir: DVec3, frequency: f64, elapsed_time: f64) -> f64 {
    let noise = state.noise();
    OCTAVES
        .iter()
        .map(|o| {
            let f = frequency * o.frequency;
            noise.noise_3d(dir.x * f, dir.y * f, dir.z * f + elapsed_time * o.phase_speed)
                * o.weight
        })
        .sum()
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), BlobError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BlobError::NonFiniteInput { name, value })
    }
}
