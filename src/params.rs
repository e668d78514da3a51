//! Parameter definitions with units and documented defaults.
//!
//! Every tunable number lives here so the CLI can override it and tests can
//! build variants without touching the algorithms.

mod blob;
mod camera;
mod render;

// Re-export all types
pub use blob::{BlobShape, MaterialParams};
pub use camera::CameraRig;
pub use render::{RecordingConfig, RenderConfig};
