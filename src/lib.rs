//! timeblob library - deterministic daily blob generation and its rendering host

pub mod blob;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod color;
pub mod error;
pub mod noise;
pub mod params;
pub mod random;
pub mod rendering;

pub use blob::{compute_frame, BaseGeometry, BlobState, BlobSystem, FrameOutput};
pub use clock::DayClock;
pub use error::BlobError;
pub use noise::NoiseField;
pub use random::{hash_seed, SeededRandom};
