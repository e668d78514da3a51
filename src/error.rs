//! Error types for the procedural core.

/// Errors reported by the blob core.
///
/// Every operation in the core is total over well-formed inputs; these variants
/// cover the inputs that would otherwise leak NaN or out-of-range values into the
/// render buffers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlobError {
    #[error("time override must be within 0..=86399 seconds, got {0}")]
    TimeOverrideOutOfRange(u32),

    #[error("non-finite frame input: {name} = {value}")]
    NonFiniteInput { name: &'static str, value: f64 },
}
