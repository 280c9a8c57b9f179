//! Error types for mesh generation

use thiserror::Error;

/// Errors surfaced by the mesh generators.
///
/// Generation is deterministic and pure, so every failure is a caller error
/// reported immediately; nothing is retried or silently recovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A generation parameter was outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vector with zero length reached a normalization step.
    ///
    /// Unreachable with valid unit-icosahedron input, but guarded so a bad
    /// caller-provided base surfaces as an error instead of NaN positions.
    #[error("cannot normalize zero-length vector")]
    ZeroLengthVector,
}
