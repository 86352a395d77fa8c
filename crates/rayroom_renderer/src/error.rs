//! Error types for scene construction and frame rendering.

use thiserror::Error;

/// Errors raised while building scene primitives.
///
/// All of these are caught at construction so that no NaN can reach the
/// intersection code later on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{0} vector has zero length")]
    DegenerateVector(&'static str),

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("rect extents must be positive, got {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },

    #[error("rect basis is not orthogonal ({0} dot product = {1})")]
    NonOrthogonalBasis(&'static str, f32),

    #[error("reflectivity must lie in [0, 1], got {0}")]
    InvalidReflectivity(f32),

    #[error("specular intensity must be non-negative, got {0}")]
    InvalidSpecular(f32),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised by a frame render request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("frame dimensions must be non-zero, got {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} entries, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;
