//! Error types for cloth construction and configuration.

use thiserror::Error;

/// Errors that can occur while building or configuring a cloth.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    /// Grid must be at least 2x2.
    #[error("grid must be at least 2x2 (got {cols}x{rows})")]
    InvalidGridDimensions { cols: usize, rows: usize },
    /// Rest spacing must be positive and finite.
    #[error("grid spacing must be positive and finite (got {0})")]
    InvalidSpacing(f32),
    /// Damping must be in (0, 1].
    #[error("damping must be in (0, 1] (got {0})")]
    InvalidDamping(f32),
    /// Wind magnitude must be non-negative and finite.
    #[error("wind magnitude must be non-negative and finite (got {0})")]
    InvalidWindMagnitude(f32),
    /// Grid coordinate is outside the grid.
    #[error("particle ({col}, {row}) out of bounds for {cols}x{rows} grid")]
    ParticleOutOfBounds { col: usize, row: usize, cols: usize, rows: usize },
}

/// Convenience alias for `Result<T, ClothError>`.
pub type ClothResult<T> = Result<T, ClothError>;
