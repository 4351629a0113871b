//! Error types for sub-mesh extraction.

use thiserror::Error;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur during sub-mesh extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The retain mask does not have one entry per point.
    #[error("mask has {mask_len} entries, mesh has {point_count} points")]
    MaskLength {
        /// Length of the supplied mask.
        mask_len: usize,
        /// Number of points in the source mesh.
        point_count: usize,
    },

    /// A failure surfaced by the shape data model while rebuilding.
    #[error(transparent)]
    Shape(#[from] shape_types::ShapeError),
}
