//! Error types for transform and alignment operations.

use thiserror::Error;

/// Result type for transform-family operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur when manipulating a transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The transform has no inverse.
    ///
    /// Raised only when an inverse is actually requested; constructing or
    /// applying a singular transform is allowed.
    #[error("{family} transform is not invertible")]
    NonInvertible {
        /// Name of the transform family.
        family: &'static str,
    },

    /// A parameter vector had the wrong length for the family.
    #[error("{family} transform takes {expected} parameters, got {supplied}")]
    ParameterCount {
        /// Name of the transform family.
        family: &'static str,
        /// Number of parameters the family requires.
        expected: usize,
        /// Number of parameters supplied.
        supplied: usize,
    },
}

/// Result type for landmark alignment.
pub type AlignResult<T> = Result<T, AlignError>;

/// Errors that can occur during landmark alignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// One of the landmark sets has no points.
    #[error("landmark sets are empty")]
    EmptyLandmarks,

    /// Paired landmark sets differ in length.
    #[error("landmark sets must have equal length: {source} vs {target}")]
    LandmarkCount {
        /// Number of source landmarks.
        source: usize,
        /// Number of target landmarks.
        target: usize,
    },

    /// SVD of the landmark covariance did not converge.
    #[error("SVD failed on the landmark covariance")]
    SvdFailed,

    /// A group alignment was requested with no sources.
    #[error("no source landmark sets to align")]
    NoSources,
}
