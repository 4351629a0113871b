//! Error types for the shape data model.

use crate::field::FieldKind;
use thiserror::Error;

/// Result type for shape operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Errors that can occur while building or mutating shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A field's leading dimension does not match the count of the entities
    /// it annotates.
    #[error("{kind} field '{name}' has {supplied} rows, mesh requires {required}")]
    FieldDimension {
        /// Which table the field was destined for.
        kind: FieldKind,
        /// Name the field was being stored under.
        name: String,
        /// Leading dimension of the supplied data.
        supplied: usize,
        /// Leading dimension the mesh requires.
        required: usize,
    },

    /// Texture coordinates do not fit the binding they were supplied as.
    #[error("texture coordinates have {supplied} rows, {kind} binding requires {required}")]
    TextureShape {
        /// Scope of the attempted binding.
        kind: FieldKind,
        /// Number of coordinate rows supplied.
        supplied: usize,
        /// Number of rows the binding requires.
        required: usize,
    },

    /// An index list references an entry beyond its target array.
    #[error("element {element} references index {index}, only {count} entries exist")]
    IndexOutOfRange {
        /// Position of the offending triangle or polygon in its list.
        element: usize,
        /// The out-of-range index.
        index: u32,
        /// Number of entries actually available.
        count: usize,
    },

    /// A mesh variant name was not recognized.
    #[error("unknown mesh variant '{name}'")]
    UnknownVariant {
        /// The rejected name.
        name: String,
    },
}
