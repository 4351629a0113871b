//! Mesh variant selection.

use crate::{ShapeError, ShapeResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which backing a triangle mesh carries.
///
/// The set is closed: meshes are always one of these, and conversion
/// between them is an explicit rebuild (see `TriMesh::with_variant` and the
/// extraction parameters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeshVariant {
    /// Points and triangle list only.
    #[default]
    Plain,
    /// Plain storage plus eagerly built [`TriAdjacency`](crate::TriAdjacency)
    /// incidence maps for edge and point queries.
    Adjacency,
}

impl MeshVariant {
    /// Resolve a variant from its name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnknownVariant`] for any name other than
    /// `"plain"` or `"adjacency"`.
    ///
    /// # Example
    ///
    /// ```
    /// use shape_types::MeshVariant;
    ///
    /// assert_eq!(MeshVariant::from_name("Plain").unwrap(), MeshVariant::Plain);
    /// assert!(MeshVariant::from_name("octree").is_err());
    /// ```
    pub fn from_name(name: &str) -> ShapeResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "adjacency" => Ok(Self::Adjacency),
            _ => Err(ShapeError::UnknownVariant {
                name: name.to_string(),
            }),
        }
    }

    /// Canonical lowercase name of the variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Adjacency => "adjacency",
        }
    }
}

impl fmt::Display for MeshVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for variant in [MeshVariant::Plain, MeshVariant::Adjacency] {
            assert_eq!(MeshVariant::from_name(variant.name()).unwrap(), variant);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            MeshVariant::from_name("ADJACENCY").unwrap(),
            MeshVariant::Adjacency
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = MeshVariant::from_name("halfedge").unwrap_err();
        assert_eq!(
            err,
            ShapeError::UnknownVariant {
                name: "halfedge".to_string()
            }
        );
    }
}
