//! Geometric shape toolkit: point clouds, annotated triangle meshes, sub-mesh
//! extraction, and spatial transforms.
//!
//! This umbrella crate re-exports the shape-* crates, providing a unified API
//! for building and manipulating meshes that carry named per-point and
//! per-triangle data.
//!
//! # Quick Start
//!
//! ```
//! use shape::prelude::*;
//!
//! // Build an annotated mesh
//! let mut mesh = shape::types::unit_square();
//! mesh.add_point_field("height", FieldData::Scalar(vec![0.0, 0.0, 1.0, 1.0]))
//!     .unwrap();
//!
//! // Carve out the part whose points are retained by a mask
//! let mask = vec![true, true, false, true];
//! let sub = extract_submesh(&mesh, &mask, &SubmeshParams::new()).unwrap();
//! assert_eq!(sub.mesh.triangle_count(), 1);
//! assert_eq!(sub.mesh.point_count(), 3);
//!
//! // Move the result around
//! let lifted = Translation::from_components(0.0, 0.0, 1.0).apply(&sub.mesh);
//! assert_eq!(lifted.point_count(), sub.mesh.point_count());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `TriMesh`, `PointCloud`, `FieldTable`,
//!   textures, adjacency
//! - [`extract`] - Sub-mesh extraction from retained-point masks
//! - [`transform`] - Transform protocol, affine families, landmark alignment
//!
//! # Feature Flags
//!
//! - `serde` - Serialization support for the core value types

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `TriMesh`, `PointCloud`, `FieldTable`, textures.
pub use shape_types as types;

/// Sub-mesh extraction from retained-point masks.
pub use shape_extract as extract;

/// Transform protocol, affine families, landmark alignment.
pub use shape_transform as transform;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for shape processing.
///
/// This module re-exports the most commonly used types and traits.
///
/// # Usage
///
/// ```
/// use shape::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use shape_types::{
        FieldData, FieldKind, MeshVariant, PointCloud, TexCoords, Texture, TriMesh,
    };

    // Extraction
    pub use shape_extract::{SubmeshParams, SubmeshResult, extract_submesh};

    // Transforms
    pub use shape_transform::{
        Affine, Rotation, Transform, Transformable, Translation, UniformScale, align_points,
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_imports() {
        use prelude::*;

        let mesh = TriMesh::default();
        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn module_reexports() {
        let _ = types::PointCloud::default();
        let _ = extract::SubmeshParams::new();
        let _ = transform::Translation::default();
    }
}
