//! Core shape types.
//!
//! This crate provides the foundational data model for the shape workspace:
//!
//! - [`PointCloud`] - An ordered set of 3D points; the index space
//! - [`TriMesh`] - An indexed triangle mesh with attribute fields and an
//!   optional texture binding
//! - [`FieldData`] / [`FieldTable`] - Named per-point and per-triangle
//!   attribute arrays, row counts enforced
//! - [`Texture`] / [`TexCoords`] - Shared texture handles and the
//!   recognized coordinate forms
//! - [`TriAdjacency`] - Edge and point incidence maps backing the adjacency
//!   mesh variant
//! - [`PolyMesh`] - A minimal variable-arity polygon mesh
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`MeshView`] - The borrowed bundle a renderer consumes
//!
//! # Index Discipline
//!
//! Triangle and polygon lists index into their mesh's point cloud and are
//! validated at construction; named fields must have exactly one row per
//! point or per triangle. Operations that change the point set (such as
//! sub-mesh extraction in `shape-extract`) rebuild every dependent
//! structure rather than patching in place.
//!
//! # Example
//!
//! ```
//! use shape_types::{FieldData, Point3, PointCloud, TriMesh};
//!
//! let cloud = PointCloud::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]);
//!
//! let mut mesh = TriMesh::new(cloud, vec![[0, 1, 2]]).unwrap();
//! mesh.add_triangle_field("area", FieldData::Scalar(vec![0.5])).unwrap();
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod adjacency;
mod bounds;
mod cloud;
mod error;
mod field;
mod mesh;
mod polymesh;
mod texture;
mod variant;
mod view;

// Re-export core types
pub use adjacency::TriAdjacency;
pub use bounds::Aabb;
pub use cloud::PointCloud;
pub use error::{ShapeError, ShapeResult};
pub use field::{FieldData, FieldKind, FieldTable};
pub use mesh::{TriMesh, unit_square};
pub use polymesh::PolyMesh;
pub use texture::{TCOORDS, TexCoords, Texture, TextureImage};
pub use variant::MeshVariant;
pub use view::{COLOR, MeshView};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
