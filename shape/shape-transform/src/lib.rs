//! Spatial transforms for point-based shapes.
//!
//! This crate provides:
//! - The transform application protocol: [`Transform`] maps point arrays,
//!   [`Transformable`] rebuilds a shape around mapped points, and
//!   [`Transform::apply`] connects any transform to any shape
//! - The affine families [`Translation`], [`UniformScale`], [`Rotation`],
//!   and [`Affine`], with composition, inversion, Jacobians, and
//!   flat-parameter round-trips via [`TransformFamily`]
//! - Landmark alignment: [`align_points`] and [`align_group`] recover rigid
//!   motions from index-paired landmarks
//!
//! # Example
//!
//! ```
//! use shape_transform::{Transform, Translation};
//! use shape_types::unit_square;
//!
//! let mesh = unit_square();
//! let lifted = Translation::from_components(0.0, 0.0, 1.0).apply(&mesh);
//!
//! assert_eq!(lifted.point_count(), mesh.point_count());
//! assert_eq!(lifted.points().point(0).unwrap().z, 1.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod affine;
mod align;
mod error;
mod transform;

pub use affine::{Affine, Rotation, Translation, UniformScale};
pub use align::{GroupAlignment, align_group, align_points};
pub use error::{AlignError, AlignResult, TransformError, TransformResult};
pub use transform::{Transform, TransformFamily, Transformable};
