//! Sub-mesh extraction.
//!
//! Derives a topologically valid sub-mesh from a boolean retained-point
//! mask: triangles survive only with all three corners retained, points the
//! surviving triangles no longer use are pruned, indices are renumbered
//! contiguously, and every attribute field is re-sliced in lock step. See
//! [`extract_submesh`].
//!
//! # Example
//!
//! ```
//! use shape_extract::{extract_submesh, SubmeshParams};
//! use shape_types::unit_square;
//!
//! let square = unit_square();
//! let result =
//!     extract_submesh(&square, &[true, true, true, false], &SubmeshParams::new()).unwrap();
//!
//! // the corner and the triangle spanning it are gone
//! assert_eq!(result.mesh.triangle_count(), 1);
//! println!("{result}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod extract;

pub use error::{ExtractError, ExtractResult};
pub use extract::{SubmeshParams, SubmeshResult, extract_submesh};
