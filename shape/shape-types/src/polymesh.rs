//! Polygon mesh stub.

use crate::{Aabb, PointCloud, ShapeError, ShapeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh of variable-arity polygons.
///
/// The polygonal sibling of [`TriMesh`](crate::TriMesh): the same point
/// cloud foundation with faces of any arity. Deliberately minimal; the
/// algorithms in this workspace operate on triangle meshes.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    cloud: PointCloud,
    polygons: Vec<Vec<u32>>,
}

impl PolyMesh {
    /// Create a polygon mesh from points and polygon index lists.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IndexOutOfRange`] if any polygon references a
    /// point index outside the cloud.
    pub fn new(points: PointCloud, polygons: Vec<Vec<u32>>) -> ShapeResult<Self> {
        for (element, polygon) in polygons.iter().enumerate() {
            for &index in polygon {
                if index as usize >= points.len() {
                    return Err(ShapeError::IndexOutOfRange {
                        element,
                        index,
                        count: points.len(),
                    });
                }
            }
        }

        Ok(Self {
            cloud: points,
            polygons,
        })
    }

    /// The underlying point cloud.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &PointCloud {
        &self.cloud
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.cloud.len()
    }

    /// The polygon index lists.
    #[inline]
    #[must_use]
    pub fn polygons(&self) -> &[Vec<u32>] {
        &self.polygons
    }

    /// A polygon's point indices, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn polygon(&self, index: usize) -> Option<&[u32]> {
        self.polygons.get(index).map(Vec::as_slice)
    }

    /// Number of polygons.
    #[inline]
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the mesh has no drawable surface.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cloud.is_empty() || self.polygons.is_empty()
    }

    /// Axis-aligned bounding box of the points.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.cloud.bounds()
    }
}
