//! Ordered point set.

use crate::Aabb;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered set of points in 3D space.
///
/// The order is significant: every index-bearing structure in this crate
/// (triangle lists, polygon lists, per-point fields) refers to points by
/// their position in this array.
///
/// # Example
///
/// ```
/// use shape_types::{Point3, PointCloud};
///
/// let cloud = PointCloud::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ]);
///
/// assert_eq!(cloud.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloud {
    /// Point positions, in index order.
    pub points: Vec<Point3<f64>>,
}

impl PointCloud {
    /// Create a cloud from a vector of points.
    #[inline]
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Create a cloud from flat coordinate data.
    ///
    /// Returns an empty cloud if `coords.len()` is not divisible by 3.
    ///
    /// # Arguments
    ///
    /// * `coords` - Flat array of positions `[x0, y0, z0, x1, y1, z1, ...]`
    ///
    /// # Example
    ///
    /// ```
    /// use shape_types::PointCloud;
    ///
    /// let cloud = PointCloud::from_raw(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(cloud.len(), 2);
    /// assert_eq!(cloud.points[1].y, 2.0);
    /// ```
    #[must_use]
    pub fn from_raw(coords: &[f64]) -> Self {
        if coords.len() % 3 != 0 {
            return Self::default();
        }

        let points = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        Self { points }
    }

    /// Flatten the cloud back into `[x0, y0, z0, x1, y1, z1, ...]`.
    #[must_use]
    pub fn to_raw(&self) -> Vec<f64> {
        let mut coords = Vec::with_capacity(self.points.len() * 3);
        for p in &self.points {
            coords.extend_from_slice(&[p.x, p.y, p.z]);
        }
        coords
    }

    /// Number of points in the cloud.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the cloud contains no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Point3<f64>> {
        self.points.get(index)
    }

    /// Iterate over the points in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }

    /// Copy the points named by `indices` into a new cloud, in the order
    /// given.
    ///
    /// The result never aliases this cloud's storage. Indices may repeat;
    /// out-of-range indices are skipped.
    #[must_use]
    pub fn gather(&self, indices: &[u32]) -> Self {
        let points = indices
            .iter()
            .filter_map(|&i| self.points.get(i as usize).copied())
            .collect();
        Self { points }
    }

    /// Mean position of the points, or `None` for an empty cloud.
    #[must_use]
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.points.is_empty() {
            return None;
        }

        let mut sum = nalgebra::Vector3::zeros();
        for p in &self.points {
            sum += p.coords;
        }

        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        Some(Point3::from(sum / n))
    }

    /// Axis-aligned bounding box of the cloud.
    ///
    /// Returns [`Aabb::empty`] for an empty cloud.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        if self.points.is_empty() {
            return Aabb::empty();
        }
        Aabb::from_points(self.points.iter())
    }

    /// Rebuild the cloud with the whole point array passed once through
    /// `map`.
    ///
    /// This is the seam transform application flows through: `map` receives
    /// the raw coordinate array and returns the replacement array.
    #[must_use]
    pub fn map_points(&self, map: impl FnOnce(&[Point3<f64>]) -> Vec<Point3<f64>>) -> Self {
        Self {
            points: map(&self.points),
        }
    }
}

impl From<Vec<Point3<f64>>> for PointCloud {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
