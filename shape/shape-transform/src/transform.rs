//! The transform application protocol.
//!
//! [`Transform`] is the mapping capability: anything that can push an array
//! of points through itself. [`Transformable`] is the rebuild capability:
//! anything that can hand its points to such a mapping and reassemble itself
//! around the result. [`Transform::apply`] connects the two, so every
//! transform works on every transformable shape without either side knowing
//! the other's concrete type.

use nalgebra::{DVector, Matrix3, Point3};
use shape_types::{PointCloud, TriMesh};

use crate::error::TransformResult;

/// A spatial mapping over 3D points.
///
/// The array form is the one primitive; everything else in the protocol is
/// built on it. Implementors only decide what happens to coordinates, never
/// how a particular shape type is reassembled.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use shape_transform::{Transform, Translation};
///
/// let shift = Translation::from_components(1.0, 0.0, 0.0);
/// let moved = shift.apply_to_points(&[Point3::origin()]);
/// assert_eq!(moved[0], Point3::new(1.0, 0.0, 0.0));
/// ```
pub trait Transform {
    /// Map every point in `points`, returning the mapped array in order.
    fn apply_to_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>>;

    /// Map a single point.
    fn apply_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.apply_to_points(std::slice::from_ref(point))
            .into_iter()
            .next()
            .unwrap_or(*point)
    }

    /// Apply this transform to any [`Transformable`] target, returning the
    /// rebuilt target.
    ///
    /// The target decides how to rebuild itself; the transform only supplies
    /// the point mapping. Bare `Vec<Point3<f64>>` arrays are transformable
    /// too, so untyped coordinate data needs no wrapper.
    ///
    /// # Example
    ///
    /// ```
    /// use shape_transform::{Transform, Translation};
    /// use shape_types::unit_square;
    ///
    /// let lifted = Translation::from_components(0.0, 0.0, 1.0).apply(&unit_square());
    /// assert_eq!(lifted.triangle_count(), 2);
    /// ```
    fn apply<T: Transformable>(&self, target: &T) -> T
    where
        Self: Sized,
    {
        target.transform_points(&mut |points| self.apply_to_points(points))
    }
}

/// A shape that can rebuild itself around mapped points.
///
/// The single method receives the point mapping as a closure and returns the
/// rebuilt shape, with everything that is not coordinates (topology, fields,
/// textures) carried over unchanged. The mapping must preserve the point
/// count.
pub trait Transformable: Sized {
    /// Rebuild `self` with its points replaced by `map`'s output.
    fn transform_points(&self, map: &mut dyn FnMut(&[Point3<f64>]) -> Vec<Point3<f64>>) -> Self;
}

impl Transformable for TriMesh {
    fn transform_points(&self, map: &mut dyn FnMut(&[Point3<f64>]) -> Vec<Point3<f64>>) -> Self {
        self.map_points(|points| map(points))
    }
}

impl Transformable for PointCloud {
    fn transform_points(&self, map: &mut dyn FnMut(&[Point3<f64>]) -> Vec<Point3<f64>>) -> Self {
        self.map_points(|points| map(points))
    }
}

impl Transformable for Vec<Point3<f64>> {
    fn transform_points(&self, map: &mut dyn FnMut(&[Point3<f64>]) -> Vec<Point3<f64>>) -> Self {
        map(self)
    }
}

/// The full contract of a parametric transform family.
///
/// Beyond point mapping, a family knows its spatial derivative, composes and
/// inverts within itself, and round-trips through a flat parameter vector:
/// `Self::from_parameters(&t.parameters())` rebuilds a transform with `t`'s
/// mapping.
pub trait TransformFamily: Transform + Sized {
    /// Family name used in error messages.
    const FAMILY: &'static str;

    /// Length of the family's parameter vector.
    const PARAMETER_COUNT: usize;

    /// The spatial Jacobian of the mapping at `point`.
    ///
    /// Constant over space for the affine families here, but evaluated at a
    /// point so curved families can join the protocol later.
    fn jacobian(&self, point: &Point3<f64>) -> Matrix3<f64>;

    /// Compose with another transform of the same family.
    ///
    /// `earlier` is applied first, then `self`: the result maps `p` to
    /// `self(earlier(p))`.
    #[must_use]
    fn compose(&self, earlier: &Self) -> Self;

    /// The inverse transform.
    ///
    /// # Errors
    ///
    /// Returns the non-invertible error if the mapping cannot be undone.
    /// Singular transforms may be constructed and applied freely; only
    /// inversion reports them.
    fn inverse(&self) -> TransformResult<Self>;

    /// Flatten into the family's parameter vector.
    fn parameters(&self) -> DVector<f64>;

    /// Rebuild from a parameter vector.
    ///
    /// # Errors
    ///
    /// Returns the parameter-count error if `params` does not have exactly
    /// `PARAMETER_COUNT` entries.
    fn from_parameters(params: &DVector<f64>) -> TransformResult<Self>;
}
