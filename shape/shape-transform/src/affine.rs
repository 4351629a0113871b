//! The affine transform families.
//!
//! Four concrete families implement the [`TransformFamily`] contract:
//! [`Translation`], [`UniformScale`], [`Rotation`], and the general
//! [`Affine`]. The three specialized families promote into `Affine` via
//! `From`, so mixed pipelines can be collapsed into one map.

use nalgebra::{DVector, Matrix3, Point3, Rotation3, Unit, Vector3};

use crate::error::{TransformError, TransformResult};
use crate::transform::{Transform, TransformFamily};

fn check_parameter_count(
    family: &'static str,
    expected: usize,
    params: &DVector<f64>,
) -> TransformResult<()> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(TransformError::ParameterCount {
            family,
            expected,
            supplied: params.len(),
        })
    }
}

/// A rigid displacement by a fixed offset.
///
/// # Example
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use shape_transform::{Transform, Translation};
///
/// let shift = Translation::new(Vector3::new(0.0, 0.0, 5.0));
/// assert_eq!(shift.apply_point(&Point3::origin()), Point3::new(0.0, 0.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    /// Displacement added to every point.
    pub offset: Vector3<f64>,
}

impl Translation {
    /// Create a translation by `offset`.
    #[must_use]
    pub const fn new(offset: Vector3<f64>) -> Self {
        Self { offset }
    }

    /// Create a translation from per-axis components.
    #[must_use]
    pub fn from_components(tx: f64, ty: f64, tz: f64) -> Self {
        Self::new(Vector3::new(tx, ty, tz))
    }
}

impl Default for Translation {
    fn default() -> Self {
        Self::new(Vector3::zeros())
    }
}

impl Transform for Translation {
    fn apply_to_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| p + self.offset).collect()
    }
}

impl TransformFamily for Translation {
    const FAMILY: &'static str = "translation";
    const PARAMETER_COUNT: usize = 3;

    fn jacobian(&self, _point: &Point3<f64>) -> Matrix3<f64> {
        Matrix3::identity()
    }

    fn compose(&self, earlier: &Self) -> Self {
        Self::new(self.offset + earlier.offset)
    }

    fn inverse(&self) -> TransformResult<Self> {
        Ok(Self::new(-self.offset))
    }

    fn parameters(&self) -> DVector<f64> {
        DVector::from_column_slice(self.offset.as_slice())
    }

    fn from_parameters(params: &DVector<f64>) -> TransformResult<Self> {
        check_parameter_count(Self::FAMILY, Self::PARAMETER_COUNT, params)?;
        Ok(Self::from_components(params[0], params[1], params[2]))
    }
}

/// An isotropic scaling about the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformScale {
    /// Multiplier applied to every coordinate.
    pub factor: f64,
}

impl UniformScale {
    /// Create a uniform scaling by `factor`.
    ///
    /// A zero factor is a valid (collapsing) transform; it only fails when
    /// its inverse is requested.
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl Default for UniformScale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Transform for UniformScale {
    fn apply_to_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points
            .iter()
            .map(|p| Point3::from(p.coords * self.factor))
            .collect()
    }
}

impl TransformFamily for UniformScale {
    const FAMILY: &'static str = "uniform scale";
    const PARAMETER_COUNT: usize = 1;

    fn jacobian(&self, _point: &Point3<f64>) -> Matrix3<f64> {
        Matrix3::from_diagonal_element(self.factor)
    }

    fn compose(&self, earlier: &Self) -> Self {
        Self::new(self.factor * earlier.factor)
    }

    fn inverse(&self) -> TransformResult<Self> {
        if self.factor.abs() < f64::EPSILON {
            return Err(TransformError::NonInvertible {
                family: Self::FAMILY,
            });
        }
        Ok(Self::new(1.0 / self.factor))
    }

    fn parameters(&self) -> DVector<f64> {
        DVector::from_element(1, self.factor)
    }

    fn from_parameters(params: &DVector<f64>) -> TransformResult<Self> {
        check_parameter_count(Self::FAMILY, Self::PARAMETER_COUNT, params)?;
        Ok(Self::new(params[0]))
    }
}

/// A proper rotation about the origin.
///
/// Parameterized as a scaled-axis vector: direction is the rotation axis,
/// magnitude is the angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    rotation: Rotation3<f64>,
}

impl Rotation {
    /// Wrap an existing rotation.
    #[must_use]
    pub const fn new(rotation: Rotation3<f64>) -> Self {
        Self { rotation }
    }

    /// Create a rotation of `angle` radians around `axis`.
    ///
    /// Returns the identity rotation if `axis` is (near) zero.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3<f64>, angle: f64) -> Self {
        if axis.norm() < f64::EPSILON {
            return Self::default();
        }
        Self::new(Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle))
    }

    /// Create a rotation from a scaled-axis vector.
    #[must_use]
    pub fn from_scaled_axis(axisangle: Vector3<f64>) -> Self {
        Self::new(Rotation3::new(axisangle))
    }

    /// The underlying 3x3 rotation matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3<f64> {
        self.rotation.matrix()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(Rotation3::identity())
    }
}

impl Transform for Rotation {
    fn apply_to_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.rotation * p).collect()
    }
}

impl TransformFamily for Rotation {
    const FAMILY: &'static str = "rotation";
    const PARAMETER_COUNT: usize = 3;

    fn jacobian(&self, _point: &Point3<f64>) -> Matrix3<f64> {
        *self.rotation.matrix()
    }

    fn compose(&self, earlier: &Self) -> Self {
        Self::new(self.rotation * earlier.rotation)
    }

    fn inverse(&self) -> TransformResult<Self> {
        Ok(Self::new(self.rotation.inverse()))
    }

    fn parameters(&self) -> DVector<f64> {
        DVector::from_column_slice(self.rotation.scaled_axis().as_slice())
    }

    fn from_parameters(params: &DVector<f64>) -> TransformResult<Self> {
        check_parameter_count(Self::FAMILY, Self::PARAMETER_COUNT, params)?;
        Ok(Self::from_scaled_axis(Vector3::new(
            params[0], params[1], params[2],
        )))
    }
}

/// A general affine map: a linear part followed by a translation.
///
/// The most general family here. The specialized families promote into it
/// via `From`, and landmark alignment returns its results as `Affine`.
///
/// # Example
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use shape_transform::{Affine, Transform, TransformFamily, Translation, UniformScale};
///
/// let shift: Affine = Translation::from_components(1.0, 0.0, 0.0).into();
/// let double: Affine = UniformScale::new(2.0).into();
///
/// // Shift first, then double.
/// let both = double.compose(&shift);
/// assert_eq!(both.apply_point(&Point3::origin()), Point3::new(2.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    /// The 3x3 linear part.
    pub linear: Matrix3<f64>,
    /// The translation applied after the linear part.
    pub translation: Vector3<f64>,
}

impl Affine {
    /// Create an affine map from its linear part and translation.
    #[must_use]
    pub const fn new(linear: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// The identity map.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform for Affine {
    fn apply_to_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points
            .iter()
            .map(|p| Point3::from(self.linear * p.coords + self.translation))
            .collect()
    }
}

impl TransformFamily for Affine {
    const FAMILY: &'static str = "affine";
    const PARAMETER_COUNT: usize = 12;

    fn jacobian(&self, _point: &Point3<f64>) -> Matrix3<f64> {
        self.linear
    }

    fn compose(&self, earlier: &Self) -> Self {
        Self::new(
            self.linear * earlier.linear,
            self.linear * earlier.translation + self.translation,
        )
    }

    fn inverse(&self) -> TransformResult<Self> {
        let inv = self
            .linear
            .try_inverse()
            .ok_or(TransformError::NonInvertible {
                family: Self::FAMILY,
            })?;
        Ok(Self::new(inv, -(inv * self.translation)))
    }

    /// Row-major linear part in the first nine entries, translation in the
    /// last three.
    fn parameters(&self) -> DVector<f64> {
        let mut params = DVector::zeros(12);
        for row in 0..3 {
            for col in 0..3 {
                params[row * 3 + col] = self.linear[(row, col)];
            }
            params[9 + row] = self.translation[row];
        }
        params
    }

    fn from_parameters(params: &DVector<f64>) -> TransformResult<Self> {
        check_parameter_count(Self::FAMILY, Self::PARAMETER_COUNT, params)?;
        let mut linear = Matrix3::zeros();
        for row in 0..3 {
            for col in 0..3 {
                linear[(row, col)] = params[row * 3 + col];
            }
        }
        let translation = Vector3::new(params[9], params[10], params[11]);
        Ok(Self::new(linear, translation))
    }
}

impl From<Translation> for Affine {
    fn from(t: Translation) -> Self {
        Self::new(Matrix3::identity(), t.offset)
    }
}

impl From<UniformScale> for Affine {
    fn from(s: UniformScale) -> Self {
        Self::new(Matrix3::from_diagonal_element(s.factor), Vector3::zeros())
    }
}

impl From<Rotation> for Affine {
    fn from(r: Rotation) -> Self {
        Self::new(*r.matrix(), Vector3::zeros())
    }
}
