//! Landmark-based rigid alignment.
//!
//! Recovers the rigid motion that best maps one landmark set onto another
//! (least-squares over index-paired points, SVD-based), returned as an
//! [`Affine`] so it participates in the application protocol.

use nalgebra::{Matrix3, Point3, Vector3};
use tracing::debug;

use crate::affine::Affine;
use crate::error::{AlignError, AlignResult};
use crate::transform::Transform;

/// Compute the rigid transform that best aligns `source` onto `target`.
///
/// Landmarks are paired by index. The returned transform minimizes the sum
/// of squared distances between mapped source landmarks and their targets:
/// both sets are centered, the covariance is decomposed by SVD, and the
/// resulting orthogonal map is corrected to a proper rotation if the best
/// orthogonal fit is a reflection.
///
/// # Errors
///
/// Returns an error if either landmark set is empty, if the sets differ in
/// length, or if the SVD of the covariance fails.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use shape_transform::{Transform, align_points};
///
/// let source = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let target: Vec<_> = source
///     .iter()
///     .map(|p| Point3::new(p.x + 2.0, p.y, p.z))
///     .collect();
///
/// let transform = align_points(&source, &target).unwrap();
/// let moved = transform.apply_point(&source[0]);
/// assert!((moved - target[0]).norm() < 1e-9);
/// ```
pub fn align_points(source: &[Point3<f64>], target: &[Point3<f64>]) -> AlignResult<Affine> {
    if source.is_empty() || target.is_empty() {
        return Err(AlignError::EmptyLandmarks);
    }
    if source.len() != target.len() {
        return Err(AlignError::LandmarkCount {
            source: source.len(),
            target: target.len(),
        });
    }

    let source_centroid = centroid(source);
    let target_centroid = centroid(target);

    let mut covariance = Matrix3::zeros();
    for (s, t) in source.iter().zip(target) {
        covariance += (s.coords - source_centroid) * (t.coords - target_centroid).transpose();
    }

    let svd = covariance.svd(true, true);
    let u = svd.u.ok_or(AlignError::SvdFailed)?;
    let v_t = svd.v_t.ok_or(AlignError::SvdFailed)?;

    let mut rotation = v_t.transpose() * u.transpose();

    // A negative determinant means the best orthogonal map is a reflection;
    // flip the least-significant singular direction to stay a rotation.
    if rotation.determinant() < 0.0 {
        let mut v = v_t.transpose();
        for i in 0..3 {
            v[(i, 2)] = -v[(i, 2)];
        }
        rotation = v * u.transpose();
    }

    let translation = target_centroid - rotation * source_centroid;

    debug!(landmarks = source.len(), "Aligned landmark set");

    Ok(Affine::new(rotation, translation))
}

fn centroid(points: &[Point3<f64>]) -> Vector3<f64> {
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    points.iter().map(|p| p.coords).sum::<Vector3<f64>>() / n
}

/// The result of aligning a group of landmark sets to a shared target.
///
/// Holds the target, one transform per source, and each source after
/// alignment, addressed by the source's position in the input slice.
#[derive(Debug, Clone)]
pub struct GroupAlignment {
    target: Vec<Point3<f64>>,
    transforms: Vec<Affine>,
    aligned: Vec<Vec<Point3<f64>>>,
}

impl GroupAlignment {
    /// The target landmarks every source was aligned to.
    #[must_use]
    pub fn target(&self) -> &[Point3<f64>] {
        &self.target
    }

    /// Number of aligned sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the group holds no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// The transform computed for source `index`.
    #[must_use]
    pub fn transform(&self, index: usize) -> Option<&Affine> {
        self.transforms.get(index)
    }

    /// Source `index` after alignment.
    #[must_use]
    pub fn aligned(&self, index: usize) -> Option<&[Point3<f64>]> {
        self.aligned.get(index).map(Vec::as_slice)
    }
}

/// Align every source landmark set to a shared target.
///
/// With `target = None` the target defaults to the per-landmark mean of the
/// sources, the usual choice when no reference shape exists. All sources
/// (and the explicit target, when given) must have the same number of
/// landmarks.
///
/// # Errors
///
/// Returns an error if `sources` is empty, if any landmark set is empty or
/// differs in length from the others, or if any single alignment fails.
pub fn align_group(
    sources: &[Vec<Point3<f64>>],
    target: Option<&[Point3<f64>]>,
) -> AlignResult<GroupAlignment> {
    let first = sources.first().ok_or(AlignError::NoSources)?;
    let landmark_count = first.len();
    if landmark_count == 0 {
        return Err(AlignError::EmptyLandmarks);
    }
    for source in sources {
        if source.len() != landmark_count {
            return Err(AlignError::LandmarkCount {
                source: source.len(),
                target: landmark_count,
            });
        }
    }

    let target: Vec<Point3<f64>> = match target {
        Some(t) => {
            if t.len() != landmark_count {
                return Err(AlignError::LandmarkCount {
                    source: landmark_count,
                    target: t.len(),
                });
            }
            t.to_vec()
        }
        None => mean_landmarks(sources, landmark_count),
    };

    let mut transforms = Vec::with_capacity(sources.len());
    let mut aligned = Vec::with_capacity(sources.len());
    for source in sources {
        let transform = align_points(source, &target)?;
        aligned.push(transform.apply_to_points(source));
        transforms.push(transform);
    }

    debug!(
        sources = sources.len(),
        landmarks = landmark_count,
        "Aligned landmark group"
    );

    Ok(GroupAlignment {
        target,
        transforms,
        aligned,
    })
}

fn mean_landmarks(sources: &[Vec<Point3<f64>>], landmark_count: usize) -> Vec<Point3<f64>> {
    #[allow(clippy::cast_precision_loss)]
    let n = sources.len() as f64;
    (0..landmark_count)
        .map(|i| {
            let sum: Vector3<f64> = sources.iter().map(|s| s[i].coords).sum();
            Point3::from(sum / n)
        })
        .collect()
}
