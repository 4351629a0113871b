//! Named per-entity attribute fields.

use crate::{ShapeError, ShapeResult};
use hashbrown::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which entity a field annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldKind {
    /// One row per point.
    Point,
    /// One row per triangle.
    Triangle,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Triangle => write!(f, "triangle"),
        }
    }
}

/// Attribute data attached to points or triangles.
///
/// The variant fixes the per-row shape; the number of rows is the leading
/// dimension, which must always equal the count of the entities the field
/// annotates. The corner variants hold one value per triangle corner and
/// only occur as triangle fields (texture coordinates resolved per corner,
/// for instance).
///
/// # Example
///
/// ```
/// use shape_types::FieldData;
///
/// let weights = FieldData::Scalar(vec![0.2, 0.8, 1.0]);
/// assert_eq!(weights.len(), 3);
///
/// let picked = weights.gather(&[2, 0]);
/// assert_eq!(picked, FieldData::Scalar(vec![1.0, 0.2]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldData {
    /// One `f64` per row.
    Scalar(Vec<f64>),
    /// One 2-vector per row, e.g. per-point texture coordinates.
    Vec2(Vec<[f64; 2]>),
    /// One 3-vector per row, e.g. colors or normals.
    Vec3(Vec<[f64; 3]>),
    /// One 2-vector per triangle corner, e.g. per-corner texture
    /// coordinates.
    CornerVec2(Vec<[[f64; 2]; 3]>),
    /// One 3-vector per triangle corner.
    CornerVec3(Vec<[[f64; 3]; 3]>),
}

fn gather_rows<T: Copy>(rows: &[T], indices: &[u32]) -> Vec<T> {
    indices
        .iter()
        .filter_map(|&i| rows.get(i as usize).copied())
        .collect()
}

fn mask_rows<T: Copy>(rows: &[T], mask: &[bool]) -> Vec<T> {
    rows.iter()
        .zip(mask)
        .filter_map(|(row, &keep)| keep.then_some(*row))
        .collect()
}

impl FieldData {
    /// Number of rows (the leading dimension).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(rows) => rows.len(),
            Self::Vec2(rows) => rows.len(),
            Self::Vec3(rows) => rows.len(),
            Self::CornerVec2(rows) => rows.len(),
            Self::CornerVec3(rows) => rows.len(),
        }
    }

    /// Check whether the field holds no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the rows named by `indices` into a new field of the same
    /// variant, in the order given.
    ///
    /// The result never aliases this field's storage. Indices may repeat;
    /// out-of-range indices are skipped.
    #[must_use]
    pub fn gather(&self, indices: &[u32]) -> Self {
        match self {
            Self::Scalar(rows) => Self::Scalar(gather_rows(rows, indices)),
            Self::Vec2(rows) => Self::Vec2(gather_rows(rows, indices)),
            Self::Vec3(rows) => Self::Vec3(gather_rows(rows, indices)),
            Self::CornerVec2(rows) => Self::CornerVec2(gather_rows(rows, indices)),
            Self::CornerVec3(rows) => Self::CornerVec3(gather_rows(rows, indices)),
        }
    }

    /// Copy the rows where `mask` is `true` into a new field of the same
    /// variant, preserving row order.
    ///
    /// Rows and mask entries are paired positionally; rows beyond the
    /// mask's length are dropped.
    #[must_use]
    pub fn gather_mask(&self, mask: &[bool]) -> Self {
        match self {
            Self::Scalar(rows) => Self::Scalar(mask_rows(rows, mask)),
            Self::Vec2(rows) => Self::Vec2(mask_rows(rows, mask)),
            Self::Vec3(rows) => Self::Vec3(mask_rows(rows, mask)),
            Self::CornerVec2(rows) => Self::CornerVec2(mask_rows(rows, mask)),
            Self::CornerVec3(rows) => Self::CornerVec3(mask_rows(rows, mask)),
        }
    }
}

/// Named fields sharing one owner count.
///
/// A mesh holds two of these, one per [`FieldKind`]. The table itself is
/// read-only from outside the crate: inserts flow through the owning mesh,
/// which supplies the required row count.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldTable {
    fields: HashMap<String, FieldData>,
}

impl FieldTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`, enforcing the leading-dimension
    /// invariant against `required`.
    pub(crate) fn insert_checked(
        &mut self,
        kind: FieldKind,
        name: &str,
        data: FieldData,
        required: usize,
    ) -> ShapeResult<()> {
        if data.len() != required {
            return Err(ShapeError::FieldDimension {
                kind,
                name: name.to_string(),
                supplied: data.len(),
                required,
            });
        }
        self.fields.insert(name.to_string(), data);
        Ok(())
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldData> {
        self.fields.get(name)
    }

    /// Check whether a field with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over field names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(name, data)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldData)> {
        self.fields.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Number of fields in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the table holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
