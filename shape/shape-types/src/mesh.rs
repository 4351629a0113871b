//! Indexed triangle mesh with attribute fields and texture binding.

use crate::{
    Aabb, FieldData, FieldKind, FieldTable, MeshVariant, PointCloud, ShapeError, ShapeResult,
    TCOORDS, TexCoords, Texture, TriAdjacency,
};
use nalgebra::Point3;

/// An indexed triangle mesh.
///
/// The mesh owns a [`PointCloud`] and a triangle list of indices into it,
/// validated at construction. Two [`FieldTable`]s carry named attribute
/// data, one row per point and one row per triangle; every insert enforces
/// the row count against the owning entity count. A texture is referenced,
/// not owned, via a shared [`Texture`] handle.
///
/// Geometry and topology are fixed at construction. The mutating surface is
/// limited to adding fields and attaching a texture; anything topological
/// (such as taking a sub-mesh) builds a new mesh.
///
/// # Example
///
/// ```
/// use shape_types::{FieldData, PointCloud, TriMesh};
///
/// let cloud = PointCloud::from_raw(&[
///     0.0, 0.0, 0.0,
///     1.0, 0.0, 0.0,
///     0.0, 1.0, 0.0,
/// ]);
/// let mut mesh = TriMesh::new(cloud, vec![[0, 1, 2]]).unwrap();
///
/// mesh.add_point_field("weight", FieldData::Scalar(vec![1.0, 0.5, 0.0]))
///     .unwrap();
///
/// assert_eq!(mesh.point_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    cloud: PointCloud,
    trilist: Vec<[u32; 3]>,
    point_fields: FieldTable,
    triangle_fields: FieldTable,
    texture: Option<Texture>,
    adjacency: Option<TriAdjacency>,
}

/// Check every index in `trilist` against the point count.
fn validate_trilist(point_count: usize, trilist: &[[u32; 3]]) -> ShapeResult<()> {
    for (element, triangle) in trilist.iter().enumerate() {
        for &index in triangle {
            if index as usize >= point_count {
                return Err(ShapeError::IndexOutOfRange {
                    element,
                    index,
                    count: point_count,
                });
            }
        }
    }
    Ok(())
}

impl TriMesh {
    /// Create a plain mesh from points and a triangle list.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IndexOutOfRange`] if any triangle references a
    /// point index outside the cloud.
    pub fn new(points: PointCloud, trilist: Vec<[u32; 3]>) -> ShapeResult<Self> {
        Self::with_variant(points, trilist, MeshVariant::Plain)
    }

    /// Create a mesh with the requested backing variant.
    ///
    /// The [`MeshVariant::Adjacency`] variant builds its incidence maps
    /// eagerly, here.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IndexOutOfRange`] if any triangle references a
    /// point index outside the cloud.
    pub fn with_variant(
        points: PointCloud,
        trilist: Vec<[u32; 3]>,
        variant: MeshVariant,
    ) -> ShapeResult<Self> {
        validate_trilist(points.len(), &trilist)?;

        let adjacency = match variant {
            MeshVariant::Plain => None,
            MeshVariant::Adjacency => Some(TriAdjacency::build(&trilist)),
        };

        Ok(Self {
            cloud: points,
            trilist,
            point_fields: FieldTable::new(),
            triangle_fields: FieldTable::new(),
            texture: None,
            adjacency,
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

    /// The triangle list.
    #[inline]
    #[must_use]
    pub fn trilist(&self) -> &[[u32; 3]] {
        &self.trilist
    }

    /// Number of triangles. Derived from the triangle list, never stored.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.trilist.len()
    }

    /// A triangle's point indices, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        self.trilist.get(index).copied()
    }

    /// A triangle's corner positions, resolved through the cloud.
    #[must_use]
    pub fn triangle_points(&self, index: usize) -> Option<[Point3<f64>; 3]> {
        self.trilist.get(index).map(|&[a, b, c]| {
            [
                self.cloud.points[a as usize],
                self.cloud.points[b as usize],
                self.cloud.points[c as usize],
            ]
        })
    }

    /// Whether the mesh has no drawable surface.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cloud.is_empty() || self.trilist.is_empty()
    }

    /// Which backing this mesh carries.
    #[inline]
    #[must_use]
    pub fn variant(&self) -> MeshVariant {
        if self.adjacency.is_some() {
            MeshVariant::Adjacency
        } else {
            MeshVariant::Plain
        }
    }

    /// Incidence maps, present only on the adjacency variant.
    #[inline]
    #[must_use]
    pub fn adjacency(&self) -> Option<&TriAdjacency> {
        self.adjacency.as_ref()
    }

    /// Per-point fields.
    #[inline]
    #[must_use]
    pub fn point_fields(&self) -> &FieldTable {
        &self.point_fields
    }

    /// Per-triangle fields.
    #[inline]
    #[must_use]
    pub fn triangle_fields(&self) -> &FieldTable {
        &self.triangle_fields
    }

    /// Insert or overwrite a named per-point field.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::FieldDimension`] if the field's row count does
    /// not equal the point count; the error carries both sizes.
    pub fn add_point_field(&mut self, name: &str, data: FieldData) -> ShapeResult<()> {
        self.point_fields
            .insert_checked(FieldKind::Point, name, data, self.cloud.len())
    }

    /// Insert or overwrite a named per-triangle field.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::FieldDimension`] if the field's row count does
    /// not equal the triangle count; the error carries both sizes.
    pub fn add_triangle_field(&mut self, name: &str, data: FieldData) -> ShapeResult<()> {
        self.triangle_fields
            .insert_checked(FieldKind::Triangle, name, data, self.trilist.len())
    }

    /// The texture handle, if one is attached.
    #[inline]
    #[must_use]
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Store a texture handle without resolving coordinates.
    ///
    /// Derived meshes use this to carry their source's binding over; the
    /// resolving path is [`attach_texture`](Self::attach_texture).
    #[inline]
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    /// Attach a texture and resolve its coordinates into a `"tcoords"`
    /// field.
    ///
    /// The handle is stored on the mesh first, before coordinate
    /// resolution; a coordinate failure leaves the texture attached with no
    /// `"tcoords"` field stored. Resolution by form:
    ///
    /// - [`TexCoords::Indexed`]: the private triangle list gathers the
    ///   coordinate array into one `[ [f64; 2]; 3 ]` row per mesh triangle,
    ///   stored as a triangle field.
    /// - [`TexCoords::PerPoint`]: one row per point, stored as a point
    ///   field.
    /// - [`TexCoords::PerCorner`]: one row per triangle, stored as a
    ///   triangle field.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::TextureShape`] when a per-point or per-corner array
    ///   has the wrong row count (both sizes reported).
    /// - [`ShapeError::IndexOutOfRange`] when the private triangle list
    ///   indexes outside its coordinate array.
    /// - [`ShapeError::FieldDimension`] when the private triangle list does
    ///   not have one row per mesh triangle.
    pub fn attach_texture(&mut self, texture: Texture, coords: TexCoords) -> ShapeResult<()> {
        self.texture = Some(texture);

        match coords {
            TexCoords::Indexed { coords, trilist } => {
                let mut corners = Vec::with_capacity(trilist.len());
                for (element, &[a, b, c]) in trilist.iter().enumerate() {
                    let mut corner = [[0.0; 2]; 3];
                    for (slot, index) in [a, b, c].into_iter().enumerate() {
                        corner[slot] = *coords.get(index as usize).ok_or(
                            ShapeError::IndexOutOfRange {
                                element,
                                index,
                                count: coords.len(),
                            },
                        )?;
                    }
                    corners.push(corner);
                }
                self.add_triangle_field(TCOORDS, FieldData::CornerVec2(corners))
            }
            TexCoords::PerPoint(coords) => {
                if coords.len() != self.cloud.len() {
                    return Err(ShapeError::TextureShape {
                        kind: FieldKind::Point,
                        supplied: coords.len(),
                        required: self.cloud.len(),
                    });
                }
                self.add_point_field(TCOORDS, FieldData::Vec2(coords))
            }
            TexCoords::PerCorner(coords) => {
                if coords.len() != self.trilist.len() {
                    return Err(ShapeError::TextureShape {
                        kind: FieldKind::Triangle,
                        supplied: coords.len(),
                        required: self.trilist.len(),
                    });
                }
                self.add_triangle_field(TCOORDS, FieldData::CornerVec2(coords))
            }
        }
    }

    /// Axis-aligned bounding box of the points.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.cloud.bounds()
    }

    /// Rebuild the mesh with the whole point array passed once through
    /// `map`, keeping the triangle list, fields, texture binding, and
    /// variant.
    ///
    /// This is the seam transform application flows through: `map` receives
    /// the raw coordinate array and must return one output point per input
    /// point, so the triangle list keeps indexing the same space.
    ///
    /// # Panics
    ///
    /// Panics if `map` changes the number of points.
    #[must_use]
    pub fn map_points(&self, map: impl FnOnce(&[Point3<f64>]) -> Vec<Point3<f64>>) -> Self {
        let mapped = self.cloud.map_points(map);
        assert_eq!(
            mapped.len(),
            self.cloud.len(),
            "point mapping must preserve the point count"
        );

        Self {
            cloud: mapped,
            trilist: self.trilist.clone(),
            point_fields: self.point_fields.clone(),
            triangle_fields: self.triangle_fields.clone(),
            texture: self.texture.clone(),
            adjacency: self.adjacency.clone(),
        }
    }
}

/// A unit square in the XY plane: four points, two triangles.
///
/// Handy as a small fixture; the diagonal runs from point 0 to point 3.
///
/// # Example
///
/// ```
/// use shape_types::unit_square;
///
/// let square = unit_square();
/// assert_eq!(square.point_count(), 4);
/// assert_eq!(square.triangle_count(), 2);
/// ```
#[must_use]
pub fn unit_square() -> TriMesh {
    let cloud = PointCloud::from_raw(&[
        0.0, 0.0, 0.0, // 0
        1.0, 0.0, 0.0, // 1
        0.0, 1.0, 0.0, // 2
        1.0, 1.0, 0.0, // 3
    ]);

    TriMesh::new(cloud, vec![[0, 1, 3], [0, 3, 2]]).unwrap_or_default()
}
