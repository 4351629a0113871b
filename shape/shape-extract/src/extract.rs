//! Mask-driven sub-mesh extraction.

// Mesh indices share the u32 point-index width
#![allow(clippy::cast_possible_truncation)]

use shape_types::{MeshVariant, TriMesh};
use tracing::debug;

use crate::{ExtractError, ExtractResult};

/// Parameters for sub-mesh extraction.
///
/// # Example
///
/// ```
/// use shape_extract::SubmeshParams;
/// use shape_types::MeshVariant;
///
/// let params = SubmeshParams::new().with_variant(MeshVariant::Adjacency);
/// assert_eq!(params.variant, Some(MeshVariant::Adjacency));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmeshParams {
    /// Backing variant for the extracted mesh; `None` inherits the
    /// source's variant.
    pub variant: Option<MeshVariant>,
}

impl SubmeshParams {
    /// Default parameters: the extracted mesh inherits the source's
    /// variant.
    #[must_use]
    pub const fn new() -> Self {
        Self { variant: None }
    }

    /// Request a specific backing variant for the extracted mesh.
    #[must_use]
    pub const fn with_variant(mut self, variant: MeshVariant) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// Result of a sub-mesh extraction.
#[derive(Debug, Clone)]
pub struct SubmeshResult {
    /// The extracted mesh.
    pub mesh: TriMesh,

    /// Points in the source mesh.
    pub source_points: usize,

    /// Triangles in the source mesh.
    pub source_triangles: usize,

    /// Points the mask deselected directly.
    pub masked_out: usize,

    /// Mask-retained points dropped because no surviving triangle uses
    /// them.
    pub orphaned: usize,
}

impl SubmeshResult {
    /// Points in the extracted mesh.
    #[must_use]
    pub fn kept_points(&self) -> usize {
        self.mesh.point_count()
    }

    /// Triangles in the extracted mesh.
    #[must_use]
    pub fn kept_triangles(&self) -> usize {
        self.mesh.triangle_count()
    }
}

impl std::fmt::Display for SubmeshResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Extraction: {} → {} points, {} → {} triangles ({} masked out, {} orphaned)",
            self.source_points,
            self.kept_points(),
            self.source_triangles,
            self.kept_triangles(),
            self.masked_out,
            self.orphaned
        )
    }
}

/// Derive the sub-mesh induced by a retained-point mask.
///
/// A triangle survives only if the mask retains all three of its points.
/// The extracted point set is then recomputed as exactly the points the
/// surviving triangles use, so mask-retained points whose triangles all
/// died are dropped too (second-order orphans). Point indices are
/// renumbered contiguously in their original relative order, every point
/// and triangle field is re-sliced to the survivors under its original
/// name, and a bound texture is carried over by handle.
///
/// A mask whose survivors induce no triangles yields an empty mesh (with
/// every field present at zero rows), not an error.
///
/// The source mesh is never modified, and the extracted mesh shares no
/// array storage with it.
///
/// # Arguments
///
/// * `mesh` - Source mesh
/// * `mask` - One flag per source point, `true` to retain
/// * `params` - See [`SubmeshParams`]
///
/// # Errors
///
/// Returns [`ExtractError::MaskLength`] if the mask length differs from
/// the source point count. Failures while rebuilding the mesh surface as
/// [`ExtractError::Shape`].
///
/// # Example
///
/// ```
/// use shape_extract::{extract_submesh, SubmeshParams};
/// use shape_types::unit_square;
///
/// let square = unit_square();
/// // drop one corner: the triangle using it dies with it
/// let result =
///     extract_submesh(&square, &[true, true, false, true], &SubmeshParams::new()).unwrap();
///
/// assert_eq!(result.mesh.point_count(), 3);
/// assert_eq!(result.mesh.triangle_count(), 1);
/// ```
pub fn extract_submesh(
    mesh: &TriMesh,
    mask: &[bool],
    params: &SubmeshParams,
) -> ExtractResult<SubmeshResult> {
    if mask.len() != mesh.point_count() {
        return Err(ExtractError::MaskLength {
            mask_len: mask.len(),
            point_count: mesh.point_count(),
        });
    }

    let source_points = mesh.point_count();
    let source_triangles = mesh.triangle_count();

    // First pass: a triangle survives only with all three corners retained.
    let tri_mask: Vec<bool> = mesh
        .trilist()
        .iter()
        .map(|tri| tri.iter().all(|&v| mask[v as usize]))
        .collect();

    // Second pass: the points actually kept are those the surviving
    // triangles use, which drops mask-retained points the first pass
    // orphaned. Needs every triangle classified, so the passes cannot fuse.
    let mut retained: Vec<u32> = mesh
        .trilist()
        .iter()
        .zip(&tri_mask)
        .filter(|(_, &keep)| keep)
        .flat_map(|(tri, _)| tri.iter().copied())
        .collect();
    retained.sort_unstable();
    retained.dedup();

    // Old index -> new contiguous index. Ascending old order keeps the
    // source's relative point order in the extracted mesh.
    let mut remap = vec![0_u32; source_points];
    for (new_index, &old_index) in retained.iter().enumerate() {
        remap[old_index as usize] = new_index as u32;
    }

    let new_trilist: Vec<[u32; 3]> = mesh
        .trilist()
        .iter()
        .zip(&tri_mask)
        .filter(|(_, &keep)| keep)
        .map(|(&[a, b, c], _)| [remap[a as usize], remap[b as usize], remap[c as usize]])
        .collect();

    let new_cloud = mesh.points().gather(&retained);
    let variant = params.variant.unwrap_or_else(|| mesh.variant());
    let mut out = TriMesh::with_variant(new_cloud, new_trilist, variant)?;

    // Re-slice every field to the survivors, keeping names.
    for (name, data) in mesh.point_fields().iter() {
        out.add_point_field(name, data.gather(&retained))?;
    }
    for (name, data) in mesh.triangle_fields().iter() {
        out.add_triangle_field(name, data.gather_mask(&tri_mask))?;
    }

    // The texture travels by handle; the image is shared, never copied.
    if let Some(texture) = mesh.texture() {
        out.set_texture(texture.clone());
    }

    let mask_retained = mask.iter().filter(|&&keep| keep).count();
    let result = SubmeshResult {
        masked_out: source_points - mask_retained,
        orphaned: mask_retained - out.point_count(),
        mesh: out,
        source_points,
        source_triangles,
    };

    debug!(
        source_points,
        source_triangles,
        kept_points = result.kept_points(),
        kept_triangles = result.kept_triangles(),
        orphaned = result.orphaned,
        "Extracted sub-mesh"
    );

    Ok(result)
}
