//! Renderer-facing view assembly.

use crate::{FieldData, TCOORDS, Texture, TriMesh};
use nalgebra::Point3;

/// Field name renderers read point or triangle colors from.
pub const COLOR: &str = "color";

/// Everything a renderer needs to draw a mesh, borrowed from it.
///
/// Assembly picks the branch; what the renderer does with the bundle is its
/// own business, and the core never looks at the result.
#[derive(Debug)]
pub enum MeshView<'a> {
    /// Draw with the bound texture.
    Textured {
        /// Point positions.
        points: &'a [Point3<f64>],
        /// Triangle list.
        trilist: &'a [[u32; 3]],
        /// The bound texture handle.
        texture: &'a Texture,
        /// The `"tcoords"` field, when resolved per point.
        point_tcoords: Option<&'a FieldData>,
        /// The `"tcoords"` field, when resolved per triangle corner.
        corner_tcoords: Option<&'a FieldData>,
    },
    /// Draw untextured, with whatever color fields exist.
    Solid {
        /// Point positions.
        points: &'a [Point3<f64>],
        /// Triangle list.
        trilist: &'a [[u32; 3]],
        /// The `"color"` point field, if present.
        point_colors: Option<&'a FieldData>,
        /// The `"color"` triangle field, if present.
        triangle_colors: Option<&'a FieldData>,
    },
}

impl TriMesh {
    /// Assemble the arrays a renderer consumes.
    ///
    /// The textured branch is taken only when it is both requested and a
    /// texture is bound; everything else falls back to the solid branch.
    ///
    /// # Example
    ///
    /// ```
    /// use shape_types::{unit_square, MeshView};
    ///
    /// let square = unit_square();
    /// assert!(matches!(square.view(true), MeshView::Solid { .. }));
    /// ```
    #[must_use]
    pub fn view(&self, textured: bool) -> MeshView<'_> {
        match (textured, self.texture()) {
            (true, Some(texture)) => MeshView::Textured {
                points: &self.points().points,
                trilist: self.trilist(),
                texture,
                point_tcoords: self.point_fields().get(TCOORDS),
                corner_tcoords: self.triangle_fields().get(TCOORDS),
            },
            _ => MeshView::Solid {
                points: &self.points().points,
                trilist: self.trilist(),
                point_colors: self.point_fields().get(COLOR),
                triangle_colors: self.triangle_fields().get(COLOR),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TexCoords, TextureImage, unit_square};

    fn white() -> Texture {
        Texture::new(TextureImage {
            width: 1,
            height: 1,
            pixels: vec![255; 4],
        })
    }

    #[test]
    fn textured_view_carries_tcoords() {
        let mut mesh = unit_square();
        mesh.attach_texture(
            white(),
            TexCoords::PerPoint(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]),
        )
        .unwrap();

        match mesh.view(true) {
            MeshView::Textured {
                points,
                trilist,
                point_tcoords,
                corner_tcoords,
                ..
            } => {
                assert_eq!(points.len(), 4);
                assert_eq!(trilist.len(), 2);
                assert!(point_tcoords.is_some());
                assert!(corner_tcoords.is_none());
            }
            MeshView::Solid { .. } => panic!("expected the textured branch"),
        }
    }

    #[test]
    fn texture_request_without_binding_falls_back() {
        let mesh = unit_square();
        assert!(matches!(mesh.view(true), MeshView::Solid { .. }));
    }

    #[test]
    fn solid_view_picks_up_color_fields() {
        let mut mesh = unit_square();
        mesh.add_point_field(COLOR, FieldData::Vec3(vec![[0.5; 3]; 4]))
            .unwrap();

        match mesh.view(false) {
            MeshView::Solid {
                point_colors,
                triangle_colors,
                ..
            } => {
                assert!(point_colors.is_some());
                assert!(triangle_colors.is_none());
            }
            MeshView::Textured { .. } => panic!("expected the solid branch"),
        }
    }
}
