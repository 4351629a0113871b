//! Texture bindings.

use std::sync::Arc;

/// Field name under which resolved texture coordinates are stored.
pub const TCOORDS: &str = "tcoords";

/// Pixel storage for a texture image.
///
/// Interpretation of the pixel bytes is the renderer's business; the core
/// only moves handles around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Raw pixel bytes.
    pub pixels: Vec<u8>,
}

/// A shared handle to a texture image.
///
/// Cloning the handle shares the image: meshes reference textures, they
/// never own them. A sub-mesh derived from a textured mesh carries a handle
/// to the very same image.
///
/// # Example
///
/// ```
/// use shape_types::{Texture, TextureImage};
///
/// let texture = Texture::new(TextureImage {
///     width: 2,
///     height: 2,
///     pixels: vec![0; 16],
/// });
///
/// let handle = texture.clone();
/// assert!(texture.shares_image(&handle));
/// ```
#[derive(Debug, Clone)]
pub struct Texture {
    image: Arc<TextureImage>,
}

impl Texture {
    /// Wrap an image in a shareable handle.
    #[must_use]
    pub fn new(image: TextureImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// The image behind the handle.
    #[inline]
    #[must_use]
    pub fn image(&self) -> &TextureImage {
        &self.image
    }

    /// Width of the image in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Height of the image in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// Whether two handles point at the same image, not merely equal
    /// pixels.
    #[must_use]
    pub fn shares_image(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

/// The recognized texture-coordinate forms.
///
/// Which `"tcoords"` field the resolver stores depends on the form; see
/// [`TriMesh::attach_texture`](crate::TriMesh::attach_texture).
#[derive(Debug, Clone, PartialEq)]
pub enum TexCoords {
    /// One coordinate pair per mesh point.
    PerPoint(Vec<[f64; 2]>),
    /// One coordinate pair per corner of each mesh triangle.
    PerCorner(Vec<[[f64; 2]; 3]>),
    /// A coordinate array indexed by a texture-private triangle list: row
    /// `t` of the list names the coordinate rows for mesh triangle `t`'s
    /// three corners.
    Indexed {
        /// Coordinate rows the private triangle list indexes into.
        coords: Vec<[f64; 2]>,
        /// Per-triangle corner indices into `coords`.
        trilist: Vec<[u32; 3]>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        Texture::new(TextureImage {
            width: 2,
            height: 2,
            pixels: vec![0, 255, 255, 0],
        })
    }

    #[test]
    fn clones_share_the_image() {
        let texture = checker();
        let handle = texture.clone();
        assert!(texture.shares_image(&handle));
        assert_eq!(texture.image(), handle.image());
    }

    #[test]
    fn equal_pixels_are_still_distinct_images() {
        let a = checker();
        let b = checker();
        assert_eq!(a.image(), b.image());
        assert!(!a.shares_image(&b));
    }
}
