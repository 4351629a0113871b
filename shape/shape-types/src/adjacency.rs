//! Triangle adjacency queries.
//!
//! Backing structure for the adjacency mesh variant: built once from the
//! triangle list, answers edge and point incidence queries without
//! rescanning the mesh.

use hashbrown::HashMap;

/// Incidence maps for a triangle list.
///
/// Edges are undirected: `(a, b)` and `(b, a)` name the same edge.
///
/// # Example
///
/// ```
/// use shape_types::TriAdjacency;
///
/// let adj = TriAdjacency::build(&[[0, 1, 2], [2, 1, 3]]);
///
/// assert_eq!(adj.triangles_for_edge(1, 2), Some(&[0, 1][..]));
/// assert_eq!(adj.boundary_edge_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriAdjacency {
    /// Undirected edge (lo, hi) to incident triangle indices.
    edge_to_triangles: HashMap<(u32, u32), Vec<u32>>,
    /// Point index to incident triangle indices.
    point_to_triangles: HashMap<u32, Vec<u32>>,
}

/// Order an edge's endpoints so lookups are direction-independent.
#[inline]
const fn undirected(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl TriAdjacency {
    /// Build the incidence maps from a triangle list.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // triangle indices share the u32 point-index width
    pub fn build(trilist: &[[u32; 3]]) -> Self {
        let mut edge_to_triangles: HashMap<(u32, u32), Vec<u32>> = HashMap::new();
        let mut point_to_triangles: HashMap<u32, Vec<u32>> = HashMap::new();

        for (t, &[a, b, c]) in trilist.iter().enumerate() {
            let t = t as u32;

            for v in [a, b, c] {
                point_to_triangles.entry(v).or_default().push(t);
            }

            for edge in [undirected(a, b), undirected(b, c), undirected(c, a)] {
                edge_to_triangles.entry(edge).or_default().push(t);
            }
        }

        Self {
            edge_to_triangles,
            point_to_triangles,
        }
    }

    /// Triangles incident to the edge `(a, b)`, or `None` if no triangle
    /// uses that edge.
    #[must_use]
    pub fn triangles_for_edge(&self, a: u32, b: u32) -> Option<&[u32]> {
        self.edge_to_triangles
            .get(&undirected(a, b))
            .map(Vec::as_slice)
    }

    /// Triangles incident to a point. Empty when the point is unused.
    #[must_use]
    pub fn triangles_for_point(&self, point: u32) -> &[u32] {
        self.point_to_triangles
            .get(&point)
            .map_or(&[], Vec::as_slice)
    }

    /// Points sharing a triangle with `point`, excluding `point` itself.
    ///
    /// The ring is reported in ascending index order.
    #[must_use]
    pub fn point_neighbors(&self, point: u32, trilist: &[[u32; 3]]) -> Vec<u32> {
        let mut ring: Vec<u32> = self
            .triangles_for_point(point)
            .iter()
            .filter_map(|&t| trilist.get(t as usize))
            .flatten()
            .copied()
            .filter(|&v| v != point)
            .collect();
        ring.sort_unstable();
        ring.dedup();
        ring
    }

    /// Edges incident to exactly one triangle.
    pub fn boundary_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edge_to_triangles
            .iter()
            .filter(|(_, tris)| tris.len() == 1)
            .map(|(&edge, _)| edge)
    }

    /// Number of boundary edges.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_triangles
            .values()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Edges incident to more than two triangles.
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edge_to_triangles
            .iter()
            .filter(|(_, tris)| tris.len() > 2)
            .map(|(&edge, _)| edge)
    }

    /// Whether every edge touches at most two triangles.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edge_to_triangles.values().all(|tris| tris.len() <= 2)
    }

    /// Whether the surface has no boundary edges.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.edge_to_triangles.values().all(|tris| tris.len() >= 2)
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_triangles.len()
    }

    /// Number of points referenced by at least one triangle.
    #[must_use]
    pub fn referenced_point_count(&self) -> usize {
        self.point_to_triangles.len()
    }
}
