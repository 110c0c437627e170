/// The geometric queries the species model needs from a mesh.
///
/// Markers are evaluated at entity midpoints. Both lookups return entity
/// indices in the order the mesh enumerates them.
pub trait Mesh {
    /// Returns the number of coordinates per point.
    fn geometric_dimension(&self) -> usize;

    /// Returns the dimension of the mesh cells.
    fn topological_dimension(&self) -> usize;

    /// Returns the dimension of the mesh facets.
    fn facet_dimension(&self) -> usize {
        self.topological_dimension().saturating_sub(1)
    }

    /// Returns the indices of boundary entities of dimension `dim` whose
    /// midpoint satisfies `marker`.
    fn locate_entities_boundary(&self, dim: usize, marker: &dyn Fn(&[f64]) -> bool) -> Vec<usize>;

    /// Returns the indices of all entities of dimension `dim` whose midpoint
    /// satisfies `marker`.
    fn locate_entities(&self, dim: usize, marker: &dyn Fn(&[f64]) -> bool) -> Vec<usize>;
}
