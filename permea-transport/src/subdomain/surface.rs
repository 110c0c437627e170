use permea_core::Mesh;

use super::{SubdomainId, is_close};

/// The part of the boundary a [`SurfaceSubdomain`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundaryRegion {
    /// Every boundary facet.
    #[default]
    All,
    /// Boundary facets lying on the plane `x[axis] == position`.
    Plane { axis: usize, position: f64 },
}

impl BoundaryRegion {
    /// Returns `true` if a facet with midpoint `point` belongs to the region.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        match *self {
            Self::All => true,
            Self::Plane { axis, position } => point
                .get(axis)
                .is_some_and(|&coordinate| is_close(coordinate, position)),
        }
    }
}

/// A region of the boundary, such as a surface where a condition applies.
///
/// # Example
///
/// ```
/// use permea_transport::{SurfaceSubdomain, subdomain::BoundaryRegion};
///
/// let left = SurfaceSubdomain::at(1, 0.0);
/// assert_eq!(left.region, BoundaryRegion::Plane { axis: 0, position: 0.0 });
///
/// let everywhere = SurfaceSubdomain::new(2);
/// assert_eq!(everywhere.region, BoundaryRegion::All);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSubdomain {
    pub id: SubdomainId,
    pub region: BoundaryRegion,
}

impl SurfaceSubdomain {
    /// Creates a surface covering the whole boundary.
    #[must_use]
    pub fn new(id: SubdomainId) -> Self {
        Self {
            id,
            region: BoundaryRegion::All,
        }
    }

    /// Creates a surface at `x[0] == position`, as used in 1D models.
    #[must_use]
    pub fn at(id: SubdomainId, position: f64) -> Self {
        Self {
            id,
            region: BoundaryRegion::Plane { axis: 0, position },
        }
    }

    /// Returns the indices of the boundary facets of dimension `fdim`
    /// belonging to this surface, in the order the mesh reports them.
    ///
    /// Nothing is cached; every call queries the mesh.
    #[must_use]
    pub fn locate_boundary_facet_indices(&self, mesh: &dyn Mesh, fdim: usize) -> Vec<usize> {
        mesh.locate_entities_boundary(fdim, &|point| self.region.contains(point))
    }
}
