use permea_core::Mesh;

use super::SubdomainId;

/// Tolerance applied at interval borders.
const BORDER_TOLERANCE: f64 = 3.0e-16;

/// The part of the domain a [`VolumeSubdomain`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VolumeRegion {
    #[default]
    Everywhere,
    /// Cells with `min <= x[axis] <= max`.
    Interval { axis: usize, min: f64, max: f64 },
}

impl VolumeRegion {
    /// Returns `true` if a cell with midpoint `point` belongs to the region.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        match *self {
            Self::Everywhere => true,
            Self::Interval { axis, min, max } => point.get(axis).is_some_and(|&coordinate| {
                coordinate >= min - BORDER_TOLERANCE && coordinate <= max + BORDER_TOLERANCE
            }),
        }
    }
}

/// A region of the domain, such as where a trap or source is active.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSubdomain {
    pub id: SubdomainId,
    pub region: VolumeRegion,
}

impl VolumeSubdomain {
    /// Creates a volume covering the whole domain.
    #[must_use]
    pub fn new(id: SubdomainId) -> Self {
        Self {
            id,
            region: VolumeRegion::Everywhere,
        }
    }

    /// Creates a volume between `min` and `max` along `x[0]`, as used in 1D models.
    #[must_use]
    pub fn interval(id: SubdomainId, min: f64, max: f64) -> Self {
        Self {
            id,
            region: VolumeRegion::Interval { axis: 0, min, max },
        }
    }

    /// Returns the indices of the cells belonging to this volume.
    #[must_use]
    pub fn locate_subdomain_entities(&self, mesh: &dyn Mesh) -> Vec<usize> {
        mesh.locate_entities(mesh.topological_dimension(), &|point| {
            self.region.contains(point)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use permea_core::test_utils::IntervalMesh;

    #[test]
    fn whole_domain() {
        let mesh = IntervalMesh::new(4, 1.0);
        let volume = VolumeSubdomain::new(1);
        assert_eq!(volume.locate_subdomain_entities(&mesh), vec![0, 1, 2, 3]);
    }

    #[test]
    fn interval_selects_cells_by_midpoint() {
        let mesh = IntervalMesh::new(4, 1.0);

        let left = VolumeSubdomain::interval(1, 0.0, 0.5);
        assert_eq!(left.locate_subdomain_entities(&mesh), vec![0, 1]);

        let right = VolumeSubdomain::interval(2, 0.5, 1.0);
        assert_eq!(right.locate_subdomain_entities(&mesh), vec![2, 3]);
    }
}
