//! Meshes for tests.

use crate::Mesh;

/// A 1D mesh of `n` equal cells on `[0, length]`.
///
/// Vertices are the facets, numbered left to right; only the two end
/// vertices lie on the boundary.
#[derive(Debug, Clone)]
pub struct IntervalMesh {
    vertices: Vec<f64>,
}

impl IntervalMesh {
    #[must_use]
    pub fn new(n: usize, length: f64) -> Self {
        let vertices = (0..=n).map(|i| length * i as f64 / n as f64).collect();
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    fn midpoints(&self, dim: usize) -> Vec<f64> {
        match dim {
            0 => self.vertices.clone(),
            _ => self.vertices.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect(),
        }
    }
}

impl Mesh for IntervalMesh {
    fn geometric_dimension(&self) -> usize {
        1
    }

    fn topological_dimension(&self) -> usize {
        1
    }

    fn locate_entities_boundary(&self, dim: usize, marker: &dyn Fn(&[f64]) -> bool) -> Vec<usize> {
        if dim != 0 {
            return Vec::new();
        }
        let last = self.vertices.len() - 1;
        [0, last]
            .into_iter()
            .filter(|&i| marker(&[self.vertices[i]]))
            .collect()
    }

    fn locate_entities(&self, dim: usize, marker: &dyn Fn(&[f64]) -> bool) -> Vec<usize> {
        self.midpoints(dim)
            .into_iter()
            .enumerate()
            .filter(|(_, x)| marker(&[*x]))
            .map(|(i, _)| i)
            .collect()
    }
}
