//! Boundary conditions on surface subdomains.
//!
//! Concentration and particle-flux conditions may depend on temperature;
//! temperature and heat-flux conditions may not, since they constrain the
//! heat equation itself.

use permea_core::{Mesh, Value};

use crate::{SetupError, Species, SurfaceSubdomain};

/// A fixed concentration of one species on a surface.
#[derive(Debug, Clone)]
pub struct FixedConcentrationBC {
    pub subdomain: SurfaceSubdomain,
    pub value: Value,
    pub species: Species,
}

impl FixedConcentrationBC {
    #[must_use]
    pub fn new(subdomain: SurfaceSubdomain, value: Value, species: Species) -> Self {
        Self {
            subdomain,
            value,
            species,
        }
    }

    /// The facets the condition applies to.
    #[must_use]
    pub fn facets(&self, mesh: &dyn Mesh) -> Vec<usize> {
        self.subdomain
            .locate_boundary_facet_indices(mesh, mesh.facet_dimension())
    }
}

/// An imposed particle flux of one species through a surface.
#[derive(Debug, Clone)]
pub struct ParticleFluxBC {
    pub subdomain: SurfaceSubdomain,
    pub value: Value,
    pub species: Species,
}

impl ParticleFluxBC {
    #[must_use]
    pub fn new(subdomain: SurfaceSubdomain, value: Value, species: Species) -> Self {
        Self {
            subdomain,
            value,
            species,
        }
    }
}

/// A fixed temperature on a surface.
#[derive(Debug, Clone)]
pub struct FixedTemperatureBC {
    subdomain: SurfaceSubdomain,
    value: Value,
}

impl FixedTemperatureBC {
    /// # Errors
    ///
    /// Returns [`SetupError::TemperatureDependent`] if `value` depends on
    /// temperature.
    pub fn new(subdomain: SurfaceSubdomain, value: Value) -> Result<Self, SetupError> {
        reject_temperature(&value, "fixed temperature boundary condition")?;
        Ok(Self { subdomain, value })
    }

    #[must_use]
    pub fn subdomain(&self) -> &SurfaceSubdomain {
        &self.subdomain
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// The facets the condition applies to.
    #[must_use]
    pub fn facets(&self, mesh: &dyn Mesh) -> Vec<usize> {
        self.subdomain
            .locate_boundary_facet_indices(mesh, mesh.facet_dimension())
    }
}

/// An imposed heat flux through a surface.
#[derive(Debug, Clone)]
pub struct HeatFluxBC {
    subdomain: SurfaceSubdomain,
    value: Value,
}

impl HeatFluxBC {
    /// # Errors
    ///
    /// Returns [`SetupError::TemperatureDependent`] if `value` depends on
    /// temperature.
    pub fn new(subdomain: SurfaceSubdomain, value: Value) -> Result<Self, SetupError> {
        reject_temperature(&value, "heat flux")?;
        Ok(Self { subdomain, value })
    }

    #[must_use]
    pub fn subdomain(&self) -> &SurfaceSubdomain {
        &self.subdomain
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }
}

fn reject_temperature(value: &Value, what: &'static str) -> Result<(), SetupError> {
    if value.temperature_dependent() {
        Err(SetupError::TemperatureDependent { what })
    } else {
        Ok(())
    }
}
