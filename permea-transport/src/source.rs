//! Volumetric sources.

use permea_core::Value;

use crate::{SetupError, Species, VolumeSubdomain};

/// A volumetric source of particles of one species.
#[derive(Debug, Clone)]
pub struct ParticleSource {
    pub value: Value,
    pub volume: VolumeSubdomain,
    pub species: Species,
}

impl ParticleSource {
    #[must_use]
    pub fn new(value: Value, volume: VolumeSubdomain, species: Species) -> Self {
        Self {
            value,
            volume,
            species,
        }
    }
}

/// A volumetric heat source.
#[derive(Debug, Clone)]
pub struct HeatSource {
    value: Value,
    volume: VolumeSubdomain,
}

impl HeatSource {
    /// Creates a heat source.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::TemperatureDependent`] if `value` depends on
    /// temperature, since the heat equation is solved for it.
    pub fn new(value: Value, volume: VolumeSubdomain) -> Result<Self, SetupError> {
        if value.temperature_dependent() {
            return Err(SetupError::TemperatureDependent {
                what: "heat source",
            });
        }
        Ok(Self { value, volume })
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access for converting and updating the value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    #[must_use]
    pub fn volume(&self) -> &VolumeSubdomain {
        &self.volume
    }
}
