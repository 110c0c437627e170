//! Initial conditions.

use permea_core::Value;

use crate::Species;

/// The initial concentration of a species.
#[derive(Debug, Clone)]
pub struct InitialConcentration {
    pub value: Value,
    pub species: Species,
}

impl InitialConcentration {
    #[must_use]
    pub fn new(value: Value, species: Species) -> Self {
        Self { value, species }
    }
}

/// The initial temperature.
#[derive(Debug, Clone)]
pub struct InitialTemperature {
    pub value: Value,
}

impl InitialTemperature {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}
