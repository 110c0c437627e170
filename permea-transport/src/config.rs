//! Declarative model descriptions.
//!
//! A [`ModelConfig`] is a plain serde structure, so models can be read from
//! TOML, JSON or any other serde format. Kinetic parameters are plain
//! numbers in the model's units:
//!
//! - `k_0` in m³/s,
//! - `p_0` in 1/s,
//! - `E_k` and `E_p` in eV,
//! - `n` in 1/m³.
//!
//! [`ModelConfig::build`] validates the description, resolves every name
//! and id, and expands each trap into the returned [`Model`].

use serde::{Deserialize, Serialize};
use uom::si::{
    energy::electronvolt,
    f64::{Energy, Frequency},
    frequency::hertz,
    volume_rate::cubic_meter_per_second,
};

use crate::{
    ConfigError, Model, Species, SurfaceSubdomain, Trap, VolumeSubdomain,
    subdomain::SubdomainId, units::TrappingRateCoefficient,
};

/// A complete model description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub species: Vec<SpeciesConfig>,
    pub traps: Vec<TrapConfig>,
    pub surfaces: Vec<SurfaceConfig>,
    pub volumes: Vec<VolumeConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeciesConfig {
    pub name: String,
    #[serde(default = "mobile_by_default")]
    pub mobile: bool,
}

fn mobile_by_default() -> bool {
    true
}

/// A trap, referring to its mobile species by name and its volume by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrapConfig {
    pub name: String,
    pub mobile_species: String,
    pub k_0: f64,
    #[serde(rename = "E_k")]
    pub e_k: f64,
    pub p_0: f64,
    #[serde(rename = "E_p")]
    pub e_p: f64,
    pub n: f64,
    pub volume: SubdomainId,
}

/// A surface; with `x` set, only the boundary at `x[0] == x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceConfig {
    pub id: SubdomainId,
    #[serde(default)]
    pub x: Option<f64>,
}

/// A volume; with `borders` set, only the cells in `[min, max]` along `x[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumeConfig {
    pub id: SubdomainId,
    #[serde(default)]
    pub borders: Option<[f64; 2]>,
}

impl ModelConfig {
    /// Validates that every kinetic parameter and density is finite and
    /// non-negative, and that every subdomain is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] for the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for trap in &self.traps {
            let owner = || format!("trap {}", trap.name);
            for (parameter, value) in [
                ("k_0", trap.k_0),
                ("E_k", trap.e_k),
                ("p_0", trap.p_0),
                ("E_p", trap.e_p),
                ("n", trap.n),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidParameter {
                        owner: owner(),
                        parameter,
                        reason: "must be finite and non-negative",
                    });
                }
            }
        }

        for surface in &self.surfaces {
            if surface.x.is_some_and(|x| !x.is_finite()) {
                return Err(ConfigError::InvalidParameter {
                    owner: format!("surface {}", surface.id),
                    parameter: "x",
                    reason: "must be finite",
                });
            }
        }

        for volume in &self.volumes {
            if let Some([min, max]) = volume.borders {
                let reason = if !min.is_finite() || !max.is_finite() {
                    Some("must be finite")
                } else if min > max {
                    Some("must be in increasing order")
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(ConfigError::InvalidParameter {
                        owner: format!("volume {}", volume.id),
                        parameter: "borders",
                        reason,
                    });
                }
            }
        }

        Ok(())
    }

    /// Validates the description and builds the model it describes.
    ///
    /// Species, surfaces and volumes are registered in the order given,
    /// then each trap is expanded, appending its trapped species after the
    /// declared ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if validation fails, or
    /// [`ConfigError::Lookup`] if a trap names a species or volume that is
    /// not declared.
    pub fn build(&self) -> Result<Model, ConfigError> {
        self.validate()?;

        let mut model = Model {
            species: self
                .species
                .iter()
                .map(|species| Species::with_mobility(Some(species.name.clone()), species.mobile))
                .collect(),
            surfaces: self.surfaces.iter().map(SurfaceConfig::to_subdomain).collect(),
            volumes: self.volumes.iter().map(VolumeConfig::to_subdomain).collect(),
            ..Model::default()
        };

        for config in &self.traps {
            let trap = Trap {
                name: config.name.clone(),
                mobile_species: model.find_species(&config.mobile_species)?.clone(),
                k_0: TrappingRateCoefficient::new::<cubic_meter_per_second>(config.k_0),
                e_k: Energy::new::<electronvolt>(config.e_k),
                p_0: Frequency::new::<hertz>(config.p_0),
                e_p: Energy::new::<electronvolt>(config.e_p),
                n: config.n.into(),
                volume: model.find_volume(config.volume)?.clone(),
            };
            model.add_trap(&trap);
        }

        tracing::debug!(
            "built model with {} species, {} implicit species and {} reactions",
            model.species.len(),
            model.implicit_species.len(),
            model.reactions.len()
        );
        Ok(model)
    }
}

impl SurfaceConfig {
    fn to_subdomain(&self) -> SurfaceSubdomain {
        match self.x {
            Some(x) => SurfaceSubdomain::at(self.id, x),
            None => SurfaceSubdomain::new(self.id),
        }
    }
}

impl VolumeConfig {
    fn to_subdomain(&self) -> VolumeSubdomain {
        match self.borders {
            Some([min, max]) => VolumeSubdomain::interval(self.id, min, max),
            None => VolumeSubdomain::new(self.id),
        }
    }
}
