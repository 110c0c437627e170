use thiserror::Error;

use crate::subdomain::SubdomainId;

/// Errors raised when reading a species' concentration.
///
/// All of these point to a sequencing mistake in the caller: a value was
/// read before the solver or [`Model::bind`](crate::Model::bind) provided it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesError {
    /// An implicit species was read before every species it depends on had
    /// a solution.
    #[error("cannot compute concentration of {species} because {dependency} has no solution")]
    UnresolvedDependency { species: String, dependency: String },

    /// An implicit species was read before its total density was bound.
    #[error("cannot compute concentration of {species} because its density is not bound")]
    NotBound { species: String },

    /// A species was read before the solver bound its solution.
    #[error("species {species} has no solution")]
    NoSolution { species: String },
}

/// Errors raised when a lookup by name or id finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("species {name} not found in list of species")]
    SpeciesNotFound { name: String },

    #[error("id {id} not found in list of surfaces")]
    SurfaceNotFound { id: SubdomainId },

    #[error("id {id} not found in list of volumes")]
    VolumeNotFound { id: SubdomainId },
}

/// Errors raised when a source or boundary condition is given a value it
/// cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{what} cannot be temperature dependent")]
    TemperatureDependent { what: &'static str },
}

/// Errors raised when building a [`Model`](crate::Model) from configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("invalid `{parameter}` for {owner}: {reason}")]
    InvalidParameter {
        owner: String,
        parameter: &'static str,
        reason: &'static str,
    },
}
