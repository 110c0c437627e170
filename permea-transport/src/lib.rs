//! Species, trap and reaction bookkeeping for hydrogen transport models.
//!
//! The solver owns the discretization; this crate owns the model it
//! discretizes. A model is a list of [`Species`] (solved for), a list of
//! [`ImplicitSpecies`] (derived as a total minus other species), the
//! [`Reaction`]s coupling them, and the subdomains they live on. A [`Trap`]
//! is shorthand for one trapped species, its empty sites and the trapping
//! reaction, and is expanded into those three once at setup.
//!
//! The lifecycle is strictly sequenced:
//!
//! 1. Build the model and [`Model::add_trap`] every trap.
//! 2. Let the solver bind solution functions onto every [`Species`].
//! 3. [`Model::bind`] the implicit species against the mesh and time.
//! 4. Each step, update the time, [`Model::refresh`], assemble and solve.

mod error;
mod implicit_species;
mod lookup;
mod model;
mod reaction;
mod species;
mod trap;

pub mod boundary_condition;
pub mod config;
pub mod initial_condition;
pub mod source;
pub mod subdomain;
pub mod units;

pub use error::{ConfigError, LookupError, SetupError, SpeciesError};
pub use implicit_species::ImplicitSpecies;
pub use lookup::{find_species_by_name, find_surface_by_id, find_volume_by_id};
pub use model::Model;
pub use reaction::{Reactant, Reaction};
pub use species::{SolverSlots, Species};
pub use subdomain::{SurfaceSubdomain, VolumeSubdomain};
pub use trap::{Trap, TrapExpansion};
