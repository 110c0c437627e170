use permea_core::{BindError, Constant, Mesh};

use crate::{
    ImplicitSpecies, LookupError, Reaction, Species, SurfaceSubdomain, Trap, TrapExpansion,
    VolumeSubdomain, find_species_by_name, find_surface_by_id, find_volume_by_id,
    subdomain::SubdomainId,
};

/// The entities of a hydrogen transport model.
///
/// Registration order is kept: species are handed to the solver, and looked
/// up, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub species: Vec<Species>,
    pub implicit_species: Vec<ImplicitSpecies>,
    pub reactions: Vec<Reaction>,
    pub surfaces: Vec<SurfaceSubdomain>,
    pub volumes: Vec<VolumeSubdomain>,
}

impl Model {
    /// Expands `trap` and registers the trapped species, the empty trap
    /// sites and the trapping reaction.
    ///
    /// Each call expands the trap again, so a trap added twice is
    /// registered twice.
    pub fn add_trap(&mut self, trap: &Trap) -> TrapExpansion {
        let expansion = trap.expand();
        self.species.push(expansion.trapped_concentration.clone());
        self.implicit_species.push(expansion.empty_trap_sites.clone());
        self.reactions.push(expansion.reaction.clone());
        expansion
    }

    /// Binds every implicit species on `mesh` at the time held by `t`.
    ///
    /// Call this once, after the solver has created its function spaces.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] raised; implicit species after it are
    /// left unbound.
    pub fn bind(&self, mesh: &dyn Mesh, t: &Constant) -> Result<(), BindError> {
        tracing::debug!(
            "binding {} implicit species at t = {}",
            self.implicit_species.len(),
            t.value()
        );
        for implicit in &self.implicit_species {
            implicit.bind(mesh, t)?;
        }
        Ok(())
    }

    /// Brings every implicit species up to date with time `t`.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] raised.
    pub fn refresh(&self, t: f64) -> Result<(), BindError> {
        tracing::trace!("refreshing implicit species at t = {t}");
        self.implicit_species
            .iter()
            .try_for_each(|implicit| implicit.refresh(t))
    }

    /// # Errors
    ///
    /// Returns [`LookupError::SpeciesNotFound`] if no species has that name.
    pub fn find_species(&self, name: &str) -> Result<&Species, LookupError> {
        find_species_by_name(name, &self.species)
    }

    /// # Errors
    ///
    /// Returns [`LookupError::SurfaceNotFound`] if no surface has that id.
    pub fn find_surface(&self, id: SubdomainId) -> Result<&SurfaceSubdomain, LookupError> {
        find_surface_by_id(id, &self.surfaces)
    }

    /// # Errors
    ///
    /// Returns [`LookupError::VolumeNotFound`] if no volume has that id.
    pub fn find_volume(&self, id: SubdomainId) -> Result<&VolumeSubdomain, LookupError> {
        find_volume_by_id(id, &self.volumes)
    }
}
