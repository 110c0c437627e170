//! Lookup of species and subdomains by name or id.
//!
//! Lists are short, so each lookup is a linear scan in list order and the
//! first match wins. Duplicate names or ids are allowed but ambiguous.

use crate::{
    LookupError, Species, SurfaceSubdomain, VolumeSubdomain, subdomain::SubdomainId,
};

/// Returns the first species in `species` named `name`.
///
/// # Errors
///
/// Returns [`LookupError::SpeciesNotFound`] if no species has that name.
///
/// # Example
///
/// ```
/// use permea_transport::{Species, find_species_by_name};
///
/// let species = [Species::new("H"), Species::new("D")];
/// assert_eq!(find_species_by_name("H", &species), Ok(&species[0]));
/// assert!(find_species_by_name("T", &species).is_err());
/// ```
pub fn find_species_by_name<'a>(
    name: &str,
    species: &'a [Species],
) -> Result<&'a Species, LookupError> {
    species
        .iter()
        .find(|candidate| candidate.name() == Some(name))
        .ok_or_else(|| LookupError::SpeciesNotFound {
            name: name.to_string(),
        })
}

/// Returns the first surface in `surfaces` with id `id`.
///
/// # Errors
///
/// Returns [`LookupError::SurfaceNotFound`] if no surface has that id.
pub fn find_surface_by_id(
    id: SubdomainId,
    surfaces: &[SurfaceSubdomain],
) -> Result<&SurfaceSubdomain, LookupError> {
    surfaces
        .iter()
        .find(|surface| surface.id == id)
        .ok_or(LookupError::SurfaceNotFound { id })
}

/// Returns the first volume in `volumes` with id `id`.
///
/// # Errors
///
/// Returns [`LookupError::VolumeNotFound`] if no volume has that id.
pub fn find_volume_by_id(
    id: SubdomainId,
    volumes: &[VolumeSubdomain],
) -> Result<&VolumeSubdomain, LookupError> {
    volumes
        .iter()
        .find(|volume| volume.id == id)
        .ok_or(LookupError::VolumeNotFound { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_lookup_returns_the_first_match() {
        let first_h = Species::new("H");
        let species = vec![first_h.clone(), Species::new("D"), Species::new("H")];

        let found = find_species_by_name("H", &species).unwrap();
        assert_eq!(found, &first_h);
        assert_ne!(found, &species[2]);
    }

    #[test]
    fn missing_species_names_the_query() {
        let species = vec![Species::new("H"), Species::new("D")];
        let error = find_species_by_name("T", &species).unwrap_err();

        assert_eq!(
            error,
            LookupError::SpeciesNotFound {
                name: "T".to_string()
            }
        );
        assert!(error.to_string().contains("T"));
    }

    #[test]
    fn unnamed_species_never_match() {
        let species = vec![Species::with_mobility(None, true)];
        assert!(find_species_by_name("None", &species).is_err());
    }

    #[test]
    fn surface_lookup_by_id() {
        let surfaces = vec![SurfaceSubdomain::at(1, 0.0), SurfaceSubdomain::at(2, 1.0)];

        assert_eq!(find_surface_by_id(2, &surfaces), Ok(&surfaces[1]));
        assert_eq!(
            find_surface_by_id(3, &surfaces),
            Err(LookupError::SurfaceNotFound { id: 3 })
        );
        assert_eq!(
            find_surface_by_id(3, &surfaces).unwrap_err().to_string(),
            "id 3 not found in list of surfaces"
        );
    }

    #[test]
    fn volume_lookup_by_id() {
        let volumes = vec![VolumeSubdomain::new(1), VolumeSubdomain::interval(4, 0.0, 0.5)];

        assert_eq!(find_volume_by_id(4, &volumes), Ok(&volumes[1]));
        assert_eq!(
            find_volume_by_id(7, &volumes),
            Err(LookupError::VolumeNotFound { id: 7 })
        );
    }
}
