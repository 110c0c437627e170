use permea_core::ValueSpec;
use uom::si::f64::{Energy, Frequency};

use crate::{
    ImplicitSpecies, Reaction, Species, VolumeSubdomain, units::TrappingRateCoefficient,
};

/// A trap for one mobile species, with one trapping level.
///
/// A trap is shorthand for three model entities, produced by
/// [`Trap::expand`]:
///
/// - an immobile trapped [`Species`] named after the trap,
/// - an [`ImplicitSpecies`] for the empty trap sites, `n - trapped`,
/// - a [`Reaction`] `mobile + empty sites <--> trapped` in `volume`.
///
/// # Example
///
/// ```
/// use permea_core::ValueSpec;
/// use permea_transport::{Species, Trap, VolumeSubdomain, units::TrappingRateCoefficient};
/// use uom::si::{
///     energy::electronvolt,
///     f64::{Energy, Frequency},
///     frequency::hertz,
///     volume_rate::cubic_meter_per_second,
/// };
///
/// let h = Species::new("H");
/// let trap = Trap {
///     name: "trap".to_string(),
///     mobile_species: h.clone(),
///     k_0: TrappingRateCoefficient::new::<cubic_meter_per_second>(1.0e-16),
///     e_k: Energy::new::<electronvolt>(0.39),
///     p_0: Frequency::new::<hertz>(1.0e13),
///     e_p: Energy::new::<electronvolt>(1.2),
///     n: ValueSpec::from(1.0e25),
///     volume: VolumeSubdomain::new(1),
/// };
///
/// let expansion = trap.expand();
/// assert_eq!(expansion.trapped_concentration.name(), Some("trap"));
/// assert_eq!(expansion.reaction.to_string(), "H + None <--> trap");
/// ```
#[derive(Debug, Clone)]
pub struct Trap {
    pub name: String,
    /// The species being trapped.
    pub mobile_species: Species,
    /// Trapping pre-exponential factor.
    pub k_0: TrappingRateCoefficient,
    /// Trapping activation energy.
    pub e_k: Energy,
    /// Detrapping pre-exponential factor.
    pub p_0: Frequency,
    /// Detrapping activation energy.
    pub e_p: Energy,
    /// Trap site density.
    pub n: ValueSpec,
    /// Where the trap is.
    pub volume: VolumeSubdomain,
}

/// The entities a [`Trap`] stands for.
#[derive(Debug, Clone)]
pub struct TrapExpansion {
    pub trapped_concentration: Species,
    pub empty_trap_sites: ImplicitSpecies,
    pub reaction: Reaction,
}

impl Trap {
    /// Creates the trapped species, the empty trap sites and the trapping
    /// reaction.
    ///
    /// Every call creates new entities, so a trap must be expanded exactly
    /// once per model; [`Model::add_trap`](crate::Model::add_trap) does this
    /// and registers the result.
    #[must_use]
    pub fn expand(&self) -> TrapExpansion {
        let trapped_concentration = Species::immobile(self.name.clone());
        let empty_trap_sites =
            ImplicitSpecies::new(self.n.clone(), vec![trapped_concentration.clone()]);

        let reaction = Reaction {
            reactant: vec![
                self.mobile_species.clone().into(),
                empty_trap_sites.clone().into(),
            ],
            product: trapped_concentration.clone(),
            k_0: self.k_0,
            e_k: self.e_k,
            p_0: self.p_0,
            e_p: self.e_p,
            volume: self.volume.clone(),
        };

        tracing::debug!("expanded trap {} into {reaction}", self.name);

        TrapExpansion {
            trapped_concentration,
            empty_trap_sites,
            reaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use permea_core::{Constant, Function, FunctionSpace, test_utils::IntervalMesh};
    use uom::si::{
        energy::electronvolt, frequency::hertz, volume_rate::cubic_meter_per_second,
    };

    use crate::Reactant;

    fn unit_trap(mobile: &Species, volume: VolumeSubdomain) -> Trap {
        Trap {
            name: "trapped".to_string(),
            mobile_species: mobile.clone(),
            k_0: TrappingRateCoefficient::new::<cubic_meter_per_second>(1.0),
            e_k: Energy::new::<electronvolt>(1.0),
            p_0: Frequency::new::<hertz>(1.0),
            e_p: Energy::new::<electronvolt>(1.0),
            n: ValueSpec::from(1.0),
            volume,
        }
    }

    #[test]
    fn expansion_produces_consistent_entities() {
        let cm = Species::new("mobile");
        let volume = VolumeSubdomain::new(1);
        let trap = unit_trap(&cm, volume.clone());

        let TrapExpansion {
            trapped_concentration,
            empty_trap_sites,
            reaction,
        } = trap.expand();

        assert_eq!(trapped_concentration.name(), Some("trapped"));
        assert!(!trapped_concentration.is_mobile());

        assert!(matches!(empty_trap_sites.n(), ValueSpec::Constant(n) if *n == 1.0));
        assert_eq!(empty_trap_sites.others(), &[trapped_concentration.clone()]);

        assert_eq!(
            reaction.reactant,
            vec![
                Reactant::Species(cm),
                Reactant::Implicit(empty_trap_sites)
            ]
        );
        assert_eq!(reaction.product, trapped_concentration);
        assert_eq!(reaction.k_0, trap.k_0);
        assert_eq!(reaction.e_k, trap.e_k);
        assert_eq!(reaction.p_0, trap.p_0);
        assert_eq!(reaction.e_p, trap.e_p);
        assert_eq!(reaction.volume, volume);
    }

    #[test]
    fn each_expansion_creates_new_entities() {
        let trap = unit_trap(&Species::new("mobile"), VolumeSubdomain::new(1));

        let first = trap.expand();
        let second = trap.expand();
        assert_ne!(first.trapped_concentration, second.trapped_concentration);
        assert_ne!(first.empty_trap_sites, second.empty_trap_sites);
    }

    #[test]
    fn empty_sites_track_the_trapped_solution() {
        let mesh = IntervalMesh::new(2, 1.0);
        let mut trap = unit_trap(&Species::new("mobile"), VolumeSubdomain::new(1));
        trap.n = ValueSpec::from(10.0);

        let expansion = trap.expand();
        expansion
            .trapped_concentration
            .set_solution(Function::from_fn("ct", FunctionSpace::new("P1", 1), |p| {
                4.0 * p[0]
            }));
        expansion
            .empty_trap_sites
            .bind(&mesh, &Constant::new(0.0))
            .unwrap();

        let c = expansion.empty_trap_sites.concentration().unwrap();
        assert_eq!(c.evaluate(&[0.5]), Ok(8.0));
    }
}
