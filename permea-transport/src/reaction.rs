use std::fmt;

use permea_core::Expr;
use uom::si::{
    energy::electronvolt,
    f64::{Energy, Frequency},
    frequency::hertz,
    volume_rate::cubic_meter_per_second,
};

use crate::{
    ImplicitSpecies, Species, SpeciesError, VolumeSubdomain,
    units::{BOLTZMANN_CONSTANT_EV, TrappingRateCoefficient},
};

/// A species taking part in a reaction as a reactant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reactant {
    Species(Species),
    Implicit(ImplicitSpecies),
}

impl Reactant {
    /// The reactant's concentration as an expression.
    ///
    /// # Errors
    ///
    /// Returns a [`SpeciesError`] if the concentration is not available yet.
    pub fn concentration(&self) -> Result<Expr, SpeciesError> {
        match self {
            Self::Species(species) => species.concentration().map(Expr::Function).ok_or_else(|| {
                SpeciesError::NoSolution {
                    species: species.to_string(),
                }
            }),
            Self::Implicit(implicit) => implicit.concentration(),
        }
    }
}

impl From<Species> for Reactant {
    fn from(species: Species) -> Self {
        Self::Species(species)
    }
}

impl From<ImplicitSpecies> for Reactant {
    fn from(implicit: ImplicitSpecies) -> Self {
        Self::Implicit(implicit)
    }
}

impl fmt::Display for Reactant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Species(species) => write!(f, "{species}"),
            Self::Implicit(implicit) => write!(f, "{implicit}"),
        }
    }
}

/// A reversible reaction `reactants <--> product` with Arrhenius rates.
///
/// The forward rate is `k_0 exp(-E_k / (k_B T))` and the backward rate is
/// `p_0 exp(-E_p / (k_B T))`. The reaction only acts within `volume`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub reactant: Vec<Reactant>,
    pub product: Species,
    /// Forward pre-exponential factor.
    pub k_0: TrappingRateCoefficient,
    /// Forward activation energy.
    pub e_k: Energy,
    /// Backward pre-exponential factor.
    pub p_0: Frequency,
    /// Backward activation energy.
    pub e_p: Energy,
    pub volume: VolumeSubdomain,
}

impl Reaction {
    /// The forward rate constant at `temperature`.
    #[must_use]
    pub fn forward_rate(&self, temperature: &Expr) -> Expr {
        arrhenius(
            self.k_0.get::<cubic_meter_per_second>(),
            self.e_k,
            temperature,
        )
    }

    /// The backward rate constant at `temperature`.
    #[must_use]
    pub fn backward_rate(&self, temperature: &Expr) -> Expr {
        arrhenius(self.p_0.get::<hertz>(), self.e_p, temperature)
    }

    /// The net reaction rate at `temperature`.
    ///
    /// `k Π reactants - p product`
    ///
    /// # Errors
    ///
    /// Returns a [`SpeciesError`] if any concentration is not available yet.
    pub fn reaction_term(&self, temperature: &Expr) -> Result<Expr, SpeciesError> {
        let reactants = self
            .reactant
            .iter()
            .map(Reactant::concentration)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .reduce(|acc, concentration| acc * concentration)
            .unwrap_or(Expr::Literal(1.0));

        let product = Reactant::Species(self.product.clone()).concentration()?;

        Ok(self.forward_rate(temperature) * reactants - self.backward_rate(temperature) * product)
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reactant) in self.reactant.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{reactant}")?;
        }
        write!(f, " <--> {}", self.product)
    }
}

/// `pre_exponential * exp(-activation_energy / (k_B T))`
fn arrhenius(pre_exponential: f64, activation_energy: Energy, temperature: &Expr) -> Expr {
    let energy = activation_energy.get::<electronvolt>();
    pre_exponential * (-energy / (BOLTZMANN_CONSTANT_EV * temperature)).exp()
}
