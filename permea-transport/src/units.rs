//! Units for trapping kinetics.

use uom::si::f64::VolumeRate;

/// Trapping rate pre-exponential factor, m³/s in SI.
///
/// Shares its dimension with [`VolumeRate`], whose units are used to
/// construct it.
pub type TrappingRateCoefficient = VolumeRate;

/// Boltzmann constant, eV/K.
pub const BOLTZMANN_CONSTANT_EV: f64 = 8.617_333_262e-5;
