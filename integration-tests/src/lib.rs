//! Shared fixtures for the cross-crate tests.

use permea_core::{Function, FunctionSpace};
use permea_transport::Model;

pub use permea_core::test_utils::IntervalMesh;

/// Stands in for the solver: gives every species of `model` a uniform
/// solution and previous solution on `space`.
///
/// `value` maps a species name to its uniform concentration.
pub fn bind_uniform_solutions(model: &Model, space: &FunctionSpace, value: impl Fn(&str) -> f64) {
    for species in &model.species {
        let name = species.name().unwrap_or("None");
        let c = value(name);
        species.set_solution(Function::from_fn(name, space.clone(), move |_| c));
        species.set_prev_solution(Function::from_fn(
            format!("{name}_n"),
            space.clone(),
            move |_| c,
        ));
    }
}
