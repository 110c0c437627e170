use std::{cell::RefCell, fmt, rc::Rc};

use permea_core::{BindError, Constant, Conversion, Expr, FieldValue, Mesh, ValueSpec};

use crate::{Species, SpeciesError};

/// A species whose concentration is a total density minus other species.
///
/// `c = n - Σ others`
///
/// The total density `n` is bound once against the mesh and the current
/// time, then refreshed each step. Like [`Species`], an `ImplicitSpecies` is
/// a shared handle compared by identity.
///
/// # Example
///
/// ```
/// use permea_core::{Constant, Expr, Function, FunctionSpace, Mesh};
/// use permea_transport::{ImplicitSpecies, Species};
///
/// # struct Point;
/// # impl Mesh for Point {
/// #     fn geometric_dimension(&self) -> usize { 1 }
/// #     fn topological_dimension(&self) -> usize { 0 }
/// #     fn locate_entities_boundary(&self, _: usize, _: &dyn Fn(&[f64]) -> bool) -> Vec<usize> { vec![] }
/// #     fn locate_entities(&self, _: usize, _: &dyn Fn(&[f64]) -> bool) -> Vec<usize> { vec![] }
/// # }
/// let trapped = Species::immobile("trapped");
/// let empty_sites = ImplicitSpecies::new(5.0, vec![trapped.clone()]);
///
/// // Reading before the solver binds `trapped` is an error.
/// assert!(empty_sites.concentration().is_err());
///
/// trapped.set_solution(Function::from_fn("ct", FunctionSpace::new("P1", 1), |_| 2.0));
/// empty_sites.bind(&Point, &Constant::new(0.0)).unwrap();
///
/// let c = empty_sites.concentration().unwrap();
/// assert_eq!(c.evaluate(&[0.0]), Ok(3.0));
/// ```
#[derive(Clone)]
pub struct ImplicitSpecies(Rc<ImplicitInner>);

struct ImplicitInner {
    name: Option<String>,
    n: ValueSpec,
    others: Vec<Species>,
    value: RefCell<Option<FieldValue>>,
}

impl ImplicitSpecies {
    /// Creates an unnamed implicit species.
    #[must_use]
    pub fn new(n: impl Into<ValueSpec>, others: Vec<Species>) -> Self {
        Self::build(None, n.into(), others)
    }

    /// Creates a named implicit species.
    #[must_use]
    pub fn named(name: impl Into<String>, n: impl Into<ValueSpec>, others: Vec<Species>) -> Self {
        Self::build(Some(name.into()), n.into(), others)
    }

    fn build(name: Option<String>, n: ValueSpec, others: Vec<Species>) -> Self {
        Self(Rc::new(ImplicitInner {
            name,
            n,
            others,
            value: RefCell::new(None),
        }))
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The total density, as specified.
    #[must_use]
    pub fn n(&self) -> &ValueSpec {
        &self.0.n
    }

    /// The species subtracted from the total density, in order.
    #[must_use]
    pub fn others(&self) -> &[Species] {
        &self.0.others
    }

    /// The bound total density, once [`ImplicitSpecies::bind`] has been called.
    #[must_use]
    pub fn value(&self) -> Option<FieldValue> {
        self.0.value.borrow().clone()
    }

    /// Binds the total density on `mesh` at the time held by `t`.
    ///
    /// Numbers and pure-time functions bind to a constant; fields are used
    /// as-is; functions of position are mapped to an expression in `x` and
    /// the time constant `t`. Temperature is not available here, so a
    /// temperature-dependent density fails to bind.
    ///
    /// The density is bound once. Calling `bind` again does nothing, so
    /// concentrations read earlier keep following [`ImplicitSpecies::refresh`].
    ///
    /// # Errors
    ///
    /// Returns [`BindError::TypeMismatch`] if a pure-time density does not
    /// return a number, or [`BindError::MissingArgument`] if it depends on
    /// temperature.
    pub fn bind(&self, mesh: &dyn Mesh, t: &Constant) -> Result<(), BindError> {
        if self.0.value.borrow().is_some() {
            tracing::debug!("density of {self} is already bound");
            return Ok(());
        }
        let field = self.0.n.resolve(mesh, t, None, Conversion::Symbolic)?;
        tracing::debug!("bound density of {self} to {field:?}");
        *self.0.value.borrow_mut() = Some(field);
        Ok(())
    }

    /// Updates the bound density to time `t`.
    ///
    /// Only a pure-time density changes; it is re-evaluated in place.
    /// Calling this before [`ImplicitSpecies::bind`] does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::TypeMismatch`] if the density does not return a
    /// number at `t`.
    pub fn refresh(&self, t: f64) -> Result<(), BindError> {
        if let Some(field) = self.0.value.borrow().as_ref() {
            self.0.n.refresh(field, t)?;
        }
        Ok(())
    }

    /// The concentration, `n - Σ others`.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::UnresolvedDependency`] naming the first species
    /// in `others` without a solution, or [`SpeciesError::NotBound`] if the
    /// density has not been bound.
    pub fn concentration(&self) -> Result<Expr, SpeciesError> {
        let solutions = self
            .0
            .others
            .iter()
            .map(|other| {
                other
                    .solution()
                    .map(Expr::Function)
                    .ok_or_else(|| SpeciesError::UnresolvedDependency {
                        species: self.to_string(),
                        dependency: other.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let value = self
            .0
            .value
            .borrow()
            .as_ref()
            .map(FieldValue::to_expr)
            .ok_or_else(|| SpeciesError::NotBound {
                species: self.to_string(),
            })?;

        Ok(value - solutions.into_iter().sum::<Expr>())
    }
}

impl PartialEq for ImplicitSpecies {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ImplicitSpecies {}

impl fmt::Debug for ImplicitSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImplicitSpecies({self}, {:?}, {:?})", self.0.n, self.0.others)
    }
}

impl fmt::Display for ImplicitSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("None"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use permea_core::{Dependencies, Function, FunctionSpace, test_utils::IntervalMesh};

    fn solution(name: &str, f: impl Fn(&[f64]) -> f64 + 'static) -> Function {
        Function::from_fn(name, FunctionSpace::new("P1", 1), f)
    }

    fn solved(name: &str, f: impl Fn(&[f64]) -> f64 + 'static) -> Species {
        let species = Species::immobile(name);
        species.set_solution(solution(name, f));
        species
    }

    #[test]
    fn numeric_density_is_a_constant_unaffected_by_refresh() {
        let mesh = IntervalMesh::new(5, 1.0);
        let implicit = ImplicitSpecies::new(7.0, vec![Species::new("A")]);
        implicit.bind(&mesh, &Constant::new(0.0)).unwrap();

        for t in [0.5, 100.0] {
            implicit.refresh(t).unwrap();
            let value = implicit.value().unwrap();
            assert_eq!(value.as_constant().map(Constant::value), Some(7.0));
        }
    }

    #[test]
    fn time_density_follows_refresh() {
        let f = |t: f64| 1.0 + t * t;
        let mesh = IntervalMesh::new(5, 1.0);
        let implicit = ImplicitSpecies::new(ValueSpec::time_function(f), vec![Species::new("A")]);

        implicit.bind(&mesh, &Constant::new(2.0)).unwrap();
        let value = implicit.value().unwrap();
        assert_relative_eq!(value.as_constant().unwrap().value(), f(2.0));

        implicit.refresh(3.0).unwrap();
        assert_relative_eq!(value.as_constant().unwrap().value(), f(3.0));
    }

    #[test]
    fn time_density_must_be_a_number() {
        let mesh = IntervalMesh::new(5, 1.0);
        let implicit = ImplicitSpecies::new(
            ValueSpec::time_function(|t| vec![t, t]),
            vec![Species::new("A")],
        );

        let error = implicit.bind(&mesh, &Constant::new(1.0)).unwrap_err();
        assert!(matches!(error, BindError::TypeMismatch { .. }));
        assert!(implicit.value().is_none());
    }

    #[test]
    fn time_only_declared_density_is_evaluated_eagerly() {
        let mesh = IntervalMesh::new(5, 1.0);
        let implicit = ImplicitSpecies::new(
            ValueSpec::space_time_function(Dependencies::TIME, |args| 2.0 * args.t()),
            vec![Species::new("A")],
        );

        implicit.bind(&mesh, &Constant::new(1.0)).unwrap();
        let value = implicit.value().unwrap();
        assert_relative_eq!(value.as_constant().unwrap().value(), 2.0);

        implicit.refresh(5.0).unwrap();
        assert_relative_eq!(value.as_constant().unwrap().value(), 10.0);
    }

    #[test]
    fn time_only_declared_density_must_be_a_number() {
        let mesh = IntervalMesh::new(5, 1.0);
        let implicit = ImplicitSpecies::named(
            "sites",
            ValueSpec::space_time_function(Dependencies::TIME, |args| {
                Expr::from(vec![args.t().clone(), args.t().clone()])
            }),
            vec![Species::new("A")],
        );

        let error = implicit.bind(&mesh, &Constant::new(1.0)).unwrap_err();
        assert!(matches!(error, BindError::TypeMismatch { .. }));
        assert!(implicit.value().is_none());
    }

    #[test]
    fn binding_twice_keeps_the_first_density() {
        let mesh = IntervalMesh::new(5, 1.0);
        let implicit = ImplicitSpecies::named(
            "sites",
            ValueSpec::time_function(|t| 10.0 + t),
            vec![solved("A", |_| 1.0)],
        );

        implicit.bind(&mesh, &Constant::new(0.0)).unwrap();
        let c = implicit.concentration().unwrap();

        implicit.bind(&mesh, &Constant::new(4.0)).unwrap();
        assert_relative_eq!(c.evaluate(&[0.5]).unwrap(), 9.0);

        implicit.refresh(2.0).unwrap();
        assert_relative_eq!(c.evaluate(&[0.5]).unwrap(), 11.0);
        assert_relative_eq!(
            implicit.concentration().unwrap().evaluate(&[0.5]).unwrap(),
            11.0
        );
    }

    #[test]
    fn spatial_density_is_symbolic() {
        let mesh = IntervalMesh::new(5, 1.0);
        let t = Constant::new(1.0);
        let implicit = ImplicitSpecies::new(
            ValueSpec::space_time_function(Dependencies::POSITION | Dependencies::TIME, |args| {
                args.x().at(0) * 10.0 + args.t()
            }),
            vec![Species::new("A")],
        );

        implicit.bind(&mesh, &t).unwrap();
        let FieldValue::Expression(expr) = implicit.value().unwrap() else {
            panic!("expected a symbolic density");
        };
        assert!(expr.depends_on_position());
        assert_relative_eq!(expr.evaluate(&[0.2]).unwrap(), 3.0);

        t.set_value(2.0);
        implicit.refresh(2.0).unwrap();
        assert_relative_eq!(expr.evaluate(&[0.2]).unwrap(), 4.0);
    }

    #[test]
    fn temperature_density_cannot_bind() {
        let mesh = IntervalMesh::new(5, 1.0);
        let implicit = ImplicitSpecies::new(
            ValueSpec::space_time_function(Dependencies::TEMPERATURE, |args| {
                args.temperature() * 2.0
            }),
            vec![Species::new("A")],
        );

        assert_eq!(
            implicit.bind(&mesh, &Constant::new(0.0)),
            Err(BindError::MissingArgument { argument: "T" })
        );
    }

    #[test]
    fn concentration_subtracts_every_other_species() {
        let mesh = IntervalMesh::new(5, 1.0);
        let a = solved("A", |p| p[0]);
        let b = solved("B", |_| 0.25);
        let implicit = ImplicitSpecies::named(
            "sites",
            ValueSpec::space_time_function(Dependencies::POSITION, |args| {
                3.0 + args.x().at(0)
            }),
            vec![a, b],
        );
        implicit.bind(&mesh, &Constant::new(0.0)).unwrap();

        let c = implicit.concentration().unwrap();
        for x in [0.0, 0.4, 1.0] {
            let expected = (3.0 + x) - x - 0.25;
            assert_relative_eq!(c.evaluate(&[x]).unwrap(), expected);
        }
    }

    #[test]
    fn concentration_requires_every_solution() {
        let solved_a = solved("A", |_| 1.0);
        let unsolved_b = Species::immobile("B");
        let implicit = ImplicitSpecies::named("sites", 1.0, vec![solved_a, unsolved_b]);

        assert_eq!(
            implicit.concentration().unwrap_err(),
            SpeciesError::UnresolvedDependency {
                species: "sites".to_string(),
                dependency: "B".to_string(),
            }
        );
    }

    #[test]
    fn concentration_requires_binding() {
        let implicit = ImplicitSpecies::named("sites", 1.0, vec![solved("A", |_| 1.0)]);
        assert_eq!(
            implicit.concentration().unwrap_err(),
            SpeciesError::NotBound {
                species: "sites".to_string()
            }
        );
    }

    #[test]
    fn error_message_names_both_species() {
        let implicit = ImplicitSpecies::named("empty", 1.0, vec![Species::immobile("trapped")]);
        let message = implicit.concentration().unwrap_err().to_string();
        assert_eq!(
            message,
            "cannot compute concentration of empty because trapped has no solution"
        );
    }

    #[test]
    fn refresh_before_bind_is_a_no_op() {
        let implicit = ImplicitSpecies::new(ValueSpec::time_function(|t| t), vec![]);
        assert!(implicit.refresh(1.0).is_ok());
        assert!(implicit.value().is_none());
    }
}
