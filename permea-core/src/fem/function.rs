use std::{cell::RefCell, fmt, rc::Rc};

use crate::{EvalError, Expr};

type Evaluator = Rc<dyn Fn(&[f64]) -> Result<f64, EvalError>>;

/// A handle onto a function space built by the solver.
///
/// The space itself lives in the solver; here it is only labelled so that
/// species can record which (sub)space they were assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSpace {
    label: String,
    degree: u32,
}

impl FunctionSpace {
    #[must_use]
    pub fn new(label: impl Into<String>, degree: u32) -> Self {
        Self {
            label: label.into(),
            degree,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }
}

/// The test function associated with one component of a function space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFunction {
    space: FunctionSpace,
    component: Option<usize>,
}

impl TestFunction {
    #[must_use]
    pub fn new(space: FunctionSpace, component: Option<usize>) -> Self {
        Self { space, component }
    }

    #[must_use]
    pub fn space(&self) -> &FunctionSpace {
        &self.space
    }

    /// The sub-space index, or `None` for a single-species problem.
    #[must_use]
    pub fn component(&self) -> Option<usize> {
        self.component
    }
}

/// A finite-element function owned by the solver.
///
/// Point evaluation is delegated to an evaluator, which the solver replaces
/// whenever the function's degrees of freedom change. Within this crate that
/// only happens through [`Function::interpolate`].
#[derive(Clone)]
pub struct Function(Rc<FunctionInner>);

struct FunctionInner {
    name: String,
    space: FunctionSpace,
    evaluator: RefCell<Evaluator>,
}

impl Function {
    /// Creates a function on `space` that is zero everywhere.
    #[must_use]
    pub fn new(name: impl Into<String>, space: FunctionSpace) -> Self {
        Self::from_fn(name, space, |_| 0.0)
    }

    /// Creates a function on `space` whose point values are given by `f`.
    #[must_use]
    pub fn from_fn<F>(name: impl Into<String>, space: FunctionSpace, f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + 'static,
    {
        let evaluator: Evaluator =
            Rc::new(move |point: &[f64]| -> Result<f64, EvalError> { Ok(f(point)) });
        Self(Rc::new(FunctionInner {
            name: name.into(),
            space,
            evaluator: RefCell::new(evaluator),
        }))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[must_use]
    pub fn space(&self) -> &FunctionSpace {
        &self.0.space
    }

    /// Evaluates the function at `point`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the interpolated expression cannot be
    /// evaluated at `point`.
    pub fn eval(&self, point: &[f64]) -> Result<f64, EvalError> {
        let evaluator = Rc::clone(&self.0.evaluator.borrow());
        evaluator(point)
    }

    /// Interpolates `expr` into this function.
    ///
    /// Constants in `expr` are sampled now, so later updates to them only
    /// take effect after interpolating again.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NotScalar`] if `expr` is vector-valued.
    pub fn interpolate(&self, expr: &Expr) -> Result<(), EvalError> {
        let rank = expr.rank();
        if rank != 0 {
            return Err(EvalError::NotScalar { rank });
        }

        let frozen = expr.freeze();
        let evaluator: Evaluator = Rc::new(move |point: &[f64]| frozen.evaluate(point));
        *self.0.evaluator.borrow_mut() = evaluator;
        Ok(())
    }

    /// Returns `true` if both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.0.name)
            .field("space", &self.0.space)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Constant;

    fn space() -> FunctionSpace {
        FunctionSpace::new("P1", 1)
    }

    #[test]
    fn new_function_is_zero() {
        let u = Function::new("u", space());
        assert_eq!(u.eval(&[0.3]), Ok(0.0));
    }

    #[test]
    fn interpolation_samples_constants_at_call_time() {
        let t = Constant::new(1.0);
        let expr = Expr::coordinate(0) * &t;

        let u = Function::new("u", space());
        u.interpolate(&expr).unwrap();
        assert_relative_eq!(u.eval(&[2.0]).unwrap(), 2.0);

        t.set_value(3.0);
        assert_relative_eq!(u.eval(&[2.0]).unwrap(), 2.0);

        u.interpolate(&expr).unwrap();
        assert_relative_eq!(u.eval(&[2.0]).unwrap(), 6.0);
    }

    #[test]
    fn vector_expressions_cannot_be_interpolated() {
        let u = Function::new("u", space());
        let result = u.interpolate(&Expr::from(vec![1.0, 2.0]));
        assert_eq!(result, Err(EvalError::NotScalar { rank: 2 }));
    }

    #[test]
    fn clones_observe_interpolation() {
        let u = Function::new("u", space());
        let alias = u.clone();
        u.interpolate(&Expr::from(4.0)).unwrap();

        assert_eq!(alias.eval(&[0.0]), Ok(4.0));
        assert!(u.ptr_eq(&alias));
        assert_eq!(alias.name(), "u");
    }
}
