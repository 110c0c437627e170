use crate::{Constant, EvalError, Expr, Function, FunctionSpace};

/// How far a space- or temperature-dependent function is converted.
#[derive(Debug, Clone, Copy)]
pub enum Conversion<'a> {
    /// Stop at the mapped expression.
    Symbolic,
    /// Interpolate the mapped expression into a new function on the space.
    Interpolate(&'a FunctionSpace),
}

/// A value bound to a representation the solver can assemble.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A uniform value, overwritten in place when it depends on time.
    Constant(Constant),
    /// A field or symbolic expression, used as-is.
    Expression(Expr),
    /// A function interpolated from `expression`.
    ///
    /// Re-interpolating picks up any change to constants in the expression.
    Interpolated { expression: Expr, function: Function },
}

impl FieldValue {
    /// Returns the bound value as an expression.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        match self {
            Self::Constant(constant) => Expr::Constant(constant.clone()),
            Self::Expression(expr) => expr.clone(),
            Self::Interpolated { function, .. } => Expr::Function(function.clone()),
        }
    }

    /// Returns the constant, if this value was bound to one.
    #[must_use]
    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(constant) => Some(constant),
            Self::Expression(_) | Self::Interpolated { .. } => None,
        }
    }

    /// Evaluates the bound value at `point`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the value cannot be evaluated at `point`.
    pub fn evaluate(&self, point: &[f64]) -> Result<f64, EvalError> {
        match self {
            Self::Constant(constant) => Ok(constant.value()),
            Self::Expression(expr) => expr.evaluate(point),
            Self::Interpolated { function, .. } => function.eval(point),
        }
    }
}
