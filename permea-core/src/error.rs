use thiserror::Error;

/// Errors that can occur when evaluating an [`Expr`](crate::Expr) at a point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A vector-valued expression was used where a scalar is required.
    #[error("expression is not scalar: it has {rank} components")]
    NotScalar { rank: usize },

    /// The expression reads a coordinate the evaluation point does not have.
    #[error("coordinate axis {axis} is out of range for a point of dimension {dim}")]
    CoordinateOutOfRange { axis: usize, dim: usize },
}

/// Errors that can occur when binding or refreshing a value specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A function of time only returned something other than a plain number.
    ///
    /// Pure-time values are evaluated eagerly and stored as a constant, so
    /// their result must fold to a single scalar.
    #[error("value should return a float or an int, not {found}")]
    TypeMismatch { found: String },

    /// The value declares a dependency the caller cannot supply.
    #[error("value depends on `{argument}` but no `{argument}` was supplied")]
    MissingArgument { argument: &'static str },

    #[error(transparent)]
    Eval(#[from] EvalError),
}
