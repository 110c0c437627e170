use std::{
    iter::Sum,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::{Constant, EvalError, Function, Mesh};

/// A unary operation in an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Exp,
}

impl UnaryOp {
    fn apply(self, value: f64) -> f64 {
        match self {
            Self::Neg => -value,
            Self::Exp => value.exp(),
        }
    }
}

/// A binary operation in an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// A symbolic expression the solver can assemble into its weak forms.
///
/// Expressions are built from literals, constants, solver functions and
/// spatial coordinates using the usual arithmetic operators. They are not
/// simplified; the only transformations offered are constant folding
/// ([`Expr::as_literal`]) and sampling of constants ([`Expr::freeze`]).
///
/// # Example
///
/// ```
/// use permea_core::{Constant, Expr};
///
/// let t = Constant::new(2.0);
/// let x = Expr::coordinate(0);
/// let expr = 1.0 + x * &t;
///
/// assert_eq!(expr.evaluate(&[3.0]), Ok(7.0));
/// assert!(expr.depends_on_position());
/// ```
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(f64),
    Constant(Constant),
    Function(Function),
    /// One component of the spatial coordinate.
    Coordinate(usize),
    Vector(Vec<Expr>),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Returns the `axis` component of the spatial coordinate.
    #[must_use]
    pub fn coordinate(axis: usize) -> Self {
        Self::Coordinate(axis)
    }

    /// Returns `e` raised to this expression.
    #[must_use]
    pub fn exp(self) -> Self {
        Self::Unary(UnaryOp::Exp, Box::new(self))
    }

    /// Returns this expression raised to `exponent`.
    #[must_use]
    pub fn powf(self, exponent: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Pow, self, exponent.into())
    }

    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Returns the number of components, or zero for a scalar.
    #[must_use]
    pub fn rank(&self) -> usize {
        match self {
            Self::Vector(items) => items.len(),
            Self::Unary(_, inner) => inner.rank(),
            Self::Binary(_, lhs, rhs) => lhs.rank().max(rhs.rank()),
            Self::Literal(_) | Self::Constant(_) | Self::Function(_) | Self::Coordinate(_) => 0,
        }
    }

    /// Folds the expression to a number if it is built from literals only.
    ///
    /// Constants, functions and coordinates are not plain numbers, so any
    /// expression containing one returns `None`.
    #[must_use]
    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Self::Literal(value) => Some(*value),
            Self::Unary(op, inner) => inner.as_literal().map(|value| op.apply(value)),
            Self::Binary(op, lhs, rhs) => Some(op.apply(lhs.as_literal()?, rhs.as_literal()?)),
            Self::Constant(_) | Self::Function(_) | Self::Coordinate(_) | Self::Vector(_) => None,
        }
    }

    /// Returns `true` if the expression reads the spatial coordinate.
    #[must_use]
    pub fn depends_on_position(&self) -> bool {
        match self {
            Self::Coordinate(_) => true,
            Self::Vector(items) => items.iter().any(Expr::depends_on_position),
            Self::Unary(_, inner) => inner.depends_on_position(),
            Self::Binary(_, lhs, rhs) => lhs.depends_on_position() || rhs.depends_on_position(),
            Self::Literal(_) | Self::Constant(_) | Self::Function(_) => false,
        }
    }

    /// Returns a copy with every constant replaced by its current value.
    #[must_use]
    pub fn freeze(&self) -> Self {
        match self {
            Self::Constant(constant) => Self::Literal(constant.value()),
            Self::Vector(items) => Self::Vector(items.iter().map(Expr::freeze).collect()),
            Self::Unary(op, inner) => Self::Unary(*op, Box::new(inner.freeze())),
            Self::Binary(op, lhs, rhs) => Self::binary(*op, lhs.freeze(), rhs.freeze()),
            Self::Literal(_) | Self::Function(_) | Self::Coordinate(_) => self.clone(),
        }
    }

    /// Evaluates the expression at `point`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the expression is vector-valued or reads a
    /// coordinate `point` does not have.
    pub fn evaluate(&self, point: &[f64]) -> Result<f64, EvalError> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::Constant(constant) => Ok(constant.value()),
            Self::Function(function) => function.eval(point),
            Self::Coordinate(axis) => {
                point
                    .get(*axis)
                    .copied()
                    .ok_or(EvalError::CoordinateOutOfRange {
                        axis: *axis,
                        dim: point.len(),
                    })
            }
            Self::Vector(items) => Err(EvalError::NotScalar { rank: items.len() }),
            Self::Unary(op, inner) => Ok(op.apply(inner.evaluate(point)?)),
            Self::Binary(op, lhs, rhs) => Ok(op.apply(lhs.evaluate(point)?, rhs.evaluate(point)?)),
        }
    }

    /// A short description of what kind of expression this is.
    #[must_use]
    pub fn kind(&self) -> String {
        let rank = self.rank();
        if rank > 0 {
            format!("a vector with {rank} components")
        } else if self.depends_on_position() {
            "a spatially varying expression".to_string()
        } else if self.as_literal().is_some() {
            "a number".to_string()
        } else {
            "a field expression".to_string()
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Literal(f64::from(value))
    }
}

impl From<Constant> for Expr {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

impl From<&Constant> for Expr {
    fn from(constant: &Constant) -> Self {
        Self::Constant(constant.clone())
    }
}

impl From<Function> for Expr {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<&Function> for Expr {
    fn from(function: &Function) -> Self {
        Self::Function(function.clone())
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl From<Vec<f64>> for Expr {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(values.into_iter().map(Expr::Literal).collect())
    }
}

impl From<Vec<Expr>> for Expr {
    fn from(items: Vec<Expr>) -> Self {
        Self::Vector(items)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<Expr>> $trait<R> for Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs.into())
            }
        }

        impl<R: Into<Expr>> $trait<R> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self.clone(), rhs.into())
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, Expr::Literal(self), rhs)
            }
        }

        impl $trait<&Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                Expr::binary($op, Expr::Literal(self), rhs.clone())
            }
        }
    };
}

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Sub);
impl_binary_op!(Mul, mul, BinaryOp::Mul);
impl_binary_op!(Div, div, BinaryOp::Div);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Unary(UnaryOp::Neg, Box::new(self))
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        -self.clone()
    }
}

/// Sums expressions left to right; an empty sum is the literal zero.
impl Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Self {
        iter.reduce(|acc, item| acc + item)
            .unwrap_or(Expr::Literal(0.0))
    }
}

/// The spatial coordinate `x` of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialCoordinate {
    dim: usize,
}

impl SpatialCoordinate {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Returns the spatial coordinate of `mesh`.
    #[must_use]
    pub fn of(mesh: &dyn Mesh) -> Self {
        Self::new(mesh.geometric_dimension())
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the `axis` component, `x[axis]`.
    #[must_use]
    pub fn at(&self, axis: usize) -> Expr {
        Expr::Coordinate(axis)
    }

    /// Returns the full coordinate as a vector expression.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        Expr::Vector((0..self.dim).map(Expr::Coordinate).collect())
    }
}
