use std::{fmt, rc::Rc};

use crate::{BindError, Constant, Expr, Function, Mesh, SpatialCoordinate};

use super::{Arguments, Conversion, Dependencies, FieldValue};

/// A function of time only.
///
/// It is evaluated eagerly with the current time as a plain number, and the
/// result must fold to a scalar. The bound value is a [`Constant`] that is
/// overwritten each time the value is refreshed.
#[derive(Clone)]
pub struct TimeFunction(Rc<dyn Fn(f64) -> Expr>);

impl TimeFunction {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(f64) -> R + 'static,
        R: Into<Expr>,
    {
        Self(Rc::new(move |t: f64| -> Expr { f(t).into() }))
    }

    /// Evaluates the function at `t`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::TypeMismatch`] if the result is not a plain number.
    pub fn evaluate(&self, t: f64) -> Result<f64, BindError> {
        let result = (self.0)(t);
        result.as_literal().ok_or_else(|| BindError::TypeMismatch {
            found: result.kind(),
        })
    }
}

/// A function of any declared subset of time, position and temperature.
///
/// It is called once, at bind time, with symbolic arguments: the time is the
/// driver's time [`Constant`] and the position is the mesh's
/// [`SpatialCoordinate`]. The result is kept as an expression, so later
/// changes to the time constant flow through without re-calling it.
///
/// A function declaring time and nothing else is treated like a
/// [`TimeFunction`]: it is called with the time as a plain number and must
/// return one.
#[derive(Clone)]
pub struct SpaceTimeFunction {
    dependencies: Dependencies,
    callable: Rc<dyn Fn(&Arguments<'_>) -> Expr>,
}

impl SpaceTimeFunction {
    pub fn new<F, R>(dependencies: Dependencies, f: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> R + 'static,
        R: Into<Expr>,
    {
        Self {
            dependencies,
            callable: Rc::new(move |args: &Arguments<'_>| -> Expr { f(args).into() }),
        }
    }

    #[must_use]
    pub fn dependencies(&self) -> Dependencies {
        self.dependencies
    }

    /// Calls the function with only its declared arguments.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingArgument`] if the function depends on
    /// temperature and `temperature` is `None`.
    pub fn map(
        &self,
        x: &SpatialCoordinate,
        t: &Expr,
        temperature: Option<&Expr>,
    ) -> Result<Expr, BindError> {
        let deps = self.dependencies;
        let temperature = if deps.temperature {
            Some(temperature.ok_or(BindError::MissingArgument { argument: "T" })?)
        } else {
            None
        };

        let args = Arguments {
            t: deps.time.then_some(t),
            x: deps.position.then_some(x),
            temperature,
        };
        Ok((self.callable)(&args))
    }

    /// Calls a time-only function with `t` as a number.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::TypeMismatch`] if the result is not a plain number.
    fn evaluate_at(&self, t: f64) -> Result<f64, BindError> {
        let t = Expr::from(t);
        let args = Arguments {
            t: Some(&t),
            x: None,
            temperature: None,
        };
        let result = (self.callable)(&args);
        result.as_literal().ok_or_else(|| BindError::TypeMismatch {
            found: result.kind(),
        })
    }
}

/// The user's description of a quantity, before it is bound.
///
/// # Example
///
/// ```
/// use permea_core::{Dependencies, ValueSpec};
///
/// let uniform = ValueSpec::from(1.0e20);
/// let ramp = ValueSpec::time_function(|t| 1.0e20 * (1.0 + t));
/// let profile = ValueSpec::space_time_function(Dependencies::POSITION, |args| {
///     1.0e20 * (1.0 - args.x().at(0))
/// });
///
/// assert!(!uniform.time_dependent());
/// assert!(ramp.time_dependent());
/// assert!(!profile.time_dependent());
/// ```
#[derive(Clone)]
pub enum ValueSpec {
    /// A number, wrapped as a constant field when bound.
    Constant(f64),
    /// A precomputed field or symbolic expression, used as-is.
    Field(Expr),
    /// A function of time only, evaluated eagerly.
    TimeFunction(TimeFunction),
    /// A function of position and/or temperature and/or time, mapped symbolically.
    SpaceTimeFunction(SpaceTimeFunction),
}

impl ValueSpec {
    /// Creates a value that is a function of time only.
    pub fn time_function<F, R>(f: F) -> Self
    where
        F: Fn(f64) -> R + 'static,
        R: Into<Expr>,
    {
        Self::TimeFunction(TimeFunction::new(f))
    }

    /// Creates a value that is a function of the declared arguments.
    pub fn space_time_function<F, R>(dependencies: Dependencies, f: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> R + 'static,
        R: Into<Expr>,
    {
        Self::SpaceTimeFunction(SpaceTimeFunction::new(dependencies, f))
    }

    /// Returns `true` if the value is a user function.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::TimeFunction(_) | Self::SpaceTimeFunction(_))
    }

    /// Returns `true` if the value is a function that reads the time.
    #[must_use]
    pub fn time_dependent(&self) -> bool {
        match self {
            Self::TimeFunction(_) => true,
            Self::SpaceTimeFunction(f) => f.dependencies().time,
            Self::Constant(_) | Self::Field(_) => false,
        }
    }

    /// Returns `true` if the value is a function that reads the temperature.
    #[must_use]
    pub fn temperature_dependent(&self) -> bool {
        match self {
            Self::SpaceTimeFunction(f) => f.dependencies().temperature,
            Self::Constant(_) | Self::Field(_) | Self::TimeFunction(_) => false,
        }
    }

    /// Binds the value on `mesh` at the time held by `t`.
    ///
    /// - Numbers become a new [`Constant`].
    /// - Fields and expressions are used as-is.
    /// - Time functions, and space/time functions declaring only time, are
    ///   evaluated at `t.value()` and wrapped as a [`Constant`].
    /// - Other space/time functions are called with their declared arguments
    ///   and either kept symbolic or interpolated, according to `conversion`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::TypeMismatch`] if a function of time only does
    /// not return a plain number, [`BindError::MissingArgument`] if a temperature
    /// dependency cannot be satisfied, or [`BindError::Eval`] if an
    /// interpolation fails.
    pub fn resolve(
        &self,
        mesh: &dyn Mesh,
        t: &Constant,
        temperature: Option<&Expr>,
        conversion: Conversion<'_>,
    ) -> Result<FieldValue, BindError> {
        let field = match self {
            Self::Constant(value) => FieldValue::Constant(Constant::new(*value)),
            Self::Field(expr) => FieldValue::Expression(expr.clone()),
            Self::TimeFunction(f) => FieldValue::Constant(Constant::new(f.evaluate(t.value())?)),
            Self::SpaceTimeFunction(f) if f.dependencies().is_time_only() => {
                FieldValue::Constant(Constant::new(f.evaluate_at(t.value())?))
            }
            Self::SpaceTimeFunction(f) => {
                let x = SpatialCoordinate::of(mesh);
                let mapped = f.map(&x, &Expr::from(t), temperature)?;
                match conversion {
                    Conversion::Symbolic => FieldValue::Expression(mapped),
                    Conversion::Interpolate(space) => {
                        let function = Function::new("value", space.clone());
                        function.interpolate(&mapped)?;
                        FieldValue::Interpolated {
                            expression: mapped,
                            function,
                        }
                    }
                }
            }
        };

        tracing::trace!("resolved {:?} to {:?}", self, field);
        Ok(field)
    }

    /// Brings a bound value up to date with time `t`.
    ///
    /// Only a function of time only bound to a constant changes: it is
    /// re-evaluated and the constant overwritten in place. Every other
    /// pairing is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::TypeMismatch`] if the function does not return a
    /// plain number.
    pub fn refresh(&self, field: &FieldValue, t: f64) -> Result<(), BindError> {
        match (self, field) {
            (Self::TimeFunction(f), FieldValue::Constant(constant)) => {
                constant.set_value(f.evaluate(t)?);
            }
            (Self::SpaceTimeFunction(f), FieldValue::Constant(constant))
                if f.dependencies().is_time_only() =>
            {
                constant.set_value(f.evaluate_at(t)?);
            }
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Debug for ValueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Field(expr) => f.debug_tuple("Field").field(expr).finish(),
            Self::TimeFunction(_) => f.write_str("TimeFunction(..)"),
            Self::SpaceTimeFunction(func) => f
                .debug_struct("SpaceTimeFunction")
                .field("dependencies", &func.dependencies())
                .finish_non_exhaustive(),
        }
    }
}

impl From<f64> for ValueSpec {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<i32> for ValueSpec {
    fn from(value: i32) -> Self {
        Self::Constant(f64::from(value))
    }
}

impl From<Expr> for ValueSpec {
    fn from(expr: Expr) -> Self {
        Self::Field(expr)
    }
}

impl From<Constant> for ValueSpec {
    fn from(constant: Constant) -> Self {
        Self::Field(Expr::Constant(constant))
    }
}

impl From<Function> for ValueSpec {
    fn from(function: Function) -> Self {
        Self::Field(Expr::Function(function))
    }
}

impl From<TimeFunction> for ValueSpec {
    fn from(f: TimeFunction) -> Self {
        Self::TimeFunction(f)
    }
}

impl From<SpaceTimeFunction> for ValueSpec {
    fn from(f: SpaceTimeFunction) -> Self {
        Self::SpaceTimeFunction(f)
    }
}
