use crate::{BindError, Constant, Expr, Mesh};

use super::{Conversion, FieldValue, ValueSpec};

/// A user-supplied value together with its bound field.
///
/// Sources, boundary conditions and initial conditions hold their values as
/// `Value`s. The solver converts each one once, after the function spaces
/// are built, and calls [`Value::update`] at every step.
#[derive(Debug, Clone)]
pub struct Value {
    input: ValueSpec,
    field: Option<FieldValue>,
}

impl Value {
    #[must_use]
    pub fn new(input: impl Into<ValueSpec>) -> Self {
        Self {
            input: input.into(),
            field: None,
        }
    }

    /// The value as the user supplied it.
    #[must_use]
    pub fn input(&self) -> &ValueSpec {
        &self.input
    }

    /// The bound field, once [`Value::convert`] has been called.
    #[must_use]
    pub fn field(&self) -> Option<&FieldValue> {
        self.field.as_ref()
    }

    /// The expression an interpolated field is refreshed from.
    #[must_use]
    pub fn interpolation_expression(&self) -> Option<&Expr> {
        match &self.field {
            Some(FieldValue::Interpolated { expression, .. }) => Some(expression),
            _ => None,
        }
    }

    #[must_use]
    pub fn time_dependent(&self) -> bool {
        self.input.time_dependent()
    }

    #[must_use]
    pub fn temperature_dependent(&self) -> bool {
        self.input.temperature_dependent()
    }

    /// Converts the input to a field and stores it.
    ///
    /// See [`ValueSpec::resolve`] for how each kind of input is converted.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if the input cannot be converted.
    pub fn convert(
        &mut self,
        mesh: &dyn Mesh,
        t: &Constant,
        temperature: Option<&Expr>,
        conversion: Conversion<'_>,
    ) -> Result<&FieldValue, BindError> {
        let field = self.input.resolve(mesh, t, temperature, conversion)?;
        Ok(self.field.insert(field))
    }

    /// Brings the field up to date with time `t`.
    ///
    /// Time functions bound to a constant are re-evaluated; interpolated
    /// functions are re-interpolated from their expression. Anything else,
    /// including a value not yet converted, is left as is.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if re-evaluation or re-interpolation fails.
    pub fn update(&self, t: f64) -> Result<(), BindError> {
        match &self.field {
            Some(FieldValue::Interpolated {
                expression,
                function,
            }) => function.interpolate(expression)?,
            Some(field) => self.input.refresh(field, t)?,
            None => {}
        }
        Ok(())
    }
}
