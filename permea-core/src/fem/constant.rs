use std::{cell::Cell, fmt, rc::Rc};

/// A spatially uniform scalar field whose value can be overwritten in place.
///
/// The simulation time is a `Constant`: the driver updates it once per step
/// and every expression holding a clone sees the new value.
///
/// # Example
///
/// ```
/// use permea_core::Constant;
///
/// let t = Constant::new(0.0);
/// let seen_by_expression = t.clone();
///
/// t.set_value(2.5);
/// assert_eq!(seen_by_expression.value(), 2.5);
/// ```
#[derive(Clone)]
pub struct Constant(Rc<Cell<f64>>);

impl Constant {
    /// Creates a new constant with the given value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    /// Returns the current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.get()
    }

    /// Overwrites the value in place.
    #[inline]
    pub fn set_value(&self, value: f64) {
        self.0.set(value);
    }

    /// Returns `true` if both handles refer to the same constant.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constant").field(&self.value()).finish()
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
