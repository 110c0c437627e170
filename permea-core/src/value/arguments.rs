use std::ops::BitOr;

use crate::{Expr, SpatialCoordinate};

/// The arguments a user function declares it reads.
///
/// Declarations are explicit: a function only receives the arguments it
/// declares, and reading an undeclared one is a programming error.
///
/// # Example
///
/// ```
/// use permea_core::Dependencies;
///
/// let deps = Dependencies::TIME | Dependencies::POSITION;
/// assert!(deps.time && deps.position && !deps.temperature);
/// assert!(!deps.is_time_only());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dependencies {
    pub time: bool,
    pub position: bool,
    pub temperature: bool,
}

impl Dependencies {
    pub const NONE: Self = Self {
        time: false,
        position: false,
        temperature: false,
    };

    pub const TIME: Self = Self {
        time: true,
        ..Self::NONE
    };

    pub const POSITION: Self = Self {
        position: true,
        ..Self::NONE
    };

    pub const TEMPERATURE: Self = Self {
        temperature: true,
        ..Self::NONE
    };

    /// Returns `true` if time is the only declared dependency.
    #[must_use]
    pub fn is_time_only(self) -> bool {
        self == Self::TIME
    }
}

impl BitOr for Dependencies {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            time: self.time || rhs.time,
            position: self.position || rhs.position,
            temperature: self.temperature || rhs.temperature,
        }
    }
}

/// The arguments passed to a [`SpaceTimeFunction`](crate::value::SpaceTimeFunction).
///
/// Only the declared [`Dependencies`] are populated.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    pub(crate) t: Option<&'a Expr>,
    pub(crate) x: Option<&'a SpatialCoordinate>,
    pub(crate) temperature: Option<&'a Expr>,
}

impl<'a> Arguments<'a> {
    /// The simulation time, `t`.
    ///
    /// # Panics
    ///
    /// Panics if the function did not declare [`Dependencies::TIME`].
    #[must_use]
    pub fn t(&self) -> &'a Expr {
        match self.t {
            Some(t) => t,
            None => panic!("`t` read by a function that does not declare a time dependency"),
        }
    }

    /// The spatial coordinate, `x`.
    ///
    /// # Panics
    ///
    /// Panics if the function did not declare [`Dependencies::POSITION`].
    #[must_use]
    pub fn x(&self) -> &'a SpatialCoordinate {
        match self.x {
            Some(x) => x,
            None => panic!("`x` read by a function that does not declare a position dependency"),
        }
    }

    /// The temperature, `T`.
    ///
    /// # Panics
    ///
    /// Panics if the function did not declare [`Dependencies::TEMPERATURE`].
    #[must_use]
    pub fn temperature(&self) -> &'a Expr {
        match self.temperature {
            Some(temperature) => temperature,
            None => panic!("`T` read by a function that does not declare a temperature dependency"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_of_dependencies() {
        let all = Dependencies::TIME | Dependencies::POSITION | Dependencies::TEMPERATURE;
        assert_eq!(
            all,
            Dependencies {
                time: true,
                position: true,
                temperature: true
            }
        );
        assert!(Dependencies::TIME.is_time_only());
        assert!(!Dependencies::NONE.is_time_only());
        assert!(!(Dependencies::TIME | Dependencies::TEMPERATURE).is_time_only());
    }

    #[test]
    #[should_panic(expected = "does not declare a position dependency")]
    fn reading_an_undeclared_argument_panics() {
        let t = Expr::from(1.0);
        let args = Arguments {
            t: Some(&t),
            x: None,
            temperature: None,
        };
        let _ = args.x();
    }
}
