//! User-supplied values and their binding to field representations.
//!
//! A [`ValueSpec`] is what the user writes: a number, an existing field or
//! expression, or a function of time and/or position and/or temperature.
//! Binding it against a mesh and the current time produces a [`FieldValue`]
//! the solver can assemble. The variant is chosen once, at bind time, and
//! only pure-time functions need refreshing as time advances.

mod arguments;
mod field_value;
mod spec;
mod user_value;

pub use arguments::{Arguments, Dependencies};
pub use field_value::{Conversion, FieldValue};
pub use spec::{SpaceTimeFunction, TimeFunction, ValueSpec};
pub use user_value::Value;
