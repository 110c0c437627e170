//! Field primitives and value resolution for hydrogen transport models.
//!
//! This crate describes the small part of a finite-element runtime that
//! species bookkeeping needs to talk to: constants that can be overwritten in
//! place, solver-owned functions, symbolic expressions over spatial
//! coordinates, and a mesh that can enumerate entities matching a marker.
//!
//! On top of those primitives, [`ValueSpec`] describes a user-supplied
//! quantity (a number, a precomputed field, or a function of time, position
//! and temperature) and knows how to bind it to a [`FieldValue`] and refresh
//! it as time advances.

mod error;

pub mod fem;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod value;

pub use error::{BindError, EvalError};
pub use fem::{Constant, Expr, Function, FunctionSpace, Mesh, SpatialCoordinate, TestFunction};
pub use value::{Arguments, Conversion, Dependencies, FieldValue, Value, ValueSpec};
