//! The finite-element collaborator types.
//!
//! These are handles onto objects owned by the external solver. Cloning a
//! [`Constant`] or a [`Function`] clones the handle, not the data: every clone
//! observes an in-place update.

mod constant;
mod expr;
mod function;
mod mesh;

pub use constant::Constant;
pub use expr::{BinaryOp, Expr, SpatialCoordinate, UnaryOp};
pub use function::{Function, FunctionSpace, TestFunction};
pub use mesh::Mesh;
