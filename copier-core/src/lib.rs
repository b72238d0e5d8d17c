#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod macros;

mod typeid;
pub use typeid::*;

// Type definitions
mod types;
pub use types::*;

// Definitions for std types
mod impls;
pub use impls::{clone_into, default_boxed, shape_of};

/// Allows querying the [`Shape`] of a type, which in turn lets the copy engine
/// walk its fields, follow its pointers and call its bridge methods.
///
/// Every reflected type has a zero value ([`Default`]) and value-copy semantics
/// ([`Clone`]): the engine allocates zero values when it materializes null
/// pointers and sequence elements, and clones when source and destination have
/// the same type.
///
/// User structs implement this through [`reflect_struct!`].
pub trait Reflect: Default + Clone + 'static {
    /// The shape of this type
    const SHAPE: &'static Shape;
}
