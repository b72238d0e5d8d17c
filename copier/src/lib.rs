#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod tracing_macros;

mod assign;
mod bridge;
mod collection;
mod init;
mod introspect;

mod engine;
pub use engine::{Copier, copy};

mod error;
pub use error::*;

mod options;
pub use options::*;

pub use copier_core::*;
pub use copier_reflect::{HeapValue, Peek, Poke, ReflectError};
