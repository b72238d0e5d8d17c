#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod error;
pub use error::*;

mod peek;
pub use peek::*;

mod poke;
pub use poke::*;

mod heap_value;
pub use heap_value::*;
