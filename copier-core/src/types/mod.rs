mod bitflags;

mod shape;
pub use shape::*;

mod field;
pub use field::*;

mod def;
pub use def::*;

mod method;
pub use method::*;

mod scalar;
pub use scalar::*;

mod external;
pub use external::*;
