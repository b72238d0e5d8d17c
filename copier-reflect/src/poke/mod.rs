mod value;
pub use value::*;

mod struct_;
pub use struct_::*;

mod pointer;
pub use pointer::*;

mod list;
pub use list::*;
