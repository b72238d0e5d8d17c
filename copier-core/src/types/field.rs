use core::any::Any;
use core::fmt;

use super::Shape;
use super::bitflags::bitflags;

bitflags! {
    /// Flags that can be applied to fields to modify how the copy engine treats them
    pub struct FieldFlags: u32 {
        /// The field is embedded (anonymous): its own fields are exposed as if
        /// they were declared on the containing struct.
        const EMBEDDED = 1 << 0;

        /// The field cannot be written through reflection.
        const READONLY = 1 << 1;
    }
}

/// Reads a field out of its (type-erased) owning struct.
///
/// Returns `None` if `owner` is not of the struct type the field belongs to.
pub type FieldGetFn = for<'a> fn(owner: &'a dyn Any) -> Option<&'a dyn Any>;

/// Mutably borrows a field out of its (type-erased) owning struct.
///
/// Returns `None` if `owner` is not of the struct type the field belongs to.
pub type FieldGetMutFn = for<'a> fn(owner: &'a mut dyn Any) -> Option<&'a mut dyn Any>;

/// Describes a field in a struct
#[derive(Clone, Copy)]
pub struct Field {
    /// name of the field, unique within its struct
    pub name: &'static str,

    /// shape of the inner type
    ///
    /// the layer of indirection allows for cyclic type definitions
    pub shape: fn() -> &'static Shape,

    /// flags for the field (e.g. embedded, read-only)
    pub flags: FieldFlags,

    /// cf. [`FieldGetFn`]
    pub get: FieldGetFn,

    /// cf. [`FieldGetMutFn`]
    pub get_mut: FieldGetMutFn,
}

impl Field {
    /// Returns the shape of the inner type
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }

    /// Returns true if the field is embedded (flattened into its parent).
    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.flags.contains(FieldFlags::EMBEDDED)
    }

    /// Returns true if the field can be written.
    #[inline]
    pub fn is_writable(&self) -> bool {
        !self.flags.contains(FieldFlags::READONLY)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("shape", &format_args!("{}", self.shape()))
            .field("flags", &self.flags)
            .finish()
    }
}

/// Maps a field marker of [`reflect_struct!`](crate::reflect_struct) to its flag.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_flag {
    (embedded) => {
        $crate::FieldFlags::EMBEDDED
    };
    (readonly) => {
        $crate::FieldFlags::READONLY
    };
}
