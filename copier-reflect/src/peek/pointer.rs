use copier_core::{PointerDef, Shape};

use crate::{Peek, ReflectError};

/// Lets you read through a pointer: `Box<T>` or `Option<T>`
#[derive(Clone, Copy)]
pub struct PeekPointer<'mem> {
    /// the underlying value
    pub(crate) value: Peek<'mem>,

    /// the definition of the pointer
    pub(crate) def: PointerDef,
}

impl core::fmt::Debug for PeekPointer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeekPointer")
            .field("shape", &format_args!("{}", self.value.shape))
            .field("null", &self.is_null())
            .finish()
    }
}

impl<'mem> PeekPointer<'mem> {
    /// Returns the pointer definition
    #[inline(always)]
    pub fn def(&self) -> PointerDef {
        self.def
    }

    /// Returns the shape of the pointer
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.value.shape
    }

    /// Returns `true` if the pointer does not point at anything
    #[inline]
    pub fn is_null(&self) -> bool {
        (self.def.borrow)(self.value.data).is_none()
    }

    /// Borrows the pointee
    pub fn inner(&self) -> Result<Peek<'mem>, ReflectError> {
        let data = (self.def.borrow)(self.value.data).ok_or(ReflectError::NullPointer {
            shape: self.shape(),
        })?;
        Peek::from_any(data, self.def.pointee())
    }
}
