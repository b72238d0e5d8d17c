use copier_core::{PointerDef, Shape};

use crate::{Peek, Poke, ReflectError};

/// Allows allocating, clearing and writing through a pointer
pub struct PokePointer<'mem> {
    /// the underlying value
    pub(crate) value: Poke<'mem>,

    /// the definition of the pointer
    pub(crate) def: PointerDef,
}

impl<'mem> PokePointer<'mem> {
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
        (self.def.borrow)(&*self.value.data).is_none()
    }

    /// Borrows the pointee for reading
    pub fn peek_inner(&self) -> Result<Peek<'_>, ReflectError> {
        let data = (self.def.borrow)(&*self.value.data).ok_or(ReflectError::NullPointer {
            shape: self.shape(),
        })?;
        Peek::from_any(data, self.def.pointee())
    }

    /// Points the pointer at a fresh zero value of the pointee type.
    pub fn allocate(&mut self) -> Result<(), ReflectError> {
        if (self.def.allocate)(&mut *self.value.data) {
            Ok(())
        } else {
            Err(self.value.failed("allocate"))
        }
    }

    /// Resets the pointer to its zero value: null for a nullable pointer, a
    /// zero pointee otherwise.
    pub fn clear(&mut self) -> Result<(), ReflectError> {
        if (self.def.clear)(&mut *self.value.data) {
            Ok(())
        } else {
            Err(self.value.failed("clear"))
        }
    }

    /// Borrows the pointee for writing
    pub fn inner(&mut self) -> Result<Poke<'_>, ReflectError> {
        let shape = self.shape();
        let data = (self.def.borrow_mut)(&mut *self.value.data)
            .ok_or(ReflectError::NullPointer { shape })?;
        Poke::from_any(data, self.def.pointee())
    }

    /// Turns this handle into a handle on the pointee
    pub fn into_inner(self) -> Result<Poke<'mem>, ReflectError> {
        let shape = self.shape();
        let data = (self.def.borrow_mut)(self.value.data).ok_or(ReflectError::NullPointer { shape })?;
        Poke::from_any(data, self.def.pointee())
    }
}

impl core::fmt::Debug for PokePointer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PokePointer")
            .field("shape", &format_args!("{}", self.shape()))
            .field("null", &self.is_null())
            .finish()
    }
}
