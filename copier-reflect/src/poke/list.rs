use copier_core::{ListDef, Shape};

use crate::{HeapValue, PeekList, Poke, ReflectError};

/// Allows appending to and clearing a list
pub struct PokeList<'mem> {
    /// the underlying value
    pub(crate) value: Poke<'mem>,

    /// the definition of the list
    pub(crate) def: ListDef,
}

impl<'mem> PokeList<'mem> {
    /// Returns the list definition
    #[inline(always)]
    pub fn def(&self) -> ListDef {
        self.def
    }

    /// Returns the shape of the list
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.value.shape
    }

    /// Borrows the list for reading
    pub fn as_peek(&self) -> PeekList<'_> {
        PeekList {
            value: self.value.as_peek(),
            def: self.def,
        }
    }

    /// Get the number of items in the list
    #[inline]
    pub fn len(&self) -> usize {
        (self.def.len)(&*self.value.data)
    }

    /// Returns true if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an item, wrapping it into as many pointer layers as the item
    /// type needs (a `u8` can be pushed onto a `Vec<Option<Box<u8>>>`).
    pub fn push(&mut self, item: HeapValue) -> Result<(), ReflectError> {
        let item = item.wrap_into(self.def.item())?;
        (self.def.push)(&mut *self.value.data, item.into_boxed())
            .map_err(|_| self.value.failed("push"))
    }

    /// Replaces the list with a new, empty list.
    pub fn clear(&mut self) -> Result<(), ReflectError> {
        if (self.def.clear)(&mut *self.value.data) {
            Ok(())
        } else {
            Err(self.value.failed("clear"))
        }
    }
}

impl core::fmt::Debug for PokeList<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PokeList")
            .field("shape", &format_args!("{}", self.shape()))
            .field("len", &self.len())
            .finish()
    }
}
