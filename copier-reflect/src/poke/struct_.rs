use copier_core::{Field, Shape, StructDef};

use crate::{PeekStruct, Poke, ReflectError};

/// Allows mutating the fields of a struct
pub struct PokeStruct<'mem> {
    /// the underlying value
    pub(crate) value: Poke<'mem>,

    /// field list, with accessors and shapes
    pub(crate) def: StructDef,
}

impl<'mem> PokeStruct<'mem> {
    /// Shape getter
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.value.shape
    }

    /// Gets the struct definition
    #[inline(always)]
    pub fn def(&self) -> StructDef {
        self.def
    }

    /// Coerce back into a value
    #[inline(always)]
    pub fn into_value(self) -> Poke<'mem> {
        self.value
    }

    /// Borrows the struct for reading
    pub fn as_peek(&self) -> PeekStruct<'_> {
        PeekStruct {
            value: self.value.as_peek(),
            def: self.def,
        }
    }

    /// Returns the number of fields in this struct
    #[inline(always)]
    pub fn field_count(&self) -> usize {
        self.def.fields.len()
    }

    /// Borrows the field at the given index for writing
    pub fn field(&mut self, index: usize) -> Result<Poke<'_>, ReflectError> {
        let field = self.field_def(index)?;
        let shape = self.shape();
        let data = (field.get_mut)(&mut *self.value.data)
            .ok_or(ReflectError::TypeMismatch { shape })?;
        Poke::from_any(data, field.shape())
    }

    /// Turns this handle into a handle on the field at the given index
    pub fn into_field(self, index: usize) -> Result<Poke<'mem>, ReflectError> {
        let field = self.field_def(index)?;
        let shape = self.shape();
        let data = (field.get_mut)(self.value.data).ok_or(ReflectError::TypeMismatch { shape })?;
        Poke::from_any(data, field.shape())
    }

    /// Borrows the field with the given name for writing
    pub fn field_by_name(&mut self, name: &str) -> Result<Poke<'_>, ReflectError> {
        match self.def.field_by_name(name) {
            Some((index, _)) => self.field(index),
            None => Err(ReflectError::NoSuchField {
                shape: self.shape(),
                name: name.to_string(),
            }),
        }
    }

    fn field_def(&self, index: usize) -> Result<&'static Field, ReflectError> {
        self.def
            .fields
            .get(index)
            .ok_or(ReflectError::FieldIndexOutOfBounds {
                shape: self.shape(),
                index,
            })
    }
}

impl core::fmt::Debug for PokeStruct<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PokeStruct")
            .field("shape", &format_args!("{}", self.shape()))
            .finish_non_exhaustive()
    }
}
