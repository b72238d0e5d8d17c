use copier_core::{Field, Shape, StructDef};

use crate::{Peek, ReflectError};

/// Lets you read from a struct (implements read-only struct operations)
#[derive(Clone, Copy)]
pub struct PeekStruct<'mem> {
    /// the underlying value
    pub(crate) value: Peek<'mem>,

    /// the definition of the struct
    pub(crate) def: StructDef,
}

impl core::fmt::Debug for PeekStruct<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeekStruct")
            .field("shape", &format_args!("{}", self.value.shape))
            .finish_non_exhaustive()
    }
}

impl<'mem> PeekStruct<'mem> {
    /// Returns the struct definition
    #[inline(always)]
    pub fn def(&self) -> StructDef {
        self.def
    }

    /// Returns the shape of the struct
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.value.shape
    }

    /// Coerce back into a value
    #[inline(always)]
    pub fn into_value(self) -> Peek<'mem> {
        self.value
    }

    /// Returns the number of fields in this struct
    #[inline(always)]
    pub fn field_count(&self) -> usize {
        self.def.fields.len()
    }

    /// Returns the value of the field at the given index
    pub fn field(&self, index: usize) -> Result<Peek<'mem>, ReflectError> {
        let field = self
            .def
            .fields
            .get(index)
            .ok_or(ReflectError::FieldIndexOutOfBounds {
                shape: self.shape(),
                index,
            })?;
        let data = (field.get)(self.value.data).ok_or(ReflectError::TypeMismatch {
            shape: self.shape(),
        })?;
        Peek::from_any(data, field.shape())
    }

    /// Gets the value of the field with the given name
    pub fn field_by_name(&self, name: &str) -> Result<Peek<'mem>, ReflectError> {
        match self.def.field_by_name(name) {
            Some((index, _)) => self.field(index),
            None => Err(ReflectError::NoSuchField {
                shape: self.shape(),
                name: name.to_string(),
            }),
        }
    }

    /// Iterates over all fields in this struct, providing both name and value
    pub fn fields(&self) -> impl Iterator<Item = (&'static Field, Peek<'mem>)> + '_ {
        self.def
            .fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| Some((field, self.field(index).ok()?)))
    }
}
