use core::any::Any;

use copier_core::{Def, Method, Reflect, ScalarValue, ScanError, Shape};

use crate::{Peek, ReflectError};

use super::{PokeList, PokePointer, PokeStruct};

/// Allows mutating a value with runtime type information.
///
/// Every write is checked against the shape: a `Poke` never stores a value of
/// another type than the one it was created for.
pub struct Poke<'mem> {
    /// Underlying data
    pub(crate) data: &'mem mut dyn Any,

    /// Shape of the value
    pub(crate) shape: &'static Shape,
}

impl<'mem> Poke<'mem> {
    /// Creates a new `Poke` for a value that implements `Reflect`
    #[inline]
    pub fn new<T: Reflect>(value: &'mem mut T) -> Self {
        Self {
            data: value,
            shape: T::SHAPE,
        }
    }

    /// Pairs type-erased data with a shape, checking that the shape describes
    /// the data.
    pub fn from_any(data: &'mem mut dyn Any, shape: &'static Shape) -> Result<Self, ReflectError> {
        if shape.id != (*data).type_id() {
            return Err(ReflectError::TypeMismatch { shape });
        }
        Ok(Self { data, shape })
    }

    /// Returns the shape of the value
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Borrows the value for reading
    #[inline]
    pub fn as_peek(&self) -> Peek<'_> {
        Peek {
            data: &*self.data,
            shape: self.shape,
        }
    }

    /// Borrows the value for writing, for a shorter lifetime
    #[inline]
    pub fn reborrow(&mut self) -> Poke<'_> {
        Poke {
            data: &mut *self.data,
            shape: self.shape,
        }
    }

    /// Returns the value as a `T`, if that is its type.
    pub fn get_mut<T: Reflect>(&mut self) -> Result<&mut T, ReflectError> {
        let actual = self.shape;
        self.data
            .downcast_mut::<T>()
            .ok_or(ReflectError::WrongShape {
                expected: T::SHAPE,
                actual,
            })
    }

    /// Overwrites the value with a clone of `src`, which must have the same shape.
    pub fn set_from(&mut self, src: Peek<'_>) -> Result<(), ReflectError> {
        if src.shape != self.shape {
            return Err(ReflectError::WrongShape {
                expected: self.shape,
                actual: src.shape,
            });
        }
        if (self.shape.vtable.clone_into)(src.data, &mut *self.data) {
            Ok(())
        } else {
            Err(self.failed("clone_into"))
        }
    }

    /// Overwrites the value with `src`, converting scalars as needed.
    ///
    /// Fails with [`ReflectError::WrongShape`] unless `src`'s shape is
    /// [convertible](Shape::is_convertible_to) to this one.
    pub fn convert_from(&mut self, src: Peek<'_>) -> Result<(), ReflectError> {
        if src.shape == self.shape {
            return self.set_from(src);
        }
        if !src.shape.is_convertible_to(self.shape) {
            return Err(ReflectError::WrongShape {
                expected: self.shape,
                actual: src.shape,
            });
        }
        let scalar = src.scalar().ok_or(ReflectError::WasNotA {
            expected: "scalar",
            actual: src.shape,
        })?;
        self.set_scalar(scalar)
    }

    /// Writes a scalar, converting it to this value's scalar type.
    pub fn set_scalar(&mut self, scalar: ScalarValue) -> Result<(), ReflectError> {
        let def = self.shape.as_scalar().ok_or(ReflectError::WasNotA {
            expected: "scalar",
            actual: self.shape,
        })?;
        if (def.write)(&mut *self.data, scalar) {
            Ok(())
        } else {
            Err(self.failed("write scalar"))
        }
    }

    /// Offers `src` to this type's scan hook.
    ///
    /// Returns `None` if the type has no hook.
    pub fn scan(&mut self, src: Peek<'_>) -> Option<Result<(), ScanError>> {
        let scan = self.shape.vtable.scan?;
        Some(scan(&mut *self.data, src.as_external()))
    }

    /// Calls a setter bridge method on this value with `arg`, whose shape must
    /// be the setter's parameter shape.
    pub fn call_setter(&mut self, method: &Method, arg: Peek<'_>) -> Result<(), ReflectError> {
        let (param, call) = method.as_setter().ok_or(ReflectError::WasNotA {
            expected: "setter",
            actual: self.shape,
        })?;
        if param != arg.shape {
            return Err(ReflectError::WrongShape {
                expected: param,
                actual: arg.shape,
            });
        }
        if call(&mut *self.data, arg.data) {
            Ok(())
        } else {
            Err(self.failed(method.name))
        }
    }

    /// Follows every pointer layer down to the first non-pointer value.
    ///
    /// Returns `None` if a null pointer is met on the way.
    pub fn into_innermost(self) -> Option<Poke<'mem>> {
        let mut poke = self;
        while poke.shape.as_pointer().is_some() {
            poke = poke.into_pointer().ok()?.into_inner().ok()?;
        }
        Some(poke)
    }

    /// Tries to identify this value as a struct
    pub fn into_struct(self) -> Result<PokeStruct<'mem>, ReflectError> {
        match self.shape.def {
            Def::Struct(def) => Ok(PokeStruct { value: self, def }),
            _ => Err(self.was_not_a("struct")),
        }
    }

    /// Tries to identify this value as a pointer
    pub fn into_pointer(self) -> Result<PokePointer<'mem>, ReflectError> {
        match self.shape.def {
            Def::Pointer(def) => Ok(PokePointer { value: self, def }),
            _ => Err(self.was_not_a("pointer")),
        }
    }

    /// Tries to identify this value as a list
    pub fn into_list(self) -> Result<PokeList<'mem>, ReflectError> {
        match self.shape.def {
            Def::List(def) => Ok(PokeList { value: self, def }),
            _ => Err(self.was_not_a("list")),
        }
    }

    fn was_not_a(&self, expected: &'static str) -> ReflectError {
        ReflectError::WasNotA {
            expected,
            actual: self.shape,
        }
    }

    pub(crate) fn failed(&self, operation: &'static str) -> ReflectError {
        ReflectError::OperationFailed {
            shape: self.shape,
            operation,
        }
    }
}

impl core::fmt::Debug for Poke<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poke<{}>", self.shape)
    }
}
