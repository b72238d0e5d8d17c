use core::any::Any;

use copier_core::{Def, Reflect, Shape};

use crate::{Peek, Poke, ReflectError};

/// An owned, type-erased value together with its shape.
///
/// Heap values hold zero values allocated from a shape, the results of
/// bridge getters, and items on their way into a list.
pub struct HeapValue {
    data: Box<dyn Any>,
    shape: &'static Shape,
}

impl HeapValue {
    /// Wraps a concrete value
    pub fn new<T: Reflect>(value: T) -> Self {
        Self {
            data: Box::new(value),
            shape: T::SHAPE,
        }
    }

    /// Allocates the zero value of `shape`
    pub fn new_default(shape: &'static Shape) -> Self {
        Self {
            data: (shape.vtable.default)(),
            shape,
        }
    }

    /// Pairs boxed data with a shape, checking that the shape describes the
    /// data.
    pub fn from_boxed(data: Box<dyn Any>, shape: &'static Shape) -> Result<Self, ReflectError> {
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
    pub fn peek(&self) -> Peek<'_> {
        Peek {
            data: &*self.data,
            shape: self.shape,
        }
    }

    /// Borrows the value for writing
    pub fn poke(&mut self) -> Poke<'_> {
        Poke {
            data: &mut *self.data,
            shape: self.shape,
        }
    }

    /// Wraps the value into the pointer layers of `target` until it has that
    /// shape: a `User` turns into an `Option<Box<User>>` by way of a
    /// `Box<User>`.
    ///
    /// Fails if `target` is neither this shape nor a chain of pointers to it.
    pub fn wrap_into(self, target: &'static Shape) -> Result<HeapValue, ReflectError> {
        if self.shape == target {
            return Ok(self);
        }
        let Def::Pointer(ptr) = target.def else {
            return Err(ReflectError::WrongShape {
                expected: target,
                actual: self.shape,
            });
        };
        let pointee = self.wrap_into(ptr.pointee())?;
        match (ptr.wrap)(pointee.data) {
            Ok(data) => Ok(HeapValue {
                data,
                shape: target,
            }),
            Err(_) => Err(ReflectError::OperationFailed {
                shape: target,
                operation: "wrap",
            }),
        }
    }

    /// Takes the value out as a `T`, if that is its type.
    pub fn materialize<T: Reflect>(self) -> Result<T, ReflectError> {
        let actual = self.shape;
        self.data
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ReflectError::WrongShape {
                expected: T::SHAPE,
                actual,
            })
    }

    /// Unwraps into the boxed data
    pub fn into_boxed(self) -> Box<dyn Any> {
        self.data
    }
}

impl core::fmt::Debug for HeapValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HeapValue<{}>", self.shape)
    }
}
