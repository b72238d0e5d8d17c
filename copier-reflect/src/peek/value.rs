use core::any::Any;

use copier_core::{Def, ExternalValue, Method, Reflect, ScalarValue, Shape};

use crate::{HeapValue, ReflectError};

use super::{PeekList, PeekPointer, PeekStruct};

/// A read-only view into a value with runtime type information.
///
/// If the value is a struct, you can read its fields; if it's a pointer, you
/// can follow it; if it's a list, you can iterate over its items; if it's a
/// scalar, you can read it in its widest representation.
///
/// A `Peek` always holds data of the type its shape describes: every
/// constructor checks it.
#[derive(Clone, Copy)]
pub struct Peek<'mem> {
    /// Underlying data
    pub(crate) data: &'mem dyn Any,

    /// Shape of the value
    pub(crate) shape: &'static Shape,
}

impl<'mem> Peek<'mem> {
    /// Creates a new `Peek` for a value that implements `Reflect`
    #[inline]
    pub fn new<T: Reflect>(value: &'mem T) -> Self {
        Self {
            data: value,
            shape: T::SHAPE,
        }
    }

    /// Pairs type-erased data with a shape, checking that the shape describes
    /// the data.
    pub fn from_any(data: &'mem dyn Any, shape: &'static Shape) -> Result<Self, ReflectError> {
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

    /// Returns the underlying data
    #[inline(always)]
    pub fn data(&self) -> &'mem dyn Any {
        self.data
    }

    /// Returns the value as a `T`, if that is its type.
    pub fn get<T: Reflect>(&self) -> Result<&'mem T, ReflectError> {
        self.data
            .downcast_ref::<T>()
            .ok_or(ReflectError::WrongShape {
                expected: T::SHAPE,
                actual: self.shape,
            })
    }

    /// Reads the value as a scalar, if it is one.
    pub fn scalar(&self) -> Option<ScalarValue> {
        self.shape
            .as_scalar()
            .and_then(|scalar| (scalar.read)(self.data))
    }

    /// Hands the value out as the argument of a scan hook.
    #[inline]
    pub fn as_external(&self) -> ExternalValue<'mem> {
        ExternalValue::new(self.data, self.shape)
    }

    /// Calls a getter bridge method on this value and returns what it produced.
    pub fn call_getter(&self, method: &Method) -> Result<HeapValue, ReflectError> {
        let (ret, call) = method.as_getter().ok_or(ReflectError::WasNotA {
            expected: "getter",
            actual: self.shape,
        })?;
        let value = call(self.data).ok_or(ReflectError::OperationFailed {
            shape: self.shape,
            operation: method.name,
        })?;
        HeapValue::from_boxed(value, ret)
    }

    /// Returns `true` if this is a pointer and it is null.
    pub fn is_null(&self) -> bool {
        self.into_pointer().is_ok_and(|ptr| ptr.is_null())
    }

    /// Follows every pointer layer down to the first non-pointer value.
    ///
    /// Returns `None` if a null pointer is met on the way.
    pub fn innermost(self) -> Option<Peek<'mem>> {
        let mut peek = self;
        while let Ok(ptr) = peek.into_pointer() {
            peek = ptr.inner().ok()?;
        }
        Some(peek)
    }

    /// Tries to identify this value as a struct
    pub fn into_struct(self) -> Result<PeekStruct<'mem>, ReflectError> {
        match self.shape.def {
            Def::Struct(def) => Ok(PeekStruct { value: self, def }),
            _ => Err(self.was_not_a("struct")),
        }
    }

    /// Tries to identify this value as a pointer
    pub fn into_pointer(self) -> Result<PeekPointer<'mem>, ReflectError> {
        match self.shape.def {
            Def::Pointer(def) => Ok(PeekPointer { value: self, def }),
            _ => Err(self.was_not_a("pointer")),
        }
    }

    /// Tries to identify this value as a list
    pub fn into_list(self) -> Result<PeekList<'mem>, ReflectError> {
        match self.shape.def {
            Def::List(def) => Ok(PeekList { value: self, def }),
            _ => Err(self.was_not_a("list")),
        }
    }

    fn was_not_a(&self, expected: &'static str) -> ReflectError {
        ReflectError::WasNotA {
            expected,
            actual: self.shape,
        }
    }
}

impl core::fmt::Debug for Peek<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Peek<{}>", self.shape)
    }
}
