use core::any::Any;
use core::fmt;

use super::{Field, ScalarType, ScalarValue, Shape};

/// The semantic definition of a shape: is it a scalar, a struct, a pointer or
/// a list?
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Def {
    /// Scalar, not composed of other reflected values.
    ///
    /// e.g. `u32`, `String`, `bool`
    Scalar(ScalarDef),

    /// Struct with named fields, some of which may be embedded.
    Struct(StructDef),

    /// Pointer to a single value, possibly null.
    ///
    /// e.g. `Box<T>`, `Option<T>`
    Pointer(PointerDef),

    /// Ordered list of homogenous values, variable size
    ///
    /// e.g. `Vec<T>`
    List(ListDef),
}

/// Reads a scalar out of a type-erased value.
pub type ScalarReadFn = fn(value: &dyn Any) -> Option<ScalarValue>;

/// Writes a scalar into a type-erased value, converting as needed.
///
/// Returns `false` if the value has the wrong type or the conversion is not
/// defined.
pub type ScalarWriteFn = fn(value: &mut dyn Any, scalar: ScalarValue) -> bool;

/// Definition of a scalar type
#[derive(Clone, Copy)]
pub struct ScalarDef {
    /// Which scalar this is
    pub scalar_type: ScalarType,
    /// cf. [`ScalarReadFn`]
    pub read: ScalarReadFn,
    /// cf. [`ScalarWriteFn`]
    pub write: ScalarWriteFn,
}

impl fmt::Debug for ScalarDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScalarDef").field(&self.scalar_type).finish()
    }
}

/// Definition of a struct: its fields, in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct StructDef {
    /// all fields, in declaration order
    pub fields: &'static [Field],
}

impl StructDef {
    /// Returns the field with the given name, declared directly on this struct.
    pub fn field_by_name(&self, name: &str) -> Option<(usize, &'static Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }
}

/// Borrows the pointee, or returns `None` for a null pointer.
pub type PointerBorrowFn = for<'a> fn(ptr: &'a dyn Any) -> Option<&'a dyn Any>;

/// Mutably borrows the pointee, or returns `None` for a null pointer.
pub type PointerBorrowMutFn = for<'a> fn(ptr: &'a mut dyn Any) -> Option<&'a mut dyn Any>;

/// Points the pointer at a freshly allocated zero value of the pointee type.
pub type PointerAllocateFn = fn(ptr: &mut dyn Any) -> bool;

/// Resets the pointer to its zero value (null, for nullable pointers).
pub type PointerClearFn = fn(ptr: &mut dyn Any) -> bool;

/// Builds a pointer around an owned pointee. Hands the value back if it is not
/// of the pointee type.
pub type PointerWrapFn = fn(pointee: Box<dyn Any>) -> Result<Box<dyn Any>, Box<dyn Any>>;

/// Definition of a pointer type
#[derive(Clone, Copy)]
pub struct PointerDef {
    /// shape of the pointee
    pub pointee: fn() -> &'static Shape,
    /// whether the pointer can be null
    pub nullable: bool,
    /// cf. [`PointerBorrowFn`]
    pub borrow: PointerBorrowFn,
    /// cf. [`PointerBorrowMutFn`]
    pub borrow_mut: PointerBorrowMutFn,
    /// cf. [`PointerAllocateFn`]
    pub allocate: PointerAllocateFn,
    /// cf. [`PointerClearFn`]
    pub clear: PointerClearFn,
    /// cf. [`PointerWrapFn`]
    pub wrap: PointerWrapFn,
}

impl PointerDef {
    /// Returns the shape of the pointee
    #[inline]
    pub fn pointee(&self) -> &'static Shape {
        (self.pointee)()
    }
}

impl fmt::Debug for PointerDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerDef")
            .field("pointee", &format_args!("{}", self.pointee()))
            .field("nullable", &self.nullable)
            .finish_non_exhaustive()
    }
}

/// Get the number of items in the list
pub type ListLenFn = fn(list: &dyn Any) -> usize;

/// Borrows the item at `index`, or returns `None` if out of bounds.
pub type ListGetFn = for<'a> fn(list: &'a dyn Any, index: usize) -> Option<&'a dyn Any>;

/// Appends an owned item. Hands the item back if it is not of the item type.
pub type ListPushFn = fn(list: &mut dyn Any, item: Box<dyn Any>) -> Result<(), Box<dyn Any>>;

/// Replaces the list with a new, empty list.
pub type ListClearFn = fn(list: &mut dyn Any) -> bool;

/// Definition of a list type
#[derive(Clone, Copy)]
pub struct ListDef {
    /// shape of the items in the list
    pub item: fn() -> &'static Shape,
    /// cf. [`ListLenFn`]
    pub len: ListLenFn,
    /// cf. [`ListGetFn`]
    pub get: ListGetFn,
    /// cf. [`ListPushFn`]
    pub push: ListPushFn,
    /// cf. [`ListClearFn`]
    pub clear: ListClearFn,
}

impl ListDef {
    /// Returns the shape of the items in the list
    #[inline]
    pub fn item(&self) -> &'static Shape {
        (self.item)()
    }
}

impl fmt::Debug for ListDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListDef")
            .field("item", &format_args!("{}", self.item()))
            .finish_non_exhaustive()
    }
}
