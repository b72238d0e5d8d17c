use core::any::Any;
use core::fmt;

use crate::ConstTypeId;

use super::{Def, ListDef, Method, PointerDef, ScalarDef, ScanFn, StructDef};

/// Schema for reflection of a type: identity, semantic definition, value
/// operations and bridge methods.
///
/// Shapes only ever live in static memory; compare them with `==`, which
/// compares type identity.
#[derive(Clone, Copy)]
pub struct Shape {
    /// Unique type identifier, provided by the compiler.
    pub id: ConstTypeId,

    /// Type name without generic parameters, e.g. `Vec` or `User`.
    pub type_identifier: &'static str,

    /// What the type is made of: scalar, struct, pointer or list.
    pub def: Def,

    /// Operations on values of this type.
    pub vtable: ValueVTable,

    /// Bridge methods, keyed by the field name they stand in for.
    pub methods: &'static [Method],
}

/// Operations every reflected type supports, plus optional hooks.
#[derive(Clone, Copy)]
pub struct ValueVTable {
    /// Allocates the zero value of the type.
    pub default: fn() -> Box<dyn Any>,

    /// Assigns `src` into `dst` (both must be of this type). Returns `false` on
    /// a type mismatch.
    pub clone_into: fn(src: &dyn Any, dst: &mut dyn Any) -> bool,

    /// Accept-external-value hook, cf. [`Scan`](crate::Scan).
    pub scan: Option<ScanFn>,
}

impl Shape {
    /// Returns the struct definition, if this is a struct.
    #[inline]
    pub fn as_struct(&self) -> Option<StructDef> {
        match self.def {
            Def::Struct(def) => Some(def),
            _ => None,
        }
    }

    /// Returns `true` if this shape is a struct.
    #[inline]
    pub fn is_struct(&self) -> bool {
        matches!(self.def, Def::Struct(_))
    }

    /// Returns the pointer definition, if this is a pointer.
    #[inline]
    pub fn as_pointer(&self) -> Option<PointerDef> {
        match self.def {
            Def::Pointer(def) => Some(def),
            _ => None,
        }
    }

    /// Returns the list definition, if this is a list.
    #[inline]
    pub fn as_list(&self) -> Option<ListDef> {
        match self.def {
            Def::List(def) => Some(def),
            _ => None,
        }
    }

    /// Returns the scalar definition, if this is a scalar.
    #[inline]
    pub fn as_scalar(&self) -> Option<ScalarDef> {
        match self.def {
            Def::Scalar(def) => Some(def),
            _ => None,
        }
    }

    /// Follows pointer layers down to the first non-pointer shape.
    pub fn deref_pointers(&'static self) -> &'static Shape {
        let mut shape = self;
        while let Some(ptr) = shape.as_pointer() {
            shape = ptr.pointee();
        }
        shape
    }

    /// Follows pointer and list layers down to the base element shape.
    ///
    /// `Vec<Option<Box<User>>>` and `Option<User>` both have `User` as their
    /// base shape.
    pub fn base(&'static self) -> &'static Shape {
        let mut shape = self;
        loop {
            shape = match shape.def {
                Def::Pointer(ptr) => ptr.pointee(),
                Def::List(list) => list.item(),
                _ => return shape,
            };
        }
    }

    /// Returns `true` if a value of shape `self` can be converted into a value
    /// of shape `target` by the leaf assigner: identical types, or scalars
    /// with a defined conversion.
    pub fn is_convertible_to(&self, target: &Shape) -> bool {
        if self == target {
            return true;
        }
        match (self.def, target.def) {
            (Def::Scalar(from), Def::Scalar(to)) => {
                from.scalar_type.is_convertible_to(to.scalar_type)
            }
            _ => false,
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shape {}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.def {
            Def::Pointer(ptr) if ptr.nullable => write!(f, "Option<{}>", ptr.pointee()),
            Def::Pointer(ptr) => write!(f, "Box<{}>", ptr.pointee()),
            Def::List(list) => write!(f, "Vec<{}>", list.item()),
            _ => f.write_str(self.type_identifier),
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type", &format_args!("{self}"))
            .field("def", &self.def)
            .field("methods", &self.methods.len())
            .finish_non_exhaustive()
    }
}
