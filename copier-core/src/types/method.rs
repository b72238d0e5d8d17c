use core::any::Any;
use core::fmt;

use super::Shape;

/// Calls a one-argument method on a type-erased receiver.
///
/// Returns `false` (without calling anything) if the receiver or the argument
/// is not of the expected type.
pub type SetterFn = fn(receiver: &mut dyn Any, arg: &dyn Any) -> bool;

/// Calls a zero-argument method on a type-erased receiver and boxes its
/// return value.
///
/// Returns `None` if the receiver is not of the expected type.
pub type GetterFn = fn(receiver: &dyn Any) -> Option<Box<dyn Any>>;

/// A method the copy engine may call in place of a missing field.
///
/// The `name` is the field name the method bridges: a `setter` named `role`
/// receives the source's `role` field when the destination has no such field,
/// a `getter` named `role` fills the destination's `role` field.
#[derive(Clone, Copy)]
pub struct Method {
    /// field name this method stands in for
    pub name: &'static str,
    /// signature and entry point
    pub kind: MethodKind,
}

/// Signature of a bridge method
#[derive(Clone, Copy)]
pub enum MethodKind {
    /// `fn(&mut self, P)`; the return value, if any, is discarded
    Setter {
        /// shape of the single parameter
        param: fn() -> &'static Shape,
        /// cf. [`SetterFn`]
        call: SetterFn,
    },
    /// `fn(&self) -> R`
    Getter {
        /// shape of the return value
        ret: fn() -> &'static Shape,
        /// cf. [`GetterFn`]
        call: GetterFn,
    },
}

impl Method {
    /// Returns the setter's parameter shape and entry point, if this is a setter.
    #[inline]
    pub fn as_setter(&self) -> Option<(&'static Shape, SetterFn)> {
        match self.kind {
            MethodKind::Setter { param, call } => Some((param(), call)),
            MethodKind::Getter { .. } => None,
        }
    }

    /// Returns the getter's return shape and entry point, if this is a getter.
    #[inline]
    pub fn as_getter(&self) -> Option<(&'static Shape, GetterFn)> {
        match self.kind {
            MethodKind::Getter { ret, call } => Some((ret(), call)),
            MethodKind::Setter { .. } => None,
        }
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MethodKind::Setter { param, .. } => {
                write!(f, "setter {}({})", self.name, param())
            }
            MethodKind::Getter { ret, .. } => write!(f, "getter {}() -> {}", self.name, ret()),
        }
    }
}
