use core::any::Any;

use crate::{Reflect, Shape};

mod list;
mod pointer;
mod scalar;

/// Returns `T`'s shape. Usable wherever a `fn() -> &'static Shape` is expected.
#[inline]
pub fn shape_of<T: Reflect>() -> &'static Shape {
    T::SHAPE
}

/// Allocates `T`'s zero value, boxed and type-erased.
pub fn default_boxed<T: Default + 'static>() -> Box<dyn Any> {
    Box::new(T::default())
}

/// Clones `src` into `dst` if both are a `T`.
pub fn clone_into<T: Clone + 'static>(src: &dyn Any, dst: &mut dyn Any) -> bool {
    match (src.downcast_ref::<T>(), dst.downcast_mut::<T>()) {
        (Some(src), Some(dst)) => {
            dst.clone_from(src);
            true
        }
        _ => false,
    }
}
