//! `Box<T>` (non-null pointer) and `Option<T>` (nullable pointer)

use core::any::Any;

use crate::{
    ConstTypeId, Def, PointerDef, Reflect, Shape, ValueVTable, clone_into, default_boxed, shape_of,
};

impl<T: Reflect> Reflect for Box<T> {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: ConstTypeId::of::<Box<T>>(),
            type_identifier: "Box",
            def: Def::Pointer(PointerDef {
                pointee: shape_of::<T>,
                nullable: false,
                borrow: |ptr| {
                    ptr.downcast_ref::<Box<T>>()
                        .map(|boxed| &**boxed as &dyn Any)
                },
                borrow_mut: |ptr| {
                    ptr.downcast_mut::<Box<T>>()
                        .map(|boxed| &mut **boxed as &mut dyn Any)
                },
                allocate: box_reset::<T>,
                // a box is never null: its zero value points at a zero pointee
                clear: box_reset::<T>,
                wrap: |pointee| {
                    pointee
                        .downcast::<T>()
                        .map(|boxed| Box::new(boxed) as Box<dyn Any>)
                },
            }),
            vtable: ValueVTable {
                default: default_boxed::<Box<T>>,
                clone_into: clone_into::<Box<T>>,
                scan: None,
            },
            methods: &[],
        }
    };
}

fn box_reset<T: Reflect>(ptr: &mut dyn Any) -> bool {
    match ptr.downcast_mut::<Box<T>>() {
        Some(boxed) => {
            **boxed = T::default();
            true
        }
        None => false,
    }
}

impl<T: Reflect> Reflect for Option<T> {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: ConstTypeId::of::<Option<T>>(),
            type_identifier: "Option",
            def: Def::Pointer(PointerDef {
                pointee: shape_of::<T>,
                nullable: true,
                borrow: |ptr| {
                    ptr.downcast_ref::<Option<T>>()
                        .and_then(Option::as_ref)
                        .map(|value| value as &dyn Any)
                },
                borrow_mut: |ptr| {
                    ptr.downcast_mut::<Option<T>>()
                        .and_then(Option::as_mut)
                        .map(|value| value as &mut dyn Any)
                },
                allocate: |ptr| match ptr.downcast_mut::<Option<T>>() {
                    Some(option) => {
                        *option = Some(T::default());
                        true
                    }
                    None => false,
                },
                clear: |ptr| match ptr.downcast_mut::<Option<T>>() {
                    Some(option) => {
                        *option = None;
                        true
                    }
                    None => false,
                },
                wrap: |pointee| {
                    pointee
                        .downcast::<T>()
                        .map(|boxed| Box::new(Some(*boxed)) as Box<dyn Any>)
                },
            }),
            vtable: ValueVTable {
                default: default_boxed::<Option<T>>,
                clone_into: clone_into::<Option<T>>,
                scan: None,
            },
            methods: &[],
        }
    };
}
