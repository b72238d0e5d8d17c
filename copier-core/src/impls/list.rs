use core::any::Any;

use crate::{
    ConstTypeId, Def, ListDef, Reflect, Shape, ValueVTable, clone_into, default_boxed, shape_of,
};

impl<T: Reflect> Reflect for Vec<T> {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: ConstTypeId::of::<Vec<T>>(),
            type_identifier: "Vec",
            def: Def::List(ListDef {
                item: shape_of::<T>,
                len: |list| list.downcast_ref::<Vec<T>>().map_or(0, Vec::len),
                get: |list, index| {
                    list.downcast_ref::<Vec<T>>()
                        .and_then(|list| list.get(index))
                        .map(|item| item as &dyn Any)
                },
                push: |list, item| {
                    let Some(list) = list.downcast_mut::<Vec<T>>() else {
                        return Err(item);
                    };
                    list.push(*item.downcast::<T>()?);
                    Ok(())
                },
                clear: |list| match list.downcast_mut::<Vec<T>>() {
                    Some(list) => {
                        *list = Vec::new();
                        true
                    }
                    None => false,
                },
            }),
            vtable: ValueVTable {
                default: default_boxed::<Vec<T>>,
                clone_into: clone_into::<Vec<T>>,
                scan: None,
            },
            methods: &[],
        }
    };
}
