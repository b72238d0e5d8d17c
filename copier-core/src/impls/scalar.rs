//! Scalar type implementations: bool, char, String, integers, floats

use core::any::Any;

use crate::{
    ConstTypeId, Def, Reflect, ScalarDef, ScalarType, ScalarValue, Shape, ValueVTable, clone_into,
    default_boxed,
};

const fn scalar_shape<T: Reflect>(
    type_identifier: &'static str,
    scalar_type: ScalarType,
    read: fn(&dyn Any) -> Option<ScalarValue>,
    write: fn(&mut dyn Any, ScalarValue) -> bool,
) -> Shape {
    Shape {
        id: ConstTypeId::of::<T>(),
        type_identifier,
        def: Def::Scalar(ScalarDef {
            scalar_type,
            read,
            write,
        }),
        vtable: ValueVTable {
            default: default_boxed::<T>,
            clone_into: clone_into::<T>,
            scan: None,
        },
        methods: &[],
    }
}

impl Reflect for bool {
    const SHAPE: &'static Shape = &const {
        scalar_shape::<bool>(
            "bool",
            ScalarType::Bool,
            |value| value.downcast_ref::<bool>().copied().map(ScalarValue::Bool),
            |value, scalar| match (value.downcast_mut::<bool>(), scalar) {
                (Some(value), ScalarValue::Bool(b)) => {
                    *value = b;
                    true
                }
                _ => false,
            },
        )
    };
}

impl Reflect for char {
    const SHAPE: &'static Shape = &const {
        scalar_shape::<char>(
            "char",
            ScalarType::Char,
            |value| value.downcast_ref::<char>().copied().map(ScalarValue::Char),
            |value, scalar| match (value.downcast_mut::<char>(), scalar) {
                (Some(value), ScalarValue::Char(c)) => {
                    *value = c;
                    true
                }
                _ => false,
            },
        )
    };
}

impl Reflect for String {
    const SHAPE: &'static Shape = &const {
        scalar_shape::<String>(
            "String",
            ScalarType::String,
            |value| value.downcast_ref::<String>().cloned().map(ScalarValue::String),
            |value, scalar| match (value.downcast_mut::<String>(), scalar) {
                (Some(value), ScalarValue::String(s)) => {
                    *value = s;
                    true
                }
                (Some(value), ScalarValue::Char(c)) => {
                    *value = c.to_string();
                    true
                }
                _ => false,
            },
        )
    };
}

macro_rules! impl_reflect_for_number {
    ($type:ty, $scalar_type:ident, $repr:ident, $wide:ty) => {
        impl Reflect for $type {
            const SHAPE: &'static Shape = &const {
                scalar_shape::<$type>(
                    stringify!($type),
                    ScalarType::$scalar_type,
                    |value| {
                        value
                            .downcast_ref::<$type>()
                            .map(|v| ScalarValue::$repr(*v as $wide))
                    },
                    |value, scalar| {
                        let Some(value) = value.downcast_mut::<$type>() else {
                            return false;
                        };
                        *value = match scalar {
                            ScalarValue::Signed(n) => n as $type,
                            ScalarValue::Unsigned(n) => n as $type,
                            ScalarValue::Float(n) => n as $type,
                            ScalarValue::Char(c) => c as u32 as $type,
                            ScalarValue::Bool(_) | ScalarValue::String(_) => return false,
                        };
                        true
                    },
                )
            };
        }
    };
}

impl_reflect_for_number!(u8, U8, Unsigned, u128);
impl_reflect_for_number!(u16, U16, Unsigned, u128);
impl_reflect_for_number!(u32, U32, Unsigned, u128);
impl_reflect_for_number!(u64, U64, Unsigned, u128);
impl_reflect_for_number!(u128, U128, Unsigned, u128);
impl_reflect_for_number!(usize, USize, Unsigned, u128);
impl_reflect_for_number!(i8, I8, Signed, i128);
impl_reflect_for_number!(i16, I16, Signed, i128);
impl_reflect_for_number!(i32, I32, Signed, i128);
impl_reflect_for_number!(i64, I64, Signed, i128);
impl_reflect_for_number!(i128, I128, Signed, i128);
impl_reflect_for_number!(isize, ISize, Signed, i128);
impl_reflect_for_number!(f32, F32, Float, f64);
impl_reflect_for_number!(f64, F64, Float, f64);
