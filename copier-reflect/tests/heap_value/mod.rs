use copier_core::Reflect;
use copier_reflect::HeapValue;

use crate::Address;

#[test]
fn zero_values_from_shapes() {
    let value = HeapValue::new_default(Address::SHAPE);
    assert_eq!(value.shape(), Address::SHAPE);
    assert_eq!(value.materialize::<Address>().unwrap(), Address::default());
}

#[test]
fn wrap_into_pointer_chains() {
    let address = Address {
        city: "Rome".into(),
        zip: 118,
    };
    let wrapped = HeapValue::new(address.clone())
        .wrap_into(<Option<Box<Address>>>::SHAPE)
        .unwrap();
    assert_eq!(wrapped.shape().to_string(), "Option<Box<Address>>");
    assert_eq!(
        wrapped.materialize::<Option<Box<Address>>>().unwrap(),
        Some(Box::new(address))
    );

    insta::assert_snapshot!(
        HeapValue::new(1u8).wrap_into(<Vec<u8>>::SHAPE).unwrap_err(),
        @"Wrong shape: expected Vec<u8>, but got u8"
    );
}

#[test]
fn from_boxed_checks_the_type() {
    assert!(HeapValue::from_boxed(Box::new(3u32), u32::SHAPE).is_ok());
    insta::assert_snapshot!(
        HeapValue::from_boxed(Box::new(3u32), String::SHAPE).unwrap_err(),
        @"Value does not match its shape String"
    );
}

#[test]
fn peek_and_poke_a_heap_value() {
    let mut value = HeapValue::new(10u64);
    value
        .poke()
        .convert_from(copier_reflect::Peek::new(&-1i8))
        .unwrap();
    assert_eq!(*value.peek().get::<u64>().unwrap(), u64::MAX);
}
