use copier_reflect::{Peek, ReflectError};

use crate::{Address, Person};

fn person() -> Person {
    Person {
        name: "Ada".into(),
        age: 36,
        home: Some(Box::new(Address {
            city: "London".into(),
            zip: 1815,
        })),
        tags: vec!["math".into(), "engines".into()],
    }
}

#[test]
fn peek_struct_fields() {
    let person = person();
    let peek = Peek::new(&person).into_struct().unwrap();

    assert_eq!(peek.field_count(), 4);
    assert_eq!(peek.field(0).unwrap().get::<String>().unwrap(), "Ada");
    assert_eq!(*peek.field_by_name("age").unwrap().get::<u8>().unwrap(), 36);

    let names: Vec<_> = peek.fields().map(|(field, _)| field.name).collect();
    assert_eq!(names, ["name", "age", "home", "tags"]);
}

#[test]
fn peek_struct_errors() {
    let person = person();
    let peek = Peek::new(&person).into_struct().unwrap();

    insta::assert_snapshot!(peek.field(9).unwrap_err(), @"Field index 9 out of bounds for Person");
    insta::assert_snapshot!(
        peek.field_by_name("email").unwrap_err(),
        @"No field named `email` in Person"
    );
    insta::assert_snapshot!(
        peek.field(1).unwrap().get::<u32>().unwrap_err(),
        @"Wrong shape: expected u32, but got u8"
    );
}

#[test]
fn peek_through_pointers() {
    let person = person();
    let home = Peek::new(&person)
        .into_struct()
        .unwrap()
        .field_by_name("home")
        .unwrap();

    assert_eq!(home.shape().to_string(), "Option<Box<Address>>");
    assert!(!home.is_null());

    let address = home.innermost().unwrap();
    assert_eq!(address.get::<Address>().unwrap().city, "London");

    let homeless = Person::default();
    let home = Peek::new(&homeless)
        .into_struct()
        .unwrap()
        .field_by_name("home")
        .unwrap();
    assert!(home.is_null());
    assert!(home.innermost().is_none());
    insta::assert_snapshot!(
        home.into_pointer().unwrap().inner().unwrap_err(),
        @"Dereferenced a null Option<Box<Address>>"
    );
}

#[test]
fn peek_list_items() {
    let person = person();
    let tags = Peek::new(&person.tags).into_list().unwrap();

    assert_eq!(tags.len(), 2);
    let tags: Vec<_> = tags
        .iter()
        .map(|tag| tag.get::<String>().unwrap().as_str())
        .collect();
    assert_eq!(tags, ["math", "engines"]);
}

#[test]
fn peek_kind_mismatch() {
    insta::assert_snapshot!(Peek::new(&5u64).into_struct().unwrap_err(), @"Was not a struct: u64");
    insta::assert_snapshot!(
        Peek::new(&person()).into_list().unwrap_err(),
        @"Was not a list: Person"
    );
}

#[test]
fn from_any_checks_the_type() {
    let value = 7i32;
    assert!(Peek::from_any(&value, <i32 as copier_core::Reflect>::SHAPE).is_ok());
    assert_eq!(
        Peek::from_any(&value, <u8 as copier_core::Reflect>::SHAPE).unwrap_err(),
        ReflectError::TypeMismatch {
            shape: <u8 as copier_core::Reflect>::SHAPE
        }
    );
}

#[test]
fn peek_scalars() {
    use copier_core::ScalarValue;

    assert_eq!(Peek::new(&-3i16).scalar(), Some(ScalarValue::Signed(-3)));
    assert_eq!(Peek::new(&'x').scalar(), Some(ScalarValue::Char('x')));
    assert_eq!(Peek::new(&person()).scalar(), None);
}
