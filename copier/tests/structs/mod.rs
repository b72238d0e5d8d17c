use copier::{Copier, CopyOptions, ExternalValue, Scan, ScanError, copy, reflect_struct};

#[derive(Clone, Debug, Default, PartialEq)]
struct SrcAddress {
    street: String,
    number: u16,
}

reflect_struct! {
    SrcAddress { street: String, number: u16 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct DstAddress {
    street: String,
    number: u64,
    country: String,
}

reflect_struct! {
    DstAddress { street: String, number: u64, country: String }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct User {
    name: String,
    age: u8,
    height: f32,
    initial: char,
    nickname: Option<String>,
    manager: Option<String>,
    address: SrcAddress,
    previous: Option<Box<SrcAddress>>,
    id: u64,
}

reflect_struct! {
    User {
        name: String,
        age: u8,
        height: f32,
        initial: char,
        nickname: Option<String>,
        manager: Option<String>,
        address: SrcAddress,
        previous: Option<Box<SrcAddress>>,
        id: u64,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Employee {
    name: String,
    age: Option<Box<i64>>,
    height: f64,
    initial: String,
    nickname: String,
    manager: Option<String>,
    address: DstAddress,
    previous: Option<DstAddress>,
    id: u64,
    salary: u32,
}

reflect_struct! {
    Employee {
        name: String,
        age: Option<Box<i64>>,
        height: f64,
        initial: String,
        nickname: String,
        manager: Option<String>,
        address: DstAddress,
        previous: Option<DstAddress>,
        #[readonly] id: u64,
        salary: u32,
    }
}

fn user() -> User {
    User {
        name: "Jinzhu".into(),
        age: 18,
        height: 1.5,
        initial: 'J',
        nickname: Some("jz".into()),
        manager: None,
        address: SrcAddress {
            street: "Main".into(),
            number: 7,
        },
        previous: Some(Box::new(SrcAddress {
            street: "Old".into(),
            number: 3,
        })),
        id: 100,
    }
}

#[test]
fn fields_are_copied_by_name_with_conversions() {
    copier_testhelpers::setup();

    let mut employee = Employee {
        manager: Some("Boss".into()),
        salary: 5000,
        address: DstAddress {
            country: "NL".into(),
            ..DstAddress::default()
        },
        ..Employee::default()
    };
    copy(&mut employee, &user()).unwrap();

    assert_eq!(
        employee,
        Employee {
            name: "Jinzhu".into(),
            age: Some(Box::new(18)),
            height: 1.5,
            initial: "J".into(),
            nickname: "jz".into(),
            // a null source pointer resets the destination
            manager: None,
            address: DstAddress {
                street: "Main".into(),
                number: 7,
                country: "NL".into(),
            },
            previous: Some(DstAddress {
                street: "Old".into(),
                number: 3,
                country: String::new(),
            }),
            // read-only
            id: 0,
            // no counterpart in the source
            salary: 5000,
        }
    );
}

#[test]
fn null_source_pointers_leave_values_alone() {
    copier_testhelpers::setup();

    let source = User {
        nickname: None,
        previous: None,
        ..user()
    };
    let mut employee = Employee {
        nickname: "keep".into(),
        previous: Some(DstAddress::default()),
        ..Employee::default()
    };
    copy(&mut employee, &source).unwrap();

    assert_eq!(employee.nickname, "keep");
    assert_eq!(employee.previous, None);
}

#[test]
fn identical_struct_fields_are_cloned() {
    copier_testhelpers::setup();

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Holder {
        address: SrcAddress,
    }

    reflect_struct! {
        Holder { address: SrcAddress }
    }

    let source = Holder {
        address: SrcAddress {
            street: "Elm".into(),
            number: 13,
        },
    };
    let mut holder = Holder::default();
    copy(&mut holder, &source).unwrap();
    assert_eq!(holder, source);
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Money {
    cents: i64,
}

impl Scan for Money {
    fn scan(&mut self, value: ExternalValue<'_>) -> Result<(), ScanError> {
        if let Some(amount) = value.downcast_ref::<f64>() {
            self.cents = (amount * 100.0).round() as i64;
            return Ok(());
        }
        if let Some(text) = value.downcast_ref::<String>() {
            self.cents = text
                .parse()
                .map_err(|_| ScanError::new(format!("not an amount: {text:?}")))?;
            return Ok(());
        }
        Err(ScanError::unsupported(value.shape()))
    }
}

reflect_struct! {
    #[scan]
    Money { cents: i64 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct LegacyMoney {
    cents: i32,
}

reflect_struct! {
    LegacyMoney { cents: i32 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Order {
    price: f64,
    tax: String,
    total: LegacyMoney,
}

reflect_struct! {
    Order { price: f64, tax: String, total: LegacyMoney }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Invoice {
    price: Money,
    tax: Money,
    total: Money,
}

reflect_struct! {
    Invoice { price: Money, tax: Money, total: Money }
}

#[test]
fn scan_hook_absorbs_or_falls_back_to_fields() {
    copier_testhelpers::setup();

    let order = Order {
        price: 19.99,
        tax: "nineteen".into(),
        total: LegacyMoney { cents: 2378 },
    };
    let mut invoice = Invoice {
        tax: Money { cents: 1 },
        ..Invoice::default()
    };
    copy(&mut invoice, &order).unwrap();

    assert_eq!(invoice.price, Money { cents: 1999 });
    // the hook declined and `String` has no fields in common with `Money`
    assert_eq!(invoice.tax, Money { cents: 1 });
    // the hook declined, the fields matched
    assert_eq!(invoice.total, Money { cents: 2378 });
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Level2 {
    value: u32,
}

reflect_struct! {
    Level2 { value: u32 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Level1 {
    nested: Level2,
}

reflect_struct! {
    Level1 { nested: Level2 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Tree {
    first: u32,
    nested: Level1,
    last: u32,
}

reflect_struct! {
    Tree { first: u32, nested: Level1, last: u32 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct OtherLevel2 {
    value: u64,
}

reflect_struct! {
    OtherLevel2 { value: u64 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct OtherLevel1 {
    nested: OtherLevel2,
}

reflect_struct! {
    OtherLevel1 { nested: OtherLevel2 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct OtherTree {
    first: u32,
    nested: OtherLevel1,
    last: u32,
}

reflect_struct! {
    OtherTree { first: u32, nested: OtherLevel1, last: u32 }
}

fn tree() -> Tree {
    Tree {
        first: 1,
        nested: Level1 {
            nested: Level2 { value: 2 },
        },
        last: 3,
    }
}

#[test]
fn nested_structs_of_different_types_are_copied_recursively() {
    copier_testhelpers::setup();

    let mut other = OtherTree::default();
    copy(&mut other, &tree()).unwrap();
    assert_eq!(
        other,
        OtherTree {
            first: 1,
            nested: OtherLevel1 {
                nested: OtherLevel2 { value: 2 },
            },
            last: 3,
        }
    );
}

#[test]
fn a_failing_field_aborts_the_copy() {
    copier_testhelpers::setup();

    let copier = Copier::new(CopyOptions::new().max_depth(1));
    let mut other = OtherTree::default();
    let err = copier.copy(&mut other, &tree()).unwrap_err();

    insta::assert_snapshot!(err, @"Copy exceeded the depth limit of 1");
    // fields before the failing one were copied, the ones after were not
    assert_eq!(other.first, 1);
    assert_eq!(other.last, 0);
}
