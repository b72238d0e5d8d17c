use copier::{copy, reflect_struct};

#[derive(Clone, Debug, Default, PartialEq)]
struct Item {
    sku: String,
    quantity: u32,
}

reflect_struct! {
    Item { sku: String, quantity: u32 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Line {
    sku: String,
    quantity: i64,
    note: String,
}

reflect_struct! {
    Line { sku: String, quantity: i64, note: String }
}

fn item(sku: &str, quantity: u32) -> Item {
    Item {
        sku: sku.into(),
        quantity,
    }
}

fn line(sku: &str, quantity: i64) -> Line {
    Line {
        sku: sku.into(),
        quantity,
        note: String::new(),
    }
}

#[test]
fn single_value_is_broadcast_into_a_list() {
    copier_testhelpers::setup();

    let mut lines: Vec<Line> = Vec::new();
    copy(&mut lines, &item("A-1", 2)).unwrap();
    assert_eq!(lines, [line("A-1", 2)]);
}

#[test]
fn list_items_are_copied_and_appended() {
    copier_testhelpers::setup();

    let mut lines = vec![line("OLD", 1)];
    copy(&mut lines, &vec![item("A-1", 2), item("B-2", 3)]).unwrap();
    assert_eq!(lines, [line("OLD", 1), line("A-1", 2), line("B-2", 3)]);
}

#[test]
fn empty_source_list_leaves_an_empty_list() {
    copier_testhelpers::setup();

    let mut lines = vec![line("OLD", 1)];
    copy(&mut lines, &Vec::<Item>::new()).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn list_items_are_wrapped_into_pointers() {
    copier_testhelpers::setup();

    let mut lines: Vec<Option<Box<Line>>> = Vec::new();
    copy(&mut lines, &vec![Some(item("A-1", 2)), None]).unwrap();
    // a null source item still produces a zero element
    assert_eq!(
        lines,
        [Some(Box::new(line("A-1", 2))), Some(Box::new(Line::default()))]
    );
}

#[test]
fn scalar_lists_are_converted_item_by_item() {
    copier_testhelpers::setup();

    let mut wide: Vec<i64> = vec![0];
    copy(&mut wide, &vec![1i32, -2, 3]).unwrap();
    assert_eq!(wide, [0, 1, -2, 3]);

    let mut text: Vec<String> = Vec::new();
    copy(&mut text, &'x').unwrap();
    assert_eq!(text, ["x"]);

    let mut flags: Vec<bool> = Vec::new();
    copy(&mut flags, &vec![1u8]).unwrap();
    assert!(flags.is_empty());
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Order {
    items: Vec<Item>,
}

reflect_struct! {
    Order { items: Vec<Item> }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Shipment {
    items: Vec<Line>,
}

reflect_struct! {
    Shipment { items: Vec<Line> }
}

#[test]
fn list_fields_are_copied() {
    copier_testhelpers::setup();

    let order = Order {
        items: vec![item("A-1", 2)],
    };
    let mut shipment = Shipment::default();
    copy(&mut shipment, &order).unwrap();
    assert_eq!(shipment.items, [line("A-1", 2)]);

    let mut shipment = Shipment {
        items: vec![line("OLD", 1)],
    };
    copy(&mut shipment, &Order::default()).unwrap();
    assert!(shipment.items.is_empty());
}

#[test]
fn a_list_source_does_not_fill_a_single_struct() {
    copier_testhelpers::setup();

    let mut single = line("KEEP", 1);
    copy(&mut single, &vec![item("A-1", 2)]).unwrap();
    assert_eq!(single, line("KEEP", 1));
}
