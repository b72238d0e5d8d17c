use core::error::Error;

use copier::{Copier, CopyError, CopyOptions, Reflect, ReflectError, copy, reflect_struct};

#[derive(Clone, Debug, Default, PartialEq)]
struct Target {
    name: String,
}

reflect_struct! {
    Target { name: String }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Source {
    name: String,
}

reflect_struct! {
    Source { name: String }
}

#[test]
fn null_destination_is_unaddressable() {
    copier_testhelpers::setup();

    let source = Source {
        name: "unused".into(),
    };
    let mut target: Option<Box<Target>> = None;
    let err = copy(&mut target, &source).unwrap_err();

    assert_eq!(
        err,
        CopyError::Unaddressable {
            shape: <Option<Box<Target>>>::SHAPE
        }
    );
    insta::assert_snapshot!(err, @"Copy destination Option<Box<Target>> is unaddressable");
    assert_eq!(target, None);
}

#[test]
fn null_source_is_not_an_error() {
    copier_testhelpers::setup();

    let mut target = Target {
        name: "kept".into(),
    };
    copy(&mut target, &None::<Source>).unwrap();
    assert_eq!(target.name, "kept");
}

#[test]
fn depth_limit_applies_to_nested_copies_only() {
    copier_testhelpers::setup();

    let copier = Copier::new(CopyOptions::new().max_depth(0));
    let mut target = Target::default();
    copier
        .copy(
            &mut target,
            &Source {
                name: "flat".into(),
            },
        )
        .unwrap();
    assert_eq!(target.name, "flat");
    assert_eq!(copier.options().depth_limit(), 0);
}

#[test]
fn reflect_errors_are_sources() {
    let err = CopyError::from(ReflectError::NullPointer {
        shape: <Option<u8>>::SHAPE,
    });
    insta::assert_snapshot!(err, @"Reflection error: Dereferenced a null Option<u8>");
    insta::assert_snapshot!(err.source().unwrap(), @"Dereferenced a null Option<u8>");

    let err = CopyError::DepthLimitExceeded { limit: 4 };
    assert!(err.source().is_none());
}
