use copier::{Copier, CopyOptions, copy, reflect_struct};

#[derive(Clone, Debug, Default, PartialEq)]
struct Audit {
    created_by: String,
}

reflect_struct! {
    Audit { created_by: String }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Base {
    id: u64,
    audit: Option<Box<Audit>>,
}

reflect_struct! {
    Base { id: u64, #[embedded] audit: Option<Box<Audit>> }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Post {
    base: Base,
    title: String,
}

reflect_struct! {
    Post { #[embedded] base: Base, title: String }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct FlatPost {
    id: u64,
    created_by: String,
    title: String,
}

reflect_struct! {
    FlatPost { id: u64, created_by: String, title: String }
}

#[test]
fn embedded_fields_are_flattened() {
    copier_testhelpers::setup();

    let post = Post {
        base: Base {
            id: 12,
            audit: Some(Box::new(Audit {
                created_by: "alice".into(),
            })),
        },
        title: "Hello".into(),
    };
    let mut flat = FlatPost::default();
    copy(&mut flat, &post).unwrap();

    assert_eq!(
        flat,
        FlatPost {
            id: 12,
            created_by: "alice".into(),
            title: "Hello".into(),
        }
    );
}

#[test]
fn flat_fields_fill_embedded_destinations() {
    copier_testhelpers::setup();

    let flat = FlatPost {
        id: 4,
        created_by: "bob".into(),
        title: "Flat".into(),
    };
    let mut post = Post::default();
    copy(&mut post, &flat).unwrap();

    assert_eq!(post.base.id, 4);
    assert_eq!(post.title, "Flat");
    // nothing in the source asked for the audit pointer
    assert_eq!(post.base.audit, None);
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Article {
    base: Option<Box<Base>>,
    title: String,
}

reflect_struct! {
    Article { #[embedded] base: Option<Box<Base>>, title: String }
}

#[test]
fn null_embedded_source_is_skipped() {
    copier_testhelpers::setup();

    let source = Article {
        base: None,
        title: "Draft".into(),
    };

    let mut article = Article::default();
    copy(&mut article, &source).unwrap();
    assert_eq!(article.base, None);
    assert_eq!(article.title, "Draft");

    let mut flat = FlatPost {
        id: 99,
        ..FlatPost::default()
    };
    copy(&mut flat, &source).unwrap();
    assert_eq!(flat.id, 99);
}

#[test]
fn populated_embedded_paths_are_allocated() {
    copier_testhelpers::setup();

    let source = Article {
        base: Some(Box::new(Base {
            id: 8,
            audit: Some(Box::new(Audit {
                created_by: "carol".into(),
            })),
        })),
        title: "Full".into(),
    };
    let mut article = Article::default();
    copy(&mut article, &source).unwrap();
    assert_eq!(article, source);

    let partial = Article {
        base: Some(Box::new(Base { id: 9, audit: None })),
        title: String::new(),
    };
    let mut article = Article::default();
    copy(&mut article, &partial).unwrap();
    assert_eq!(article.base, Some(Box::new(Base { id: 9, audit: None })));
}

#[test]
fn init_all_embedded_allocates_every_pointer() {
    copier_testhelpers::setup();

    let flat = FlatPost {
        id: 1,
        created_by: "dave".into(),
        title: "All".into(),
    };

    let mut article = Article::default();
    copy(&mut article, &flat).unwrap();
    assert_eq!(article.base, None);
    assert_eq!(article.title, "All");

    let copier = Copier::new(CopyOptions::new().init_all_embedded(true));
    let mut article = Article::default();
    copier.copy(&mut article, &flat).unwrap();
    assert_eq!(
        article.base,
        Some(Box::new(Base {
            id: 1,
            audit: Some(Box::new(Audit {
                created_by: "dave".into(),
            })),
        }))
    );
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Node {
    val: u32,
    next: Option<Box<Node>>,
}

reflect_struct! {
    Node { val: u32, #[embedded] next: Option<Box<Node>> }
}

#[test]
fn init_all_embedded_keeps_populated_self_embedding() {
    copier_testhelpers::setup();

    let list = Node {
        val: 1,
        next: Some(Box::new(Node { val: 2, next: None })),
    };
    let expected = Node {
        val: 1,
        next: Some(Box::new(Node { val: 0, next: None })),
    };

    let mut default = Node::default();
    copy(&mut default, &list).unwrap();
    assert_eq!(default, expected);

    let copier = Copier::new(CopyOptions::new().init_all_embedded(true));
    let mut all = Node::default();
    copier.copy(&mut all, &list).unwrap();
    assert_eq!(all, expected);
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Shadowed {
    base: Base,
    id: u64,
}

reflect_struct! {
    Shadowed { #[embedded] base: Base, id: u64 }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Id {
    id: u64,
}

reflect_struct! {
    Id { id: u64 }
}

#[test]
fn outer_fields_shadow_embedded_ones() {
    copier_testhelpers::setup();

    let source = Shadowed {
        base: Base { id: 1, audit: None },
        id: 2,
    };
    let mut id = Id::default();
    copy(&mut id, &source).unwrap();
    assert_eq!(id.id, 2);

    let mut shadowed = Shadowed::default();
    copy(&mut shadowed, &Id { id: 3 }).unwrap();
    assert_eq!(shadowed.id, 3);
    assert_eq!(shadowed.base.id, 0);
}
