/// Implements [`Reflect`](crate::Reflect) for a struct with named fields.
///
/// The struct must implement `Default` and `Clone`, and every field type must
/// implement `Reflect`. Invoke the macro in the module that defines the struct
/// (the generated accessors borrow its fields directly).
///
/// ```
/// use copier_core::{ExternalValue, Reflect, Scan, ScanError, reflect_struct};
///
/// #[derive(Clone, Default)]
/// struct Base {
///     id: u64,
/// }
///
/// reflect_struct! {
///     Base { id: u64 }
/// }
///
/// #[derive(Clone, Default)]
/// struct Employee {
///     base: Option<Box<Base>>,
///     name: String,
///     badge: u32,
///     role: String,
/// }
///
/// impl Employee {
///     fn set_title(&mut self, title: String) {
///         self.role = title;
///     }
///
///     fn display_name(&self) -> String {
///         self.name.to_uppercase()
///     }
/// }
///
/// reflect_struct! {
///     Employee {
///         // `id` is reachable as if it were declared on `Employee`
///         #[embedded] base: Option<Box<Base>>,
///         name: String,
///         // never written by the copy engine
///         #[readonly] badge: u32,
///         role: String,
///     }
///     methods {
///         // a source `title` field lands here
///         setter title => set_title(String);
///         // fills a destination `display_name` field
///         getter display_name => display_name() -> String;
///     }
/// }
///
/// let fields = Employee::SHAPE.as_struct().unwrap().fields;
/// assert!(fields[0].is_embedded());
/// assert!(!fields[2].is_writable());
/// assert_eq!(Employee::SHAPE.methods.len(), 2);
/// ```
///
/// Prefix the struct name with `#[scan]` to register its [`Scan`](crate::Scan)
/// implementation as the accept-external-value hook.
#[macro_export]
macro_rules! reflect_struct {
    (
        $(#[$struct_flag:ident])*
        $name:ident {
            $( $(#[$flag:ident])* $field:ident : $ty:ty ),* $(,)?
        }
        $(
            methods {
                $( $kind:ident $bridge:ident => $method:ident ( $($arg:ty)? ) $(-> $ret:ty)? ; )*
            }
        )?
    ) => {
        const _: () = {
            const FIELDS: &[$crate::Field] = &[
                $(
                    $crate::Field {
                        name: ::core::stringify!($field),
                        shape: $crate::shape_of::<$ty>,
                        flags: $crate::FieldFlags::empty()
                            $( .union($crate::__field_flag!($flag)) )*,
                        get: |owner| {
                            owner
                                .downcast_ref::<$name>()
                                .map(|owner| &owner.$field as &dyn ::core::any::Any)
                        },
                        get_mut: |owner| {
                            owner
                                .downcast_mut::<$name>()
                                .map(|owner| &mut owner.$field as &mut dyn ::core::any::Any)
                        },
                    },
                )*
            ];

            const METHODS: &[$crate::Method] = &[
                $($(
                    $crate::__bridge_method!(
                        $name, $kind $bridge => $method ( $($arg)? ) $(-> $ret)?
                    ),
                )*)?
            ];

            impl $crate::Reflect for $name {
                const SHAPE: &'static $crate::Shape = &$crate::Shape {
                    id: $crate::ConstTypeId::of::<$name>(),
                    type_identifier: ::core::stringify!($name),
                    def: $crate::Def::Struct($crate::StructDef { fields: FIELDS }),
                    vtable: $crate::ValueVTable {
                        default: $crate::default_boxed::<$name>,
                        clone_into: $crate::clone_into::<$name>,
                        scan: $crate::__scan_hook!($name $(, $struct_flag)*),
                    },
                    methods: METHODS,
                };
            }
        };
    };
}

/// Builds one bridge [`Method`](crate::Method) entry for [`reflect_struct!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __bridge_method {
    ($owner:ident, setter $bridge:ident => $method:ident ( $arg:ty )) => {
        $crate::Method {
            name: ::core::stringify!($bridge),
            kind: $crate::MethodKind::Setter {
                param: $crate::shape_of::<$arg>,
                call: |receiver, arg| {
                    match (receiver.downcast_mut::<$owner>(), arg.downcast_ref::<$arg>()) {
                        (Some(receiver), Some(arg)) => {
                            let _ = receiver.$method(::core::clone::Clone::clone(arg));
                            true
                        }
                        _ => false,
                    }
                },
            },
        }
    };
    ($owner:ident, getter $bridge:ident => $method:ident ( ) -> $ret:ty) => {
        $crate::Method {
            name: ::core::stringify!($bridge),
            kind: $crate::MethodKind::Getter {
                ret: $crate::shape_of::<$ret>,
                call: |receiver| {
                    receiver.downcast_ref::<$owner>().map(|receiver| {
                        let value: $ret = receiver.$method();
                        ::std::boxed::Box::new(value) as ::std::boxed::Box<dyn ::core::any::Any>
                    })
                },
            },
        }
    };
}

/// Picks the scan hook for [`reflect_struct!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __scan_hook {
    ($name:ident) => {
        ::core::option::Option::None
    };
    ($name:ident, scan) => {
        ::core::option::Option::Some($crate::scan_fn::<$name> as $crate::ScanFn)
    };
}
