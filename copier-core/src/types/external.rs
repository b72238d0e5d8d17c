use core::any::Any;
use core::fmt;

use super::{ScalarValue, Shape};

/// A borrowed value of arbitrary type, handed to a [`Scan`] hook.
#[derive(Clone, Copy)]
pub struct ExternalValue<'a> {
    value: &'a dyn Any,
    shape: &'static Shape,
}

impl<'a> ExternalValue<'a> {
    /// Pairs a type-erased value with its shape.
    ///
    /// The caller is responsible for `shape` describing `value`; the accessors
    /// below re-check the type before handing anything out.
    #[inline]
    pub fn new(value: &'a dyn Any, shape: &'static Shape) -> Self {
        Self { value, shape }
    }

    /// Shape of the value
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// The value, type-erased
    #[inline]
    pub fn as_any(&self) -> &'a dyn Any {
        self.value
    }

    /// Returns the value as a `T`, if that is its type.
    #[inline]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }

    /// Reads the value as a scalar, if it is one.
    #[inline]
    pub fn scalar(&self) -> Option<ScalarValue> {
        self.shape
            .as_scalar()
            .and_then(|scalar| (scalar.read)(self.value))
    }
}

impl fmt::Debug for ExternalValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalValue")
            .field("shape", &format_args!("{}", self.shape))
            .finish_non_exhaustive()
    }
}

/// Error reported by a [`Scan`] hook that cannot absorb a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    message: String,
}

impl ScanError {
    /// Creates a scan error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Shorthand for "cannot scan a value of this shape".
    pub fn unsupported(shape: &'static Shape) -> Self {
        Self::new(format!("cannot scan a value of type {shape}"))
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for ScanError {}

/// Destination-side hook for absorbing values the copy engine can neither
/// assign nor convert.
///
/// When a leaf copy finds no direct conversion into a type that implements
/// `Scan` (and registers it with the `scan` clause of
/// [`reflect_struct!`](crate::reflect_struct)), the engine hands it the source
/// value. Returning an error is not fatal: the engine falls back to a
/// structural copy instead.
pub trait Scan {
    /// Absorbs `value` into `self`.
    fn scan(&mut self, value: ExternalValue<'_>) -> Result<(), ScanError>;
}

/// Type-erased entry point for a [`Scan`] implementation.
pub type ScanFn = fn(target: &mut dyn Any, value: ExternalValue<'_>) -> Result<(), ScanError>;

/// Builds the [`ScanFn`] for a type implementing [`Scan`].
pub fn scan_fn<T: Scan + 'static>(
    target: &mut dyn Any,
    value: ExternalValue<'_>,
) -> Result<(), ScanError> {
    match target.downcast_mut::<T>() {
        Some(target) => target.scan(value),
        None => Err(ScanError::new("scan target has the wrong type")),
    }
}
