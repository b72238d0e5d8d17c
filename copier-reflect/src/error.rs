use copier_core::Shape;

/// Errors that can occur when reading or writing values through their shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectError {
    /// Tried to read or write a value as the wrong type, e.g. a `String`
    /// handle was asked for a `u64`.
    WrongShape {
        /// The expected shape of the value.
        expected: &'static Shape,
        /// The actual shape of the value.
        actual: &'static Shape,
    },

    /// Attempted a struct/pointer/list/scalar operation on a value of another kind.
    WasNotA {
        /// The kind that was expected.
        expected: &'static str,
        /// The actual shape of the value.
        actual: &'static Shape,
    },

    /// The data behind a handle is not of the type its shape describes.
    TypeMismatch {
        /// The shape the data was supposed to have.
        shape: &'static Shape,
    },

    /// A field index past the end of the struct.
    FieldIndexOutOfBounds {
        /// The struct shape.
        shape: &'static Shape,
        /// The requested index.
        index: usize,
    },

    /// No field with the requested name.
    NoSuchField {
        /// The struct shape.
        shape: &'static Shape,
        /// The requested name.
        name: String,
    },

    /// A null pointer was dereferenced.
    NullPointer {
        /// The pointer shape.
        shape: &'static Shape,
    },

    /// A vtable operation refused a value it should have accepted.
    OperationFailed {
        /// The shape whose vtable was called.
        shape: &'static Shape,
        /// What was attempted.
        operation: &'static str,
    },
}

impl core::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReflectError::WrongShape { expected, actual } => {
                write!(f, "Wrong shape: expected {expected}, but got {actual}")
            }
            ReflectError::WasNotA { expected, actual } => {
                write!(f, "Was not a {expected}: {actual}")
            }
            ReflectError::TypeMismatch { shape } => {
                write!(f, "Value does not match its shape {shape}")
            }
            ReflectError::FieldIndexOutOfBounds { shape, index } => {
                write!(f, "Field index {index} out of bounds for {shape}")
            }
            ReflectError::NoSuchField { shape, name } => {
                write!(f, "No field named `{name}` in {shape}")
            }
            ReflectError::NullPointer { shape } => {
                write!(f, "Dereferenced a null {shape}")
            }
            ReflectError::OperationFailed { shape, operation } => {
                write!(f, "Operation `{operation}` failed on {shape}")
            }
        }
    }
}

impl core::error::Error for ReflectError {}
