use copier_core::Shape;
use copier_reflect::ReflectError;

/// Errors that abort a copy.
///
/// Most mismatches are not errors: an absent source, unrelated shapes or a
/// field without counterpart are skipped silently. Fields written before an
/// error stay written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CopyError {
    /// The destination ends in a null pointer, so there is nothing to write to.
    Unaddressable {
        /// shape of the destination as passed in
        shape: &'static Shape,
    },

    /// Nested copies went deeper than [`CopyOptions::max_depth`](crate::CopyOptions::max_depth).
    DepthLimitExceeded {
        /// the configured limit
        limit: usize,
    },

    /// A value did not match the shape it was accessed through.
    Reflect(ReflectError),
}

impl core::fmt::Display for CopyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CopyError::Unaddressable { shape } => {
                write!(f, "Copy destination {shape} is unaddressable")
            }
            CopyError::DepthLimitExceeded { limit } => {
                write!(f, "Copy exceeded the depth limit of {limit}")
            }
            CopyError::Reflect(err) => write!(f, "Reflection error: {err}"),
        }
    }
}

impl core::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            CopyError::Reflect(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReflectError> for CopyError {
    fn from(err: ReflectError) -> Self {
        CopyError::Reflect(err)
    }
}
