//! Scalar identification and conversion rules.

/// All scalar types the registry knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScalarType {
    /// Boolean value (true/false).
    Bool,
    /// Unicode scalar value.
    Char,
    /// Owned UTF-8 string.
    String,
    /// Single-precision floating point.
    F32,
    /// Double-precision floating point.
    F64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// Unsigned 128-bit integer.
    U128,
    /// Unsigned pointer-sized integer.
    USize,
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Signed 128-bit integer.
    I128,
    /// Signed pointer-sized integer.
    ISize,
}

impl ScalarType {
    /// Returns `true` for integer and floating point types.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool | Self::Char | Self::String)
    }

    /// Whether a value of this type may be converted into `target`.
    ///
    /// Numbers convert into any other number with `as` semantics (truncation,
    /// saturation for float-to-int). A `char` converts into numbers (its code
    /// point) and into `String`. `bool` and `String` only convert to themselves.
    pub const fn is_convertible_to(self, target: ScalarType) -> bool {
        match (self, target) {
            (Self::Bool, Self::Bool) | (Self::String, Self::String) => true,
            (Self::Char, Self::Char | Self::String) => true,
            (Self::Char, to) => to.is_numeric(),
            (from, to) => from.is_numeric() && to.is_numeric(),
        }
    }
}

/// A scalar read out of a value, in its widest representation.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    /// A boolean
    Bool(bool),
    /// A character
    Char(char),
    /// A string
    String(String),
    /// Any signed integer
    Signed(i128),
    /// Any unsigned integer
    Unsigned(u128),
    /// Any float
    Float(f64),
}
