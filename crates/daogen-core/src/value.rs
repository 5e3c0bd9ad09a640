// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bound parameter and column values.
//!
//! Generated DAOs never bind driver types directly. Every argument goes
//! through [`Encode`] into a [`Value`], and every column comes back through
//! [`Decode`]. Drivers translate `Value` to and from their wire types.
//!
//! # Mapping
//!
//! | Rust | Value |
//! |------|-------|
//! | `bool` | `Bool` |
//! | `i8`..`i64`, `u8`..`u32` | `Int` |
//! | `u64`, `usize` | `Int`, or `UInt` above `i64::MAX` |
//! | `f32`, `f64` | `Float` |
//! | `String`, `&str`, `char` | `Text` |
//! | `Vec<u8>` | `Bytes` |
//! | `Option<T>` | `Null` or the inner mapping |
//! | `chrono::NaiveDate`, `NaiveTime`, `NaiveDateTime` | `Text` (ISO 8601), feature `chrono` |
//! | `chrono::DateTime<Utc>` | `Text` (RFC 3339), feature `chrono` |
//! | `uuid::Uuid` | `Text` (hyphenated), feature `uuid` |
//!
//! Field types outside this table need their own `Encode` and `Decode`
//! impls. Integer decoding is range checked in both directions.

#[cfg(feature = "chrono")]
mod chrono;
#[cfg(feature = "uuid")]
mod uuid;

use thiserror::Error;

/// A single SQL value, either bound as a parameter or read from a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Any integer column, widened to 64 bits.
    Int(i64),

    /// Unsigned integer above `i64::MAX`.
    UInt(u64),

    /// Any floating point column.
    Float(f64),

    /// Text column.
    Text(String),

    /// Binary column.
    Bytes(Vec<u8>)
}

impl Value {
    /// Short name of the variant, used in decode errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes"
        }
    }

    /// Check for SQL `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Error produced when a column value cannot be converted to a field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The column held a value of a different kind.
    #[error("expected {expected} value, found {found}")]
    Mismatch {
        /// Kind the field type accepts.
        expected: &'static str,
        /// Kind actually present in the row.
        found:    &'static str
    },

    /// The integer does not fit into the field type.
    #[error("integer {value} out of range for {target}")]
    OutOfRange {
        /// Offending value.
        value:  i128,
        /// Target Rust type.
        target: &'static str
    },

    /// The column text does not parse as the field type.
    #[error("invalid {target} value: {message}")]
    Invalid {
        /// Target Rust type.
        target:  &'static str,
        /// Parser message.
        message: String
    },

    /// The row has fewer columns than the DAO selected.
    #[error("column index {index} out of bounds for row of {len} columns")]
    MissingColumn {
        /// Requested index.
        index: usize,
        /// Number of columns in the row.
        len:   usize
    }
}

/// Conversion of a field value into a bound [`Value`].
pub trait Encode {
    /// Encode `self` as a parameter value.
    fn encode(&self) -> Value;
}

/// Conversion of a column [`Value`] into a field value.
pub trait Decode: Sized {
    /// Decode a column value.
    fn decode(value: Value) -> Result<Self, DecodeError>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}

impl Encode for Value {
    fn encode(&self) -> Value {
        self.clone()
    }
}

impl Decode for Value {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        Ok(value)
    }
}

impl Encode for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Decode for bool {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(v) => Ok(v),
            // MySQL and SQLite store booleans as integers
            Value::Int(v) => Ok(v != 0),
            other => Err(mismatch("bool", &other))
        }
    }
}

macro_rules! integer {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }

            impl Decode for $ty {
                fn decode(value: Value) -> Result<Self, DecodeError> {
                    decode_integer(value, stringify!($ty))
                }
            }
        )*
    };
}

integer!(i8, i16, i32, i64, u8, u16, u32);

impl Encode for u64 {
    fn encode(&self) -> Value {
        i64::try_from(*self).map_or(Value::UInt(*self), Value::Int)
    }
}

impl Decode for u64 {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        decode_integer(value, "u64")
    }
}

impl Encode for usize {
    fn encode(&self) -> Value {
        // usize is at most 64 bits on every supported target
        (*self as u64).encode()
    }
}

impl Decode for usize {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        decode_integer(value, "usize")
    }
}

fn decode_integer<T>(value: Value, target: &'static str) -> Result<T, DecodeError>
where
    T: TryFrom<i64> + TryFrom<u64>
{
    let out_of_range = |value: i128| DecodeError::OutOfRange {
        value,
        target
    };
    match value {
        Value::Int(v) => <T as TryFrom<i64>>::try_from(v).map_err(|_| out_of_range(i128::from(v))),
        Value::UInt(v) => <T as TryFrom<u64>>::try_from(v).map_err(|_| out_of_range(i128::from(v))),
        other => Err(mismatch(target, &other))
    }
}

impl Encode for f32 {
    fn encode(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Decode for f32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Float(v) => Ok(v as f32),
            Value::Int(v) => Ok(v as f32),
            other => Err(mismatch("f32", &other))
        }
    }
}

impl Encode for f64 {
    fn encode(&self) -> Value {
        Value::Float(*self)
    }
}

impl Decode for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            other => Err(mismatch("f64", &other))
        }
    }
}

impl Encode for str {
    fn encode(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl Encode for String {
    fn encode(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl Decode for String {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(mismatch("text", &other))
        }
    }
}

impl Encode for char {
    fn encode(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Decode for char {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        let text = match value {
            Value::Text(text) => text,
            other => return Err(mismatch("char", &other))
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(DecodeError::Invalid {
                target:  "char",
                message: format!("expected one character, found {text:?}")
            })
        }
    }
}

impl Encode for [u8] {
    fn encode(&self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl Encode for Vec<u8> {
    fn encode(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Decode for Vec<u8> {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::Text(v) => Ok(v.into_bytes()),
            other => Err(mismatch("bytes", &other))
        }
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Value {
        self.as_ref().map_or(Value::Null, Encode::encode)
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => T::decode(other).map(Some)
        }
    }
}

/// Decode a text column through a parser, e.g. for date and id types.
#[cfg(any(feature = "chrono", feature = "uuid"))]
fn decode_text<T, E: std::fmt::Display>(
    value: Value,
    target: &'static str,
    parse: impl FnOnce(&str) -> Result<T, E>
) -> Result<T, DecodeError> {
    match value {
        Value::Text(text) => parse(&text).map_err(|e| DecodeError::Invalid {
            target,
            message: e.to_string()
        }),
        other => Err(mismatch(target, &other))
    }
}

fn mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::Mismatch {
        expected,
        found: found.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_encodes_null() {
        let none: Option<String> = None;
        assert_eq!(none.encode(), Value::Null);
        assert_eq!(Some("a".to_string()).encode(), Value::Text("a".into()));
    }

    #[test]
    fn option_decodes_null() {
        assert_eq!(Option::<i64>::decode(Value::Null), Ok(None));
        assert_eq!(Option::<i64>::decode(Value::Int(3)), Ok(Some(3)));
    }

    #[test]
    fn integer_out_of_range() {
        let err = u8::decode(Value::Int(300)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfRange {
                value:  300,
                target: "u8"
            }
        );
    }

    #[test]
    fn bool_from_integer_column() {
        assert_eq!(bool::decode(Value::Int(1)), Ok(true));
        assert_eq!(bool::decode(Value::Int(0)), Ok(false));
    }

    #[test]
    fn text_mismatch_reports_kinds() {
        let err = String::decode(Value::Int(1)).unwrap_err();
        assert_eq!(err.to_string(), "expected text value, found int");
    }

    #[test]
    fn unsigned_64_bit_range_checked() {
        assert_eq!(7u64.encode(), Value::Int(7));
        assert_eq!(u64::MAX.encode(), Value::UInt(u64::MAX));
        assert_eq!(u64::decode(Value::UInt(u64::MAX)), Ok(u64::MAX));
        assert_eq!(usize::decode(Value::Int(42)), Ok(42));
        assert_eq!(
            u64::decode(Value::Int(-1)),
            Err(DecodeError::OutOfRange {
                value:  -1,
                target: "u64"
            })
        );
        assert_eq!(
            i64::decode(Value::UInt(u64::MAX)),
            Err(DecodeError::OutOfRange {
                value:  i128::from(u64::MAX),
                target: "i64"
            })
        );
    }

    #[test]
    fn char_is_single_character_text() {
        assert_eq!('x'.encode(), Value::Text("x".into()));
        assert_eq!(char::decode(Value::Text("é".into())), Ok('é'));
        assert!(matches!(
            char::decode(Value::Text("ab".into())),
            Err(DecodeError::Invalid { target: "char", .. })
        ));
        assert_eq!(
            char::decode(Value::Int(1)).unwrap_err().to_string(),
            "expected char value, found int"
        );
    }

    #[test]
    fn references_encode_through() {
        let name = String::from("ada");
        assert_eq!((&name).encode(), Value::Text("ada".into()));
        assert_eq!("ada".encode(), Value::Text("ada".into()));
    }
}
