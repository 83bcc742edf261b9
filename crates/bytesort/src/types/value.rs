//! Values accepted by the encoder.
//!
//! This module provides the [`Value`] enum, a closed set of the categories the
//! encoder knows about plus one open [`Value::Custom`] variant for caller types.
//!
//! # Example
//!
//! ```
//! use bytesort::Value;
//!
//! let name: Value = "Alice".into();
//! let age: Value = 30u8.into();
//! let score: Value = 95.5f64.into();
//! let missing: Value = Option::<i32>::None.into();
//!
//! assert_eq!(name.type_name(), "string");
//! assert_eq!(age.type_name(), "u8");
//! assert_eq!(score.type_name(), "f64");
//! assert_eq!(missing.type_name(), "null");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, TimeZone};

use crate::encoding::EncodeSortable;

/// A value to be encoded.
///
/// # Categories
///
/// | Variant | Rust Type | Encoded width |
/// |---------|-----------|---------------|
/// | `Bool` | `bool` | 1 |
/// | `I8`..`I64` | `i8`..`i64`, `isize` | 1, 2, 4, 8 |
/// | `U8`..`U64` | `u8`..`u64`, `usize` | 1, 2, 4, 8 |
/// | `F32`, `F64` | `f32`, `f64` | 4, 8 |
/// | `String` | `String` | byte length |
/// | `Bytes` | `Vec<u8>` | byte length |
/// | `Instant` | `DateTime<Tz>` | 12 |
/// | `Custom` | any [`EncodeSortable`] | type-defined |
///
/// `Null`, `List` and `Map` exist so dynamically typed data can be passed in
/// as-is. They have no sortable encoding and are always rejected.
#[derive(Clone)]
pub enum Value {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    /// 64-bit signed integer, also used for `isize`
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    /// 64-bit unsigned integer, also used for `usize`
    U64(u64),
    F32(f32),
    F64(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// A point in time. The offset is kept as given and dropped on encoding.
    Instant(DateTime<FixedOffset>),
    /// List of values
    List(Vec<Value>),
    /// String-keyed map of values
    Map(BTreeMap<String, Value>),
    /// A caller type with its own sortable encoding.
    Custom(Arc<dyn EncodeSortable + Send + Sync>),
}

impl Value {
    /// Wrap a caller type implementing [`EncodeSortable`].
    #[must_use]
    pub fn custom(value: impl EncodeSortable + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Name of the value's category, as reported in errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Instant(_) => "instant",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Custom(inner) => inner.type_name(),
        }
    }

    /// Returns `true` if this is the null value.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::I8(v) => f.debug_tuple("I8").field(v).finish(),
            Self::I16(v) => f.debug_tuple("I16").field(v).finish(),
            Self::I32(v) => f.debug_tuple("I32").field(v).finish(),
            Self::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Self::U8(v) => f.debug_tuple("U8").field(v).finish(),
            Self::U16(v) => f.debug_tuple("U16").field(v).finish(),
            Self::U32(v) => f.debug_tuple("U32").field(v).finish(),
            Self::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Self::F32(v) => f.debug_tuple("F32").field(v).finish(),
            Self::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            Self::Instant(v) => f.debug_tuple("Instant").field(v).finish(),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Self::Custom(inner) => f.debug_tuple("Custom").field(&inner.type_name()).finish(),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Vec<Value> => List,
    BTreeMap<String, Value> => Map,
}

// Native-width integers are always widened to 64 bits so the encoded width
// does not depend on the host.
impl From<isize> for Value {
    #[inline]
    fn from(v: isize) -> Self {
        Self::I64(v as i64)
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(v: usize) -> Self {
        Self::U64(v as u64)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<&[u8]> for Value {
    #[inline]
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        let offset = t.offset().fix();
        Self::Instant(t.with_timezone(&offset))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
