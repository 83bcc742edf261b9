//! The sortable encoding capability.

use chrono::{DateTime, TimeZone};

use super::float::{f32_bytes, f64_bytes};
use super::int::{
    bool_bytes, i16_bytes, i32_bytes, i64_bytes, i8_bytes, isize_bytes, u16_bytes, u32_bytes,
    u64_bytes, u8_bytes, usize_bytes,
};
use super::time::instant_bytes;
use crate::error::EncodeError;

/// A type that can produce a byte-sortable encoding of itself.
///
/// Implement this for your own types to have [`Value::custom`](crate::Value::custom)
/// values dispatched to it. The bytes are relayed unchanged, and so are errors.
///
/// Composite types should build their encoding by concatenating the outputs
/// of the built-in implementations in a fixed field order. A composite only
/// sorts field by field if every field except the last is fixed-width or
/// delimited, see [`KeyBuilder`](crate::keys::KeyBuilder).
///
/// # Example
///
/// ```
/// use bytesort::{encode, EncodeError, EncodeSortable, Value};
///
/// struct UserId(i64);
///
/// impl EncodeSortable for UserId {
///     fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
///         self.0.encode_sortable()
///     }
/// }
///
/// let custom = encode(Value::custom(UserId(-7))).unwrap();
/// assert_eq!(custom, encode(-7i64).unwrap());
/// ```
pub trait EncodeSortable {
    /// Produce the sortable encoding of this value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded.
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError>;

    /// Name of the implementing type, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $f:ident),* $(,)?) => {
        $(
            impl EncodeSortable for $ty {
                #[inline]
                fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
                    Ok($f(*self).to_vec())
                }
            }
        )*
    };
}

impl_fixed_width! {
    bool => bool_bytes,
    i8 => i8_bytes,
    i16 => i16_bytes,
    i32 => i32_bytes,
    i64 => i64_bytes,
    isize => isize_bytes,
    u8 => u8_bytes,
    u16 => u16_bytes,
    u32 => u32_bytes,
    u64 => u64_bytes,
    usize => usize_bytes,
    f32 => f32_bytes,
    f64 => f64_bytes,
}

impl EncodeSortable for str {
    #[inline]
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.as_bytes().to_vec())
    }
}

impl EncodeSortable for String {
    #[inline]
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
        self.as_str().encode_sortable()
    }
}

impl EncodeSortable for [u8] {
    #[inline]
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.to_vec())
    }
}

impl EncodeSortable for Vec<u8> {
    #[inline]
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
        self.as_slice().encode_sortable()
    }
}

impl<Tz: TimeZone> EncodeSortable for DateTime<Tz> {
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
        instant_bytes(self).map(|b| b.to_vec())
    }
}

impl<T: EncodeSortable + ?Sized> EncodeSortable for &T {
    #[inline]
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
        (**self).encode_sortable()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}
