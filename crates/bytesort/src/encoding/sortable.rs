//! Dispatch of values to their sortable encoding.
//!
//! [`Encoder`] routes each [`Value`] to the transform for its category:
//!
//! | Category | Transform | Width |
//! |----------|-----------|-------|
//! | bool | `0x00` / `0x01` | 1 |
//! | signed integers | big-endian, sign bit flipped | 1, 2, 4, 8 |
//! | unsigned integers | big-endian | 1, 2, 4, 8 |
//! | floats | sign-dependent bit flip, big-endian | 4, 8 |
//! | string, bytes | raw bytes | input length |
//! | instant | UTC seconds and nanos since year 1 | 12 |
//! | custom | [`EncodeSortable::encode_sortable`] | type-defined |
//!
//! Built-in categories are matched first, custom values last. `Null`, `List`
//! and `Map` are rejected with [`EncodeError::UnsupportedType`].
//!
//! Encodings are only comparable within one category. No type tag is written,
//! so an encoded `u16` and an encoded `i16` may collide.
//!
//! # Example
//!
//! ```
//! use bytesort::encode;
//!
//! let mut encoded: Vec<_> =
//!     [32767i16, -32768, 0].into_iter().map(|v| encode(v).unwrap()).collect();
//! encoded.sort();
//!
//! assert_eq!(encoded, vec![vec![0x00, 0x00], vec![0x80, 0x00], vec![0xFF, 0xFF]]);
//! ```

use tracing::trace;

use super::float::{f32_bytes, f64_bytes};
use super::int::{
    bool_bytes, i16_bytes, i32_bytes, i64_bytes, i8_bytes, u16_bytes, u32_bytes, u64_bytes,
    u8_bytes,
};
use super::time::{instant_bytes, INSTANT_WIDTH};
use super::traits::EncodeSortable;
use crate::config::EncodeConfig;
use crate::error::EncodeError;
use crate::types::Value;

/// Byte written for empty text when [`EncodeConfig::empty_text_sentinel`] is set.
const EMPTY_TEXT_SENTINEL: u8 = 0x00;

/// Encode a value with the default configuration.
///
/// # Errors
///
/// Returns [`EncodeError::UnsupportedType`] for `Null`, `List` and `Map`
/// values, [`EncodeError::Instant`] for instants before year 1, and relays
/// any error from a custom value unchanged.
///
/// # Example
///
/// ```
/// use bytesort::encode;
///
/// assert_eq!(encode("abc").unwrap(), b"abc");
/// assert_eq!(encode(false).unwrap(), [0x00]);
/// assert_eq!(encode(true).unwrap(), [0x01]);
/// assert!(encode(Option::<i64>::None).is_err());
/// ```
pub fn encode(value: impl Into<Value>) -> Result<Vec<u8>, EncodeError> {
    Encoder::default().encode(&value.into())
}

/// Encodes values into byte-sortable keys.
///
/// The encoder holds only its immutable configuration and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncodeConfig,
}

impl Encoder {
    /// Create an encoder with the given configuration.
    #[must_use]
    pub const fn new(config: EncodeConfig) -> Self {
        Self { config }
    }

    /// Returns the encoder's configuration.
    #[must_use]
    pub const fn config(&self) -> &EncodeConfig {
        &self.config
    }

    /// Encode a value into a new buffer.
    ///
    /// # Errors
    ///
    /// See [`encode`].
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        // A custom encoding already is the output buffer.
        if let Value::Custom(inner) = value {
            return encode_custom(inner.as_ref());
        }
        let mut buf = Vec::with_capacity(self.encoded_size(value).unwrap_or(0));
        self.encode_to(value, &mut buf)?;
        Ok(buf)
    }

    /// Append the encoding of a value to `buf`.
    ///
    /// On error `buf` is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`encode`].
    pub fn encode_to(&self, value: &Value, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
        match value {
            Value::Bool(v) => buf.extend_from_slice(&bool_bytes(*v)),
            Value::I8(v) => buf.extend_from_slice(&i8_bytes(*v)),
            Value::I16(v) => buf.extend_from_slice(&i16_bytes(*v)),
            Value::I32(v) => buf.extend_from_slice(&i32_bytes(*v)),
            Value::I64(v) => buf.extend_from_slice(&i64_bytes(*v)),
            Value::U8(v) => buf.extend_from_slice(&u8_bytes(*v)),
            Value::U16(v) => buf.extend_from_slice(&u16_bytes(*v)),
            Value::U32(v) => buf.extend_from_slice(&u32_bytes(*v)),
            Value::U64(v) => buf.extend_from_slice(&u64_bytes(*v)),
            Value::F32(v) => buf.extend_from_slice(&f32_bytes(*v)),
            Value::F64(v) => buf.extend_from_slice(&f64_bytes(*v)),
            Value::String(s) => {
                if s.is_empty() && self.config.empty_text_sentinel {
                    buf.push(EMPTY_TEXT_SENTINEL);
                } else {
                    buf.extend_from_slice(s.as_bytes());
                }
            }
            Value::Bytes(b) => buf.extend_from_slice(b),
            Value::Instant(t) => {
                let bytes = instant_bytes(t).inspect_err(|err| {
                    trace!(instant = %t, error = %err, "instant encoding failed");
                })?;
                buf.extend_from_slice(&bytes);
            }
            Value::Null | Value::List(_) | Value::Map(_) => {
                trace!(type_name = value.type_name(), "rejecting unsupported type");
                return Err(EncodeError::unsupported(value.type_name()));
            }
            Value::Custom(inner) => buf.extend_from_slice(&encode_custom(inner.as_ref())?),
        }
        Ok(())
    }

    /// Compute the encoded size of a value.
    ///
    /// Returns `None` for custom values, whose size is only known after
    /// encoding, and for unsupported values.
    #[must_use]
    pub fn encoded_size(&self, value: &Value) -> Option<usize> {
        match value {
            Value::Bool(_) | Value::I8(_) | Value::U8(_) => Some(1),
            Value::I16(_) | Value::U16(_) => Some(2),
            Value::I32(_) | Value::U32(_) | Value::F32(_) => Some(4),
            Value::I64(_) | Value::U64(_) | Value::F64(_) => Some(8),
            Value::String(s) if s.is_empty() && self.config.empty_text_sentinel => Some(1),
            Value::String(s) => Some(s.len()),
            Value::Bytes(b) => Some(b.len()),
            Value::Instant(_) => Some(INSTANT_WIDTH),
            Value::Null | Value::List(_) | Value::Map(_) | Value::Custom(_) => None,
        }
    }
}

/// Run a custom encoding, relaying its bytes and errors unchanged.
fn encode_custom(inner: &(dyn EncodeSortable + Send + Sync)) -> Result<Vec<u8>, EncodeError> {
    inner.encode_sortable().inspect_err(|err| {
        trace!(type_name = inner.type_name(), error = %err, "custom encoding failed");
    })
}
