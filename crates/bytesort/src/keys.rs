//! Composite key building.
//!
//! Composite keys concatenate the sortable encodings of several fields. The
//! result sorts field by field only when no field can bleed into the next:
//! every field except the last must be fixed-width or delimited.
//!
//! ```text
//! [tenant: u32][created: instant][name: delimited][id: u64]
//! ```
//!
//! Variable-width fields that are not last go through [`KeyBuilder::delimited`],
//! which uses null-escape encoding:
//! - each `0x00` in the data is written as `0x00 0x01`
//! - the field ends with `0x00 0x00`
//!
//! This keeps `"a" < "aa" < "ab" < "b"` and lets a field that is a prefix of
//! another sort first.
//!
//! # Example
//!
//! ```
//! use bytesort::keys::{prefix_end, KeyBuilder};
//!
//! let key = KeyBuilder::new()
//!     .field(&7u32)?
//!     .delimited(b"alice")
//!     .field(&-1i64)?
//!     .finish();
//!
//! let prefix = KeyBuilder::new().field(&7u32)?.finish();
//! let end = prefix_end(&prefix).unwrap();
//! assert!(prefix.as_slice() <= key.as_slice() && key < end);
//! # Ok::<(), bytesort::EncodeError>(())
//! ```

use crate::encoding::EncodeSortable;
use crate::error::EncodeError;

/// Escape byte: a `0x00` in delimited data is written as `0x00 0x01`.
const ESCAPE_BYTE: u8 = 0x01;
/// Terminator: a delimited field ends with `0x00 0x00`.
const TERMINATOR: u8 = 0x00;

/// Builds a composite key field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBuilder {
    buf: Vec<u8>,
}

impl KeyBuilder {
    /// Create an empty key builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an empty key builder with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    /// Append the sortable encoding of `value`.
    ///
    /// Use this for fixed-width fields, or for a variable-width field that is
    /// the last one in the key.
    ///
    /// # Errors
    ///
    /// Returns the error of `value`'s encoding. The builder is consumed.
    pub fn field<T: EncodeSortable + ?Sized>(mut self, value: &T) -> Result<Self, EncodeError> {
        let bytes = value.encode_sortable()?;
        self.buf.extend_from_slice(&bytes);
        Ok(self)
    }

    /// Append a variable-width field with null-escape delimiting.
    #[must_use]
    pub fn delimited(mut self, data: &[u8]) -> Self {
        self.buf.reserve(data.len() + 2);
        for &byte in data {
            if byte == 0x00 {
                self.buf.push(0x00);
                self.buf.push(ESCAPE_BYTE);
            } else {
                self.buf.push(byte);
            }
        }
        self.buf.push(TERMINATOR);
        self.buf.push(TERMINATOR);
        self
    }

    /// Length of the key built so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no field has been appended.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Return the finished key.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Compute the exclusive upper bound for a prefix scan.
///
/// Returns the smallest key that is greater than every key starting with
/// `prefix`, or `None` if there is no such key (the prefix is empty or all
/// `0xFF`), in which case the scan is unbounded above.
#[must_use]
pub fn prefix_end(prefix: &[u8]) -> Option<Vec<u8>> {
    let last = prefix.iter().rposition(|&b| b != 0xFF)?;
    let mut end = prefix[..=last].to_vec();
    end[last] += 1;
    Some(end)
}

/// Sort encoded keys by unsigned lexicographic byte order.
///
/// This is the order an ordered key-value store iterates them in.
pub fn sort_encoded(keys: &mut [Vec<u8>]) {
    keys.sort_unstable();
}
