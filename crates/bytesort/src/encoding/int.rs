//! Integer and boolean transforms.
//!
//! Unsigned integers are written big-endian as-is: big-endian unsigned bytes
//! already compare the same way the numbers do.
//!
//! Signed integers use a "sign-flip" encoding. In two's complement every
//! negative value has its sign bit set, so under unsigned comparison the
//! negatives sort after the positives. Flipping the most significant bit
//! swaps the two halves of the range:
//!
//! ```text
//! i16::MIN  0x8000 -> 0x0000
//! -1        0xFFFF -> 0x7FFF
//! 0         0x0000 -> 0x8000
//! i16::MAX  0x7FFF -> 0xFFFF
//! ```
//!
//! Platform-sized integers (`isize`, `usize`) always use the 64-bit encoding
//! so keys written on one architecture compare correctly on another.

/// Encode a boolean: `false` as `0x00`, `true` as `0x01`.
#[inline]
#[must_use]
pub const fn bool_bytes(v: bool) -> [u8; 1] {
    [v as u8]
}

/// Encode an `i8` with its sign bit flipped.
#[inline]
#[must_use]
pub const fn i8_bytes(v: i8) -> [u8; 1] {
    [(v as u8) ^ 0x80]
}

/// Encode an `i16` big-endian with its sign bit flipped.
#[inline]
#[must_use]
pub const fn i16_bytes(v: i16) -> [u8; 2] {
    ((v as u16) ^ 0x8000).to_be_bytes()
}

/// Encode an `i32` big-endian with its sign bit flipped.
#[inline]
#[must_use]
pub const fn i32_bytes(v: i32) -> [u8; 4] {
    ((v as u32) ^ 0x8000_0000).to_be_bytes()
}

/// Encode an `i64` big-endian with its sign bit flipped.
#[inline]
#[must_use]
pub const fn i64_bytes(v: i64) -> [u8; 8] {
    ((v as u64) ^ 0x8000_0000_0000_0000).to_be_bytes()
}

/// Encode an `isize` as a 64-bit signed integer.
#[inline]
#[must_use]
pub const fn isize_bytes(v: isize) -> [u8; 8] {
    i64_bytes(v as i64)
}

#[inline]
#[must_use]
pub const fn u8_bytes(v: u8) -> [u8; 1] {
    [v]
}

#[inline]
#[must_use]
pub const fn u16_bytes(v: u16) -> [u8; 2] {
    v.to_be_bytes()
}

#[inline]
#[must_use]
pub const fn u32_bytes(v: u32) -> [u8; 4] {
    v.to_be_bytes()
}

#[inline]
#[must_use]
pub const fn u64_bytes(v: u64) -> [u8; 8] {
    v.to_be_bytes()
}

/// Encode a `usize` as a 64-bit unsigned integer.
#[inline]
#[must_use]
pub const fn usize_bytes(v: usize) -> [u8; 8] {
    u64_bytes(v as u64)
}
