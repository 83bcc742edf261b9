//! IEEE-754 float transform.
//!
//! Raw float bit patterns already compare correctly within one sign: larger
//! positive magnitudes have larger patterns. Two things are wrong under
//! unsigned comparison. Negative patterns grow with magnitude, i.e. they sort
//! in reverse, and they all have the sign bit set so they sort after every
//! positive value.
//!
//! The transform fixes both at once:
//! - negative values (sign bit set): flip every bit
//! - non-negative values (sign bit clear): flip only the sign bit
//!
//! Branch-free this is `bits ^ ((bits as signed >> (W - 1)) as unsigned | SIGN)`.
//! The arithmetic shift smears the sign bit into an all-ones or all-zeros mask.
//!
//! No value is special-cased. The resulting byte order is exactly IEEE-754
//! `totalOrder` (the order of [`f64::total_cmp`]): `-0.0` sorts directly
//! before `+0.0`, NaNs with the sign bit clear sort after `+inf`, and NaNs
//! with the sign bit set sort before `-inf`.

const SIGN_MASK_32: u32 = 0x8000_0000;
const SIGN_MASK_64: u64 = 0x8000_0000_0000_0000;

/// Encode an `f32` as 4 byte-sortable bytes.
#[inline]
#[must_use]
pub fn f32_bytes(v: f32) -> [u8; 4] {
    let bits = v.to_bits();
    let mask = (((bits as i32) >> 31) as u32) | SIGN_MASK_32;
    (bits ^ mask).to_be_bytes()
}

/// Encode an `f64` as 8 byte-sortable bytes.
#[inline]
#[must_use]
pub fn f64_bytes(v: f64) -> [u8; 8] {
    let bits = v.to_bits();
    let mask = (((bits as i64) >> 63) as u64) | SIGN_MASK_64;
    (bits ^ mask).to_be_bytes()
}
