//! Instant transform.
//!
//! Instants are encoded in three steps:
//!
//! 1. Normalize to UTC, so the same physical instant encodes identically no
//!    matter which zone it was expressed in.
//! 2. Serialize to the canonical binary instant layout (version 1):
//!
//! ```text
//! [version: u8 = 1][seconds since 0001-01-01T00:00:00Z: i64 BE][nanos: i32 BE][offset minutes: i16 BE]
//! ```
//!
//! 3. Strip the version byte and the two offset bytes. The version is constant
//!    and the offset is signed and unrelated to the time value, so only the
//!    12 bytes of seconds and nanoseconds remain.
//!
//! Seconds are counted from the start of year 1, so every representable
//! instant from then on has a non-negative seconds field and big-endian bytes
//! that sort chronologically. Earlier instants are rejected.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::error::EncodeError;

/// Width of an encoded instant.
pub const INSTANT_WIDTH: usize = 12;

/// Version tag of the canonical binary layout.
const BINARY_VERSION: u8 = 1;
/// Length of the canonical binary layout.
const BINARY_LEN: usize = 15;
/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
const SECONDS_TO_UNIX_EPOCH: i64 = 62_135_596_800;
/// Offset field of a normalized instant.
const UTC_OFFSET_MINUTES: i16 = 0;

/// Serialize a UTC instant to the canonical binary layout.
///
/// The offset field is always 0.
///
/// # Errors
///
/// Returns [`EncodeError::Instant`] if the instant lies before year 1.
fn marshal_binary(t: &DateTime<Utc>) -> Result<[u8; BINARY_LEN], EncodeError> {
    let secs = t
        .timestamp()
        .checked_add(SECONDS_TO_UNIX_EPOCH)
        .filter(|secs| *secs >= 0)
        .ok_or_else(|| {
            EncodeError::Instant(format!("year {} is outside the encodable range", t.year()))
        })?;
    // Leap seconds are carried as nanos >= 1e9, still well within i32.
    let nanos = i32::try_from(t.timestamp_subsec_nanos())
        .map_err(|_| EncodeError::Instant("nanosecond field out of range".into()))?;

    let mut buf = [0u8; BINARY_LEN];
    buf[0] = BINARY_VERSION;
    buf[1..9].copy_from_slice(&secs.to_be_bytes());
    buf[9..13].copy_from_slice(&nanos.to_be_bytes());
    buf[13..15].copy_from_slice(&UTC_OFFSET_MINUTES.to_be_bytes());
    Ok(buf)
}

/// Encode an instant as 12 byte-sortable bytes.
///
/// # Errors
///
/// Returns [`EncodeError::Instant`] if the instant lies before
/// 0001-01-01T00:00:00Z.
///
/// # Example
///
/// ```
/// use bytesort::encoding::time::instant_bytes;
/// use chrono::{FixedOffset, TimeZone, Utc};
///
/// let utc = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let tokyo = utc.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());
///
/// assert_eq!(instant_bytes(&utc).unwrap(), instant_bytes(&tokyo).unwrap());
/// ```
pub fn instant_bytes<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<[u8; INSTANT_WIDTH], EncodeError> {
    let normalized = t.with_timezone(&Utc);
    let binary = marshal_binary(&normalized)?;

    let mut out = [0u8; INSTANT_WIDTH];
    out.copy_from_slice(&binary[1..BINARY_LEN - 2]);
    Ok(out)
}
