//! Golden-file tests for the encoded bytes of every category.
//!
//! Each fixture in `tests/fixtures/` holds one hex-encoded key per line, in
//! the order the values are listed here. The values are listed in ascending
//! order, so every fixture must also be sorted.
//!
//! Run with `BYTESORT_UPDATE_GOLDEN=1` to rewrite the fixtures after an
//! intentional format change.

use std::fs;
use std::path::PathBuf;

use bytesort::{encode, EncodeError, EncodeSortable, Value};
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

/// A caller type wrapping an `i64`.
struct Int64Type(i64);

impl EncodeSortable for Int64Type {
    fn encode_sortable(&self) -> Result<Vec<u8>, EncodeError> {
        self.0.encode_sortable()
    }
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(format!("{name}.golden"))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Encode `values`, check them against the golden file and check their order.
fn check_golden(name: &str, values: Vec<Value>) {
    let encoded: Vec<Vec<u8>> = values
        .iter()
        .map(|v| encode(v.clone()).unwrap_or_else(|e| panic!("{name}: {v:?}: {e}")))
        .collect();

    let actual: String = encoded.iter().map(|b| format!("{}\n", to_hex(b))).collect();
    let path = fixture_path(name);
    if std::env::var_os("BYTESORT_UPDATE_GOLDEN").is_some() {
        fs::write(&path, &actual).expect("failed to update golden file");
    } else {
        let expected = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        assert_eq!(actual, expected, "golden mismatch for {name}");
    }

    let mut sorted = encoded.clone();
    sorted.sort();
    assert_eq!(sorted, encoded, "{name}: encodings are not in ascending order");
}

/// Like [`check_golden`], and every encoding has the same width.
fn check_golden_fixed(name: &str, values: Vec<Value>) {
    let widths: Vec<usize> =
        values.iter().map(|v| encode(v.clone()).map_or(0, |b| b.len())).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{name}: widths differ: {widths:?}");
    check_golden(name, values);
}

fn values<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Vec<Value> {
    items.into_iter().map(Into::into).collect()
}

#[test]
fn golden_bool() {
    check_golden_fixed("bool", values([false, true]));
}

#[test]
fn golden_uint8() {
    check_golden_fixed("uint8", values([0u8, 2, 8, 32, 128, 255]));
}

#[test]
fn golden_uint16() {
    check_golden_fixed("uint16", values([0u16, 1, u16::MAX - 1, u16::MAX]));
}

#[test]
fn golden_uint32() {
    check_golden_fixed("uint32", values([0u32, 1, u32::MAX - 1, u32::MAX]));
}

#[test]
fn golden_uint64() {
    check_golden_fixed("uint64", values([0u64, 1, u64::MAX - 1, u64::MAX]));
}

// Native-width integers are widened to 64 bits, so the fixtures equal the
// 64-bit ones on every platform. The extremes below only exist on 64-bit hosts.
#[cfg(target_pointer_width = "64")]
#[test]
fn golden_int() {
    check_golden_fixed(
        "int",
        values([isize::MIN, isize::MIN + 1, -1, 0, 1, isize::MAX - 1, isize::MAX]),
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn golden_uint() {
    check_golden_fixed("uint", values([0usize, 1, usize::MAX - 1, usize::MAX]));
}

#[test]
fn golden_int8() {
    check_golden_fixed("int8", values([i8::MIN, i8::MIN + 1, -1, 0, 1, i8::MAX - 1, i8::MAX]));
}

#[test]
fn golden_int16() {
    check_golden_fixed(
        "int16",
        values([i16::MIN, i16::MIN + 1, -1, 0, 1, i16::MAX - 1, i16::MAX]),
    );
}

#[test]
fn golden_int32() {
    check_golden_fixed(
        "int32",
        values([i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX]),
    );
}

#[test]
fn golden_int64() {
    check_golden_fixed(
        "int64",
        values([i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX]),
    );
}

#[test]
fn golden_float32() {
    let min_subnormal = f32::from_bits(1);
    check_golden_fixed(
        "float32",
        values([-f32::MAX, -0.1, -min_subnormal, 0.0, min_subnormal, 0.1, f32::MAX]),
    );
}

#[test]
fn golden_float64() {
    let min_subnormal = f64::from_bits(1);
    check_golden_fixed(
        "float64",
        values([-f64::MAX, -0.1, -min_subnormal, 0.0, min_subnormal, 0.1, f64::MAX]),
    );
}

#[test]
fn golden_string() {
    check_golden(
        "string",
        values([
            "", "  ZOO", "  zoo", " Aaron", "!Aaron", "Aaron", "Abe", "Bert", "aaron", "bert",
            "bä", "bö",
        ]),
    );
}

#[test]
fn golden_instant() {
    let zone = FixedOffset::west_opt(4 * 3600).expect("valid offset");
    let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).single().expect("valid date");
    let utc_instants: Vec<DateTime<Utc>> = vec![
        epoch,
        epoch + Duration::nanoseconds(1),
        epoch + Duration::seconds(1),
        epoch + Duration::minutes(1),
        epoch + Duration::hours(1),
        epoch + Duration::days(1),
        Utc.with_ymd_and_hms(1970, 2, 1, 0, 0, 0).single().expect("valid date"),
        Utc.with_ymd_and_hms(1971, 1, 1, 0, 0, 0).single().expect("valid date"),
    ];

    // Every instant twice: once in UTC, once in UTC-4.
    let instants: Vec<Value> = utc_instants
        .into_iter()
        .flat_map(|t| [Value::from(t), Value::from(t.with_timezone(&zone))])
        .collect();
    check_golden_fixed("instant", instants);
}

#[test]
fn golden_struct_int64() {
    let wrapped = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX]
        .into_iter()
        .map(|v| Value::custom(Int64Type(v)))
        .collect();
    check_golden_fixed("struct_int64", wrapped);
}
