//! Decimal and millisecond encodings
//!
//! Both encodings pin down a rounding rule because it shows up in the exact
//! output strings:
//!
//! - milliseconds round half toward positive infinity (`2.5 -> 3`,
//!   `-2.5 -> -2`);
//! - fixed-point decimals round the exact binary value of the float and send
//!   exact decimal ties away from zero (`0.125 -> "0.13"`);
//! - neither encoding ever prints a negative zero.

use geopin_core::GeoPoint;

/// Degrees to milliseconds of arc
pub const MILLISECONDS_PER_DEGREE: f64 = 3_600_000.0;

/// Encode a point as integer milliseconds of arc: `"{lat_ms}, {lng_ms}"`
pub fn to_milliseconds(point: GeoPoint) -> String {
    format!(
        "{}, {}",
        milliseconds(point.latitude),
        milliseconds(point.longitude)
    )
}

/// Format a point as fixed-precision decimal degrees: `"{lat}, {lng}"`
pub fn to_decimal_string(point: GeoPoint, precision: usize) -> String {
    format!(
        "{}, {}",
        to_fixed(point.latitude, precision),
        to_fixed(point.longitude, precision)
    )
}

/// Largest magnitude below which an `f64` can carry a fraction
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

fn milliseconds(degrees: f64) -> String {
    let scaled = degrees * MILLISECONDS_PER_DEGREE;
    // Non-finite and already-integral values print as they are
    if scaled.is_nan() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return scaled.to_string();
    }
    (round_half_up(scaled) as i64).to_string()
}

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for |value| < 2^52, and larger values are already integral
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format `value` with exactly `digits` decimal places.
///
/// Exact decimal ties round away from zero. A result that rounds to zero
/// prints without a sign, so the output always parses back to a value that
/// formats identically. Non-finite values print as `NaN`, `inf` and `-inf`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = match tie_away_from_zero(value, digits) {
        Some(rounded) => rounded,
        None => format!("{:.*}", digits, value),
    };

    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => {
            unsigned.to_string()
        }
        _ => text,
    }
}

/// Rounded text for `value` when `value * 10^digits` sits exactly halfway
/// between two integers, `None` otherwise.
///
/// `std` rounds such ties to even; this picks the larger magnitude instead.
fn tie_away_from_zero(value: f64, digits: usize) -> Option<String> {
    let (mantissa, exponent) = decompose(value.abs());
    if mantissa == 0 {
        return None;
    }

    // An odd mantissa times 2^exponent has exactly -exponent fraction digits,
    // the last one a 5. It is a tie at `digits` only if there is one more.
    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent.checked_add(i32::try_from(digits).ok()?)? != -1 {
        return None;
    }

    // The exact expansion, then drop the trailing 5 and round up
    let mut text = format!("{:.*}", digits + 1, value.abs()).into_bytes();
    text.pop();
    if text.last() == Some(&b'.') {
        text.pop();
    }
    increment_decimal(&mut text);

    let text = String::from_utf8(text).ok()?;
    if value.is_sign_negative() {
        Some(format!("-{}", text))
    } else {
        Some(text)
    }
}

/// Add one unit in the last place to an unsigned decimal string
fn increment_decimal(text: &mut Vec<u8>) {
    for byte in text.iter_mut().rev() {
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                return;
            }
        }
    }
    text.insert(0, b'1');
}

/// Split a finite non-negative float into `mantissa * 2^exponent`
fn decompose(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    }
}
