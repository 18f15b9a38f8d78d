use crate::consts::{I64_MIN_MAGNITUDE, NUL};
use crate::digits::digit_count;
use crate::error::FormatError;

/// Two-character decimal text for every value in `0..100`, at index `2 * n`.
pub const DIGIT_PAIRS: &[u8; 200] = b"00010203040506070809101112131415161718192021222324252627282930313233343536373839404142434445464748495051525354555657585960616263646566676869707172737475767778798081828384858687888990919293949596979899";

/// Format a `u64` as canonical decimal into `out`, followed by a NUL byte.
///
/// Returns the number of digits written (the terminator is not counted).
/// Fails without touching `out` unless it is strictly longer than the digit
/// count, since one byte is reserved for the terminator.
pub fn format_u64(value: u64, out: &mut [u8]) -> Result<usize, FormatError> {
    let len = digit_count(value) as usize;
    if len >= out.len() {
        return Err(FormatError::buffer_too_small(len + 1));
    }
    out[len] = NUL;
    write_digits(value, &mut out[..len]);
    Ok(len)
}

/// Format an `i64` as canonical decimal into `out`, followed by a NUL byte.
///
/// Negative values get a leading `-` and the return value counts it. The fit
/// is checked before anything is written, so a failed call leaves `out`
/// exactly as it was.
pub fn format_i64(value: i64, out: &mut [u8]) -> Result<usize, FormatError> {
    if value >= 0 {
        return format_u64(value as u64, out);
    }

    let magnitude = unsigned_magnitude(value);
    let Some((sign, rest)) = out.split_first_mut() else {
        return Err(FormatError::buffer_too_small(digit_count(magnitude) as usize + 2));
    };
    let len = format_u64(magnitude, rest)
        .map_err(|e| FormatError::buffer_too_small(e.required + 1))?;
    *sign = b'-';
    Ok(len + 1)
}

/// Absolute value of a negative `i64` as a `u64`.
///
/// `i64::MIN` has no positive `i64` counterpart, so it maps straight to 2^63
/// instead of going through signed negation.
const fn unsigned_magnitude(value: i64) -> u64 {
    if value == i64::MIN {
        I64_MIN_MAGNITUDE
    } else {
        (-value) as u64
    }
}

/// Fill `digits` with the decimal text of `value`, two digits per division.
/// `digits.len()` must equal `digit_count(value)`.
fn write_digits(mut value: u64, digits: &mut [u8]) {
    let mut pos = digits.len();
    while value >= 100 {
        let i = (value % 100) as usize * 2;
        value /= 100;
        digits[pos - 2..pos].copy_from_slice(&DIGIT_PAIRS[i..i + 2]);
        pos -= 2;
    }

    if value < 10 {
        digits[pos - 1] = b'0' + value as u8;
    } else {
        let i = value as usize * 2;
        digits[pos - 2..pos].copy_from_slice(&DIGIT_PAIRS[i..i + 2]);
    }
}
