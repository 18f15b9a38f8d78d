use crate::consts::{I64_BUF_LEN, I64_MIN_MAGNITUDE};
use crate::error::{ParseError, ParseErrorKind};

/// Strictly parse decimal text into an `i64`.
///
/// The whole input must be either `"0"` or an optional `-` followed by a
/// non-zero digit and any number of further digits. No whitespace, no `+`,
/// no leading zeros, no `"-0"`. Accepted text is exactly what
/// [`format_i64`](crate::fmt::format_i64) produces, so a successful parse
/// always formats back to the same bytes.
pub fn parse_i64(input: &[u8]) -> Result<i64, ParseError> {
    if input.is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, 0));
    }
    if input.len() >= I64_BUF_LEN {
        return Err(ParseError::new(ParseErrorKind::TooLong, I64_BUF_LEN - 1));
    }
    if input == b"0" {
        return Ok(0);
    }

    let (negative, digits, start) = match input.split_first() {
        Some((b'-', rest)) => (true, rest, 1),
        _ => (false, input, 0),
    };

    let Some((&first, rest)) = digits.split_first() else {
        return Err(ParseError::new(ParseErrorKind::StraySign, 0));
    };
    match first {
        b'1'..=b'9' => {}
        b'0' => return Err(ParseError::new(ParseErrorKind::LeadingZero, start)),
        _ => return Err(ParseError::new(ParseErrorKind::InvalidDigit, start)),
    }

    let mut magnitude = u64::from(first - b'0');
    for (i, &b) in rest.iter().enumerate() {
        let pos = start + 1 + i;
        if !b.is_ascii_digit() {
            return Err(ParseError::new(ParseErrorKind::InvalidDigit, pos));
        }
        let digit = u64::from(b - b'0');

        if magnitude > u64::MAX / 10 {
            return Err(ParseError::new(ParseErrorKind::Overflow, pos));
        }
        magnitude *= 10;

        if magnitude > u64::MAX - digit {
            return Err(ParseError::new(ParseErrorKind::Overflow, pos));
        }
        magnitude += digit;
    }

    if negative {
        if magnitude > I64_MIN_MAGNITUDE {
            return Err(ParseError::new(ParseErrorKind::Overflow, start));
        }
        // 2^63 reinterprets as i64::MIN, which negates to itself.
        Ok((magnitude as i64).wrapping_neg())
    } else {
        if magnitude > i64::MAX as u64 {
            return Err(ParseError::new(ParseErrorKind::Overflow, start));
        }
        Ok(magnitude as i64)
    }
}

/// [`parse_i64`] over the bytes of a string slice.
pub fn parse_i64_str(input: &str) -> Result<i64, ParseError> {
    parse_i64(input.as_bytes())
}
