//! C ABI bridge for numtext-codec.
//!
//! Exposes the formatter, parser and environment lookup through `extern "C"`
//! with the classic sentinel conventions: formatters return the byte count or
//! 0 when the destination is too small, the parser returns 0 or a negative
//! error code.

use std::slice;
use std::str;

use numtext_codec::{ParseError, ParseErrorKind};

// ---------------------------------------------------------------------------
// Error codes (negative = error, 0 = success)
// ---------------------------------------------------------------------------

pub const NUMTEXT_OK: i32 = 0;
pub const NUMTEXT_ERR_EMPTY: i32 = -1;
pub const NUMTEXT_ERR_TOO_LONG: i32 = -2;
pub const NUMTEXT_ERR_INVALID_DIGIT: i32 = -3;
pub const NUMTEXT_ERR_LEADING_ZERO: i32 = -4;
pub const NUMTEXT_ERR_STRAY_SIGN: i32 = -5;
pub const NUMTEXT_ERR_OVERFLOW: i32 = -6;
pub const NUMTEXT_ERR_NULL_POINTER: i32 = -7;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn parse_error_to_code(e: &ParseError) -> i32 {
    match e.kind {
        ParseErrorKind::Empty => NUMTEXT_ERR_EMPTY,
        ParseErrorKind::TooLong => NUMTEXT_ERR_TOO_LONG,
        ParseErrorKind::InvalidDigit => NUMTEXT_ERR_INVALID_DIGIT,
        ParseErrorKind::LeadingZero => NUMTEXT_ERR_LEADING_ZERO,
        ParseErrorKind::StraySign => NUMTEXT_ERR_STRAY_SIGN,
        ParseErrorKind::Overflow => NUMTEXT_ERR_OVERFLOW,
    }
}

/// Borrow `len` bytes at `ptr`, treating a null pointer as an empty slice.
///
/// # Safety
/// - A non-null `ptr` must be valid for reads of `len` bytes.
unsafe fn bytes_from_raw<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if ptr.is_null() || len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, len) }
    }
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// Number of decimal digits in `value` (1..=20).
#[unsafe(no_mangle)]
pub extern "C" fn numtext_digit_count(value: u64) -> u32 {
    numtext_codec::digit_count(value)
}

/// Format an unsigned 64-bit integer followed by a NUL terminator.
///
/// # Safety
/// - `buf` must be null or valid for writes of `capacity` bytes.
///
/// Returns the digit count (terminator excluded), or 0 if `buf` is null or
/// `capacity` is not strictly greater than the digit count.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numtext_format_u64(buf: *mut u8, capacity: usize, value: u64) -> usize {
    if buf.is_null() {
        return 0;
    }
    let out = unsafe { slice::from_raw_parts_mut(buf, capacity) };
    numtext_codec::format_u64(value, out).unwrap_or(0)
}

/// Format a signed 64-bit integer followed by a NUL terminator.
///
/// # Safety
/// - `buf` must be null or valid for writes of `capacity` bytes.
///
/// Returns the byte count including any `-` (terminator excluded), or 0 on
/// failure. A failed call leaves `buf` unmodified.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numtext_format_i64(buf: *mut u8, capacity: usize, value: i64) -> usize {
    if buf.is_null() {
        return 0;
    }
    let out = unsafe { slice::from_raw_parts_mut(buf, capacity) };
    numtext_codec::format_i64(value, out).unwrap_or(0)
}

/// Strictly parse `len` bytes of decimal text into a signed 64-bit integer.
///
/// # Safety
/// - `input` must be null or valid for reads of `len` bytes.
/// - `out` must be null or point to a writeable `int64_t`. When null, the
///   input is only validated.
///
/// Returns 0 on success, negative error code on failure. `*out` is written
/// only on success.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numtext_parse_i64(input: *const u8, len: usize, out: *mut i64) -> i32 {
    if input.is_null() && len != 0 {
        return NUMTEXT_ERR_NULL_POINTER;
    }
    let bytes = unsafe { bytes_from_raw(input, len) };
    match numtext_codec::parse_i64(bytes) {
        Ok(value) => {
            if !out.is_null() {
                unsafe { *out = value };
            }
            NUMTEXT_OK
        }
        Err(e) => parse_error_to_code(&e),
    }
}

/// Look up an environment variable as an unsigned 32-bit integer.
///
/// # Safety
/// - `name` must be null or valid for reads of `name_len` bytes.
///
/// Returns `fallback` when the name is null or not UTF-8, the variable is
/// unset, or its value is not a plain decimal `u32`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numtext_env_u32_or(name: *const u8, name_len: usize, fallback: u32) -> u32 {
    let bytes = unsafe { bytes_from_raw(name, name_len) };
    match str::from_utf8(bytes) {
        Ok(name) if !name.is_empty() => numtext_codec::env_u32_or(name, fallback),
        _ => fallback,
    }
}
