/// Maximum number of decimal digits in a `u64` (`18446744073709551615`).
pub const MAX_U64_DIGITS: u32 = 20;

/// Maximum number of decimal digits in an `i64` magnitude (`9223372036854775808`).
pub const MAX_I64_DIGITS: u32 = 19;

/// Buffer size that always fits a formatted `u64` plus the NUL terminator.
pub const U64_BUF_LEN: usize = MAX_U64_DIGITS as usize + 1;

/// Buffer size that always fits a formatted `i64` (sign + 19 digits) plus the
/// NUL terminator. Inputs this long or longer are never valid `i64` text.
pub const I64_BUF_LEN: usize = MAX_I64_DIGITS as usize + 2;

/// Magnitude of `i64::MIN`, i.e. 2^63.
pub const I64_MIN_MAGNITUDE: u64 = i64::MAX as u64 + 1;

/// Terminator written after the digits by the formatters.
pub const NUL: u8 = 0;
