/// Parse a run of ASCII digits into a `u32`.
///
/// Leading zeros are accepted. Returns `None` for empty input, any
/// non-digit byte (signs and whitespace included), or a value above
/// `u32::MAX`.
#[must_use]
pub fn parse_u32_digits(s: &[u8]) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    let mut result: u32 = 0;
    for &b in s {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    Some(result)
}
