use core::str;

use crate::consts::I64_BUF_LEN;
use crate::fmt::{format_i64, format_u64};

/// A stack buffer large enough for any formatted `u64` or `i64`.
///
/// Each call overwrites the previous contents and hands back a view of the
/// digits (terminator excluded). No heap allocation.
#[derive(Clone, Copy)]
pub struct DecimalBuf {
    bytes: [u8; I64_BUF_LEN],
    len: usize,
}

impl DecimalBuf {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; I64_BUF_LEN],
            len: 0,
        }
    }

    pub fn format_u64(&mut self, value: u64) -> &str {
        // I64_BUF_LEN also covers the 20 digits of u64::MAX plus NUL.
        let n = match format_u64(value, &mut self.bytes) {
            Ok(n) => n,
            Err(_) => unreachable!("buffer sized for u64::MAX"),
        };
        self.finish(n)
    }

    pub fn format_i64(&mut self, value: i64) -> &str {
        let n = match format_i64(value, &mut self.bytes) {
            Ok(n) => n,
            Err(_) => unreachable!("buffer sized for i64::MIN"),
        };
        self.finish(n)
    }

    /// The written digits plus the NUL terminator, for C-string consumers.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    fn finish(&mut self, len: usize) -> &str {
        self.len = len;
        // SAFETY: the formatters only write ASCII digits and '-'.
        unsafe { str::from_utf8_unchecked(&self.bytes[..len]) }
    }
}

impl Default for DecimalBuf {
    fn default() -> Self {
        Self::new()
    }
}
