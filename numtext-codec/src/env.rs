//! Environment lookups with silent fallback.

use std::env;

use crate::parse::parse_u32_digits;

/// Read `name` from the process environment as a `u32`, or return `fallback`.
///
/// The variable must be set, valid Unicode, and consist solely of ASCII
/// digits whose value fits a `u32`. Anything else yields `fallback`; the
/// caller is never told why, though a `debug` event is emitted.
#[must_use]
pub fn env_u32_or(name: &str, fallback: u32) -> u32 {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return fallback,
        Err(env::VarError::NotUnicode(_)) => {
            tracing::debug!(name, fallback, "environment variable is not unicode; using fallback");
            return fallback;
        }
    };

    match parse_u32_digits(raw.as_bytes()) {
        Some(value) => value,
        None => {
            tracing::debug!(name, fallback, value = %raw, "environment variable is not a u32; using fallback");
            fallback
        }
    }
}
