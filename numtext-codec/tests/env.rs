#![cfg(feature = "std")]
//! Environment lookup tests. Each test owns a distinct variable name so the
//! tests can run in parallel.

use numtext_codec::env::env_u32_or;

fn with_var(name: &str, value: &str, f: impl FnOnce()) {
    // SAFETY: every test in this file uses its own variable name.
    unsafe { std::env::set_var(name, value) };
    f();
    unsafe { std::env::remove_var(name) };
}

#[test]
fn unset_variable_falls_back() {
    assert_eq!(env_u32_or("UNSET_TEST_VAR_XYZ", 42), 42);
}

#[test]
fn valid_value_is_used() {
    with_var("NUMTEXT_TEST_ENV_VALID", "8080", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_VALID", 1), 8080);
    });
}

#[test]
fn zero_is_a_valid_value() {
    with_var("NUMTEXT_TEST_ENV_ZERO", "0", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_ZERO", 7), 0);
    });
}

#[test]
fn leading_zeros_are_accepted() {
    with_var("NUMTEXT_TEST_ENV_LEADING", "007", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_LEADING", 1), 7);
    });
}

#[test]
fn u32_max_is_accepted() {
    with_var("NUMTEXT_TEST_ENV_MAX", "4294967295", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_MAX", 1), u32::MAX);
    });
}

#[test]
fn out_of_range_falls_back() {
    with_var("NUMTEXT_TEST_ENV_RANGE", "4294967296", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_RANGE", 5), 5);
    });
}

#[test]
fn empty_value_falls_back() {
    with_var("NUMTEXT_TEST_ENV_EMPTY", "", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_EMPTY", 3), 3);
    });
}

#[test]
fn trailing_text_falls_back() {
    with_var("NUMTEXT_TEST_ENV_TRAILING", "12ms", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_TRAILING", 9), 9);
    });
}

#[test]
fn negative_value_falls_back() {
    with_var("NUMTEXT_TEST_ENV_NEGATIVE", "-1", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_NEGATIVE", 11), 11);
    });
}

#[test]
fn surrounding_whitespace_falls_back() {
    with_var("NUMTEXT_TEST_ENV_SPACE", " 12", || {
        assert_eq!(env_u32_or("NUMTEXT_TEST_ENV_SPACE", 13), 13);
    });
}
