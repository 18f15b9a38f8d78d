use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use numtext_codec::consts::I64_BUF_LEN;
use numtext_codec::{FormatError, FormatErrorKind, ParseError, ParseErrorKind};

fn parse_error_to_py(e: ParseError) -> PyErr {
    let kind = match e.kind {
        ParseErrorKind::Empty => "empty",
        ParseErrorKind::TooLong => "too_long",
        ParseErrorKind::InvalidDigit => "invalid_digit",
        ParseErrorKind::LeadingZero => "leading_zero",
        ParseErrorKind::StraySign => "stray_sign",
        ParseErrorKind::Overflow => "overflow",
    };
    PyValueError::new_err(format!("{}:{}", kind, e.position))
}

fn format_error_to_py(e: FormatError) -> PyErr {
    let kind = match e.kind {
        FormatErrorKind::BufferTooSmall => "buffer_too_small",
    };
    PyValueError::new_err(format!("{}:{}", kind, e.required))
}

#[pyfunction]
fn digit_count(value: u64) -> u32 {
    numtext_codec::digit_count(value)
}

/// Format into a scratch buffer of `capacity` bytes and return the digits
/// without the terminator. `capacity` mirrors the C contract so callers can
/// probe the too-small path.
#[pyfunction]
#[pyo3(signature = (value, capacity = I64_BUF_LEN))]
fn format_u64(py: Python<'_>, value: u64, capacity: usize) -> PyResult<Py<PyBytes>> {
    let mut buf = [0u8; I64_BUF_LEN];
    let cap = capacity.min(buf.len());
    let n = numtext_codec::format_u64(value, &mut buf[..cap]).map_err(format_error_to_py)?;
    Ok(PyBytes::new(py, &buf[..n]).into())
}

#[pyfunction]
#[pyo3(signature = (value, capacity = I64_BUF_LEN))]
fn format_i64(py: Python<'_>, value: i64, capacity: usize) -> PyResult<Py<PyBytes>> {
    let mut buf = [0u8; I64_BUF_LEN];
    let cap = capacity.min(buf.len());
    let n = numtext_codec::format_i64(value, &mut buf[..cap]).map_err(format_error_to_py)?;
    Ok(PyBytes::new(py, &buf[..n]).into())
}

#[pyfunction]
fn parse_i64(data: &[u8]) -> PyResult<i64> {
    numtext_codec::parse_i64(data).map_err(parse_error_to_py)
}

#[pyfunction]
fn env_u32_or(name: &str, fallback: u32) -> u32 {
    numtext_codec::env_u32_or(name, fallback)
}

#[pymodule]
fn _numtext_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(digit_count, m)?)?;
    m.add_function(wrap_pyfunction!(format_u64, m)?)?;
    m.add_function(wrap_pyfunction!(format_i64, m)?)?;
    m.add_function(wrap_pyfunction!(parse_i64, m)?)?;
    m.add_function(wrap_pyfunction!(env_u32_or, m)?)?;
    Ok(())
}
