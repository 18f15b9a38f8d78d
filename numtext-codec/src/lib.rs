#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "std")]
extern crate std;

pub mod buf;
pub mod consts;
pub mod digits;
pub mod error;
pub mod fmt;
pub mod parse;

#[cfg(feature = "std")]
pub mod env;

pub use buf::DecimalBuf;
pub use digits::digit_count;
pub use error::{FormatError, FormatErrorKind, ParseError, ParseErrorKind};
pub use fmt::{format_i64, format_u64};
pub use parse::{parse_i64, parse_i64_str, parse_u32_digits};

#[cfg(feature = "std")]
pub use env::env_u32_or;
