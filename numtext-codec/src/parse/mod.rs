pub mod signed;
pub mod unsigned;

pub use self::signed::{parse_i64, parse_i64_str};
pub use self::unsigned::parse_u32_digits;
