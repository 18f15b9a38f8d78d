use core::fmt;

/// Specific kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty.
    Empty,
    /// Input is at least as long as the longest possible `i64` text plus terminator.
    TooLong,
    /// A byte that is not an ASCII digit where a digit was required.
    InvalidDigit,
    /// A `0` followed by more text (only the lone `"0"` may start with zero).
    LeadingZero,
    /// A `-` with no digits after it.
    StraySign,
    /// Magnitude does not fit the target integer range.
    Overflow,
}

/// Error returned by parsing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte position in the input where the error was detected.
    pub position: usize,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// `true` for every grammar violation (everything except [`ParseErrorKind::Overflow`]).
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        !self.is_overflow()
    }

    #[must_use]
    pub fn is_overflow(&self) -> bool {
        self.kind == ParseErrorKind::Overflow
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            ParseErrorKind::Empty => "empty input",
            ParseErrorKind::TooLong => "input too long",
            ParseErrorKind::InvalidDigit => "invalid digit",
            ParseErrorKind::LeadingZero => "leading zero",
            ParseErrorKind::StraySign => "sign without digits",
            ParseErrorKind::Overflow => "integer overflow",
        };
        write!(f, "{} at byte {}", desc, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Specific kind of format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Output buffer cannot hold the digits plus the NUL terminator.
    BufferTooSmall,
}

/// Error returned by formatting functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    pub kind: FormatErrorKind,
    /// Bytes the output would have needed, terminator included.
    pub required: usize,
}

impl FormatError {
    #[must_use]
    pub fn buffer_too_small(required: usize) -> Self {
        Self {
            kind: FormatErrorKind::BufferTooSmall,
            required,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FormatErrorKind::BufferTooSmall => {
                write!(f, "output buffer too small ({} bytes required)", self.required)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}
