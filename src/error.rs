/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an
/// expression. Every parse error means the input is not a well-formed
/// arithmetic expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a value:
/// division by zero, negative exponents and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category of an evaluation failure.
///
/// Callers that only need to know *why* an evaluation failed, not where,
/// can match on this instead of the detailed error enums.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a well-formed expression.
    MalformedExpression,
    /// The right operand of `/` or `%` was zero.
    DivisionByZero,
    /// `^` was given a negative exponent.
    InvalidExponent,
    /// A result left the signed 64-bit range.
    NumericOverflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::MalformedExpression => "malformed expression",
            Self::DivisionByZero => "division by zero",
            Self::InvalidExponent => "invalid exponent",
            Self::NumericOverflow => "numeric overflow",
        };
        write!(f, "{kind}")
    }
}

#[derive(Debug)]
/// Any error produced by evaluating an expression.
pub enum Error {
    /// The expression could not be parsed.
    Parse(ParseError),
    /// The expression parsed but could not be computed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::MalformedExpression,
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
