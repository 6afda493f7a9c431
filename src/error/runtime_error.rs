use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// Column of the offending operator.
        column: usize,
    },
    /// `^` was applied with a negative exponent.
    InvalidExponent {
        /// The exponent that was supplied.
        exponent: i64,
        /// Column of the offending operator.
        column:   usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// Column of the offending operator.
        column: usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InvalidExponent { .. } => ErrorKind::InvalidExponent,
            Self::Overflow { .. } => ErrorKind::NumericOverflow,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::InvalidExponent { exponent, column } => write!(f,
                                                                 "Error at column {column}: Exponent {exponent} is negative; integer powers need a non-negative exponent."),
            Self::Overflow { column } => write!(f,
                                                "Error at column {column}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
