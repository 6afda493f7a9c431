#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input contained no tokens at all.
    EmptyExpression,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Column of the unmatched opening parenthesis.
        column: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source column where the error occurred.
        column: usize,
    },
    /// Parentheses were nested too deeply.
    NestingTooDeep {
        /// The source column where the limit was exceeded.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: No expression supplied."),

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression. Check your input: {token}"),

            Self::LiteralTooLarge { column } => {
                write!(f, "Error at column {column}: Literal is too large.")
            },

            Self::NestingTooDeep { column } => {
                write!(f, "Error at column {column}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
