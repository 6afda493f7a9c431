/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST bottom-up and applies the operator table to
/// each node. It is the fast path used when no trace is requested.
///
/// # Responsibilities
/// - Evaluates literals, groups, negation and binary operations.
/// - Reports runtime errors such as division by zero, negative exponents and
///   overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression and produces a stream of tokens, each
/// paired with the column it starts at.
///
/// # Responsibilities
/// - Converts the input character stream into integer literals, operators
///   and parentheses.
/// - Reports lexical errors for unknown characters or oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per
/// precedence tier.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Enforces precedence and left-to-right grouping.
/// - Rejects malformed input with column information.
pub mod parser;
/// Step-wise reduction of an expression tree.
///
/// Rewrites an expression one sub-expression at a time, innermost
/// parentheses first and then by precedence tier, so that every
/// intermediate state can be shown to the user.
pub mod reduction;
