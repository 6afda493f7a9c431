/// Binary expression parsing.
///
/// Implements one function per precedence tier: additive, multiplicative and
/// exponent expressions. Each tier collects its operators into one flat,
/// left-to-right chain.
pub mod binary;
/// Core parser entry points.
///
/// Defines the result alias, the nesting limit and the functions that turn a
/// token stream into a complete expression tree.
pub mod core;
/// Operand and primary expression parsing.
///
/// Handles signed operands, integer literals and parenthesised groups.
pub mod unary;
