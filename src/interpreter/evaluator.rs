/// Binary operator evaluation logic.
///
/// Holds the operator table: how each of `+ - * / % ^` combines two
/// integers, with every overflow and domain error checked.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the recursive tree walk and the evaluator result type.
pub mod core;
