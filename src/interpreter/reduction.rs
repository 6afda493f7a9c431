use crate::{
    ast::{BinaryOperator, Expr, PRECEDENCE_TIERS},
    interpreter::evaluator::{
        binary::eval_binary,
        core::{EvalResult, eval},
        unary::eval_unary,
    },
};

/// One completed reduction step.
///
/// Describes which sub-expression was replaced by an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// A parenthesised group whose inside was already a literal was
    /// replaced by that literal.
    Group {
        /// The value of the group.
        value:  i64,
        /// Column of the opening parenthesis.
        column: usize,
    },
    /// Unary minus signs applied to literals were folded into the literals.
    Negation {
        /// The value of the outermost folded negation.
        value:  i64,
        /// Column of its minus sign.
        column: usize,
    },
    /// A binary operation on two literals was replaced by its result.
    Operation {
        /// Left operand.
        left:   i64,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  i64,
        /// The computed value.
        value:  i64,
        /// Column of the operator symbol.
        column: usize,
    },
}

/// Reduces an expression tree one step at a time.
///
/// Each step picks a single sub-expression and replaces it by its value:
///
/// 1. If the tree still contains parentheses, the leftmost innermost group
///    is worked on. A group whose inside is a literal collapses into that
///    literal; otherwise one operation inside it is reduced, and the group
///    collapses in the same step if that leaves a literal.
/// 2. Otherwise the precedence tiers are tried in order (`^`, then
///    `* / %`, then `+ -`) and the leftmost operation of the first tier
///    that has one is reduced.
///
/// Operators of one tier form a flat chain, so the reducer never recurses
/// deeper than the nesting of parentheses in the input.
///
/// Before an operation is picked, every unary minus applied to a literal is
/// folded into the literal; that folding counts as a step of its own when it
/// changes anything. Every step removes at least one operator or
/// parenthesis pair, so the number of steps is bounded by
/// [`Expr::weight`].
///
/// # Example
/// ```
/// use reckon::{interpreter::reduction::Reducer, parse};
///
/// let mut reducer = Reducer::new(parse("2*(4-5)").unwrap());
/// let mut states = vec![reducer.state().to_string()];
/// while reducer.step().unwrap().is_some() {
///     states.push(reducer.state().to_string());
/// }
/// assert_eq!(states, ["2*(4-5)", "2*-1", "-2"]);
/// assert_eq!(reducer.value().unwrap(), -2);
/// ```
#[derive(Debug, Clone)]
pub struct Reducer {
    expr: Expr,
}

impl Reducer {
    /// Creates a reducer positioned at the unreduced expression.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// Returns the current expression state.
    #[must_use]
    pub const fn state(&self) -> &Expr {
        &self.expr
    }

    /// Performs one reduction step.
    ///
    /// # Returns
    /// The step that was taken, or `None` once the state is a single
    /// literal.
    ///
    /// # Errors
    /// Returns the runtime error raised by the operation being reduced.
    pub fn step(&mut self) -> EvalResult<Option<Reduction>> {
        let reduction = match reduce_innermost_group(&mut self.expr)? {
            Some(reduction) => Some(reduction),
            None => reduce_operation(&mut self.expr)?,
        };

        if let Some(reduction) = &reduction {
            tracing::debug!(?reduction, state = %self.expr, "reduced");
        }
        Ok(reduction)
    }

    /// Runs the reduction to completion and returns the final value.
    ///
    /// # Errors
    /// Returns the first runtime error raised by a reduction step.
    pub fn value(mut self) -> EvalResult<i64> {
        while self.step()?.is_some() {}
        eval(&self.expr)
    }
}

/// Reduces inside the leftmost innermost parenthesised group, if any.
fn reduce_innermost_group(expr: &mut Expr) -> EvalResult<Option<Reduction>> {
    match expr {
        Expr::Literal { .. } => Ok(None),
        Expr::UnaryOp { expr: inner, .. } => reduce_innermost_group(inner),
        Expr::Chain { head, links } => {
            if let Some(reduction) = reduce_innermost_group(head)? {
                return Ok(Some(reduction));
            }
            for link in links {
                if let Some(reduction) = reduce_innermost_group(&mut link.operand)? {
                    return Ok(Some(reduction));
                }
            }
            Ok(None)
        },
        Expr::Group { expr: inner, column } => {
            if let Some(reduction) = reduce_innermost_group(inner)? {
                return Ok(Some(reduction));
            }

            let column = *column;
            let reduction = reduce_operation(inner)?;
            let Some(value) = inner.as_literal() else {
                return Ok(reduction);
            };

            *expr = Expr::Literal { value, column };
            Ok(Some(reduction.unwrap_or(Reduction::Group { value, column })))
        },
    }
}

/// Reduces one operation in a tree that contains no parentheses.
///
/// Negated literals are folded first; if there were none, the tiers are
/// tried from the tightest binding to the loosest.
fn reduce_operation(expr: &mut Expr) -> EvalResult<Option<Reduction>> {
    if let Some(reduction) = fold_negations(expr)? {
        return Ok(Some(reduction));
    }

    for tier in 0..PRECEDENCE_TIERS.len() {
        if let Some(reduction) = reduce_leftmost_at_tier(expr, tier)? {
            return Ok(Some(reduction));
        }
    }
    Ok(None)
}

/// Replaces every negation of a literal by the negated literal.
///
/// Returns the leftmost folding when more than one took place.
fn fold_negations(expr: &mut Expr) -> EvalResult<Option<Reduction>> {
    match expr {
        Expr::Literal { .. } | Expr::Group { .. } => Ok(None),
        Expr::Chain { head, links } => {
            let mut folded = fold_negations(head)?;
            for link in links {
                let next = fold_negations(&mut link.operand)?;
                folded = folded.or(next);
            }
            Ok(folded)
        },
        Expr::UnaryOp { op,
                        expr: inner,
                        column, } => {
            let (op, column) = (*op, *column);
            let folded = fold_negations(inner)?;
            let Some(operand) = inner.as_literal() else {
                return Ok(folded);
            };

            let value = eval_unary(op, operand, column)?;
            *expr = Expr::Literal { value, column };
            Ok(Some(Reduction::Negation { value, column }))
        },
    }
}

/// Reduces the leftmost operation of `tier` whose operands are literals.
///
/// In a chain only the first link can be reduced, since its operators group
/// from the left. The reduced link is merged into the head; a chain that
/// runs out of links becomes a literal.
fn reduce_leftmost_at_tier(expr: &mut Expr, tier: usize) -> EvalResult<Option<Reduction>> {
    let (head, links) = match expr {
        Expr::Chain { head, links } => (head, links),
        Expr::UnaryOp { expr: inner, .. } => return reduce_leftmost_at_tier(inner, tier),
        Expr::Literal { .. } | Expr::Group { .. } => return Ok(None),
    };

    if let Some(reduction) = reduce_leftmost_at_tier(head, tier)? {
        return Ok(Some(reduction));
    }

    if let Some(link) = links.first()
       && link.op.tier() == tier
       && let (Some(x), Some(y)) = (head.as_literal(), link.operand.as_literal())
    {
        let (op, column) = (link.op, link.column);
        let value = eval_binary(op, x, y, column)?;
        let start = head.column();
        links.remove(0);
        let reduction = Reduction::Operation { left: x,
                                               op,
                                               right: y,
                                               value,
                                               column };

        let literal = Expr::Literal { value,
                                      column: start };
        if links.is_empty() {
            *expr = literal;
        } else {
            **head = literal;
        }
        return Ok(Some(reduction));
    }

    for link in links {
        if let Some(reduction) = reduce_leftmost_at_tier(&mut link.operand, tier)? {
            return Ok(Some(reduction));
        }
    }
    Ok(None)
}
