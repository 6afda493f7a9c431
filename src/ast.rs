/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is built by the parser and consumed both by the evaluator, which
/// walks it bottom-up, and by the reduction engine, which rewrites it one
/// step at a time. Every variant records the 1-based source column of its
/// leading token so that errors can point back into the input.
///
/// Operators of one precedence tier that follow each other are kept flat in
/// a single [`Expr::Chain`], so the depth of the tree grows with the nesting
/// of parentheses and not with the length of the expression.
///
/// Rendering an `Expr` with `Display` produces the compact textual state of
/// the expression, for example `2*(4-5)` or `2*-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value:  i64,
        /// Column in the source text.
        column: usize,
    },
    /// An explicitly parenthesised sub-expression.
    Group {
        /// The expression between the parentheses.
        expr:   Box<Self>,
        /// Column of the opening parenthesis.
        column: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column in the source text.
        column: usize,
    },
    /// A run of binary operations from one precedence tier, grouped left to
    /// right: `head op1 x1 op2 x2 ...` is `((head op1 x1) op2 x2) ...`.
    ///
    /// A chain always has at least one link.
    Chain {
        /// The leftmost operand.
        head:  Box<Self>,
        /// The operators and right operands, in source order.
        links: Vec<Link>,
    },
}

/// One operator of an [`Expr::Chain`] together with its right operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The operator.
    pub op:      BinaryOperator,
    /// The operand to the right of the operator.
    pub operand: Expr,
    /// Column of the operator symbol.
    pub column:  usize,
}

impl Expr {
    /// Returns the source column of this node.
    ///
    /// A chain starts where its head starts.
    #[must_use]
    pub fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. } | Self::Group { column, .. } | Self::UnaryOp { column, .. } => {
                *column
            },
            Self::Chain { head, .. } => head.column(),
        }
    }

    /// Returns the value of this node if it is a bare integer literal.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:  7,
    ///                            column: 1, };
    /// assert_eq!(expr.as_literal(), Some(7));
    /// ```
    #[must_use]
    pub const fn as_literal(&self) -> Option<i64> {
        match self {
            Self::Literal { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Counts the operators and parenthesis pairs in the tree.
    ///
    /// Each reduction step removes at least one of them, so this is an upper
    /// bound on the number of steps needed to reach a literal.
    #[must_use]
    pub fn weight(&self) -> usize {
        match self {
            Self::Literal { .. } => 0,
            Self::Group { expr, .. } | Self::UnaryOp { expr, .. } => 1 + expr.weight(),
            Self::Chain { head, links } => {
                links.iter()
                     .fold(head.weight(), |acc, link| acc + 1 + link.operand.weight())
            },
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Group { expr, .. } => write!(f, "({expr})"),
            Self::UnaryOp { op, expr, .. } => match expr.as_literal() {
                Some(value) if value < 0 => write!(f, "{op}({value})"),
                _ => write!(f, "{op}{expr}"),
            },
            Self::Chain { head, links } => {
                // `-2^2` would read as `-(2^2)` after an operator.
                let is_power = links.first().is_some_and(|link| link.op == BinaryOperator::Pow);
                match head.as_literal() {
                    Some(value) if value < 0 && is_power => write!(f, "({value})")?,
                    _ => write!(f, "{head}")?,
                }
                links.iter()
                     .try_for_each(|link| write!(f, "{}{}", link.op, link.operand))
            },
        }
    }
}

/// Represents a binary operator.
///
/// The operator table is the set of `const` methods on this type: each
/// variant knows its symbol, its precedence tier and how to combine two
/// integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Truncating remainder (`%`)
    Mod,
    /// Integer power (`^`)
    Pow,
}

/// Operators grouped by precedence, highest first.
///
/// Parentheses bind tighter than every tier. Operators inside one tier group
/// from left to right.
pub const PRECEDENCE_TIERS: [&[BinaryOperator]; 3] =
    [&[BinaryOperator::Pow],
     &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
     &[BinaryOperator::Add, BinaryOperator::Sub]];

impl BinaryOperator {
    /// Returns the symbol used for this operator in source text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }

    /// Looks an operator up by its symbol.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('%'), Some(BinaryOperator::Mod));
    /// assert_eq!(BinaryOperator::from_symbol('&'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the index of this operator's tier in [`PRECEDENCE_TIERS`].
    ///
    /// Lower numbers bind tighter.
    #[must_use]
    pub const fn tier(self) -> usize {
        match self {
            Self::Pow => 0,
            Self::Mul | Self::Div | Self::Mod => 1,
            Self::Add | Self::Sub => 2,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
