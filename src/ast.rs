use crate::interpreter::value::Number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The grammar has two constructs: integer literals and left-associative
/// operator chains. A chain holds every operand of one precedence level in
/// reading order, so `6-3-2` is one chain with two operations rather than a
/// nested pair. Nodes only nest where parentheses or a change of precedence
/// demand it, which keeps the depth of the tree bounded by parenthesis
/// nesting however long a chain grows.
///
/// Parenthesized groups leave no node of their own; they only shape the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value:  Number,
        /// Offset of the literal in the source text.
        offset: usize,
    },
    /// Operators of one precedence level applied from left to right.
    Chain {
        /// Leftmost operand.
        first: Box<Self>,
        /// The operations applied to the running result, in order.
        rest:  Vec<Operation>,
    },
}

/// One step of a chain: an operator and its right operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The operator.
    pub op:      BinaryOperator,
    /// Right operand.
    pub operand: Expr,
    /// Offset of the operator in the source text.
    pub offset:  usize,
}

impl Expr {
    /// Builds a chain from its leftmost operand and the operations after it.
    ///
    /// A chain without operations is just its operand, so no node ever wraps
    /// a single value.
    ///
    /// ## Example
    /// ```
    /// use reckon::{ast::Expr, interpreter::value::Number};
    ///
    /// let seven = Expr::Literal { value:  Number::Integer(7),
    ///                             offset: 0, };
    ///
    /// assert_eq!(Expr::chain(seven.clone(), Vec::new()), seven);
    /// ```
    #[must_use]
    pub fn chain(first: Self, rest: Vec<Operation>) -> Self {
        if rest.is_empty() {
            first
        } else {
            Self::Chain { first: Box::new(first),
                          rest }
        }
    }
}

/// Renders the expression fully parenthesized, which makes grouping visible:
/// `6-3-2` renders as `((6 - 3) - 2)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Chain { first, rest } => {
                for _ in rest {
                    f.write_str("(")?;
                }
                write!(f, "{first}")?;
                for Operation { op, operand, .. } in rest {
                    write!(f, " {op} {operand})")?;
                }
                Ok(())
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}
