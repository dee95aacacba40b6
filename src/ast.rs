use std::fmt;

/// A unary prefix operator. Negation is the only one the language has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
}

/// A binary infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative.
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree node for one expression.
///
/// Identifiers never survive parsing as bare names: each one is classified
/// against the live symbol tables when it is consumed and becomes a
/// [`Expr::Constant`], [`Expr::Variable`] or [`Expr::PreviousAnswer`]. Every
/// node keeps the offset of the token that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Offset in the source.
        position: usize,
    },
    /// A built-in constant, already resolved to its value.
    Constant {
        /// The constant's name.
        name:     String,
        /// The constant's value.
        value:    f64,
        /// Offset in the source.
        position: usize,
    },
    /// A user variable, read from the variable table during evaluation.
    Variable {
        /// The variable's name.
        name:     String,
        /// Offset in the source.
        position: usize,
    },
    /// The `ans` placeholder for the previous result.
    PreviousAnswer {
        /// Offset in the source.
        position: usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Offset of the operator.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the operator.
        position: usize,
    },
    /// A call to a built-in function, e.g. `pow(2, 8)`.
    FunctionCall {
        /// Name of the function.
        name:      String,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
        /// Offset of the function name.
        position:  usize,
    },
}

/// One line of input: either a bare expression or a `let` assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression whose value is the result.
    Expression {
        /// The expression.
        expr: Expr,
    },
    /// `let <name> = <value>`; evaluates `value`, stores it and returns it.
    Assignment {
        /// The validated variable name.
        name:  String,
        /// The right-hand side.
        value: Expr,
    },
}
