use thiserror::Error;

use crate::symbols::Operator;

/// Errors raised while tokenizing, translating, or evaluating an
/// expression.
///
/// Every failure is detected synchronously and is local to the one
/// expression string being processed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Unbalanced `(`/`)` found while translating to postfix.
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// An operator was applied with too few values on the operand stack,
    /// e.g. a trailing operator.
    #[error("Not enough operands for operator: {0}")]
    MissingOperands(Operator),

    /// A variable token had no value in the assignment.
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// The input contained a character that is not part of a variable, an
    /// operator spelling, a parenthesis, or whitespace.
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(String),

    /// The operand stack did not hold exactly one value after the full
    /// postfix sequence was consumed, e.g. two variables with no operator
    /// between them.
    #[error("Malformed expression: does not reduce to a single value")]
    Malformed,

    #[error("Empty expression")]
    EmptyExpression,

    #[error("No variables found in expression")]
    NoVariables,
}
