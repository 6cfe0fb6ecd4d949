use thiserror::Error;

/// Error type for the evaluator crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A character in the input is not a digit, a decimal point, an operator,
    /// a parenthesis or whitespace
    #[error("invalid character: '{0}'")]
    InvalidCharacter(char),
    /// A character was used as a binary operator, but is not one
    #[error("invalid operator: '{0}'")]
    InvalidOperator(char),
    /// An operator was reached with less than two values on the stack
    #[error("invalid expression: insufficient operands")]
    InsufficientOperands,
    /// A value token could not be read as a floating point number
    #[error("invalid number format: '{0}'")]
    InvalidNumberFormat(String),
    /// The right hand side of a division is zero
    #[error("division by zero")]
    DivisionByZero,
    /// The evaluation did not end with exactly one value
    #[error("invalid expression")]
    MalformedResult,
    /// An opening parenthesis was never closed
    #[error("invalid expression: unbalanced parenthesis")]
    UnbalancedParenthesis,
}
