use crate::error::Error;
use crate::lexer::Lexer;
use crate::token::Token;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::{debug, trace};

/// Evaluate a single infix expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// converting or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use evaluator::{evaluate, Error};
///
/// assert_eq!(evaluate("45 - 2^3"), Ok(37.0));
/// assert_eq!(evaluate("5 / (3 - 3)"), Err(Error::DivisionByZero));
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    let postfix = Postfix::from_infix(input)?;
    debug!(%postfix, "converted {:?} to postfix", input);
    let result = postfix.eval()?;
    debug!(result, "evaluated {:?}", input);
    Ok(result)
}

/// An expression in postfix (reverse polish) notation.
///
/// The `Display` implementation writes the tokens separated by a single
/// space, and `FromStr` reads them back.
///
/// # Examples
/// ```
/// # use evaluator::Postfix;
/// let postfix = Postfix::from_infix("(2 + 3) * 4").unwrap();
/// assert_eq!(postfix.to_string(), "2 3 + 4 *");
/// assert_eq!(postfix.eval(), Ok(20.0));
///
/// let postfix: Postfix = "2 3 2 ^ ^".parse().unwrap();
/// assert_eq!(postfix.eval(), Ok(512.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Convert the given infix `expression` to postfix notation.
    ///
    /// # Examples
    /// ```
    /// # use evaluator::{Error, Postfix};
    /// // A valid expression
    /// assert!(Postfix::from_infix("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert_eq!(Postfix::from_infix("3e5 + 2"), Err(Error::InvalidCharacter('e')));
    /// ```
    pub fn from_infix(expression: &str) -> Result<Self, Error> {
        Lexer::new(expression).parse()
    }

    /// Get the tokens, in evaluation order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Reduce the expression to a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evaluator::{Error, Postfix};
    /// let postfix = Postfix::from_infix("7.5 + 2.25").unwrap();
    /// assert_eq!(postfix.eval(), Ok(9.75));
    ///
    /// let postfix = Postfix::from_infix("2 +").unwrap();
    /// assert_eq!(postfix.eval(), Err(Error::InsufficientOperands));
    /// ```
    pub fn eval(&self) -> Result<f64, Error> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.tokens.len());

        for token in &self.tokens {
            match *token {
                Token::Number(ref text) => {
                    let value = text
                        .parse()
                        .map_err(|_| Error::InvalidNumberFormat(text.clone()))?;
                    stack.push(value);
                }
                _ => {
                    let (right, left) = match (stack.pop(), stack.pop()) {
                        (Some(right), Some(left)) => (right, left),
                        _ => return Err(Error::InsufficientOperands),
                    };
                    let value = match *token {
                        Token::Op(op) => op.apply(left, right)?,
                        // parentheses never reach here from an infix
                        // conversion, only from parsed postfix text
                        _ => {
                            let symbol = token.symbol().unwrap_or_default();
                            return Err(Error::InvalidOperator(symbol));
                        }
                    };
                    trace!(left, right, value, "applied {}", token);
                    stack.push(value);
                }
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(result), true) => Ok(result),
            _ => Err(Error::MalformedResult),
        }
    }
}

impl Display for Postfix {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(fmt, " ")?;
            }
            write!(fmt, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = Error;

    /// Read whitespace separated postfix text. Any single operator or
    /// parenthesis character is an operator token, everything else is a
    /// number token, checked only during evaluation.
    fn from_str(postfix: &str) -> Result<Self, Self::Err> {
        let tokens = postfix
            .split_whitespace()
            .map(|fragment| {
                let mut chars = fragment.chars();
                match (chars.next().and_then(Token::from_symbol), chars.next()) {
                    (Some(token), None) => token,
                    _ => Token::Number(fragment.to_owned()),
                }
            })
            .collect();
        Ok(Self::new(tokens))
    }
}
