use crate::error::Error;
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, as written in the input
    Number(String),
    /// A binary operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Token {
    /// Get the token for an operator or parenthesis character, if `c` is one
    pub fn from_symbol(c: char) -> Option<Self> {
        let token = match c {
            '(' => Self::LParen,
            ')' => Self::RParen,
            c => Self::Op(Op::from_symbol(c)?),
        };
        Some(token)
    }

    /// Get the character of an operator or parenthesis token. Numbers have
    /// none.
    pub fn symbol(&self) -> Option<char> {
        match *self {
            Self::Number(_) => None,
            Self::Op(op) => Some(op.symbol()),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(ref text) => write!(fmt, "{}", text),
            Self::Op(op) => write!(fmt, "{}", op.symbol()),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

/// Allowed binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `^`
    Exp,
}

impl Op {
    /// Get the operator written as `c`
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Rem),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// Get the character used to write the operator
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Exp => '^',
        }
    }

    /// Compute `left <op> right`.
    ///
    /// `%` is the truncated remainder, with the sign of `left`. Division by
    /// zero is an error, every other case follows IEEE 754.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, Error> {
        let value = match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                left / right
            }
            Self::Rem => libm::fmod(left, right),
            Self::Exp => libm::pow(left, right),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Op, Token};
    use crate::error::Error;
    use test_case::test_case;

    #[test_case(Op::Plus, 2.0, 3.0 => Ok(5.0) ; "addition")]
    #[test_case(Op::Minus, 2.0, 3.0 => Ok(-1.0) ; "subtraction")]
    #[test_case(Op::Mul, 2.5, 4.0 => Ok(10.0) ; "multiplication")]
    #[test_case(Op::Div, 10.0, 4.0 => Ok(2.5) ; "division")]
    #[test_case(Op::Div, 1.0, 0.0 => Err(Error::DivisionByZero) ; "division by zero")]
    #[test_case(Op::Div, 1.0, -0.0 => Err(Error::DivisionByZero) ; "division by negative zero")]
    #[test_case(Op::Rem, 7.0, 2.0 => Ok(1.0) ; "remainder")]
    #[test_case(Op::Rem, -7.0, 2.0 => Ok(-1.0) ; "remainder follows the dividend sign")]
    #[test_case(Op::Rem, 7.5, -2.0 => Ok(1.5) ; "remainder ignores the divisor sign")]
    #[test_case(Op::Exp, 2.0, 10.0 => Ok(1024.0) ; "power")]
    #[test_case(Op::Exp, 4.0, 0.5 => Ok(2.0) ; "fractional power")]
    #[test_case(Op::Exp, 2.0, -2.0 => Ok(0.25) ; "negative power")]
    fn apply(op: Op, left: f64, right: f64) -> Result<f64, Error> {
        op.apply(left, right)
    }

    #[test]
    fn remainder_by_zero_is_nan() {
        assert!(Op::Rem.apply(3.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn symbols() {
        for c in "+-*/%^()".chars() {
            let token = Token::from_symbol(c).unwrap();
            assert_eq!(token.symbol(), Some(c));
            assert_eq!(token.to_string(), c.to_string());
        }

        for c in &['a', '.', '3', ' ', '='] {
            assert_eq!(Token::from_symbol(*c), None);
        }

        assert_eq!(Token::Number("4.5".into()).symbol(), None);
        assert_eq!(Token::Number("4.5".into()).to_string(), "4.5");
    }
}
