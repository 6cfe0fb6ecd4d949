#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Evaluator, a crate for evaluating arithmetic expressions written as text.
//!
//! The easiest way to use this crate is with the
//! [`evaluate`](fn.evaluate.html) function:
//!
//! ```
//! assert_eq!(evaluator::evaluate("3 + 5 * 2"), Ok(13.0));
//! ```
//!
//! It is also possible to separate the conversion from the evaluation of an
//! expression with the [`Postfix`](struct.Postfix.html) type, which also
//! gives access to the intermediate postfix form.
//!
//! ```
//! use evaluator::Postfix;
//!
//! let postfix = Postfix::from_infix("(2 + 3) * 4 ^ 2").unwrap();
//! assert_eq!(postfix.to_string(), "2 3 + 4 2 ^ *");
//! assert_eq!(postfix.eval(), Ok(80.0));
//! ```
//!
//! # Language definition
//!
//! The expressions can contain the following elements:
//!
//! - float literal values: `12`, `0.0045`, `.5`, `3.`. There is no exponent
//!   notation, no sign and no digit grouping, and `.` is always the decimal
//!   separator;
//! - left and right parenthesis;
//! - binary operators: `+` for addition, `-` for subtraction, `*` for
//!   multiplication, `/` for division, `%` for the remainder and `^` for
//!   exponentiation;
//! - whitespace, which is ignored except that it ends a number.
//!
//! Any other symbol is forbidden in the input.
//!
//! `^` binds tighter than `*`, `/` and `%`, which bind tighter than `+` and
//! `-`. `^` is right associative (`2^3^2` is `2^9`), all the other operators
//! are left associative (`10-2-3` is `5`).
//!
//! Division by zero is an error. The remainder keeps the sign of the dividend,
//! and every other operation follows the IEEE 754 rules, so `NaN` and
//! infinities can be produced.
//!
//! # Technical details
//!
//! The infix input is converted to postfix notation with the Shunting-Yard
//! algorithm, using separate priorities for incoming and stacked operators,
//! and the postfix form is then reduced with a value stack.

#[macro_use]
extern crate lazy_static;

mod error;
mod lexer;
mod postfix;
mod token;
mod util;

pub use error::Error;
pub use postfix::{evaluate, Postfix};
pub use token::{Op, Token};
