use crate::error::Error;
use crate::postfix::Postfix;
use crate::token::Token;
use crate::util::{infix_priority, stack_priority};
use std::iter::Peekable;
use std::str::Chars;

/// An helper struct for lexing the input and reordering it in postfix
/// notation
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &'a str) -> Lexer<'a> {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Run the shunting-yard algorithm over the whole input
    pub fn parse(&mut self) -> Result<Postfix, Error> {
        let mut output = Vec::new();
        let mut operators: Vec<Token> = Vec::new();

        while let Some(token) = self.next_token()? {
            match token {
                Token::Number(_) => output.push(token),
                Token::LParen => operators.push(token),
                Token::RParen => {
                    // a `)` without matching `(` only drains the stack
                    while let Some(token) = operators.pop() {
                        if token == Token::LParen {
                            break;
                        }
                        output.push(token);
                    }
                }
                Token::Op(o1) => {
                    let priority = infix_priority(o1.symbol())?;
                    'operators: while let Some(&Token::Op(o2)) = operators.last() {
                        if priority <= stack_priority(o2.symbol())? {
                            operators.pop();
                            output.push(Token::Op(o2));
                        } else {
                            break 'operators;
                        }
                    }
                    operators.push(token);
                }
            }
        }

        while let Some(token) = operators.pop() {
            match token {
                Token::LParen => return Err(Error::UnbalancedParenthesis),
                other => output.push(other),
            }
        }
        Ok(Postfix::new(output))
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(c) = self.input.next() {
            if c.is_whitespace() {
                continue;
            }

            if is_number_part(c) {
                let mut number = String::new();
                number.push(c);
                'number: while let Some(&c) = self.input.peek() {
                    if is_number_part(c) {
                        self.input.next();
                        number.push(c);
                    } else {
                        break 'number;
                    }
                }
                return Ok(Some(Token::Number(number)));
            }

            return Token::from_symbol(c)
                .map(Some)
                .ok_or(Error::InvalidCharacter(c));
        }
        Ok(None)
    }
}

/// Check if `c` can appear inside a numeric literal
fn is_number_part(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Op;
    use test_case::test_case;

    #[test_case("2 + 3" => Ok("2 3 +".to_string()) ; "addition")]
    #[test_case("2+3*4" => Ok("2 3 4 * +".to_string()) ; "precedence")]
    #[test_case("(2+3)*4" => Ok("2 3 + 4 *".to_string()) ; "grouping")]
    #[test_case("2^3^2" => Ok("2 3 2 ^ ^".to_string()) ; "power is right associative")]
    #[test_case("10-2-3" => Ok("10 2 - 3 -".to_string()) ; "subtraction is left associative")]
    #[test_case("8/4%3*2" => Ok("8 4 / 3 % 2 *".to_string()) ; "products are left associative")]
    #[test_case("2*3^2" => Ok("2 3 2 ^ *".to_string()) ; "power binds tighter than products")]
    #[test_case("((1+2)*(3-4))^2" => Ok("1 2 + 3 4 - * 2 ^".to_string()) ; "nested groups")]
    #[test_case(" 7.5 \t+\n 2.25 " => Ok("7.5 2.25 +".to_string()) ; "whitespace is ignored")]
    #[test_case("12 34" => Ok("12 34".to_string()) ; "whitespace splits numbers")]
    #[test_case("1.2.3+4" => Ok("1.2.3 4 +".to_string()) ; "numbers are not validated")]
    #[test_case("2+3)*4" => Ok("2 3 + 4 *".to_string()) ; "stray closing parenthesis")]
    #[test_case("" => Ok(String::new()) ; "empty input")]
    #[test_case("2+" => Ok("2 +".to_string()) ; "missing operand")]
    #[test_case("2+a" => Err(Error::InvalidCharacter('a')) ; "letter")]
    #[test_case("2×3" => Err(Error::InvalidCharacter('×')) ; "unicode operator")]
    #[test_case("(2+3" => Err(Error::UnbalancedParenthesis) ; "unclosed parenthesis")]
    fn parse(infix: &str) -> Result<String, Error> {
        Lexer::new(infix).parse().map(|postfix| postfix.to_string())
    }

    #[test]
    fn tokens() {
        let postfix = Lexer::new("3.5 % (1 - 0.25)").parse().unwrap();
        assert_eq!(
            postfix.tokens(),
            &[
                Token::Number("3.5".into()),
                Token::Number("1".into()),
                Token::Number("0.25".into()),
                Token::Op(Op::Minus),
                Token::Op(Op::Rem),
            ]
        );
    }

    #[test]
    fn numbers() {
        for c in "0123456789.".chars() {
            assert!(is_number_part(c));
        }

        for c in &['a', 'e', '+', '-', ',', '٣', ' '] {
            assert!(!is_number_part(*c));
        }
    }
}
