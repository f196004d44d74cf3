use std::fmt;
use std::str::FromStr;

use log::debug;
use nom::IResult;
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of, satisfy},
    combinator::{map, map_res, opt, recognize, value},
    sequence::pair,
};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    #[strum(to_string = "^")]
    Pow,
}

/// A single lexical unit of an infix expression.
///
/// Number tokens keep the literal they were scanned from so that postfix
/// output reproduces the spelling of the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number { value: f64, literal: String },
    Variable(char),
    Operator(Operator),
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { literal, .. } => f.write_str(literal),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Operator(op) => f.write_str(op.as_ref()),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

fn parse_number(i: &str) -> IResult<&str, Token> {
    let decimal = recognize(pair(digit1, opt(pair(char('.'), digit0))));

    map_res(decimal, |literal: &str| {
        literal.parse::<f64>().map(|value| Token::Number {
            value,
            literal: literal.to_string(),
        })
    })(i)
}

fn parse_variable(i: &str) -> IResult<&str, Token> {
    map(satisfy(|c| c.is_ascii_alphabetic()), Token::Variable)(i)
}

fn parse_operator(i: &str) -> IResult<&str, Token> {
    map(
        map_res(recognize(one_of("+-*/^")), Operator::from_str),
        Token::Operator,
    )(i)
}

fn parse_token(i: &str) -> IResult<&str, Token> {
    alt((
        parse_number,
        parse_variable,
        parse_operator,
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
    ))(i)
}

/// Splits `expression` into tokens in source order.
///
/// Spaces are removed before scanning. Any character that cannot start a token
/// is skipped without error.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let stripped = expression.replace(' ', "");
    let mut tokens = Vec::new();
    let mut rest = stripped.as_str();

    while !rest.is_empty() {
        match parse_token(rest) {
            Ok((remaining, token)) => {
                tokens.push(token);
                rest = remaining;
            }
            Err(_) => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    debug!("Dropping unrecognized character {:?}", c);
                }
                rest = chars.as_str();
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_number() -> Result<(), Box<dyn std::error::Error>> {
        let (r1, v1) = parse_number("442")?;
        let (r2, v2) = parse_number("442.78+1")?;
        let (r3, v3) = parse_number("3.")?;

        assert_eq!(r1, "");
        assert_eq!(r2, "+1");
        assert_eq!(r3, "");
        assert_eq!(
            v1,
            Token::Number {
                value: 442.0,
                literal: "442".to_string()
            }
        );
        assert_eq!(
            v2,
            Token::Number {
                value: 442.78,
                literal: "442.78".to_string()
            }
        );
        assert_eq!(
            v3,
            Token::Number {
                value: 3.0,
                literal: "3.".to_string()
            }
        );
        assert!(parse_number(".5").is_err());
        Ok(())
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("3 + 4.5*(x - 2)^y");

        assert_eq!(
            literals(&tokens),
            vec!["3", "+", "4.5", "*", "(", "x", "-", "2", ")", "^", "y"]
        );
        assert_eq!(tokens[1], Token::Operator(Operator::Add));
        assert_eq!(tokens[4], Token::LParen);
        assert_eq!(tokens[5], Token::Variable('x'));
        assert_eq!(tokens[8], Token::RParen);
        assert_eq!(tokens[9], Token::Operator(Operator::Pow));
    }

    #[test]
    fn test_tokenize_drops_unrecognized() {
        assert_eq!(literals(&tokenize("2 # + 3")), vec!["2", "+", "3"]);
        assert_eq!(literals(&tokenize("@1\t+é2")), vec!["1", "+", "2"]);
        assert_eq!(literals(&tokenize(".5")), vec!["5"]);
    }

    #[test]
    fn test_tokenize_single_letter_variables() {
        assert_eq!(
            tokenize("ab"),
            vec![Token::Variable('a'), Token::Variable('b')]
        );
    }

    #[test]
    fn test_tokenize_ignores_spaces_between_digits() {
        assert_eq!(literals(&tokenize("1 2 . 5")), vec!["12.5"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_operator_symbols() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Operator::from_str("^")?, Operator::Pow);
        assert_eq!(Operator::Div.to_string(), "/");
        assert!(Operator::from_str("%").is_err());
        Ok(())
    }
}
