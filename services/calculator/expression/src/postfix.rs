use crate::token::{Operator, Token};

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }
}

/// Precedence class of a token; operands and parentheses are 0
pub fn precedence(token: &Token) -> u8 {
    match token {
        Token::Operator(op) => op.precedence(),
        _ => 0,
    }
}

/// Reorders infix tokens into postfix using the shunting-yard algorithm.
///
/// Every operator is treated as left-associative, `^` included, so an operator
/// on the stack is emitted before any incoming operator of equal or lower
/// precedence. A `)` without a partner flushes the stack, while a `(` that is
/// never closed is emitted as-is and rejected by whatever consumes the output.
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number { .. } | Token::Variable(_) => output.push(token),
            Token::LParen => operators.push(token),
            Token::RParen => {
                while let Some(top) = operators.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Operator(op) => {
                while let Some(top) = operators.last() {
                    if precedence(top) == 0 || precedence(top) < op.precedence() {
                        break;
                    }
                    if let Some(top) = operators.pop() {
                        output.push(top);
                    }
                }
                operators.push(token);
            }
        }
    }

    while let Some(top) = operators.pop() {
        output.push(top);
    }

    output
}
