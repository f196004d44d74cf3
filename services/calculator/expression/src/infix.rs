use crate::error::ExpressionError;
use crate::token::Token;

fn pop(stack: &mut Vec<String>, token: &Token) -> Result<String, ExpressionError> {
    stack.pop().ok_or_else(|| {
        ExpressionError::MalformedExpression(format!("missing operand for \"{}\"", token))
    })
}

/// Rebuilds a fully parenthesized infix string directly from postfix tokens.
///
/// A postfix sequence holding a single operator renders without outer
/// parentheses, so `3 4 +` becomes `3 + 4` while `3 4 2 * +` becomes
/// `(3 + (4 * 2))`.
pub fn render(postfix: &[Token]) -> Result<String, ExpressionError> {
    let mut stack: Vec<String> = Vec::new();
    let single_operator = postfix
        .iter()
        .filter(|t| matches!(t, Token::Operator(_)))
        .count()
        == 1;

    for token in postfix {
        match token {
            Token::Number { .. } | Token::Variable(_) => stack.push(token.to_string()),
            Token::Operator(op) => {
                let right = pop(&mut stack, token)?;
                let left = pop(&mut stack, token)?;
                let infix = if single_operator && stack.is_empty() {
                    format!("{} {} {}", left, op, right)
                } else {
                    format!("({} {} {})", left, op, right)
                };
                stack.push(infix);
            }
            Token::LParen | Token::RParen => {
                return Err(ExpressionError::MalformedExpression(
                    "unexpected parenthesis in postfix sequence".to_string(),
                ))
            }
        }
    }

    match stack.len() {
        0 => Ok(String::new()),
        1 => Ok(stack.remove(0)),
        n => Err(ExpressionError::MalformedExpression(format!(
            "{} operands left without an operator",
            n
        ))),
    }
}
