use crate::error::ExpressionError;
use crate::token::{Operator, Token};

/// A binary expression tree node. Leaves are operands, every operation owns
/// exactly two subtrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable(char),
    Operation(Operator, Box<Node>, Box<Node>),
}

fn pop(stack: &mut Vec<Node>, operator: Operator) -> Result<Node, ExpressionError> {
    stack.pop().ok_or_else(|| {
        ExpressionError::MalformedExpression(format!("missing operand for \"{}\"", operator))
    })
}

/// Builds an expression tree from postfix tokens, returning `None` for an
/// empty sequence.
pub fn build(postfix: &[Token]) -> Result<Option<Node>, ExpressionError> {
    let mut stack = Vec::new();

    for token in postfix {
        let node = match token {
            Token::Number { value, .. } => Node::Number(*value),
            Token::Variable(name) => Node::Variable(*name),
            Token::Operator(op) => {
                let right = pop(&mut stack, *op)?;
                let left = pop(&mut stack, *op)?;
                Node::Operation(*op, Box::new(left), Box::new(right))
            }
            Token::LParen | Token::RParen => {
                return Err(ExpressionError::MalformedExpression(
                    "unexpected parenthesis in postfix sequence".to_string(),
                ))
            }
        };
        stack.push(node);
    }

    let root = stack.pop();
    if !stack.is_empty() {
        return Err(ExpressionError::MalformedExpression(format!(
            "{} operands left without an operator",
            stack.len() + 1
        )));
    }
    Ok(root)
}
