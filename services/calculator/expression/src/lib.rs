use log::debug;
use serde::{Deserialize, Serialize};

pub use error::ExpressionError;
pub use eval::{evaluate as evaluate_tree, Value};
pub use infix::render;
pub use postfix::{precedence, to_postfix};
pub use token::{tokenize, Operator, Token};
pub use tree::{build, Node};

mod error;
mod eval;
mod infix;
mod postfix;
mod token;
mod tree;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Conversion {
    pub expression: String,
    pub postfix: Vec<String>,
    pub infix: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Evaluation {
    pub expression: String,
    pub result: Value,
    pub postfix: Vec<String>,
    pub infix_from_postfix: String,
}

fn parse_postfix(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    if expression.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }
    let tokens = tokenize(expression);
    debug!("Tokenized {:?} into {} tokens", expression, tokens.len());
    Ok(to_postfix(tokens))
}

fn literals(postfix: &[Token]) -> Vec<String> {
    postfix.iter().map(ToString::to_string).collect()
}

/// Converts an infix expression to its postfix tokens and the fully
/// parenthesized infix rendering of that postfix sequence.
pub fn convert(expression: &str) -> Result<Conversion, ExpressionError> {
    let postfix = parse_postfix(expression)?;
    let infix = render(&postfix)?;

    Ok(Conversion {
        expression: expression.to_string(),
        postfix: literals(&postfix),
        infix,
    })
}

/// Evaluates an infix expression.
///
/// The result is numeric unless the expression contains a variable, in which
/// case it is the symbolic form of the partially reduced tree.
pub fn evaluate(expression: &str) -> Result<Evaluation, ExpressionError> {
    let postfix = parse_postfix(expression)?;
    let tree = build(&postfix)?;
    let result = evaluate_tree(tree.as_ref())?;
    debug!("Evaluated {:?} to {}", expression, result);
    let infix_from_postfix = render(&postfix)?;

    Ok(Evaluation {
        expression: expression.to_string(),
        result,
        postfix: literals(&postfix),
        infix_from_postfix,
    })
}
