use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ExpressionError {
    #[display(fmt = "No expression provided")]
    EmptyExpression,

    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Malformed expression: {}", _0)]
    MalformedExpression(String),

    #[display(fmt = "Undefined result: {}", _0)]
    UndefinedResult(String),
}

impl std::error::Error for ExpressionError {}
