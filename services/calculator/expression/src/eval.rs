use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExpressionError;
use crate::token::Operator;
use crate::tree::Node;

/// Result of evaluating a (sub)tree. Once a variable is involved the value
/// stays symbolic all the way to the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Numeric(f64),
    Symbolic(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(v) => f.write_str(&format_number(*v)),
            Value::Symbolic(s) => f.write_str(s),
        }
    }
}

/// Formats a float the way it reads naturally: integral values keep a single
/// decimal place (`2.0`), everything else uses the shortest exact form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

// Values are always finite, so they serialize as JSON numbers
fn finite(value: f64, describe: impl FnOnce() -> String) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::UndefinedResult(describe()))
    }
}

fn arithmetic(operator: Operator, left: f64, right: f64) -> Result<f64, ExpressionError> {
    let value = match operator {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div if right == 0.0 => return Err(ExpressionError::DivisionByZero),
        Operator::Div => left / right,
        Operator::Pow => left.powf(right),
    };

    finite(value, || {
        format!(
            "{} {} {} is not a real number",
            format_number(left),
            operator,
            format_number(right)
        )
    })
}

fn combine(operator: Operator, left: Value, right: Value) -> Result<Value, ExpressionError> {
    match (left, right) {
        (Value::Numeric(l), Value::Numeric(r)) => arithmetic(operator, l, r).map(Value::Numeric),
        (l, r) => Ok(Value::Symbolic(format!("({} {} {})", l, operator, r))),
    }
}

impl Node {
    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        match self {
            Node::Number(v) => {
                finite(*v, || "number literal is out of range".to_string()).map(Value::Numeric)
            }
            Node::Variable(name) => Ok(Value::Symbolic(name.to_string())),
            Node::Operation(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                combine(*op, left, right)
            }
        }
    }
}

/// Evaluates an optional tree; a missing tree is numeric zero
pub fn evaluate(tree: Option<&Node>) -> Result<Value, ExpressionError> {
    match tree {
        Some(node) => node.evaluate(),
        None => Ok(Value::Numeric(0.0)),
    }
}
