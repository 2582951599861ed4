use std::{
    f64::consts::{E, PI},
    fmt::Display,
};

use crate::errors::errors::Error;
use crate::session::session::Session;

use super::operators::{BinaryOp, Command, UnaryOp};

/// A node of the expression tree.
///
/// Leaves resolve to their value at construction time: a `Number` holds
/// the parsed literal or constant, a `Variable` holds the value its name
/// was bound to when the node was built, and an `Assignment` holds the
/// already-computed value of its right-hand side. Only evaluation writes
/// to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable {
        name: String,
        value: f64,
    },
    Assignment {
        name: String,
        value: f64,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Command(Command),
}

impl Node {
    /// Builds a number leaf from a Number or Constant token's text.
    pub fn number(text: &str, session: &Session) -> Node {
        match text {
            "e" => Node::Number(E),
            "pi" => Node::Number(PI),
            "ans" => Node::Number(session.ans()),
            // The Number pattern only matches valid f64 literals.
            _ => Node::Number(text.parse().unwrap()),
        }
    }

    /// Builds a variable leaf, resolving the name against the session.
    /// An unbound name fails here, at construction time.
    pub fn variable(name: &str, session: &Session) -> Result<Node, Error> {
        let value = session.lookup(name).ok_or_else(|| Error::UndefinedVariable {
            name: String::from(name),
        })?;

        Ok(Node::Variable {
            name: String::from(name),
            value,
        })
    }

    pub fn assignment(name: &str, value: f64) -> Node {
        Node::Assignment {
            name: String::from(name),
            value,
        }
    }

    /// Builds a unary node, validating the operator token.
    pub fn unary(token: &str, operand: Node) -> Result<Node, Error> {
        Ok(Node::Unary {
            op: UnaryOp::from_token(token)?,
            operand: Box::new(operand),
        })
    }

    /// Builds a binary node, validating the operator token.
    pub fn binary(token: &str, left: Node, right: Node) -> Result<Node, Error> {
        Ok(Node::Binary {
            op: BinaryOp::from_token(token)?,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Builds a command node, validating the command word.
    pub fn command(token: &str) -> Result<Node, Error> {
        Ok(Node::Command(Command::from_token(token)?))
    }

    /// Evaluates the tree to a number, applying session side effects:
    /// assignments write their variable, commands switch a mode. Command
    /// nodes evaluate to 0.0, which the driver never prints.
    pub fn evaluate(&self, session: &mut Session) -> Result<f64, Error> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Variable { value, .. } => Ok(*value),
            Node::Assignment { name, value } => {
                session.assign(name, *value);
                Ok(*value)
            }
            Node::Unary { op, operand } => {
                let operand = operand.evaluate(session)?;
                op.apply(operand, session)
            }
            Node::Binary { op, left, right } => {
                let left = left.evaluate(session)?;
                let right = right.evaluate(session)?;
                Ok(op.apply(left, right))
            }
            Node::Command(command) => {
                command.apply(session);
                Ok(0.0)
            }
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{}", value),
            Node::Variable { name, value } => write!(f, "{}:{}", name, value),
            Node::Assignment { name, value } => write!(f, "({} = {})", name, value),
            Node::Unary {
                op: UnaryOp::Factorial,
                operand,
            } => write!(f, "({})!", operand),
            Node::Unary { op, operand } => write!(f, "{}({})", op, operand),
            Node::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Node::Command(command) => write!(f, "{}", command),
        }
    }
}
