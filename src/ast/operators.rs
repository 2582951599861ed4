use std::fmt::Display;

use crate::errors::errors::Error;
use crate::session::session::{AngleMode, DecimalMode, Session};

/// Unary Operators
///
/// Covers the prefix operators, unary minus and the postfix factorial.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    Negate,
    BitNot,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Factorial,
}

impl UnaryOp {
    pub fn from_token(token: &str) -> Result<UnaryOp, Error> {
        match token {
            "-" => Ok(UnaryOp::Negate),
            "~" => Ok(UnaryOp::BitNot),
            "sqrt" => Ok(UnaryOp::Sqrt),
            "sin" => Ok(UnaryOp::Sin),
            "cos" => Ok(UnaryOp::Cos),
            "tan" => Ok(UnaryOp::Tan),
            "!" => Ok(UnaryOp::Factorial),
            _ => Err(Error::InvalidOperator {
                token: String::from(token),
            }),
        }
    }

    /// Applies the operator to an evaluated operand. Trig operands are
    /// converted from the session's angle unit into radians first.
    pub fn apply(&self, operand: f64, session: &Session) -> Result<f64, Error> {
        match self {
            UnaryOp::Negate => Ok(-operand),
            UnaryOp::BitNot => Ok(!(operand as i32) as f64),
            UnaryOp::Sqrt => Ok(operand.sqrt()),
            UnaryOp::Sin => Ok((operand * session.angle_mode().conversion()).sin()),
            UnaryOp::Cos => Ok((operand * session.angle_mode().conversion()).cos()),
            UnaryOp::Tan => Ok((operand * session.angle_mode().conversion()).tan()),
            UnaryOp::Factorial => factorial(operand as i64),
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "-"),
            UnaryOp::BitNot => write!(f, "~"),
            UnaryOp::Sqrt => write!(f, "sqrt"),
            UnaryOp::Sin => write!(f, "sin"),
            UnaryOp::Cos => write!(f, "cos"),
            UnaryOp::Tan => write!(f, "tan"),
            UnaryOp::Factorial => write!(f, "!"),
        }
    }
}

// The operand is truncated toward zero before the sign check, so -0.5!
// truncates to 0 and succeeds. 20! is the largest result that fits.
fn factorial(operand: i64) -> Result<f64, Error> {
    if operand < 0 {
        return Err(Error::NegativeFactorial { operand });
    }

    let mut product: i64 = 1;
    for n in 2..=operand {
        product = product
            .checked_mul(n)
            .ok_or(Error::FactorialOverflow { operand })?;
    }

    Ok(product as f64)
}

/// Binary Operators
///
/// All infix operators share a single precedence level; only `^` binds
/// tighter, through its own grammar production.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Remainder,
    Scientific, // E: left * 10^right
    BitAnd,
    BitOr,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOp {
    pub fn from_token(token: &str) -> Result<BinaryOp, Error> {
        match token {
            "+" => Ok(BinaryOp::Add),
            "-" => Ok(BinaryOp::Subtract),
            "*" => Ok(BinaryOp::Multiply),
            "/" => Ok(BinaryOp::Divide),
            "^" => Ok(BinaryOp::Power),
            "%" => Ok(BinaryOp::Remainder),
            "E" => Ok(BinaryOp::Scientific),
            "&" => Ok(BinaryOp::BitAnd),
            "|" => Ok(BinaryOp::BitOr),
            "<<" => Ok(BinaryOp::ShiftLeft),
            ">>" => Ok(BinaryOp::ShiftRight),
            _ => Err(Error::InvalidOperator {
                token: String::from(token),
            }),
        }
    }

    /// Applies the operator to two evaluated operands. Bitwise operators
    /// truncate both operands toward zero into 32-bit integers; shift
    /// counts are masked modulo 32.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => left / right,
            BinaryOp::Power => left.powf(right),
            BinaryOp::Remainder => left % right,
            BinaryOp::Scientific => left * 10f64.powf(right),
            BinaryOp::BitAnd => ((left as i32) & (right as i32)) as f64,
            BinaryOp::BitOr => ((left as i32) | (right as i32)) as f64,
            BinaryOp::ShiftLeft => (left as i32).wrapping_shl(right as i32 as u32) as f64,
            BinaryOp::ShiftRight => (left as i32).wrapping_shr(right as i32 as u32) as f64,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Subtract => write!(f, "-"),
            BinaryOp::Multiply => write!(f, "*"),
            BinaryOp::Divide => write!(f, "/"),
            BinaryOp::Power => write!(f, "^"),
            BinaryOp::Remainder => write!(f, "%"),
            BinaryOp::Scientific => write!(f, "E"),
            BinaryOp::BitAnd => write!(f, "&"),
            BinaryOp::BitOr => write!(f, "|"),
            BinaryOp::ShiftLeft => write!(f, "<<"),
            BinaryOp::ShiftRight => write!(f, ">>"),
        }
    }
}

/// Commands
///
/// Mode switches plus the two process-control words. `cls` and `clear`
/// are the same command.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Rad,
    Deg,
    Grad,
    Reg,
    Sci,
    Eng,
    Clear,
    Exit,
}

impl Command {
    pub fn from_token(token: &str) -> Result<Command, Error> {
        match token {
            "rad" => Ok(Command::Rad),
            "deg" => Ok(Command::Deg),
            "grad" => Ok(Command::Grad),
            "reg" => Ok(Command::Reg),
            "sci" => Ok(Command::Sci),
            "eng" => Ok(Command::Eng),
            "clear" | "cls" => Ok(Command::Clear),
            "exit" => Ok(Command::Exit),
            _ => Err(Error::InvalidOperator {
                token: String::from(token),
            }),
        }
    }

    /// Applies the mode switch to the session. `Clear` and `Exit` leave
    /// the session untouched; the driver acts on them.
    pub fn apply(&self, session: &mut Session) {
        match self {
            Command::Rad => session.set_angle_mode(AngleMode::Rad),
            Command::Deg => session.set_angle_mode(AngleMode::Deg),
            Command::Grad => session.set_angle_mode(AngleMode::Grad),
            Command::Reg => session.set_decimal_mode(DecimalMode::Reg),
            Command::Sci => session.set_decimal_mode(DecimalMode::Sci),
            Command::Eng => session.set_decimal_mode(DecimalMode::Eng),
            Command::Clear | Command::Exit => {}
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Rad => write!(f, "rad"),
            Command::Deg => write!(f, "deg"),
            Command::Grad => write!(f, "grad"),
            Command::Reg => write!(f, "reg"),
            Command::Sci => write!(f, "sci"),
            Command::Eng => write!(f, "eng"),
            Command::Clear => write!(f, "clear"),
            Command::Exit => write!(f, "exit"),
        }
    }
}
