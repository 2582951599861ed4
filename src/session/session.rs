use std::{collections::HashMap, f64::consts::PI, fmt::Display};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AngleMode {
    Rad,
    Deg,
    Grad,
}

impl AngleMode {
    /// Factor applied to a trig operand to turn it into radians.
    pub fn conversion(&self) -> f64 {
        match self {
            AngleMode::Rad => 1.0,
            AngleMode::Deg => PI / 180.0,
            AngleMode::Grad => PI / 200.0,
        }
    }
}

impl Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AngleMode::Rad => write!(f, "RAD"),
            AngleMode::Deg => write!(f, "DEG"),
            AngleMode::Grad => write!(f, "GRAD"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecimalMode {
    Reg,
    Sci,
    Eng,
}

impl DecimalMode {
    /// Renders a value for display. Stored values are never rounded;
    /// only the rendering changes with the mode.
    pub fn format(&self, value: f64) -> String {
        match self {
            DecimalMode::Reg => format!("{}", value),
            DecimalMode::Sci => format!("{:6.3} e", value),
            DecimalMode::Eng => eng_notation(value),
        }
    }
}

impl Display for DecimalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecimalMode::Reg => write!(f, "REG"),
            DecimalMode::Sci => write!(f, "SCI"),
            DecimalMode::Eng => write!(f, "ENG"),
        }
    }
}

// Engineering notation keeps the exponent a multiple of three, so the
// mantissa ranges over [1, 1000).
fn eng_notation(value: f64) -> String {
    if value == 0.0 {
        return String::from("0.000 E0");
    }

    let exponent = ((value.abs().log10() / 3.0).floor() * 3.0) as i32;
    let mantissa = value / 10f64.powi(exponent);

    format!("{:.3} E{:+03}", mantissa, exponent)
}

/// Mutable calculator state threaded through parsing and evaluation:
/// the variable table plus the two display/interpretation modes.
///
/// The table always holds `ans`, the value of the last evaluated
/// expression. It is seeded with 0.0 and never removed.
#[derive(Debug, Clone)]
pub struct Session {
    variables: HashMap<String, f64>,
    angle_mode: AngleMode,
    decimal_mode: DecimalMode,
}

impl Session {
    pub fn new() -> Session {
        let mut variables = HashMap::new();
        variables.insert(String::from("ans"), 0.0);

        Session {
            variables,
            angle_mode: AngleMode::Rad,
            decimal_mode: DecimalMode::Reg,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn assign(&mut self, name: &str, value: f64) {
        self.variables.insert(String::from(name), value);
    }

    pub fn ans(&self) -> f64 {
        self.variables["ans"]
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    pub fn decimal_mode(&self) -> DecimalMode {
        self.decimal_mode
    }

    pub fn set_decimal_mode(&mut self, mode: DecimalMode) {
        self.decimal_mode = mode;
    }

    /// Renders a value according to the active decimal mode.
    pub fn format_number(&self, value: f64) -> String {
        self.decimal_mode.format(value)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
