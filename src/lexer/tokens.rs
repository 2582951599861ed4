use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Command,
    Number,

    Plus,
    Minus,
    Exponent, // ^

    PrefixOperator,  // ~ sqrt sin cos tan
    InfixOperator,   // & % E | * / << >>
    PostfixOperator, // !

    OpenParen,
    CloseParen,

    Constant, // e pi ans
    Var,      // the `var` keyword
    Variable,
    Equals, // =
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}
