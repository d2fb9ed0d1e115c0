//! Expression alphabet and the operator precedence table.

use std::fmt;

/// Binary operator recognized by the converter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// | Operators | Precedence |
    /// |---|---|
    /// | `+` `-` | 1 |
    /// | `*` `/` | 2 |
    /// | `^` | 3 |
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One character of an infix expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// An ASCII decimal digit, kept as written.
    Digit(char),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl Symbol {
    /// Classify a character, or `None` if it is outside the alphabet.
    pub fn classify(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Symbol::Digit(c)),
            '(' => Some(Symbol::OpenParen),
            ')' => Some(Symbol::CloseParen),
            _ => Operator::from_char(c).map(Symbol::Operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_table() {
        assert_eq!(Operator::Add.precedence(), 1);
        assert_eq!(Operator::Sub.precedence(), 1);
        assert_eq!(Operator::Mul.precedence(), 2);
        assert_eq!(Operator::Div.precedence(), 2);
        assert_eq!(Operator::Pow.precedence(), 3);
    }

    #[test]
    fn operator_chars_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.as_char()), Some(op));
            assert_eq!(op.to_string(), op.as_char().to_string());
        }
    }

    #[test]
    fn classify_alphabet() {
        assert_eq!(Symbol::classify('7'), Some(Symbol::Digit('7')));
        assert_eq!(Symbol::classify('('), Some(Symbol::OpenParen));
        assert_eq!(Symbol::classify(')'), Some(Symbol::CloseParen));
        assert_eq!(
            Symbol::classify('^'),
            Some(Symbol::Operator(Operator::Pow))
        );
    }

    #[test]
    fn classify_rejects_everything_else() {
        for c in [' ', 'x', '%', '.', '[', '٣', '\n'] {
            assert_eq!(Symbol::classify(c), None, "{c:?} should not classify");
        }
    }
}
