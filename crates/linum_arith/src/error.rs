//! Error types for the arithmetic engine.

use linum_diagnostic::ErrorCode;
use std::fmt;
use thiserror::Error;

/// Why an operand string is not a valid decimal digit string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Malformation {
    /// The operand has no digits at all.
    Empty,
    /// A character other than `0`-`9`, at a character offset.
    NonDigit { found: char, position: usize },
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "operand is empty"),
            Self::NonDigit { found, position } => {
                write!(f, "non-digit character `{found}` at position {position}")
            }
        }
    }
}

/// Errors returned by the arithmetic operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("malformed operand {operand:?}: {reason}")]
    MalformedOperand {
        operand: String,
        reason: Malformation,
    },

    /// `exponent` holds the text as given, so non-integer input can be
    /// reported the same way as a negative value.
    #[error("invalid exponent `{exponent}`: expected a non-negative integer")]
    InvalidExponent { exponent: String },
}

impl ArithError {
    pub(crate) fn empty_operand() -> Self {
        Self::MalformedOperand {
            operand: String::new(),
            reason: Malformation::Empty,
        }
    }

    pub(crate) fn non_digit(operand: &str, found: char, position: usize) -> Self {
        Self::MalformedOperand {
            operand: operand.to_string(),
            reason: Malformation::NonDigit { found, position },
        }
    }

    /// Exponent error for text that is not a non-negative integer.
    pub fn invalid_exponent(exponent: impl fmt::Display) -> Self {
        Self::InvalidExponent {
            exponent: exponent.to_string(),
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedOperand { .. } => ErrorCode::E1001,
            Self::InvalidExponent { .. } => ErrorCode::E1002,
        }
    }
}
