//! Error types for infix to postfix conversion.

use linum_diagnostic::ErrorCode;
use thiserror::Error;

/// Which side of a parenthesis pair is missing its partner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unmatched {
    /// A `(` still on the stack when the input ends.
    Open,
    /// A `)` with no `(` left on the stack.
    Close,
}

/// Errors returned by [`infix_to_postfix`](crate::infix_to_postfix).
///
/// Positions are character offsets into the expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unbalanced parentheses: {}", describe_unmatched(.unmatched, .position))]
    UnbalancedParentheses { unmatched: Unmatched, position: usize },

    #[error("invalid token `{found}` at position {position}")]
    InvalidToken { found: char, position: usize },
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes fields by reference"
)]
fn describe_unmatched(unmatched: &Unmatched, position: &usize) -> String {
    match unmatched {
        Unmatched::Open => format!("`(` at position {position} is never closed"),
        Unmatched::Close => format!("`)` at position {position} has no matching `(`"),
    }
}

impl ConvertError {
    pub(crate) fn unclosed_open(position: usize) -> Self {
        Self::UnbalancedParentheses {
            unmatched: Unmatched::Open,
            position,
        }
    }

    pub(crate) fn unmatched_close(position: usize) -> Self {
        Self::UnbalancedParentheses {
            unmatched: Unmatched::Close,
            position,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnbalancedParentheses { .. } => ErrorCode::E2001,
            Self::InvalidToken { .. } => ErrorCode::E2002,
        }
    }
}
