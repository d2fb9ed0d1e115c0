//! Error codes for all linum diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the layer that raised it. Used for `explain` lookups.

use std::fmt;

/// Error codes for all linum diagnostics.
///
/// Format: E#### where the first digit indicates the layer:
/// - E1xxx: Arithmetic engine (operand and exponent validation)
/// - E2xxx: Expression converter (infix to postfix)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Arithmetic Errors (E1xxx)
    /// Operand is empty or contains a non-digit character
    E1001,
    /// Exponent is negative or not an integer
    E1002,

    // Conversion Errors (E2xxx)
    /// Unbalanced parentheses
    E2001,
    /// Character outside the expression alphabet
    E2002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        // Arithmetic
        ErrorCode::E1001,
        ErrorCode::E1002,
        // Conversion
        ErrorCode::E2001,
        ErrorCode::E2002,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }

    /// Short human-readable title, matching the heading of its documentation.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "Malformed Operand",
            ErrorCode::E1002 => "Invalid Exponent",
            ErrorCode::E2001 => "Unbalanced Parentheses",
            ErrorCode::E2002 => "Invalid Token",
        }
    }

    /// Check if this code is raised by the arithmetic engine (E1xxx range).
    pub fn is_arithmetic_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Check if this code is raised by the expression converter (E2xxx range).
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
