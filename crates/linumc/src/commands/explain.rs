//! The `explain` command: display documentation for linum error codes.

use linum_diagnostic::{ErrorCode, ErrorDocs};

use super::CommandError;

/// Look up the documentation for a code string such as `E2001`.
pub fn explain_error(code_str: &str) -> Result<String, CommandError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(CommandError::UnknownCode(code_str.to_string()));
    };
    ErrorDocs::get(code)
        .map(|doc| doc.trim_end().to_string())
        .ok_or(CommandError::MissingDocs(code))
}
