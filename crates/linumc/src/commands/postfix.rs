//! The `postfix` command.

use linum_postfix::infix_to_postfix;

use super::CommandError;

pub fn convert_expression(expression: &str) -> Result<String, CommandError> {
    Ok(infix_to_postfix(expression)?)
}
