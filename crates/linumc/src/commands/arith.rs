//! The `add`, `sub`, `mul`, `pow` and `cmp` commands.

use std::cmp::Ordering;

use linum_arith::{add, compare, multiply, power, subtract, ArithError};

use super::CommandError;

pub fn add_numbers(lhs: &str, rhs: &str) -> Result<String, CommandError> {
    Ok(add(lhs, rhs)?.to_string())
}

/// Prints `|lhs - rhs|`; the sign is not reported.
pub fn subtract_numbers(lhs: &str, rhs: &str) -> Result<String, CommandError> {
    Ok(subtract(lhs, rhs)?.to_string())
}

pub fn multiply_numbers(lhs: &str, rhs: &str) -> Result<String, CommandError> {
    Ok(multiply(lhs, rhs)?.to_string())
}

/// `exponent` arrives as text; anything that is not an `i64` is an invalid
/// exponent, same as a negative one.
pub fn power_number(base: &str, exponent: &str) -> Result<String, CommandError> {
    let exponent: i64 = exponent
        .parse()
        .map_err(|_| ArithError::invalid_exponent(exponent))?;
    Ok(power(base, exponent)?.to_string())
}

/// Prints the relation between the operands as written, e.g. `20 < 319`.
pub fn compare_numbers(lhs: &str, rhs: &str) -> Result<String, CommandError> {
    let relation = match compare(lhs, rhs)? {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(format!("{lhs} {relation} {rhs}"))
}
