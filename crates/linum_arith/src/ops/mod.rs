//! The four schoolbook operations plus magnitude comparison.
//!
//! Every entry point takes decimal strings and goes through the same front
//! end: validate both operands, [`normalize`] them to a common width, then
//! build one [`DigitSequence`] each. The `*_aligned` helpers operate on
//! already-built sequences of equal length and are shared between
//! operations (multiplication accumulates with addition, power repeats
//! multiplication).

mod add;
mod compare;
mod multiply;
mod power;
mod subtract;

pub use add::add;
pub use compare::compare;
pub use multiply::multiply;
pub use power::power;
pub use subtract::subtract;

use crate::digits::validate;
use crate::{normalize, ArithError, DigitSequence};

/// Validate, zero-pad and build both operands of a binary operation.
fn operand_pair(s1: &str, s2: &str) -> Result<(DigitSequence, DigitSequence), ArithError> {
    validate(s1)?;
    validate(s2)?;
    let (padded1, padded2) = normalize(s1, s2);
    Ok((
        DigitSequence::build(&padded1),
        DigitSequence::build(&padded2),
    ))
}

/// Zero-pad two built sequences to a common width.
fn align(mut lhs: DigitSequence, mut rhs: DigitSequence) -> (DigitSequence, DigitSequence) {
    let width = lhs.len().max(rhs.len());
    lhs.pad_front(width);
    rhs.pad_front(width);
    (lhs, rhs)
}

/// Narrow a computed position value back to a digit.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "callers only pass values in 0..=9"
)]
fn to_digit(value: i16) -> u8 {
    debug_assert!((0..10).contains(&value), "not a digit: {value}");
    value as u8
}

#[cfg(test)]
mod tests;
