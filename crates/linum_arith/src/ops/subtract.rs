use std::cmp::Ordering;

use tracing::trace;

use crate::{ArithError, DigitSequence};

use super::compare::compare_aligned;
use super::{operand_pair, to_digit};

/// Absolute difference of two non-negative decimal strings.
///
/// The larger magnitude is always the minuend, so `subtract(a, b)` and
/// `subtract(b, a)` return the same value. The sign of `a - b` is not
/// reported.
///
/// ```
/// assert_eq!(linum_arith::subtract("20", "319").map(|s| s.to_string()), Ok("299".to_string()));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(lhs_len = s1.len(), rhs_len = s2.len()))]
pub fn subtract(s1: &str, s2: &str) -> Result<DigitSequence, ArithError> {
    let (lhs, rhs) = operand_pair(s1, s2)?;

    let (larger, smaller) = match compare_aligned(&lhs, &rhs) {
        Ordering::Less => {
            trace!("second operand is larger, swapping");
            (&rhs, &lhs)
        }
        Ordering::Equal | Ordering::Greater => (&lhs, &rhs),
    };

    let mut result = DigitSequence::new();
    // 0 or -1
    let mut borrow: i16 = 0;
    for (top, bottom) in larger.digits().rev().zip(smaller.digits().rev()) {
        let value = i16::from(top) - i16::from(bottom) + borrow;
        if value < 0 {
            result.push_front(to_digit(value + 10));
            borrow = -1;
        } else {
            result.push_front(to_digit(value));
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0, "minuend was not the larger magnitude");

    result.trim_leading_zeros();
    Ok(result)
}
