use tracing::trace;

use crate::{ArithError, DigitSequence};

use super::operand_pair;

/// Add two non-negative decimal strings.
///
/// ```
/// assert_eq!(linum_arith::add("20", "319").map(|s| s.to_string()), Ok("339".to_string()));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(lhs_len = s1.len(), rhs_len = s2.len()))]
pub fn add(s1: &str, s2: &str) -> Result<DigitSequence, ArithError> {
    let (lhs, rhs) = operand_pair(s1, s2)?;
    Ok(add_aligned(&lhs, &rhs))
}

/// Right-to-left addition of two equal-length sequences.
///
/// Each emitted digit goes in front of the ones emitted before it, so the
/// result reads most significant first once the walk reaches the front.
pub(super) fn add_aligned(lhs: &DigitSequence, rhs: &DigitSequence) -> DigitSequence {
    debug_assert_eq!(lhs.len(), rhs.len());

    let mut result = DigitSequence::new();
    let mut carry = 0;
    for (d1, d2) in lhs.digits().rev().zip(rhs.digits().rev()) {
        let sum = d1 + d2 + carry;
        if sum >= 10 {
            result.push_front(sum % 10);
            carry = 1;
        } else {
            result.push_front(sum);
            carry = 0;
        }
    }
    if carry == 1 {
        trace!("final carry adds a leading digit");
        result.push_front(1);
    }

    result.trim_leading_zeros();
    result
}
