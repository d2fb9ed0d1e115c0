use std::cmp::Ordering;

use crate::{ArithError, DigitSequence};

use super::operand_pair;

/// Numeric ordering of two non-negative decimal strings.
///
/// Leading zeros do not matter: `"007"` and `"7"` compare equal.
#[tracing::instrument(level = "debug", skip_all, fields(lhs_len = s1.len(), rhs_len = s2.len()))]
pub fn compare(s1: &str, s2: &str) -> Result<Ordering, ArithError> {
    let (lhs, rhs) = operand_pair(s1, s2)?;
    Ok(compare_aligned(&lhs, &rhs))
}

/// Front-to-back digit comparison; the first differing digit decides.
/// Only meaningful for sequences of equal length.
pub(super) fn compare_aligned(lhs: &DigitSequence, rhs: &DigitSequence) -> Ordering {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.digits().cmp(rhs.digits())
}
