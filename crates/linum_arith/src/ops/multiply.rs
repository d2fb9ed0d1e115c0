use tracing::trace;

use crate::{ArithError, DigitSequence};

use super::add::add_aligned;
use super::{align, operand_pair};

/// Multiply two non-negative decimal strings.
///
/// ```
/// assert_eq!(linum_arith::multiply("12", "3").map(|s| s.to_string()), Ok("36".to_string()));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(lhs_len = s1.len(), rhs_len = s2.len()))]
pub fn multiply(s1: &str, s2: &str) -> Result<DigitSequence, ArithError> {
    let (lhs, rhs) = operand_pair(s1, s2)?;
    Ok(multiply_aligned(&lhs, &rhs))
}

/// Long multiplication of two equal-length sequences.
///
/// For each digit of `lhs`, least significant first, the whole of `rhs` is
/// multiplied by it into a partial product. The partial product is shifted
/// by the outer position (zeros appended at the units end) and added into
/// the running total with digit-sequence addition.
pub(super) fn multiply_aligned(lhs: &DigitSequence, rhs: &DigitSequence) -> DigitSequence {
    debug_assert_eq!(lhs.len(), rhs.len());

    let mut total = DigitSequence::zero();
    for (position, d1) in lhs.digits().rev().enumerate() {
        let mut partial = DigitSequence::new();
        let mut carry = 0;
        for d2 in rhs.digits().rev() {
            // At most 9 * 9 + 8, fits in u8.
            let product = d2 * d1 + carry;
            partial.push_front(product % 10);
            carry = product / 10;
        }
        if carry > 0 {
            partial.push_front(carry);
        }
        for _ in 0..position {
            partial.push_back(0);
        }
        trace!(position, digit = d1, partial = %partial, "partial product");

        let (running, shifted) = align(total, partial);
        total = add_aligned(&running, &shifted);
    }

    total.trim_leading_zeros();
    total
}
