use tracing::trace;

use crate::{ArithError, DigitSequence};

use super::align;
use super::multiply::multiply_aligned;

/// Raise a non-negative decimal string to a non-negative integer power.
///
/// Computed as `exponent` successive multiplications starting from `1`, so
/// `power(x, 0)` is `1` for every `x`, including `0`. The base is validated
/// even when the exponent is zero.
///
/// ```
/// assert_eq!(linum_arith::power("2", 5).map(|s| s.to_string()), Ok("32".to_string()));
/// ```
#[tracing::instrument(level = "debug", skip(base), fields(base_len = base.len()))]
pub fn power(base: &str, exponent: i64) -> Result<DigitSequence, ArithError> {
    let base = DigitSequence::parse(base)?;
    let Ok(rounds) = u64::try_from(exponent) else {
        return Err(ArithError::invalid_exponent(exponent));
    };

    let mut result = DigitSequence::one();
    for round in 1..=rounds {
        let (lhs, rhs) = align(base.clone(), result);
        result = multiply_aligned(&lhs, &rhs);
        trace!(round, digits = result.len(), "power step");
    }
    Ok(result)
}
