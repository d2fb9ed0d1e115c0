//! Operand length normalization.

/// Left-pad the shorter of two strings with `'0'` so both have the length of
/// the longer one. Equal-length inputs come back unchanged.
///
/// ```
/// assert_eq!(
///     linum_arith::normalize("20", "319"),
///     ("020".to_string(), "319".to_string())
/// );
/// ```
pub fn normalize(s1: &str, s2: &str) -> (String, String) {
    let width = s1.chars().count().max(s2.chars().count());
    (zero_pad(s1, width), zero_pad(s2, width))
}

fn zero_pad(text: &str, width: usize) -> String {
    format!("{text:0>width$}")
}
