//! Decimal digit sequences.
//!
//! A [`DigitSequence`] is a [`LinkedDeque`] of digit values `0..=9`, front =
//! most significant. The engine only ever appends at the back while building
//! from a string and prepends at the front while emitting a result.

use std::fmt;
use std::str::FromStr;

use linum_seq::LinkedDeque;

use crate::ArithError;

/// A non-negative decimal integer stored one digit per node.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DigitSequence {
    digits: LinkedDeque<u8>,
}

impl DigitSequence {
    /// An empty sequence (no digits). Only used as an accumulator.
    pub fn new() -> Self {
        DigitSequence {
            digits: LinkedDeque::new(),
        }
    }

    pub fn zero() -> Self {
        Self::single(0)
    }

    pub fn one() -> Self {
        Self::single(1)
    }

    fn single(digit: u8) -> Self {
        let mut sequence = Self::new();
        sequence.push_back(digit);
        sequence
    }

    /// Validate `text` and build a sequence from it, left to right.
    ///
    /// Leading zeros are kept: `"007"` builds a three-digit sequence.
    pub fn parse(text: &str) -> Result<Self, ArithError> {
        validate(text)?;
        Ok(Self::build(text))
    }

    /// Build from text already accepted by [`validate`].
    pub(crate) fn build(text: &str) -> Self {
        let mut digits = LinkedDeque::with_capacity(text.len());
        digits.extend(text.bytes().map(|b| b - b'0'));
        DigitSequence { digits }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit values, most significant first. `.rev()` starts at the units.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.digits.iter().copied()
    }

    pub fn most_significant(&self) -> Option<u8> {
        self.digits.front().copied()
    }

    pub fn least_significant(&self) -> Option<u8> {
        self.digits.back().copied()
    }

    /// True when every digit is zero (or there are none).
    pub fn is_zero(&self) -> bool {
        self.digits().all(|digit| digit == 0)
    }

    pub(crate) fn push_front(&mut self, digit: u8) {
        debug_assert!(digit < 10, "digit out of range: {digit}");
        self.digits.push_front(digit);
    }

    pub(crate) fn push_back(&mut self, digit: u8) {
        debug_assert!(digit < 10, "digit out of range: {digit}");
        self.digits.push_back(digit);
    }

    /// Prepend zeros until the sequence is `width` digits long.
    pub(crate) fn pad_front(&mut self, width: usize) {
        while self.len() < width {
            self.digits.push_front(0);
        }
    }

    /// Drop leading zeros, keeping at least one digit.
    pub(crate) fn trim_leading_zeros(&mut self) {
        while self.len() > 1 && self.digits.front() == Some(&0) {
            self.digits.pop_front();
        }
    }
}

/// Check that `text` is a non-empty string of ASCII decimal digits.
pub(crate) fn validate(text: &str) -> Result<(), ArithError> {
    if text.is_empty() {
        return Err(ArithError::empty_operand());
    }
    match text.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, found)) => Err(ArithError::non_digit(text, found, position)),
        None => Ok(()),
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{}", char::from(b'0' + digit))?;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigitSequence")
            .field(&self.to_string())
            .finish()
    }
}

impl FromStr for DigitSequence {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
