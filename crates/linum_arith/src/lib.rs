//! Arbitrary-precision decimal arithmetic over linked digit sequences.
//!
//! Operands are non-negative decimal strings. Each operation validates its
//! inputs, left-pads the shorter operand with zeros, builds one
//! [`DigitSequence`] per operand and walks them from the least significant
//! digit with explicit carry or borrow. No native big-integer type is used
//! anywhere, including the multiplication accumulator.
//!
//! | Operation | Result |
//! |---|---|
//! | [`add`] | `a + b` |
//! | [`subtract`] | absolute difference (the sign is not tracked) |
//! | [`multiply`] | `a * b` |
//! | [`power`] | `a ^ p` by repeated multiplication |
//! | [`compare`] | numeric ordering of `a` and `b` |
//!
//! Results are canonical: leading zeros are stripped down to a single `0`.
//!
//! # Tracing
//!
//! - `RUST_LOG=linum_arith=debug`: one span per operation with operand widths.
//! - `RUST_LOG=linum_arith=trace`: per-step carries, borrows and partial
//!   products.

mod digits;
mod error;
mod normalize;
mod ops;

pub use digits::DigitSequence;
pub use error::{ArithError, Malformation};
pub use normalize::normalize;
pub use ops::{add, compare, multiply, power, subtract};
