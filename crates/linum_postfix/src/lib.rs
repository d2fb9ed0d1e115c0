//! Infix to postfix (reverse Polish) conversion.
//!
//! The expression alphabet is the decimal digits, the binary operators
//! `+ - * / ^`, and parentheses. The input is copied into a
//! [`LinkedDeque`](linum_seq::LinkedDeque) one character per node and walked
//! once, front to back, with a [`LinkedStack`](linum_seq::LinkedStack) of
//! pending operators (shunting-yard).
//!
//! ```
//! assert_eq!(linum_postfix::infix_to_postfix("3*(2+4)").as_deref(), Ok("324+*"));
//! ```
//!
//! Operands are emitted digit by digit with no separator, so `12+3` becomes
//! `123+`. This is unambiguous only for single-digit operands.
//!
//! Division is part of the alphabet here even though the arithmetic engine
//! does not evaluate it.

mod convert;
mod error;
mod symbol;

pub use convert::infix_to_postfix;
pub use error::{ConvertError, Unmatched};
pub use symbol::{Operator, Symbol};
