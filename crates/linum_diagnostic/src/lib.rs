//! Diagnostic codes shared by the linum engines and CLI.
//!
//! Every error the arithmetic engine or the postfix converter can return maps
//! onto an [`ErrorCode`]. The CLI prints the code next to the message and
//! `linum explain <code>` shows the matching [`ErrorDocs`] entry.
//!
//! ```text
//! error[E2001]: unbalanced parentheses: `(` at position 2 is never closed
//! ```

mod error_code;
pub mod errors;

pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
