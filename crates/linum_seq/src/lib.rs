//! Linked containers for the linum arithmetic and conversion engines.
//!
//! Two containers live here:
//!
//! - [`LinkedDeque`]: a doubly linked sequence with header/trailer sentinels.
//!   Nodes are stored in an arena (`Vec`) and linked by index handles, so
//!   there are no owning back-references between nodes.
//! - [`LinkedStack`]: a singly linked LIFO stack.
//!
//! Both offer O(1) insertion and removal at their open ends. Neither is
//! designed for concurrent mutation; each engine call builds its own.
//!
//! ```text
//! header <-> n0 <-> n1 <-> ... <-> trailer
//!   [0]      [k]    [m]             [1]
//! ```

mod deque;
mod stack;

pub use deque::{IntoIter, Iter, LinkedDeque};
pub use stack::{LinkedStack, StackIter};
