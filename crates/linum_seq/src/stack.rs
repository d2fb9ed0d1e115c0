//! Singly linked LIFO stack.

use std::fmt;

struct StackNode<T> {
    element: T,
    next: Option<Box<StackNode<T>>>,
}

/// LIFO stack whose top is the head of a singly linked list.
pub struct LinkedStack<T> {
    head: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack.
    pub const fn new() -> Self {
        LinkedStack { head: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `element` to the top of the stack.
    pub fn push(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(StackNode { element, next }));
        self.len += 1;
    }

    /// Remove and return the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.element
        })
    }

    /// The top element without removing it.
    pub fn top(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Iterate from the top of the stack down.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the derived drop would recurse once per node.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Pushes in iteration order, so the last element ends up on top.
impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

/// Iterator from the top of a [`LinkedStack`] to its bottom.
pub struct StackIter<'a, T> {
    next: Option<&'a StackNode<T>>,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}
