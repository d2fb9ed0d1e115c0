//! Doubly linked double-ended queue over an index arena.
//!
//! Slot 0 is the header sentinel and slot 1 the trailer sentinel. Sentinels
//! never hold an element, which lets `front`/`back` read straight through the
//! header's `next` / trailer's `prev` without special-casing the empty deque.
//! Removed slots go on a free list and are reused by later insertions.

use std::fmt;
use std::iter::FusedIterator;

/// Index of a node inside the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeId(usize);

impl NodeId {
    const HEADER: NodeId = NodeId(0);
    const TRAILER: NodeId = NodeId(1);

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone)]
struct Node<T> {
    element: Option<T>,
    prev: NodeId,
    next: NodeId,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node {
            element: None,
            prev: NodeId::HEADER,
            next: NodeId::TRAILER,
        }
    }
}

/// Double-ended queue backed by a doubly linked list.
///
/// All end operations are O(1). Elements are visited front to back by
/// [`LinkedDeque::iter`]; the iterator is double-ended so callers can walk
/// from the back (the least significant digit, for numeric use).
#[derive(Clone)]
pub struct LinkedDeque<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
    len: usize,
}

impl<T> LinkedDeque<T> {
    /// Create an empty deque.
    pub fn new() -> Self {
        LinkedDeque {
            nodes: vec![Node::sentinel(), Node::sentinel()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty deque with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node::sentinel());
        nodes.push(Node::sentinel());
        LinkedDeque {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The front element, or `None` if the deque is empty.
    pub fn front(&self) -> Option<&T> {
        self.nodes[self.first().index()].element.as_ref()
    }

    /// The back element, or `None` if the deque is empty.
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.last().index()].element.as_ref()
    }

    pub fn push_front(&mut self, element: T) {
        let first = self.first();
        self.insert_between(element, NodeId::HEADER, first);
    }

    pub fn push_back(&mut self, element: T) {
        let last = self.last();
        self.insert_between(element, last, NodeId::TRAILER);
    }

    /// Remove and return the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.delete_node(self.first())
    }

    /// Remove and return the back element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.delete_node(self.last())
    }

    /// Remove every element, keeping the arena allocation.
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.nodes[NodeId::HEADER.index()].next = NodeId::TRAILER;
        self.nodes[NodeId::TRAILER.index()].prev = NodeId::HEADER;
        self.free.clear();
        self.len = 0;
    }

    /// Iterate front to back. Use `.rev()` to walk back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.first(),
            back: self.last(),
            remaining: self.len,
        }
    }

    #[inline]
    fn first(&self) -> NodeId {
        self.nodes[NodeId::HEADER.index()].next
    }

    #[inline]
    fn last(&self) -> NodeId {
        self.nodes[NodeId::TRAILER.index()].prev
    }

    /// Link a new node holding `element` between two adjacent nodes.
    fn insert_between(&mut self, element: T, predecessor: NodeId, successor: NodeId) -> NodeId {
        let node = Node {
            element: Some(element),
            prev: predecessor,
            next: successor,
        };
        let id = if let Some(id) = self.free.pop() {
            self.nodes[id.index()] = node;
            id
        } else {
            self.nodes.push(node);
            NodeId(self.nodes.len() - 1)
        };
        self.nodes[predecessor.index()].next = id;
        self.nodes[successor.index()].prev = id;
        self.len += 1;
        id
    }

    /// Unlink a non-sentinel node and return its element.
    fn delete_node(&mut self, id: NodeId) -> Option<T> {
        debug_assert!(id != NodeId::HEADER && id != NodeId::TRAILER);
        let predecessor = self.nodes[id.index()].prev;
        let successor = self.nodes[id.index()].next;
        self.nodes[predecessor.index()].next = successor;
        self.nodes[successor.index()].prev = predecessor;
        self.len -= 1;
        self.free.push(id);
        self.nodes[id.index()].element.take()
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedDeque<T> {}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = LinkedDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`LinkedDeque`].
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front.index()];
        self.front = node.next;
        self.remaining -= 1;
        node.element.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back.index()];
        self.back = node.prev;
        self.remaining -= 1;
        node.element.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedDeque`].
pub struct IntoIter<T>(LinkedDeque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
