use crate::treap::tree::{self, Tree};

/// A struct representing an internal node of a treap.
pub struct Node<T> {
    pub key: T,
    pub priority: u64,
    pub len: usize,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T, priority: u64) -> Self {
        Node {
            key,
            priority,
            len: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the length of the subtree rooted at this node from its children.
    pub fn update(&mut self) {
        let Node {
            ref mut len,
            ref left,
            ref right,
            ..
        } = self;
        *len = 1 + tree::len(left) + tree::len(right);
    }

    /// Returns `true` if `child` would break the heap property when hung below this node.
    pub fn is_heap_property_violated(&self, child: &Tree<T>) -> bool {
        match child {
            Some(child_node) => child_node.priority > self.priority,
            None => false,
        }
    }
}
