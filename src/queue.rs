//! A FIFO queue layered on a double-ended growable buffer.
//!
//! The tree's level-order traversal uses this to hold the frontier of nodes
//! whose children haven't been visited yet.
//!
//! # Examples
//!
//! ```
//! use bstree::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.push(1);
//! queue.push(2);
//!
//! // First in, first out.
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.pop(), Some(2));
//! assert_eq!(queue.pop(), None);
//! ```

use std::collections::VecDeque;

/// A queue of `T`s. Elements come back out in insertion order.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Pushes a value onto the tail of the queue.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the value at the head of the queue (the least
    /// recently pushed), or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the value at the head of the queue without
    /// removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of values currently in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
