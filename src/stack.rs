//! A LIFO stack layered on a growable buffer.
//!
//! The tree's iterative traversals use this in place of the recursive call
//! stack: whatever would have been a pending recursive call becomes a pushed
//! node reference instead.
//!
//! # Examples
//!
//! ```
//! use bstree::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! // Last in, first out.
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

/// A stack of `T`s. Elements come back out in reverse insertion order.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the most recently pushed value, or `None` if the
    /// stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the value on top of the stack without
    /// removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of values currently on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_insertion_order() {
        let mut stack = Stack::new();
        for x in 0..10 {
            stack.push(x);
        }

        for x in (0..10).rev() {
            assert_eq!(stack.pop(), Some(x));
        }
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");

        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some("b"));
    }

    #[test]
    fn len_tracks_pushes_and_pops() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push(1);
        stack.push(2);
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_empty());

        stack.pop();
        assert_eq!(stack.len(), 1);

        stack.pop();
        assert!(stack.is_empty());

        // Popping an empty stack is a `None`, not an error, and the count
        // stays at zero.
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }
}
