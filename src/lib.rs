//! This crate exposes an unbalanced Binary Search Tree (BST) along with the
//! `Stack` and `Queue` adapters its iterative traversals are built on,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The tree here never rebalances itself, so inserting keys in sorted order
//! produces a degenerate, linked-list-shaped tree. What it offers instead is
//! the full set of classic traversals - in-order, pre-order, post-order, and
//! level-order - each available both recursively and iteratively. The
//! iterative variants drive an explicit [`Stack`](stack::Stack) (or a
//! [`Queue`](queue::Queue) for level-order) exactly the way the recursive
//! call stack would, which is the interesting part to study.
//!
//! Keys order themselves through [`Ord`] by default, or through an injected
//! comparator when the key type has no natural order. See
//! [`Tree::with_comparator`](tree::Tree::with_comparator).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod queue;
pub mod stack;
pub mod tree;

#[cfg(test)]
pub(crate) mod test;
