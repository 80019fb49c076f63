//! An unbalanced Binary Search Tree (BST) keyed by [`Ord`] or by an injected
//! comparator. No rebalancing ever happens, so the tree's shape is entirely
//! determined by insertion order - including fully degenerate, list-shaped
//! trees. In exchange the tree supports every classic traversal order, each
//! in both a recursive and an iterative (explicit stack/queue) form.
//!
//! # Examples
//!
//! ```
//! use bstree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.get(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.get(&1), Some(&3));
//!
//! // Removing a node returns its value.
//! let removed_value = tree.remove(&1);
//!
//! assert_eq!(removed_value, Ok(3));
//! assert_eq!(tree.get(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::queue::Queue;
use crate::stack::Stack;

/// The ways a tree operation can fail. Every operation is a single
/// deterministic pass, so these are precondition failures, not transient
/// errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// [`Tree::remove`] was called with a key no node holds.
    #[error("key not found")]
    KeyNotFound,
    /// A minimum/maximum operation was called on a tree with no nodes.
    #[error("empty tree")]
    EmptyTree,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` owns a key, a value, and up to two children. There are no parent
/// pointers; parent context lives in the `&mut` link being followed during a
/// descent.
#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree mapping keys to values. This can be used for
/// inserting, finding, and removing keys and values, peeking or popping the
/// extreme keys, and walking all entries in any of the four classic
/// traversal orders.
///
/// By default keys order themselves through their [`Ord`] impl. A key type
/// with no natural order (or one that should be ordered differently) can be
/// used through [`Tree::with_comparator`].
#[derive(Clone)]
pub struct Tree<K, V, C = fn(&K, &K) -> Ordering> {
    root: Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K: Ord, V> Tree<K, V> {
    /// Generates a new, empty `Tree` ordering keys by their `Ord` impl.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            cmp: K::cmp,
        }
    }
}

impl<K: Ord, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> fmt::Debug for Tree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K, V, C> Drop for Tree<K, V, C> {
    fn drop(&mut self) {
        // An explicit stack keeps teardown of degenerate (linear) trees from
        // overflowing the call stack. Each node is popped exactly once, with
        // its children detached first, so each key and value drops exactly
        // once.
        let mut stack = Stack::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}

impl<K, V, C> Tree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Generates a new, empty `Tree` that orders keys with the given
    /// comparator instead of `Ord`. The comparator must be a total order and
    /// is fixed for the life of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use bstree::tree::Tree;
    ///
    /// // Order floats by their integer part. `f64` isn't `Ord` so this
    /// // wouldn't work with `Tree::new`.
    /// let mut tree = Tree::with_comparator(|a: &f64, b: &f64| -> Ordering {
    ///     (*a as i64).cmp(&(*b as i64))
    /// });
    ///
    /// tree.insert(2.5, "two");
    /// tree.insert(1.5, "one");
    ///
    /// assert_eq!(tree.get(&2.75), Some(&"two"));
    /// assert_eq!(tree.min(), Ok((1.5, "one")));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Inserts the given value into the tree stored at the given key.
    /// Inserting a new value for an existing key overwrites its value in
    /// place: the node (and the key it already holds) is reused, the old
    /// value and the incoming key are dropped, and the tree's shape does not
    /// change.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.get(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.get(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match (self.cmp)(&key, &node.key) {
                Ordering::Equal => {
                    node.value = value;
                    return;
                }
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
            }
        }

        // Ran off a leaf: `cur` is the empty link where the new node
        // belongs, which is the root link if the tree was empty.
        *cur = Some(Node::new_boxed(key, value));
        self.len += 1;
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    /// Neither copies nor allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match (self.cmp)(key, &node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Removes the node containing the given key from the tree and returns
    /// its value; the stored key is dropped. If the tree does not contain a
    /// node with the key, `Err(TreeError::KeyNotFound)` is returned and
    /// nothing changes.
    ///
    /// A removed node with two children is replaced by its successor: the
    /// minimum node of its right subtree, which is first detached from its
    /// own parent and then takes over both of the removed node's subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Ok(2));
    /// assert_eq!(tree.get(&1), None);
    /// assert_eq!(tree.remove(&1), Err(TreeError::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V, TreeError> {
        let Self { root, cmp, .. } = self;
        let value = Self::remove_from(root, key, cmp)?;
        self.len -= 1;
        Ok(value)
    }

    /// Recursive removal. The ordering is computed through a shared borrow
    /// first so the `Equal` arm can take ownership of the whole link.
    fn remove_from(link: &mut Link<K, V>, key: &K, cmp: &C) -> Result<V, TreeError> {
        let ord = match link.as_deref() {
            None => return Err(TreeError::KeyNotFound),
            Some(node) => cmp(key, &node.key),
        };

        let mut node = match ord {
            Ordering::Less => {
                let node = link.as_deref_mut().expect("compared against this node");
                return Self::remove_from(&mut node.left, key, cmp);
            }
            Ordering::Greater => {
                let node = link.as_deref_mut().expect("compared against this node");
                return Self::remove_from(&mut node.right, key, cmp);
            }
            Ordering::Equal => link.take().expect("compared against this node"),
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let mut successor =
                    Self::detach_min(&mut right).expect("right subtree is non-empty");
                // If the successor was the immediate right child, `right` is
                // now its old right subtree; otherwise `detach_min` already
                // re-attached that subtree at the successor's old parent.
                successor.left = Some(left);
                successor.right = right;
                Some(successor)
            }
        };

        Ok(node.value)
    }

    /// Detaches and returns the minimum node of the subtree hanging off
    /// `link`, replacing it in its parent link with its right child.
    fn detach_min(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        if link.as_deref()?.left.is_some() {
            let node = link.as_deref_mut().expect("checked non-empty above");
            Self::detach_min(&mut node.left)
        } else {
            let mut node = link.take().expect("checked non-empty above");
            *link = node.right.take();
            Some(node)
        }
    }

    /// Mirror image of [`Self::detach_min`]: detaches the maximum node,
    /// replacing it with its left child.
    fn detach_max(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        if link.as_deref()?.right.is_some() {
            let node = link.as_deref_mut().expect("checked non-empty above");
            Self::detach_max(&mut node.right)
        } else {
            let mut node = link.take().expect("checked non-empty above");
            *link = node.left.take();
            Some(node)
        }
    }

    /// Returns a snapshot of the entry with the smallest key, without
    /// removing it. The snapshot is an independent clone - mutating the tree
    /// afterwards cannot affect it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), Err(TreeError::EmptyTree));
    ///
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    ///
    /// assert_eq!(tree.min(), Ok((1, "one")));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn min(&self) -> Result<(K, V), TreeError>
    where
        K: Clone,
        V: Clone,
    {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok((node.key.clone(), node.value.clone()))
    }

    /// Returns a snapshot of the entry with the largest key, without
    /// removing it.
    pub fn max(&self) -> Result<(K, V), TreeError>
    where
        K: Clone,
        V: Clone,
    {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok((node.key.clone(), node.value.clone()))
    }

    /// Removes the entry with the smallest key and returns it, transferring
    /// ownership of the key and value to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    ///
    /// assert_eq!(tree.pop_min(), Ok((1, "one")));
    /// assert_eq!(tree.pop_min(), Ok((2, "two")));
    /// assert_eq!(tree.pop_min(), Err(TreeError::EmptyTree));
    /// ```
    pub fn pop_min(&mut self) -> Result<(K, V), TreeError> {
        let node = Self::detach_min(&mut self.root).ok_or(TreeError::EmptyTree)?;
        self.len -= 1;
        let node = *node;
        Ok((node.key, node.value))
    }

    /// Removes the entry with the largest key and returns it, transferring
    /// ownership of the key and value to the caller.
    pub fn pop_max(&mut self) -> Result<(K, V), TreeError> {
        let node = Self::detach_max(&mut self.root).ok_or(TreeError::EmptyTree)?;
        self.len -= 1;
        let node = *node;
        Ok((node.key, node.value))
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of entries currently in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Walks the tree in order (left subtree, node, right subtree), which
    /// visits keys in ascending order. Iterative: an explicit [`Stack`]
    /// holds the spine of left-descendants still waiting to be visited.
    ///
    /// Returns an independently owned snapshot of every entry; mutating the
    /// tree afterwards cannot affect the returned pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// let pairs = tree.in_order();
    /// assert_eq!(pairs, vec![(1, 10), (3, 30), (5, 50), (8, 80)]);
    /// ```
    pub fn in_order(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.len);
        let mut stack = Stack::new();

        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }

            let node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            pairs.push((node.key.clone(), node.value.clone()));
            cur = node.right.as_deref();
        }

        pairs
    }

    /// [`Self::in_order`] as true recursion instead of an explicit stack.
    /// The two always produce identical sequences.
    pub fn in_order_recursive(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.len);
        Self::in_order_node(self.root.as_deref(), &mut pairs);
        pairs
    }

    fn in_order_node(node: Option<&Node<K, V>>, pairs: &mut Vec<(K, V)>)
    where
        K: Clone,
        V: Clone,
    {
        if let Some(node) = node {
            Self::in_order_node(node.left.as_deref(), pairs);
            pairs.push((node.key.clone(), node.value.clone()));
            Self::in_order_node(node.right.as_deref(), pairs);
        }
    }

    /// Walks the tree in pre-order (node, left subtree, right subtree).
    /// Iterative: the right child is pushed before the left so the left is
    /// popped - and therefore visited - first.
    pub fn pre_order(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.len);
        let mut stack = Stack::new();

        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            pairs.push((node.key.clone(), node.value.clone()));
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }

        pairs
    }

    /// [`Self::pre_order`] as true recursion instead of an explicit stack.
    pub fn pre_order_recursive(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.len);
        Self::pre_order_node(self.root.as_deref(), &mut pairs);
        pairs
    }

    fn pre_order_node(node: Option<&Node<K, V>>, pairs: &mut Vec<(K, V)>)
    where
        K: Clone,
        V: Clone,
    {
        if let Some(node) = node {
            pairs.push((node.key.clone(), node.value.clone()));
            Self::pre_order_node(node.left.as_deref(), pairs);
            Self::pre_order_node(node.right.as_deref(), pairs);
        }
    }

    /// Walks the tree in post-order (left subtree, right subtree, node).
    /// Iterative, with two stacks: the first walks the tree pushing left
    /// before right (so right pops first), producing reverse post-order on
    /// the second stack, which is then drained to yield true post-order.
    pub fn post_order(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.len);
        let mut walk = Stack::new();
        let mut visit = Stack::new();

        if let Some(root) = self.root.as_deref() {
            walk.push(root);
        }
        while let Some(node) = walk.pop() {
            if let Some(left) = node.left.as_deref() {
                walk.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                walk.push(right);
            }
            visit.push(node);
        }
        while let Some(node) = visit.pop() {
            pairs.push((node.key.clone(), node.value.clone()));
        }

        pairs
    }

    /// [`Self::post_order`] as true recursion instead of explicit stacks.
    pub fn post_order_recursive(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.len);
        Self::post_order_node(self.root.as_deref(), &mut pairs);
        pairs
    }

    fn post_order_node(node: Option<&Node<K, V>>, pairs: &mut Vec<(K, V)>)
    where
        K: Clone,
        V: Clone,
    {
        if let Some(node) = node {
            Self::post_order_node(node.left.as_deref(), pairs);
            Self::post_order_node(node.right.as_deref(), pairs);
            pairs.push((node.key.clone(), node.value.clone()));
        }
    }

    /// Walks the tree in level order (breadth-first): shallower depths
    /// first, left to right within a depth. A [`Queue`] seeded with the root
    /// holds the frontier; each dequeued node enqueues its children left
    /// then right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let keys: Vec<i32> = tree.level_order().into_iter().map(|(k, _)| k).collect();
    /// assert_eq!(keys, vec![5, 3, 8, 1, 4, 7, 9]);
    /// ```
    pub fn level_order(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.len);
        let mut queue = Queue::new();

        if let Some(root) = self.root.as_deref() {
            queue.push(root);
        }
        while let Some(node) = queue.pop() {
            pairs.push((node.key.clone(), node.value.clone()));
            if let Some(left) = node.left.as_deref() {
                queue.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push(right);
            }
        }

        pairs
    }
}
