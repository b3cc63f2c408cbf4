//! Depth-first and breadth-first walks over a tree's nodes.
//!
//! The depth-first walks are lazy iterators driven by an explicit stack, so
//! two of them can be advanced in lockstep and abandoned at the first
//! difference.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

/// Root, left subtree, right subtree.
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Left subtree, root, right subtree.
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

/// Left subtree, right subtree, root.
pub struct PostOrder<'a, K> {
    // The flag is set once the node's children have been pushed.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.key());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

/// Breadth-first walk from the root, left child before right child.
pub(crate) fn level_order<K>(root: Option<&Node<K>>) -> Vec<&Node<K>> {
    let mut visited = Vec::new();
    let mut queue: VecDeque<&Node<K>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visited.push(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
    visited
}

/// `true` when both trees produce the same pre-order key sequence.
pub fn compare_pre_order<K: PartialEq>(a: &Tree<K>, b: &Tree<K>) -> bool {
    a.pre_order().eq(b.pre_order())
}

/// `true` when both trees produce the same in-order key sequence.
pub fn compare_in_order<K: PartialEq>(a: &Tree<K>, b: &Tree<K>) -> bool {
    a.in_order().eq(b.in_order())
}

/// `true` when both trees produce the same post-order key sequence.
pub fn compare_post_order<K: PartialEq>(a: &Tree<K>, b: &Tree<K>) -> bool {
    a.post_order().eq(b.post_order())
}
