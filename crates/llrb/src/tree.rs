use std::fmt;

use tracing::debug;

use crate::balance::{self, is_red};
use crate::error::InvariantViolation;
use crate::node::{Color, Key, Link, Node};
use crate::traverse::{self, InOrder, PostOrder, PreOrder};

/// Left-leaning red-black tree.
///
/// Keys are not deduplicated: inserting a key equivalent to a stored one adds
/// another node, routed to the left of the stored key.
#[derive(Debug, Clone)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> Tree<K> {
    /// A one-node tree holding `root_key` under a black link.
    pub fn new(root_key: K) -> Self {
        Self {
            root: Some(Box::new(Node::new(root_key).with_color(Color::Black))),
            len: 1,
        }
    }

    pub fn empty() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn height<K>(node: Option<&Node<K>>) -> usize {
            node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
        }
        height(self.root())
    }

    /// Leftmost node.
    pub fn min(&self) -> Option<&Node<K>> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node)
    }

    /// Rightmost node.
    pub fn max(&self) -> Option<&Node<K>> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node)
    }

    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Every node in breadth-first order, collected eagerly.
    pub fn level_order(&self) -> Vec<&Node<K>> {
        traverse::level_order(self.root())
    }
}

impl<K: Key> Tree<K> {
    /// Inserts the key carried by `node` as a new red leaf and rebalances
    /// the path back to the root. The node's color and children are not
    /// carried over.
    pub fn insert(&mut self, node: Node<K>) {
        let node = Box::new(Node::new(node.into_key()));
        let previous_root = self.root().map(|n| n as *const Node<K>);

        let mut root = balance::insert(self.root.take(), node);
        root.color = Color::Black;
        self.len += 1;

        if previous_root.is_some_and(|p| !std::ptr::eq(p, &*root)) {
            debug!(len = self.len, "root replaced during rebalancing");
        }
        self.root = Some(root);
    }

    pub fn insert_key(&mut self, key: K) {
        self.insert(Node::new(key));
    }

    /// First node on the search path whose key is equivalent to `key`.
    pub fn search(&self, key: &K) -> Option<&Node<K>> {
        let mut cur = self.root();
        while let Some(node) = cur {
            if node.key.less(key) {
                cur = node.right();
            } else if key.less(&node.key) {
                cur = node.left();
            } else {
                return Some(node);
            }
        }
        None
    }

    /// Parent of the node [`search`](Self::search) would return.
    ///
    /// `None` both when the key is absent and when it matches at the root.
    pub fn search_parent(&self, key: &K) -> Option<&Node<K>> {
        let mut parent = None;
        let mut cur = self.root();
        while let Some(node) = cur {
            if node.key.less(key) {
                parent = Some(node);
                cur = node.right();
            } else if key.less(&node.key) {
                parent = Some(node);
                cur = node.left();
            } else {
                return parent;
            }
        }
        None
    }

    /// Depth-first scan of the whole tree for nodes equivalent to `key`.
    ///
    /// Matches are reported in pre-order. The scan does not descend below a
    /// matching node, so equivalent keys stored underneath it are not listed.
    pub fn search_all(&self, key: &K) -> Vec<&Node<K>> {
        let mut found = Vec::new();
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            if !node.key.less(key) && !key.less(&node.key) {
                found.push(node);
                continue;
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }
        found
    }

    /// Checks every left-leaning red-black invariant and returns the number
    /// of black links on each root-to-leaf path.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        if is_red(self.root()) {
            return Err(InvariantViolation::RedRoot);
        }
        let black_height = check_links(self.root())?;

        let mut prev: Option<&K> = None;
        for (position, key) in self.in_order().enumerate() {
            if let Some(prev) = prev {
                if key.less(prev) {
                    return Err(InvariantViolation::OutOfOrder { position });
                }
            }
            prev = Some(key);
        }
        Ok(black_height)
    }
}

fn check_links<K>(node: Option<&Node<K>>) -> Result<usize, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };
    if is_red(node.right()) {
        return Err(InvariantViolation::RightLeaningRed);
    }
    if node.is_red() && is_red(node.left()) {
        return Err(InvariantViolation::ConsecutiveRed);
    }
    let left = check_links(node.left())?;
    let right = check_links(node.right())?;
    if left != right {
        return Err(InvariantViolation::BlackImbalance { left, right });
    }
    Ok(left + usize::from(node.is_black()))
}

impl<K: Key> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert_key(key);
        }
    }
}

impl<K: Key> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::empty();
        tree.extend(iter);
        tree
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{root}"),
            None => f.write_str("[]"),
        }
    }
}
