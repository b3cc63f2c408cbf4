use std::fmt;

/// Ordering used by the tree: a single strict less-than comparison.
///
/// Two keys are equivalent when neither is less than the other. Any
/// `PartialOrd` type is a key.
pub trait Key {
    fn less(&self, other: &Self) -> bool;
}

impl<T: PartialOrd> Key for T {
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

/// Color of the link from a node's parent to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// One vertex of the tree. Owns its key and both child subtrees.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// A detached node. New links are always red.
    pub fn new(key: K) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_left(mut self, left: Node<K>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: Node<K>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }
}

/// Nested bracket dump: `[left key(black) right]`, children omitted when absent.
impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if let Some(left) = self.left() {
            write!(f, "{left} ")?;
        }
        write!(f, "{}({})", self.key, self.is_black())?;
        if let Some(right) = self.right() {
            write!(f, " {right}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_nodes_are_red() {
        let node = Node::new(7);
        assert!(node.is_red());
        assert!(!node.is_black());
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert_eq!(node.into_key(), 7);
    }

    #[test]
    fn key_uses_strict_less() {
        assert!(1.0_f64.less(&2.0));
        assert!(!2.0_f64.less(&2.0));
        assert!(!"b".less(&"a"));
        assert_eq!(Color::Red.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::Red);
    }

    #[test]
    fn dump_nests_children() {
        let node = Node::new(3)
            .with_color(Color::Black)
            .with_left(Node::new(1).with_color(Color::Black))
            .with_right(
                Node::new(13)
                    .with_color(Color::Black)
                    .with_left(Node::new(9)),
            );
        assert_eq!(node.to_string(), "[[1(true)] 3(true) [[9(false)] 13(true)]]");
        assert_eq!(Node::new("x").to_string(), "[x(false)]");
    }
}
