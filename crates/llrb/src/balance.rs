//! Rotations, color flips and the local fix-up rules of a left-leaning
//! red-black tree.
//!
//! Every function takes ownership of the subtree it restructures and hands
//! back the node now at its top, so callers re-link the result into the
//! slot they took it from.

use tracing::trace;

use crate::error::InvariantViolation;
use crate::node::{Color, Key, Link, Node, Side};

fn violated(violation: InvariantViolation) -> ! {
    panic!("{violation}")
}

/// Absent links are black.
pub fn is_red<K>(node: Option<&Node<K>>) -> bool {
    node.is_some_and(Node::is_red)
}

fn is_left_left_red<K>(h: &Node<K>) -> bool {
    is_red(h.left()) && is_red(h.left().and_then(Node::left))
}

/// Turns a red right link into a red left link.
///
/// Panics if the right link of `h` is black or absent.
pub fn rotate_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let mut x = match h.right.take() {
        Some(x) if x.is_red() => x,
        _ => violated(InvariantViolation::BlackLinkRotation { side: Side::Right }),
    };
    trace!("rotate left");
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.left = Some(h);
    x
}

/// Turns a red left link into a red right link.
///
/// Panics if the left link of `h` is black or absent.
pub fn rotate_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let mut x = match h.left.take() {
        Some(x) if x.is_red() => x,
        _ => violated(InvariantViolation::BlackLinkRotation { side: Side::Left }),
    };
    trace!("rotate right");
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.right = Some(h);
    x
}

/// Toggles the color of `h` and of both of its children.
///
/// Panics unless both children are present.
pub fn flip_colors<K>(h: &mut Node<K>) {
    if h.left.is_none() {
        violated(InvariantViolation::MissingChild { side: Side::Left });
    }
    if h.right.is_none() {
        violated(InvariantViolation::MissingChild { side: Side::Right });
    }
    trace!("flip colors");
    h.color = h.color.flip();
    for child in [h.left.as_deref_mut(), h.right.as_deref_mut()]
        .into_iter()
        .flatten()
    {
        child.color = child.color.flip();
    }
}

/// Restores the local invariants at `h` after one of its subtrees changed.
///
/// 1. red right link and black left link: rotate left;
/// 2. two red left links in a row: rotate right;
/// 3. both links red: flip colors.
///
/// Each rule looks at the node as the previous rule left it.
pub fn balance<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    if is_red(h.right()) && !is_red(h.left()) {
        h = rotate_left(h);
    }
    if is_left_left_red(&h) {
        h = rotate_right(h);
    }
    if is_red(h.left()) && is_red(h.right()) {
        flip_colors(&mut h);
    }
    h
}

/// Like [`balance`], but rotates any red right link regardless of the left
/// link. This is the variant a deletion walk applies on its way back up.
pub fn fix_up<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    if is_red(h.right()) {
        h = rotate_left(h);
    }
    if is_left_left_red(&h) {
        h = rotate_right(h);
    }
    if is_red(h.left()) && is_red(h.right()) {
        flip_colors(&mut h);
    }
    h
}

/// Borrows a red link from the right subtree so that the left child (or one
/// of its children) becomes red. Both children must be present.
pub fn move_red_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    flip_colors(&mut h);
    if is_red(h.right().and_then(Node::left)) {
        h.right = h.right.take().map(rotate_right);
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Borrows a red link from the left subtree so that the right child (or one
/// of its children) becomes red. Both children must be present.
pub fn move_red_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    flip_colors(&mut h);
    if is_red(h.left().and_then(Node::left)) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}

/// Attaches `node` below `h` and balances every node on the way back up.
///
/// Equal keys go left: the walk only turns right when the current key is
/// strictly less than the new one.
pub(crate) fn insert<K: Key>(h: Link<K>, node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut h) = h else {
        return node;
    };
    if h.key.less(&node.key) {
        h.right = Some(insert(h.right.take(), node));
    } else {
        h.left = Some(insert(h.left.take(), node));
    }
    balance(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black<K>(key: K) -> Node<K> {
        Node::new(key).with_color(Color::Black)
    }

    fn shape<K: Copy>(node: Option<&Node<K>>) -> Option<(K, Color)> {
        node.map(|n| (*n.key(), n.color()))
    }

    #[test]
    fn absent_links_are_black() {
        assert!(!is_red::<u32>(None));
        assert!(is_red(Some(&Node::new(1))));
        assert!(!is_red(Some(&black(1))));
    }

    #[test]
    fn rotate_left_swaps_parent_and_right_child() {
        let h = Box::new(
            black(2)
                .with_left(black(1))
                .with_right(Node::new(4).with_left(black(3)).with_right(black(5))),
        );
        let x = rotate_left(h);
        assert_eq!(shape(Some(&x)), Some((4, Color::Black)));
        assert_eq!(shape(x.left()), Some((2, Color::Red)));
        assert_eq!(shape(x.right()), Some((5, Color::Black)));
        let h = x.left().unwrap();
        assert_eq!(shape(h.left()), Some((1, Color::Black)));
        assert_eq!(shape(h.right()), Some((3, Color::Black)));
    }

    #[test]
    fn rotate_right_swaps_parent_and_left_child() {
        let h = Box::new(
            Node::new(4)
                .with_left(Node::new(2).with_left(black(1)).with_right(black(3)))
                .with_right(black(5)),
        );
        let x = rotate_right(h);
        assert_eq!(shape(Some(&x)), Some((2, Color::Red)));
        assert_eq!(shape(x.left()), Some((1, Color::Black)));
        assert_eq!(shape(x.right()), Some((4, Color::Red)));
        let h = x.right().unwrap();
        assert_eq!(shape(h.left()), Some((3, Color::Black)));
        assert_eq!(shape(h.right()), Some((5, Color::Black)));
    }

    #[test]
    #[should_panic(expected = "can't rotate a black right link")]
    fn rotate_left_rejects_black_link() {
        rotate_left(Box::new(black(1).with_right(black(2))));
    }

    #[test]
    #[should_panic(expected = "can't rotate a black right link")]
    fn rotate_left_rejects_missing_link() {
        rotate_left(Box::new(black(1).with_left(Node::new(0))));
    }

    #[test]
    #[should_panic(expected = "can't rotate a black left link")]
    fn rotate_right_rejects_black_link() {
        rotate_right(Box::new(black(2).with_left(black(1))));
    }

    #[test]
    #[should_panic(expected = "can't flip colors without a right child")]
    fn flip_requires_both_children() {
        let mut h = black(2).with_left(Node::new(1));
        flip_colors(&mut h);
    }

    #[test]
    fn flip_toggles_three_links() {
        let mut h = black(2).with_left(Node::new(1)).with_right(Node::new(3));
        flip_colors(&mut h);
        assert!(h.is_red());
        assert!(h.left().unwrap().is_black());
        assert!(h.right().unwrap().is_black());
    }

    #[test]
    fn balance_leans_single_red_left() {
        let h = balance(Box::new(black(1).with_right(Node::new(2))));
        assert_eq!(shape(Some(&h)), Some((2, Color::Black)));
        assert_eq!(shape(h.left()), Some((1, Color::Red)));
        assert!(h.right().is_none());
    }

    #[test]
    fn balance_splits_left_left_reds() {
        let h = balance(Box::new(
            black(3).with_left(Node::new(2).with_left(Node::new(1))),
        ));
        assert_eq!(shape(Some(&h)), Some((2, Color::Red)));
        assert_eq!(shape(h.left()), Some((1, Color::Black)));
        assert_eq!(shape(h.right()), Some((3, Color::Black)));
    }

    #[test]
    fn balance_applies_rules_bottom_up() {
        // Only the node itself is examined: a red right grandchild is left
        // for the child's own balance call.
        let h = balance(Box::new(
            black(3).with_left(Node::new(1).with_right(Node::new(2))),
        ));
        assert_eq!(shape(Some(&h)), Some((3, Color::Black)));

        let child = balance(Box::new(Node::new(1).with_right(Node::new(2))));
        assert_eq!(shape(Some(&child)), Some((2, Color::Red)));
        let h = balance(Box::new(black(3).with_left(*child)));
        assert_eq!(shape(Some(&h)), Some((2, Color::Red)));
        assert_eq!(shape(h.left()), Some((1, Color::Black)));
        assert_eq!(shape(h.right()), Some((3, Color::Black)));
    }

    #[test]
    fn balance_leaves_valid_node_alone() {
        let h = balance(Box::new(black(2).with_left(Node::new(1))));
        assert_eq!(shape(Some(&h)), Some((2, Color::Black)));
        assert_eq!(shape(h.left()), Some((1, Color::Red)));
    }

    #[test]
    fn fix_up_rotates_right_red_even_with_red_left() {
        let h = fix_up(Box::new(
            black(2).with_left(Node::new(1)).with_right(Node::new(3)),
        ));
        assert_eq!(shape(Some(&h)), Some((2, Color::Red)));
        assert_eq!(shape(h.left()), Some((1, Color::Black)));
        assert_eq!(shape(h.right()), Some((3, Color::Black)));

        let h = fix_up(Box::new(black(1).with_right(Node::new(2))));
        assert_eq!(shape(Some(&h)), Some((2, Color::Black)));
        assert_eq!(shape(h.left()), Some((1, Color::Red)));
    }

    #[test]
    fn move_red_left_borrows_from_right_sibling() {
        let h = Box::new(
            black(2)
                .with_left(black(1))
                .with_right(black(4).with_left(Node::new(3))),
        );
        let h = move_red_left(h);
        assert_eq!(shape(Some(&h)), Some((3, Color::Black)));
        assert_eq!(shape(h.right()), Some((4, Color::Black)));
        let left = h.left().unwrap();
        assert_eq!(shape(Some(left)), Some((2, Color::Black)));
        assert_eq!(shape(left.left()), Some((1, Color::Red)));
        assert!(left.right().is_none());
    }

    #[test]
    fn move_red_left_without_red_nephew_only_flips() {
        let h = move_red_left(Box::new(black(2).with_left(black(1)).with_right(black(3))));
        assert_eq!(shape(Some(&h)), Some((2, Color::Red)));
        assert_eq!(shape(h.left()), Some((1, Color::Red)));
        assert_eq!(shape(h.right()), Some((3, Color::Red)));
    }

    #[test]
    fn move_red_right_borrows_from_left_sibling() {
        let h = Box::new(
            black(3)
                .with_left(black(2).with_left(Node::new(1)))
                .with_right(black(4)),
        );
        let h = move_red_right(h);
        assert_eq!(shape(Some(&h)), Some((2, Color::Black)));
        assert_eq!(shape(h.left()), Some((1, Color::Black)));
        let right = h.right().unwrap();
        assert_eq!(shape(Some(right)), Some((3, Color::Black)));
        assert_eq!(shape(right.right()), Some((4, Color::Red)));
        assert!(right.left().is_none());
    }

    #[test]
    fn insert_routes_equal_keys_left() {
        let root = insert(None, Box::new(black(5)));
        let root = insert(Some(root), Box::new(Node::new(5)));
        assert_eq!(shape(Some(&root)), Some((5, Color::Black)));
        assert_eq!(shape(root.left()), Some((5, Color::Red)));
        assert!(root.right().is_none());
    }
}
