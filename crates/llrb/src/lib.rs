//! Left-leaning red-black tree.
//!
//! A self-balancing binary search tree that encodes 2-3 tree nodes as red
//! links, with every red link leaning left. Insertion walks down to a leaf,
//! attaches a red link, and restores balance on the way back up with the
//! rotations and color flips of [`balance()`].

mod balance;
mod error;
mod node;
mod traverse;
mod tree;

pub use balance::{
    balance, fix_up, flip_colors, is_red, move_red_left, move_red_right, rotate_left, rotate_right,
};
pub use error::InvariantViolation;
pub use node::{Color, Key, Node, Side};
pub use traverse::{
    InOrder, PostOrder, PreOrder, compare_in_order, compare_post_order, compare_pre_order,
};
pub use tree::Tree;
