use thiserror::Error;

use crate::node::Side;

/// A broken left-leaning red-black invariant.
///
/// `BlackLinkRotation` and `MissingChild` are raised as panics by the
/// balancing primitives: reaching them means the caller skipped the colour
/// checks that guard every rotation and flip. The remaining variants are
/// reported by [`Tree::validate`](crate::Tree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("can't rotate a black {side} link")]
    BlackLinkRotation { side: Side },

    #[error("can't flip colors without a {side} child")]
    MissingChild { side: Side },

    #[error("right-leaning red link")]
    RightLeaningRed,

    #[error("two red links in a row")]
    ConsecutiveRed,

    #[error("root link is red")]
    RedRoot,

    #[error("unbalanced black links: left {left}, right {right}")]
    BlackImbalance { left: usize, right: usize },

    #[error("in-order sequence decreases at position {position}")]
    OutOfOrder { position: usize },
}
