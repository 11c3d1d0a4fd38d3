//! Depth-first traversal
//!
//! A stack frontier: the relation pushed last is popped first, so the whole
//! subtree behind one neighbour is walked before its earlier-pushed sibling.

use crate::graph::algos::shared::{FrontierIterator, Relations};
use crate::graph::frontier::Stack;

pub type DepthFirstIterator = FrontierIterator<Stack>;

/// Depth-first over every incident edge
pub fn depth_first() -> DepthFirstIterator {
    DepthFirstIterator::with_relations(Relations::All)
}

/// Depth-first following outgoing edges only
///
/// Starting at a node without outgoing edges visits that node alone.
pub fn directed_depth_first() -> DepthFirstIterator {
    DepthFirstIterator::with_relations(Relations::Outgoing)
}
