use crate::graph::algos::shared::{FrontierIterator, Relations};
use crate::graph::frontier::Queue;

/// Level-order traversal over a FIFO frontier
pub type BreadthFirstIterator = FrontierIterator<Queue>;

pub fn breadth_first() -> BreadthFirstIterator {
    BreadthFirstIterator::with_relations(Relations::All)
}
