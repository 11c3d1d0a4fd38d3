//! Pending-work collections
//!
//! The discipline of the frontier is what tells one traversal strategy from
//! another: LIFO for depth-first, FIFO for breadth-first, lowest key first
//! for the cost-driven searches.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::graph::types::NodeId;

/// Shared push/pop surface of the unkeyed frontiers
pub trait Frontier: Default + std::fmt::Debug {
    fn push(&mut self, id: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier: later pushes pop first
#[derive(Debug, Default, Clone)]
pub struct Stack(Vec<NodeId>);

impl Frontier for Stack {
    fn push(&mut self, id: NodeId) {
        self.0.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// FIFO frontier: strict arrival order
#[derive(Debug, Default, Clone)]
pub struct Queue(VecDeque<NodeId>);

impl Frontier for Queue {
    fn push(&mut self, id: NodeId) {
        self.0.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Min-heap entry keyed by tentative cost
///
/// Equal keys fall back to the node id so pops are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeId,
    pub key: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Keyed frontier popping the lowest key first
///
/// Superseded entries are left in place; a node may sit in the heap several
/// times and the driver discards the stale pops once the node is visited.
#[derive(Debug, Default, Clone)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl PriorityFrontier {
    pub fn push(&mut self, node: NodeId, key: f64) {
        self.heap.push(Reverse(HeapEntry { node, key }));
    }

    pub fn pop(&mut self) -> Option<HeapEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn peek(&self) -> Option<&HeapEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut s = Stack::default();
        s.push(NodeId(1));
        s.push(NodeId(2));
        assert_eq!(s.pop(), Some(NodeId(2)));
        assert_eq!(s.pop(), Some(NodeId(1)));
        assert!(s.is_empty());
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut q = Queue::default();
        q.push(NodeId(1));
        q.push(NodeId(2));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some(NodeId(1)));
        q.clear();
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_heap_entry_ordering() {
        let a = HeapEntry {
            node: NodeId(5),
            key: 1.0,
        };
        let b = HeapEntry {
            node: NodeId(0),
            key: 2.0,
        };
        let c = HeapEntry {
            node: NodeId(2),
            key: 1.0,
        };
        assert_eq!(a.cmp(&b), Ordering::Less);
        // equal keys: lower id first
        assert_eq!(c.cmp(&a), Ordering::Less);
        assert_eq!(a, a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_priority_frontier_pops_lowest_key() {
        let mut pq = PriorityFrontier::default();
        pq.push(NodeId(3), 2.5);
        pq.push(NodeId(1), 0.5);
        pq.push(NodeId(2), 0.5);
        pq.push(NodeId(3), 1.0);
        assert_eq!(pq.peek().map(|e| e.node), Some(NodeId(1)));
        assert_eq!(pq.len(), 4);
        let order: Vec<NodeId> = std::iter::from_fn(|| pq.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![NodeId(1), NodeId(2), NodeId(3), NodeId(3)]);
    }
}
