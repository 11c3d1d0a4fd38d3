//! Per-run visitation side table
//!
//! Visited flags and walker count tags are kept here, keyed by node id,
//! instead of on the graph elements themselves. Flags only ever go from
//! unset to set during a run; [`Marks::clear`] is the single reset point.

use crate::graph::types::NodeId;

#[derive(Debug, Clone, Default)]
pub struct Marks {
    visited: Vec<bool>,
    count: Vec<i64>,
    visited_count: usize,
}

impl Marks {
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            count: vec![0; node_count],
            visited_count: 0,
        }
    }

    /// Ids outside the table read as unvisited
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.get(id.0).copied().unwrap_or(false)
    }

    /// Set the visited flag, returning false if it was already set
    pub(crate) fn visit(&mut self, id: NodeId) -> bool {
        match self.visited.get_mut(id.0) {
            Some(flag) if !*flag => {
                *flag = true;
                self.visited_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Visited ids in ascending order
    pub fn visited(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| NodeId(i))
    }

    pub fn count(&self, id: NodeId) -> i64 {
        self.count.get(id.0).copied().unwrap_or(0)
    }

    pub fn set_count(&mut self, id: NodeId, value: i64) {
        if let Some(slot) = self.count.get_mut(id.0) {
            *slot = value;
        }
    }

    pub fn clear(&mut self) {
        self.visited.iter_mut().for_each(|v| *v = false);
        self.count.iter_mut().for_each(|c| *c = 0);
        self.visited_count = 0;
    }
}
