//! Traversal driver
//!
//! Pairs any [`GraphIterator`] with any [`Walker`] under one rule: pop a
//! candidate, skip it if already visited, mark and visit it, expand it
//! unless the walker killed the branch, and return early only when the
//! walker suspends. Every strategy shares this loop.

use serde::Serialize;

use crate::error::{Result, WalkError};
use crate::graph::control::{VisitControl, Walker};
use crate::graph::iterator::{CostIterator, GraphIterator};
use crate::graph::marks::Marks;
use crate::graph::types::{EdgeId, Graph, NodeId};
use crate::log_traversal_stats;

/// Why a `traverse()` call returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalStatus {
    /// The walker returned `Suspend`; call `traverse()` again to resume
    Suspended,
    /// The frontier is empty
    Exhausted,
}

/// Counters accumulated across every `traverse()` call of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Nodes handed to the walker
    pub visited: usize,
    /// Frontier pops discarded because the node was already visited
    pub skipped: usize,
    /// Visits answered with `KillBranch`
    pub pruned: usize,
    /// Visits answered with `Suspend`
    pub suspended: usize,
    /// Calls to `traverse()`
    pub traverse_calls: usize,
}

/// Resumable driver over one graph, one iterator and one walker
pub struct Traversal<'g, P, I, W> {
    graph: &'g Graph<P>,
    iterator: I,
    walker: W,
    marks: Marks,
    stats: TraversalStats,
    finished: bool,
}

impl<'g, P, I, W> Traversal<'g, P, I, W>
where
    I: GraphIterator<P>,
    W: Walker<P>,
{
    pub fn new(graph: &'g Graph<P>, iterator: I, walker: W) -> Self {
        Self {
            graph,
            iterator,
            walker,
            marks: Marks::new(graph.node_count()),
            stats: TraversalStats::default(),
            finished: false,
        }
    }

    pub fn init(&mut self) {
        self.iterator.init(self.graph, &self.marks);
    }

    pub fn set_source(&mut self, source: NodeId) -> Result<()> {
        if !self.graph.contains(source) {
            return Err(WalkError::unknown_node(source));
        }
        self.iterator.set_source(self.graph, source);
        self.finished = false;
        Ok(())
    }

    /// Run until the frontier drains or the walker suspends
    ///
    /// Calling this on an exhausted iterator does nothing.
    pub fn traverse(&mut self) -> TraversalStatus {
        self.stats.traverse_calls += 1;

        while self.iterator.has_next() {
            let Some(current) = self.iterator.next() else {
                break;
            };

            if !self.marks.visit(current) {
                self.stats.skipped += 1;
                continue;
            }
            self.stats.visited += 1;

            let node = self.graph.node(current);
            let control = self.walker.visit(node, &mut self.marks);
            tracing::trace!(node = %current, ?control, "visit");

            match control {
                VisitControl::Continue => {
                    self.iterator.cont(self.graph, current, &self.marks);
                }
                VisitControl::Suspend => {
                    self.iterator.cont(self.graph, current, &self.marks);
                    self.stats.suspended += 1;
                    tracing::debug!(
                        node = %current,
                        visited = self.stats.visited,
                        "traversal_suspended"
                    );
                    return TraversalStatus::Suspended;
                }
                VisitControl::KillBranch => {
                    self.stats.pruned += 1;
                    self.iterator.kill_branch(self.graph, current, &self.marks);
                }
            }
        }

        if !self.finished {
            self.finished = true;
            self.walker.finish();
            log_traversal_stats!(&self.stats, "traversal_complete");
        }
        TraversalStatus::Exhausted
    }

    /// Clear visited flags and count tags so the graph can be walked again
    ///
    /// The iterator keeps its own state; pair a reset with a fresh iterator
    /// (see [`Traversal::with_iterator`]) to start a new run.
    pub fn reset(&mut self) {
        self.marks.clear();
        self.stats = TraversalStats::default();
        self.finished = false;
    }

    /// Swap in a new iterator, keeping the walker and the marks
    pub fn with_iterator<J: GraphIterator<P>>(self, iterator: J) -> Traversal<'g, P, J, W> {
        Traversal {
            graph: self.graph,
            iterator,
            walker: self.walker,
            marks: self.marks,
            stats: self.stats,
            finished: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        !self.iterator.has_next()
    }

    pub fn graph(&self) -> &'g Graph<P> {
        self.graph
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    pub fn iterator(&self) -> &I {
        &self.iterator
    }

    pub fn walker(&self) -> &W {
        &self.walker
    }

    pub fn walker_mut(&mut self) -> &mut W {
        &mut self.walker
    }

    pub fn into_walker(self) -> W {
        self.walker
    }
}

impl<P, I, W> Traversal<'_, P, I, W>
where
    I: CostIterator<P>,
    W: Walker<P>,
{
    /// Final cost of a visited node
    pub fn cost(&self, node: NodeId) -> Result<f64> {
        self.iterator.cost(node, &self.marks)
    }

    /// Parent of a visited node on its cheapest known path
    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>> {
        self.iterator.parent(node, &self.marks)
    }

    /// Edge a visited node was reached through; `None` for sources
    pub fn via(&self, node: NodeId) -> Result<Option<EdgeId>> {
        self.iterator.via(node, &self.marks)
    }
}
