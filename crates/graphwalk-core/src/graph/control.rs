use crate::graph::marks::Marks;
use crate::graph::types::Node;

/// What a walker asks the driver to do after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    /// Expand the node and keep going
    Continue,
    /// Expand the node, then return from `traverse()` with all state kept
    Suspend,
    /// Do not expand the node; keep going with the rest of the frontier
    KillBranch,
}

/// Per-node callback driven by [`super::Traversal`]
///
/// The driver only looks at the returned [`VisitControl`]. The walker may
/// record anything it likes in the `count` tags of `marks`.
pub trait Walker<P> {
    fn visit(&mut self, node: &Node<P>, marks: &mut Marks) -> VisitControl;

    /// Called once when a `traverse()` call drains the frontier
    fn finish(&mut self) {}
}

impl<P, F> Walker<P> for F
where
    F: FnMut(&Node<P>, &mut Marks) -> VisitControl,
{
    fn visit(&mut self, node: &Node<P>, marks: &mut Marks) -> VisitControl {
        self(node, marks)
    }
}

/// Walker that records the visitation order and never interrupts
#[derive(Debug, Default, Clone)]
pub struct OrderWalker {
    order: Vec<crate::graph::NodeId>,
    finished: usize,
}

impl OrderWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self) -> &[crate::graph::NodeId] {
        &self.order
    }

    /// Number of times the driver reported a drained frontier
    pub fn finish_calls(&self) -> usize {
        self.finished
    }
}

impl<P> Walker<P> for OrderWalker {
    fn visit(&mut self, node: &Node<P>, _marks: &mut Marks) -> VisitControl {
        self.order.push(node.id());
        VisitControl::Continue
    }

    fn finish(&mut self) {
        self.finished += 1;
    }
}
