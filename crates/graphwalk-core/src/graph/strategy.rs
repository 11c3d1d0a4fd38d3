use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WalkError;
use crate::graph::algos::{
    breadth_first, depth_first, directed_depth_first, BreadthFirstTopologicalIterator,
    DepthFirstTopologicalIterator, DijkstraIterator, EdgeWeight, NoBifurcationIterator,
};
use crate::graph::iterator::GraphIterator;

/// Source-driven traversal strategies selectable by name
///
/// A* is absent: it needs a target and a heuristic, so it is only reachable
/// through [`crate::graph::ShortestPathFinder::astar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    DepthFirst,
    DirectedDepthFirst,
    #[default]
    BreadthFirst,
    BreadthFirstTopological,
    DepthFirstTopological,
    NoBifurcation,
    Dijkstra,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::DepthFirst,
        Strategy::DirectedDepthFirst,
        Strategy::BreadthFirst,
        Strategy::BreadthFirstTopological,
        Strategy::DepthFirstTopological,
        Strategy::NoBifurcation,
        Strategy::Dijkstra,
    ];

    pub const NAMES: [&'static str; 7] = [
        "depth-first",
        "directed-depth-first",
        "breadth-first",
        "breadth-first-topological",
        "depth-first-topological",
        "no-bifurcation",
        "dijkstra",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::DirectedDepthFirst => "directed-depth-first",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::BreadthFirstTopological => "breadth-first-topological",
            Strategy::DepthFirstTopological => "depth-first-topological",
            Strategy::NoBifurcation => "no-bifurcation",
            Strategy::Dijkstra => "dijkstra",
        }
    }

    /// Topological peeling seeds itself and ignores sources
    pub fn needs_source(self) -> bool {
        !matches!(
            self,
            Strategy::BreadthFirstTopological | Strategy::DepthFirstTopological
        )
    }

    /// A fresh iterator for this strategy; Dijkstra weighs edges by their stored weight
    pub fn iterator<P>(self) -> Box<dyn GraphIterator<P>> {
        match self {
            Strategy::DepthFirst => Box::new(depth_first()),
            Strategy::DirectedDepthFirst => Box::new(directed_depth_first()),
            Strategy::BreadthFirst => Box::new(breadth_first()),
            Strategy::BreadthFirstTopological => Box::new(BreadthFirstTopologicalIterator::new()),
            Strategy::DepthFirstTopological => Box::new(DepthFirstTopologicalIterator::new()),
            Strategy::NoBifurcation => Box::new(NoBifurcationIterator::new()),
            Strategy::Dijkstra => Box::new(DijkstraIterator::new(EdgeWeight)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = WalkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| WalkError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, GraphBuilder, NodeId, OrderWalker, Traversal};

    #[test]
    fn test_names_round_trip() {
        for (strategy, name) in Strategy::ALL.iter().zip(Strategy::NAMES) {
            assert_eq!(strategy.as_str(), name);
            assert_eq!(name.parse::<Strategy>().unwrap(), *strategy);
        }
        assert_eq!(
            " Breadth-First ".parse::<Strategy>().unwrap(),
            Strategy::BreadthFirst
        );
    }

    #[test]
    fn test_unknown_name() {
        let err = "sideways".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, WalkError::UnknownStrategy(ref s) if s == "sideways"));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Strategy::NoBifurcation).unwrap();
        assert_eq!(json, "\"no-bifurcation\"");
        let parsed: Strategy = serde_json::from_str("\"depth-first-topological\"").unwrap();
        assert_eq!(parsed, Strategy::DepthFirstTopological);
    }

    #[test]
    fn test_every_strategy_walks_a_chain() {
        let g: Graph<()> = GraphBuilder::chain(5, false);
        for strategy in Strategy::ALL {
            let mut t = Traversal::new(&g, strategy.iterator(), OrderWalker::new());
            t.init();
            if strategy.needs_source() {
                t.set_source(NodeId(0)).unwrap();
            }
            t.traverse();
            assert_eq!(t.marks().visited_count(), 5, "{strategy}");
        }
    }
}
