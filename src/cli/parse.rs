use graphwalk_core::config::PathAlgorithm;
use graphwalk_core::graph::Strategy;

/// Parse traversal strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse path algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<PathAlgorithm, String> {
    s.parse::<PathAlgorithm>().map_err(|e| e.to_string())
}
