use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted when `RUST_LOG` is unset
pub const LOG_ENV_VAR: &str = "GRAPHWALK_LOG";

/// Log [`crate::graph::TraversalStats`] at debug level.
///
/// Usage:
/// ```rust,ignore
/// log_traversal_stats!(&traversal.stats(), "traversal_complete");
/// ```
#[macro_export]
macro_rules! log_traversal_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            visited = $stats.visited,
            skipped = $stats.skipped,
            pruned = $stats.pruned,
            suspended = $stats.suspended,
            traverse_calls = $stats.traverse_calls,
            "traversal_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging on stderr
///
/// `--log-level` wins over `--verbose`; both lose to `RUST_LOG` or
/// `GRAPHWALK_LOG` when either is set.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };
    init_with_level(level, log_json)
}

/// Filter directive for a bare level or a full directive string
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        // prefix match: covers graphwalk_core as well
        format!("graphwalk={}", level)
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_scopes_bare_levels() {
        assert_eq!(directive("trace"), "graphwalk=trace");
        assert_eq!(directive("graphwalk_core=debug"), "graphwalk_core=debug");
    }

    #[test]
    fn test_stats_macro_accepts_stats() {
        let stats = crate::graph::TraversalStats::default();
        log_traversal_stats!(&stats, "noop");
        let start = std::time::Instant::now();
        trace_time!(start, "noop", visited = stats.visited);
    }
}
