//! Search configuration.

use std::time::Duration;

/// Which incident edges may be travelled from a vertex.
///
/// Loaders store each physical connection as a forward and a reverse edge,
/// each with its own travel time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeTraversal {
    /// Any incident edge may be travelled from either endpoint, so both the
    /// forward and the reverse time of a connection are tried as parallel
    /// branches.
    #[default]
    Undirected,
    /// An edge is only travelled from the first endpoint given at insertion,
    /// so each direction uses exactly its own time.
    Forward,
}

impl EdgeTraversal {
    /// Returns `true` if an edge may be used from the queried endpoint.
    ///
    /// `forward` tells whether that endpoint is the edge's first endpoint.
    pub fn allows(self, forward: bool) -> bool {
        match self {
            EdgeTraversal::Undirected => true,
            EdgeTraversal::Forward => forward,
        }
    }
}

/// Configuration for the branch-and-bound search.
///
/// The defaults run a complete search with bound pruning enabled.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_orienteering::search::{EdgeTraversal, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_traversal(EdgeTraversal::Forward)
///     .with_max_nodes(1_000_000)
///     .with_time_budget(Duration::from_secs(30));
/// assert!(config.pruning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Skip branches whose optimistic bound cannot beat the best score.
    ///
    /// Disabling this never changes the result, only the work done.
    pub pruning: bool,

    /// Edge traversal rule.
    pub traversal: EdgeTraversal,

    /// Maximum number of search nodes to expand. 0 = no limit.
    pub max_nodes: u64,

    /// Wall-clock budget. `None` = no limit.
    pub time_budget: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            traversal: EdgeTraversal::default(),
            max_nodes: 0,
            time_budget: None,
        }
    }
}

impl SearchConfig {
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_traversal(mut self, traversal: EdgeTraversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_max_nodes(mut self, n: u64) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}
