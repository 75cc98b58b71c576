use crate::error::{AirnetError, Result};
use crate::graph::types::NodeId;
use crate::graph::GraphProvider;

/// Reject a start node outside `[0, node_count)` before any state is allocated
pub fn check_start(provider: &dyn GraphProvider, start: NodeId) -> Result<()> {
    let node_count = provider.node_count();
    if start < node_count {
        Ok(())
    } else {
        Err(AirnetError::InvalidStartNode {
            node: start,
            node_count,
        })
    }
}

/// Per-call visited set indexed by node
#[derive(Debug, Clone)]
pub struct Visited(Vec<bool>);

impl Visited {
    pub fn new(node_count: usize) -> Self {
        Self(vec![false; node_count])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0[node]
    }

    /// Mark `node`; returns false if it was already marked
    pub fn insert(&mut self, node: NodeId) -> bool {
        !std::mem::replace(&mut self.0[node], true)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&v| v).count()
    }
}
