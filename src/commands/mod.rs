//! Command implementations for airnet
//!
//! Every command writes to a caller-supplied writer so the interactive menu
//! can reuse them.

pub mod dispatch;
pub mod menu;
pub mod mst;
pub mod network;
pub mod paths;
pub mod traverse;

use serde::Serialize;

use airnet_core::config::NetworkConfig;
use airnet_core::error::Result;
use airnet_core::format::OutputFormat;
use airnet_core::graph::{Graph, NodeId};

/// Loaded network plus output settings, shared by all commands
pub struct Session {
    pub config: NetworkConfig,
    pub graph: Graph,
    pub format: OutputFormat,
}

impl Session {
    pub fn new(config: NetworkConfig, format: OutputFormat) -> Result<Self> {
        let graph = config.to_graph()?;
        Ok(Self {
            config,
            graph,
            format,
        })
    }

    pub fn resolve(&self, reference: &str) -> Result<NodeId> {
        self.config.resolve_node(reference)
    }

    /// Short display name: airport code, or the index when unlabeled
    pub fn short_name(&self, node: NodeId) -> String {
        self.config
            .code(node)
            .map_or_else(|| node.to_string(), str::to_string)
    }

    pub fn node_ref(&self, node: NodeId) -> NodeRef {
        NodeRef {
            index: node,
            code: self.config.code(node).map(str::to_string),
            label: self.config.label(node),
        }
    }
}

/// Node as it appears in JSON output
#[derive(Debug, Serialize)]
pub struct NodeRef {
    pub index: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub label: String,
}
