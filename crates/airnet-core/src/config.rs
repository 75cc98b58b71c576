//! Network configuration for airnet
//!
//! A network is a TOML file with a name, optional node count, airport labels
//! and an edge list. Without one, the built-in nine-airport network is used.

pub mod types;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_config;
use crate::error::{AirnetError, Result};
use crate::graph::{Edge, Graph, NodeId, Weight};

pub use types::{AirportConfig, EdgeSpec, NetworkConfig, DEFAULT_NETWORK_NAME};

/// Environment variable naming an explicit network file
pub const NETWORK_ENV_VAR: &str = "AIRNET_NETWORK";
/// Environment variable overriding the per-user config directory
pub const CONFIG_DIR_ENV_VAR: &str = "AIRNET_CONFIG_DIR";
/// Network file picked up from the working directory
pub const LOCAL_NETWORK_FILE: &str = "airnet.toml";

const CONFIG_DIR: &str = "airnet";
const CONFIG_FILE: &str = "network.toml";

/// Where a loaded network came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    Flag(PathBuf),
    Env(PathBuf),
    Local(PathBuf),
    User(PathBuf),
    Builtin,
}

impl fmt::Display for NetworkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkSource::Flag(p) => write!(f, "--network {}", p.display()),
            NetworkSource::Env(p) => write!(f, "{} ({})", NETWORK_ENV_VAR, p.display()),
            NetworkSource::Local(p) | NetworkSource::User(p) => write!(f, "{}", p.display()),
            NetworkSource::Builtin => write!(f, "built-in network"),
        }
    }
}

impl EdgeSpec {
    /// Convert to a graph edge, rejecting negative endpoints and weights that
    /// are negative or wider than [`Weight`]
    pub fn to_edge(&self, node_count: usize) -> Result<Edge> {
        let (Ok(src), Ok(dest)) = (usize::try_from(self.src), usize::try_from(self.dest)) else {
            return Err(AirnetError::invalid_edge(self.src, self.dest, node_count));
        };
        let Ok(weight) = Weight::try_from(self.weight) else {
            return Err(AirnetError::InvalidWeight {
                src: self.src,
                dest: self.dest,
                weight: self.weight,
            });
        };
        Ok(Edge { src, dest, weight })
    }
}

impl NetworkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AirnetError::Other(format!(
                "failed to read network from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: NetworkConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), edges = config.edges.len(), "network_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load the network: explicit path, then `AIRNET_NETWORK`, then
    /// `./airnet.toml`, then the user config directory, then the built-in one.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, NetworkSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, NetworkSource::Flag(path.to_path_buf())));
        }

        if let Some(path) = std::env::var_os(NETWORK_ENV_VAR).map(PathBuf::from) {
            return Ok((Self::load(&path)?, NetworkSource::Env(path)));
        }

        let local = PathBuf::from(LOCAL_NETWORK_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, NetworkSource::Local(local)));
        }

        if let Some(user) = user_network_path().filter(|p| p.is_file()) {
            return Ok((Self::load(&user)?, NetworkSource::User(user)));
        }

        Ok((Self::default(), NetworkSource::Builtin))
    }

    /// Structural checks that do not depend on building the graph
    pub fn validate(&self) -> Result<()> {
        if let Some(n) = self.node_count {
            if !self.airports.is_empty() && self.airports.len() != n {
                bail_config!(format!(
                    "node_count is {} but {} airports are listed",
                    n,
                    self.airports.len()
                ));
            }
        }

        for (i, airport) in self.airports.iter().enumerate() {
            if airport.code.trim().is_empty() {
                bail_config!(format!("airport {} has an empty code", i));
            }
            let dup = self.airports[..i]
                .iter()
                .any(|other| other.code.eq_ignore_ascii_case(&airport.code));
            if dup {
                bail_config!(format!("duplicate airport code {}", airport.code));
            }
        }

        Ok(())
    }

    /// Number of nodes the graph will have
    pub fn resolved_node_count(&self) -> usize {
        if let Some(n) = self.node_count {
            return n;
        }
        if !self.airports.is_empty() {
            return self.airports.len();
        }
        self.edges
            .iter()
            .flat_map(|e| [e.src, e.dest])
            .filter_map(|n| usize::try_from(n).ok())
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Edge list converted to graph edges
    pub fn graph_edges(&self) -> Result<Vec<Edge>> {
        let node_count = self.resolved_node_count();
        self.edges
            .iter()
            .map(|spec| spec.to_edge(node_count))
            .collect()
    }

    /// Build the immutable graph for this network
    pub fn to_graph(&self) -> Result<Graph> {
        Graph::build(&self.graph_edges()?, self.resolved_node_count())
    }

    pub fn code(&self, node: NodeId) -> Option<&str> {
        self.airports.get(node).map(|a| a.code.as_str())
    }

    /// Human-readable label, e.g. `SFO - San Francisco`
    pub fn label(&self, node: NodeId) -> String {
        match self.airports.get(node) {
            Some(a) => format!("{} - {}", a.code, a.name),
            None => format!("node {}", node),
        }
    }

    /// Resolve a node reference: an index, or an airport code (any case)
    pub fn resolve_node(&self, reference: &str) -> Result<NodeId> {
        let reference = reference.trim();
        if let Ok(index) = reference.parse::<NodeId>() {
            return Ok(index);
        }
        self.airports
            .iter()
            .position(|a| a.code.eq_ignore_ascii_case(reference))
            .ok_or_else(|| AirnetError::UnknownNode(reference.to_string()))
    }
}

/// Per-user network file: `$AIRNET_CONFIG_DIR/network.toml` or
/// `<config dir>/airnet/network.toml`
pub fn user_network_path() -> Option<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
