use serde::{Deserialize, Serialize};

/// Name used when a network file does not set one
pub const DEFAULT_NETWORK_NAME: &str = "Airport Transportation Network";

/// A network definition: node labels plus the undirected edge list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Explicit node count. Defaults to the number of airports, or to one
    /// past the largest edge endpoint when no airports are listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,

    #[serde(default)]
    pub airports: Vec<AirportConfig>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Display label for one node, indexed by position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportConfig {
    pub code: String,
    pub name: String,
}

/// Edge as written in a network file.
///
/// Fields are signed so that negative values can be reported as invalid
/// edges or weights instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub src: i64,
    pub dest: i64,
    pub weight: i64,
}

fn default_name() -> String {
    DEFAULT_NETWORK_NAME.to_string()
}

/// The built-in nine-airport network (flight times in minutes)
const BUILTIN_AIRPORTS: [(&str, &str); 9] = [
    ("SFO", "San Francisco"),
    ("LAX", "Los Angeles"),
    ("SEA", "Seattle"),
    ("DEN", "Denver"),
    ("PHX", "Phoenix"),
    ("DFW", "Dallas"),
    ("ORD", "Chicago"),
    ("ATL", "Atlanta"),
    ("JFK", "New York"),
];

const BUILTIN_EDGES: [(i64, i64, i64); 14] = [
    (0, 1, 8),
    (0, 2, 21),
    (1, 2, 6),
    (1, 3, 5),
    (1, 4, 4),
    (2, 7, 11),
    (2, 8, 8),
    (3, 4, 9),
    (5, 6, 10),
    (5, 7, 15),
    (5, 8, 5),
    (6, 7, 3),
    (6, 8, 7),
    (7, 8, 11),
];

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            name: default_name(),
            node_count: Some(BUILTIN_AIRPORTS.len()),
            airports: BUILTIN_AIRPORTS
                .iter()
                .map(|(code, name)| AirportConfig {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            edges: BUILTIN_EDGES
                .iter()
                .map(|&(src, dest, weight)| EdgeSpec { src, dest, weight })
                .collect(),
        }
    }
}
