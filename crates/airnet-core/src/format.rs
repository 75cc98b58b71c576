//! Output formats for airnet commands
//!
//! Every command renders the same result three ways:
//! - human: labelled lines such as `SFO -> JFK : 22`, with `inf` for
//!   unreachable airports
//! - json: one pretty-printed document on stdout; errors become a
//!   `{"error": ...}` envelope on stderr
//! - records: tagged lines (see [`crate::records`]) for shell pipelines

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AirnetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Records,
}

impl OutputFormat {
    /// Every format, in the order shown by `--help`
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Human,
        OutputFormat::Json,
        OutputFormat::Records,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Records => "records",
        }
    }

    /// Errors go to stderr as JSON instead of `error: ...` text
    pub fn structured_errors(self) -> bool {
        self == OutputFormat::Json
    }
}

impl FromStr for OutputFormat {
    type Err = AirnetError;

    /// Case-insensitive: `JSON` and `json` are the same format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| AirnetError::UnknownFormat(name.to_lowercase()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
