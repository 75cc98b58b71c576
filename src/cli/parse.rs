//! Value parsers for CLI arguments

use airnet_core::format::OutputFormat;

/// Parse an output format name (human, json, records)
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
