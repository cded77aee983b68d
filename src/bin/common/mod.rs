// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;
use uacodec::DecodingOptions;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load decoding limits, falling back to defaults without a config file.
pub fn load_options(path: Option<&Path>) -> Result<DecodingOptions> {
    match path {
        Some(path) => Ok(DecodingOptions::load(path)?),
        None => Ok(DecodingOptions::default()),
    }
}

/// Parse hex input. Whitespace and an optional `0x` prefix are ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&digits).map_err(|e| anyhow::anyhow!("Invalid hex input: {e}"))
}

/// Parse a timestamp.
///
/// Accepts:
/// - RFC 3339: "2018-09-17T14:28:29.112Z"
/// - Unix timestamp in seconds: "1537194509"
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(secs) = s.parse::<i64>() {
        if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, 0) {
            return Ok(dt);
        }
    }
    Err(anyhow::anyhow!("Invalid timestamp: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x0d0a").unwrap(), vec![0x0d, 0x0a]);
        assert_eq!(parse_hex(" 02 00\n00 00 ").unwrap(), vec![2, 0, 0, 0]);
        assert!(parse_hex("0g").is_err());
    }

    #[test]
    fn test_parse_timestamp() {
        let dt = parse_timestamp("2018-09-17T14:28:29.112Z").unwrap();
        assert_eq!(dt.timestamp_millis(), 1_537_194_509_112);
        assert_eq!(parse_timestamp("0").unwrap().timestamp(), 0);
        assert!(parse_timestamp("yesterday").is_err());
    }
}
