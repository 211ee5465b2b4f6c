//! JSON envelope for `--format json`
//!
//! Script-facing output wraps the payload under `data` and puts run
//! information under `meta`, so consumers can pin the CLI version a response
//! came from.

use chrono::Utc;
use serde::Serialize;

/// Envelope printed in JSON mode
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The payload, exactly as the portal returned it
    pub data: T,

    /// Information about this run of the CLI
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC3339 instant the output was produced
    pub timestamp: String,

    /// CLI version that produced it
    pub version: String,
}

impl Metadata {
    fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata::now(),
        }
    }
}

/// Wrap a payload in the envelope and pretty-print it
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
