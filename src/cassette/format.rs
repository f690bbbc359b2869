//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`"fs"` or `"shell"`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}
