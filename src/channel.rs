// Channel model
// The single entity managed by this API, persisted as a JSON array on disk.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An IPTV channel record.
///
/// `name` acts as the identifier for deletion; uniqueness is not enforced on
/// insert, so a delete removes every record carrying the given name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    /// Stream URL; must start with the literal prefix `http`.
    pub url: String,
    /// Stream type, e.g. `dash` or `hls`.
    #[serde(rename = "type", default = "default_stream_type")]
    pub stream_type: String,
    /// ClearKey DRM key material (key id -> key), empty for unencrypted streams.
    #[serde(rename = "clearKey", default)]
    pub clear_key: HashMap<String, String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_stream_type() -> String {
    "dash".to_string()
}
