// API request payload types

use serde::Deserialize;
use std::collections::HashMap;

use crate::channel::Channel;

/// Body of `POST /channels`.
///
/// All fields default so a missing `name` or `url` deserializes as empty and
/// is rejected by validation instead of failing the parse.
#[derive(Debug, Default, Deserialize)]
pub struct NewChannel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type")]
    pub stream_type: Option<String>,
    #[serde(rename = "clearKey")]
    pub clear_key: Option<HashMap<String, String>>,
}

impl NewChannel {
    /// A channel needs a non-empty name and an `http`-prefixed URL.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.url.starts_with("http")
    }

    /// Build the stored record, applying defaults for the optional fields.
    pub fn into_channel(self) -> Channel {
        Channel {
            name: self.name,
            url: self.url,
            stream_type: self.stream_type.unwrap_or_else(|| "dash".to_string()),
            clear_key: self.clear_key.unwrap_or_default(),
        }
    }
}
