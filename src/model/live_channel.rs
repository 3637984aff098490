use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full persisted document: guild id (as a string) mapped to that guild's
/// live notification settings.
///
/// The whole document is the unit of read and write; every save rewrites the
/// entire file. A `BTreeMap` keeps the serialized output stable across saves.
pub type LiveChannelDocument = BTreeMap<String, LiveChannelRecord>;

/// Live notification settings for a single guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChannelRecord {
    /// Channel that receives live notifications, as a string id.
    pub channel_id: String,

    /// Ids of notification messages posted to the channel, so they can be
    /// edited or removed later. `null` until the notifier posts something;
    /// reset to `null` whenever the channel is reconfigured.
    #[serde(default)]
    pub message_ids: Option<Vec<String>>,
}

impl LiveChannelRecord {
    /// Creates a fresh record pointing at `channel_id` with no tracked messages.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            message_ids: None,
        }
    }
}
