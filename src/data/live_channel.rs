//! Persistence for per-guild live notification channel settings.
//!
//! Settings live in a single JSON file (`liveConfig.json`) under the data
//! directory: a top-level object keyed by guild id, each value holding the
//! configured channel id and a `messageIds` placeholder. There is no version
//! field and no migration path; the document is small and rewritten in full on
//! every change.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::store::StoreError;
use crate::model::live_channel::{LiveChannelDocument, LiveChannelRecord};

/// Name of the configuration file within the data directory.
pub const CONFIG_FILE: &str = "liveConfig.json";

/// Store providing read and upsert operations for live channel settings.
///
/// Commands from unrelated guilds can run concurrently, so every operation is
/// serialized behind an async mutex. Without it, two concurrent upserts could
/// both read the pre-update document and one guild's change would be lost on
/// the second write; and because a save truncates the file in place, an
/// unserialized read could observe a partially written document.
pub struct LiveChannelStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LiveChannelStore {
    /// Creates a store backed by `liveConfig.json` inside `data_dir`.
    ///
    /// The directory and file are created lazily on first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(CONFIG_FILE),
            lock: Mutex::new(()),
        }
    }

    /// Sets the live notification channel for a guild.
    ///
    /// Replaces any existing record for the guild in full: a previously stored
    /// `messageIds` value is discarded and reset to `null`. Records for other
    /// guilds are preserved. The document is then rewritten to disk.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose settings are being updated
    /// - `channel_id` - Channel that should receive live notifications
    ///
    /// # Returns
    /// - `Ok(())` - Document updated and persisted
    /// - `Err(StoreError)` - The existing file could not be read or parsed, or
    ///   the updated document could not be written
    pub async fn upsert(&self, guild_id: u64, channel_id: u64) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let mut document = self.load().await?;
        document.insert(
            guild_id.to_string(),
            LiveChannelRecord::new(channel_id.to_string()),
        );

        self.save(&document).await
    }

    /// Looks up the stored record for a guild, if any.
    ///
    /// Takes the store lock: saves truncate the file in place, so a read that
    /// overlapped one could see a partial document.
    ///
    /// # Returns
    /// - `Ok(Some(LiveChannelRecord))` - The guild has a configured channel
    /// - `Ok(None)` - No record stored for the guild (or no file yet)
    /// - `Err(StoreError)` - The file could not be read or parsed
    pub async fn get(&self, guild_id: u64) -> Result<Option<LiveChannelRecord>, StoreError> {
        let _guard = self.lock.lock().await;

        let mut document = self.load().await?;
        Ok(document.remove(&guild_id.to_string()))
    }

    /// Reads the full document from disk, or an empty document if the file does
    /// not exist yet.
    async fn load(&self) -> Result<LiveChannelDocument, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(LiveChannelDocument::new()),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serializes the full document and overwrites the file, creating the data
    /// directory first if needed.
    async fn save(&self, document: &LiveChannelDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
        }

        let json = serde_json::to_string_pretty(document).map_err(StoreError::Serialize)?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
