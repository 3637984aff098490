//! Application state shared across command invocations.
//!
//! The state is initialized once during startup and shared with the Discord
//! event handler behind an `Arc`. It holds the file-backed store and the QR
//! render service; both are safe to use from concurrently running commands.

use crate::config::Config;
use crate::data::live_channel::LiveChannelStore;
use crate::service::qr::QrRenderService;

/// Shared resources available to every command handler.
pub struct AppState {
    /// Per-guild live notification channel settings.
    pub live_channels: LiveChannelStore,

    /// Renderer producing QR code images in the temp directory.
    pub qr_renderer: QrRenderService,
}

impl AppState {
    /// Creates the application state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            live_channels: LiveChannelStore::new(&config.data_dir),
            qr_renderer: QrRenderService::new(&config.temp_dir),
        }
    }
}
