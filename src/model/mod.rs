//! Domain models persisted or exchanged by the application.

pub mod live_channel;
