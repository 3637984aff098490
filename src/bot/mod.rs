//! Discord bot integration.
//!
//! This module contains the gateway event handler, slash command registration
//! and dispatch, and the embed builders used for command replies. The bot
//! registers its commands globally when the gateway reports ready and routes
//! each command interaction to its handler; every handler runs as an
//! independent task, so shared resources live in [`crate::state::AppState`].

pub mod command;
pub mod embed;
pub mod start;
