//! Kazoo Bot Library
//!
//! Discord music bot with a persisted queue, per-user playlists, and a
//! small authenticated HTTP facade mirroring the chat commands.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
pub mod transport;

// Re-export commonly used types for convenience
pub use config::BotConfig;
pub use error::{AppError, Result};
pub use services::{auth::AuthService, jukebox};
pub use state::AppState;
pub use transport::SongbirdTransport;
