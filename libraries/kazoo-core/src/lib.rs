//! Kazoo Core
//!
//! Platform-agnostic core types, traits, and error handling for the Kazoo
//! music bot.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `User`, `QueueEntry`, `BotStatus`
//! - **Core Traits**: `SongStore` (the persistence contract the playback
//!   coordinator is written against)
//! - **Error Handling**: Unified `KazooError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use kazoo_core::types::{BotStatus, Song};
//!
//! let song = Song::new("Never Gonna Give You Up", "https://youtu.be/dQw4w9WgXcQ");
//! assert!(song.file_path.is_none());
//!
//! let status = BotStatus::Stopped.start_playing().unwrap();
//! assert_eq!(status, BotStatus::Playing);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{KazooError, Result};
pub use traits::SongStore;
pub use types::{BotStatus, QueueEntry, Song, User};
