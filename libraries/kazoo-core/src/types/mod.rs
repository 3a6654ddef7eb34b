//! Domain types shared across the workspace

mod queue;
mod song;
mod status;
mod user;

pub use queue::QueueEntry;
pub use song::Song;
pub use status::BotStatus;
pub use user::User;

/// Song identifier (SQLite rowid)
pub type SongId = i64;

/// User identifier (SQLite rowid)
pub type UserId = i64;
