/// Queue entry domain type
use super::{Song, User};
use serde::{Deserialize, Serialize};

/// One (song, requesting user) pair awaiting playback
///
/// Insertion order is play order; position 0 is the head (the next or
/// currently playing song).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Zero-based position in the queue
    pub position: usize,

    /// The queued song
    pub song: Song,

    /// The user who requested it
    pub user: User,
}
