/// Persisted playback status
use crate::error::{KazooError, Result};
use serde::{Deserialize, Serialize};

/// Bot playback status, persisted as a singleton row
///
/// A small closed state machine with explicit transition functions rather
/// than ad hoc reads and writes of a status column. Illegal transitions
/// (e.g., resuming while stopped) are rejected with `IllegalTransition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    /// Nothing is playing
    Stopped,

    /// A stream is active
    Playing,

    /// A stream is paused mid-song
    Paused,
}

impl BotStatus {
    /// Begin playing from an idle state
    pub fn start_playing(self) -> Result<Self> {
        match self {
            BotStatus::Stopped => Ok(BotStatus::Playing),
            other => Err(other.illegal("start_playing")),
        }
    }

    /// Stop from any state (idempotent)
    pub fn stop(self) -> Self {
        BotStatus::Stopped
    }

    /// Pause an active stream
    pub fn pause(self) -> Result<Self> {
        match self {
            BotStatus::Playing => Ok(BotStatus::Paused),
            other => Err(other.illegal("pause")),
        }
    }

    /// Resume a paused stream
    pub fn resume(self) -> Result<Self> {
        match self {
            BotStatus::Paused => Ok(BotStatus::Playing),
            other => Err(other.illegal("resume")),
        }
    }

    /// Database column value
    pub fn as_str(self) -> &'static str {
        match self {
            BotStatus::Stopped => "stopped",
            BotStatus::Playing => "playing",
            BotStatus::Paused => "paused",
        }
    }

    /// Parse a database column value
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "stopped" => Ok(BotStatus::Stopped),
            "playing" => Ok(BotStatus::Playing),
            "paused" => Ok(BotStatus::Paused),
            other => Err(KazooError::invalid_request(format!(
                "unknown bot status: {other}"
            ))),
        }
    }

    fn illegal(self, attempted: &str) -> KazooError {
        KazooError::IllegalTransition {
            from: self.as_str().to_string(),
            attempted: attempted.to_string(),
        }
    }
}

impl Default for BotStatus {
    fn default() -> Self {
        BotStatus::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_transitions() {
        let playing = BotStatus::Stopped.start_playing().unwrap();
        assert_eq!(playing, BotStatus::Playing);

        let paused = playing.pause().unwrap();
        assert_eq!(paused, BotStatus::Paused);

        let resumed = paused.resume().unwrap();
        assert_eq!(resumed, BotStatus::Playing);

        assert_eq!(resumed.stop(), BotStatus::Stopped);
    }

    #[test]
    fn resume_while_stopped_rejected() {
        assert!(BotStatus::Stopped.resume().is_err());
    }

    #[test]
    fn pause_while_stopped_rejected() {
        assert!(BotStatus::Stopped.pause().is_err());
    }

    #[test]
    fn start_playing_while_playing_rejected() {
        assert!(BotStatus::Playing.start_playing().is_err());
    }

    #[test]
    fn stop_is_idempotent() {
        assert_eq!(BotStatus::Stopped.stop(), BotStatus::Stopped);
        assert_eq!(BotStatus::Paused.stop(), BotStatus::Stopped);
    }

    #[test]
    fn round_trips_column_value() {
        for status in [BotStatus::Stopped, BotStatus::Playing, BotStatus::Paused] {
            assert_eq!(BotStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(BotStatus::parse("bogus").is_err());
    }
}
