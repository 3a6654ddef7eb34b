//! Songbird-backed voice transport
//!
//! Bridges the coordinator's `Transport` contract onto a single guild's
//! voice connection. The target channel is captured from whoever last
//! issued a play command; stream-end notifications flow back to the
//! coordinator over an unbounded channel.

use async_trait::async_trait;
use kazoo_core::{KazooError, Result};
use kazoo_playback::{PlaybackSource, Transport, TransportEvent};
use serenity::all::{ChannelId, GuildId};
use songbird::input::{File as FileInput, YoutubeDl};
use songbird::tracks::TrackHandle;
use songbird::{Event, EventContext, EventHandler, Songbird, TrackEvent};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, RwLock};
use tracing::debug;

/// Voice transport over a songbird manager
pub struct SongbirdTransport {
    manager: Arc<Songbird>,
    http_client: reqwest::Client,
    events: mpsc::UnboundedSender<TransportEvent>,
    target: RwLock<Option<(GuildId, ChannelId)>>,
    current: Mutex<Option<TrackHandle>>,
}

/// Track-end handler that forwards the event to the coordinator
///
/// Only `TrackEvent::End` is registered; songbird fires it for natural
/// completion, deliberate stops, and errored tracks alike, so the
/// coordinator sees exactly one notification per stream.
struct StreamEndNotifier {
    song_url: String,
    events: mpsc::UnboundedSender<TransportEvent>,
}

#[async_trait]
impl EventHandler for StreamEndNotifier {
    async fn act(&self, _ctx: &EventContext<'_>) -> Option<Event> {
        debug!(url = %self.song_url, "track ended");
        let _ = self.events.send(TransportEvent::StreamEnded {
            song_url: self.song_url.clone(),
        });
        None
    }
}

impl SongbirdTransport {
    pub fn new(manager: Arc<Songbird>, events: mpsc::UnboundedSender<TransportEvent>) -> Self {
        Self {
            manager,
            http_client: reqwest::Client::new(),
            events,
            target: RwLock::new(None),
            current: Mutex::new(None),
        }
    }

    /// Record which guild and voice channel playback should go to
    ///
    /// Called by chat commands with the requesting user's voice channel.
    pub async fn set_target(&self, guild_id: GuildId, channel_id: ChannelId) {
        *self.target.write().await = Some((guild_id, channel_id));
    }

    async fn target(&self) -> Result<(GuildId, ChannelId)> {
        (*self.target.read().await).ok_or(KazooError::NotConnected)
    }
}

#[async_trait]
impl Transport for SongbirdTransport {
    async fn connect(&self) -> Result<()> {
        let (guild_id, channel_id) = self.target().await?;

        if self.manager.get(guild_id).is_some() {
            return Ok(());
        }

        self.manager
            .join(guild_id, channel_id)
            .await
            .map_err(|e| KazooError::transport(format!("failed to join voice channel: {e}")))?;

        Ok(())
    }

    async fn is_connected(&self) -> bool {
        match self.target.read().await.as_ref() {
            Some((guild_id, _)) => self.manager.get(*guild_id).is_some(),
            None => false,
        }
    }

    async fn play(&self, source: &PlaybackSource, song_url: &str) -> Result<()> {
        let (guild_id, _) = self.target().await?;
        let call = self.manager.get(guild_id).ok_or(KazooError::NotConnected)?;

        let input = match source {
            PlaybackSource::File(path) => FileInput::new(path.clone()).into(),
            PlaybackSource::Remote(url) => {
                YoutubeDl::new(self.http_client.clone(), url.clone()).into()
            }
        };

        let mut call = call.lock().await;
        let handle = call.play_only_input(input);

        handle
            .add_event(
                Event::Track(TrackEvent::End),
                StreamEndNotifier {
                    song_url: song_url.to_string(),
                    events: self.events.clone(),
                },
            )
            .map_err(|e| KazooError::transport(format!("failed to attach end handler: {e}")))?;

        *self.current.lock().await = Some(handle);

        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        let handle = self.current.lock().await.take();
        match handle {
            Some(handle) => handle
                .stop()
                .map_err(|e| KazooError::transport(format!("failed to stop track: {e}"))),
            None => Ok(()),
        }
    }

    async fn pause(&self) -> Result<()> {
        let guard = self.current.lock().await;
        let handle = guard.as_ref().ok_or(KazooError::NotConnected)?;
        handle
            .pause()
            .map_err(|e| KazooError::transport(format!("failed to pause track: {e}")))
    }

    async fn resume(&self) -> Result<()> {
        let guard = self.current.lock().await;
        let handle = guard.as_ref().ok_or(KazooError::NotConnected)?;
        handle
            .play()
            .map_err(|e| KazooError::transport(format!("failed to resume track: {e}")))
    }

    async fn disconnect(&self) -> Result<()> {
        self.current.lock().await.take();

        let Some((guild_id, _)) = *self.target.read().await else {
            return Ok(());
        };

        if self.manager.get(guild_id).is_some() {
            self.manager
                .remove(guild_id)
                .await
                .map_err(|e| KazooError::transport(format!("failed to leave voice: {e}")))?;
        }

        Ok(())
    }
}
