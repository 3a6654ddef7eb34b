//! Queue and playback coordinator
//!
//! All playback decisions funnel through here. The head of the persisted
//! queue is the current song; it stays in the table while it streams and
//! is removed only on completion, skip, or setup failure, so a crash can
//! never lose the song that was playing.
//!
//! Operations serialize on an internal lock. Two transient flags carry
//! state between an operation and the stream-end notification it will
//! trigger: `is_playing` marks an active stream, `suppress_end` marks a
//! stop we issued ourselves (skip, replay) whose end event must not
//! dequeue anything.

use crate::transport::{PlaybackSource, Transport, TransportEvent};
use kazoo_core::types::{BotStatus, QueueEntry, Song, User};
use kazoo_core::{KazooError, Result, SongStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// What a skip request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipOutcome {
    /// The named song was stopped and removed from the queue
    Skipped(Song),
    /// No stream was active; nothing changed
    NothingPlaying,
}

/// Queue and playback coordinator
pub struct Coordinator {
    store: Arc<dyn SongStore>,
    transport: Arc<dyn Transport>,
    op_lock: Mutex<()>,
    is_playing: AtomicBool,
    suppress_end: AtomicBool,
}

impl Coordinator {
    pub fn new(store: Arc<dyn SongStore>, transport: Arc<dyn Transport>) -> Self {
        Self {
            store,
            transport,
            op_lock: Mutex::new(()),
            is_playing: AtomicBool::new(false),
            suppress_end: AtomicBool::new(false),
        }
    }

    /// Append a song to the queue and start it if nothing is playing
    pub async fn enqueue(&self, song: &Song, user: &User) -> Result<()> {
        self.store.enqueue(song, user).await?;
        self.start_next_if_idle().await?;
        Ok(())
    }

    /// Start streaming the queue head when idle
    ///
    /// Returns whether a stream was started. A transport failure drops the
    /// head entry and reports `false`; the next poll tick will try the
    /// following song.
    pub async fn start_next_if_idle(&self) -> Result<bool> {
        let _guard = self.op_lock.lock().await;

        if self.is_playing.load(Ordering::SeqCst) {
            return Ok(false);
        }

        let Some((song, _user)) = self.store.peek_head().await? else {
            return Ok(false);
        };

        self.begin_stream(&song).await
    }

    /// Handle a stream-end notification from the transport
    ///
    /// Stops we issued ourselves (skip, replay) are swallowed; a natural
    /// completion removes the head entry and marks the bot stopped. The
    /// removal is keyed on the song URL, so a stale notification for a
    /// song that is no longer at the head changes nothing.
    pub async fn on_stream_end(&self, song_url: &str) -> Result<()> {
        if self.suppress_end.swap(false, Ordering::SeqCst) {
            debug!(url = %song_url, "suppressed stream end after deliberate stop");
            return Ok(());
        }

        let _guard = self.op_lock.lock().await;

        self.is_playing.store(false, Ordering::SeqCst);
        if self.store.pop_head_for(song_url).await? {
            info!(url = %song_url, "song finished");
        }
        self.store.set_status(BotStatus::Stopped).await?;

        Ok(())
    }

    /// Stop the current song and remove it from the queue
    ///
    /// Skip does its own head removal rather than relying on the end
    /// notification, so two rapid skips can never drop two entries for
    /// one playing song.
    pub async fn skip(&self) -> Result<SkipOutcome> {
        let _guard = self.op_lock.lock().await;

        if !self.is_playing.load(Ordering::SeqCst) {
            return Ok(SkipOutcome::NothingPlaying);
        }

        let head = self.store.peek_head().await?;

        self.suppress_end.store(true, Ordering::SeqCst);
        if let Err(err) = self.transport.stop().await {
            warn!(%err, "failed to stop stream during skip");
            self.suppress_end.store(false, Ordering::SeqCst);
        }

        self.is_playing.store(false, Ordering::SeqCst);
        self.store.set_status(BotStatus::Stopped).await?;

        match head {
            Some((song, _user)) => {
                self.store.pop_head_for(&song.url).await?;
                info!(url = %song.url, "song skipped");
                Ok(SkipOutcome::Skipped(song))
            }
            None => Ok(SkipOutcome::NothingPlaying),
        }
    }

    /// Restart the queue head from the beginning without dequeuing it
    ///
    /// Returns the song being replayed, or `None` when the queue is empty.
    pub async fn replay(&self) -> Result<Option<Song>> {
        let _guard = self.op_lock.lock().await;

        let Some((song, _user)) = self.store.peek_head().await? else {
            return Ok(None);
        };

        if self.is_playing.load(Ordering::SeqCst) {
            self.suppress_end.store(true, Ordering::SeqCst);
            if let Err(err) = self.transport.stop().await {
                warn!(%err, "failed to stop stream during replay");
            }
        }

        if self.begin_stream(&song).await? {
            Ok(Some(song))
        } else {
            Ok(None)
        }
    }

    /// Pause the current stream
    ///
    /// Returns `false` when the persisted status does not allow pausing
    /// (nothing playing, or already paused), or when the transport has no
    /// active stream to pause.
    pub async fn pause(&self) -> Result<bool> {
        let _guard = self.op_lock.lock().await;

        let status = self.store.get_status().await?;
        match status.pause() {
            Ok(next) => {
                if let Err(err) = self.transport.pause().await {
                    warn!(%err, "transport rejected pause");
                    return Ok(false);
                }
                self.store.set_status(next).await?;
                Ok(true)
            }
            Err(KazooError::IllegalTransition { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Resume a paused stream
    ///
    /// Returns `false` when the persisted status does not allow resuming,
    /// or when the transport has no stream to resume.
    pub async fn resume(&self) -> Result<bool> {
        let _guard = self.op_lock.lock().await;

        let status = self.store.get_status().await?;
        match status.resume() {
            Ok(next) => {
                if let Err(err) = self.transport.resume().await {
                    warn!(%err, "transport rejected resume");
                    return Ok(false);
                }
                self.store.set_status(next).await?;
                Ok(true)
            }
            Err(KazooError::IllegalTransition { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Disconnect from voice and reset playback state
    ///
    /// Idempotent; leaving while not connected is a no-op. The queue is
    /// left untouched apart from the head entry, which the trailing end
    /// notification of an active stream removes as an abandoned song.
    pub async fn leave(&self) -> Result<()> {
        let _guard = self.op_lock.lock().await;

        self.is_playing.store(false, Ordering::SeqCst);
        self.suppress_end.store(false, Ordering::SeqCst);

        if let Err(err) = self.transport.disconnect().await {
            warn!(%err, "failed to disconnect from voice");
        }
        self.store.reset_status().await?;

        Ok(())
    }

    /// The entry currently streaming, if any
    pub async fn now_playing(&self) -> Result<Option<QueueEntry>> {
        if !self.is_playing.load(Ordering::SeqCst) {
            return Ok(None);
        }

        Ok(self.store.peek_head().await?.map(|(song, user)| QueueEntry {
            position: 0,
            song,
            user,
        }))
    }

    /// Whether a stream is active right now
    pub fn is_playing(&self) -> bool {
        self.is_playing.load(Ordering::SeqCst)
    }

    /// Run the coordinator's event loop
    ///
    /// Ticks at `poll_interval` to advance the queue and drains stream-end
    /// notifications from the transport. Errors are logged and the loop
    /// keeps running; it exits only when the event channel closes.
    pub fn spawn(
        self: &Arc<Self>,
        mut events: mpsc::UnboundedReceiver<TransportEvent>,
        poll_interval: Duration,
    ) -> JoinHandle<()> {
        let coordinator = Arc::clone(self);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(err) = coordinator.start_next_if_idle().await {
                            warn!(%err, "queue poll failed");
                        }
                    }
                    event = events.recv() => {
                        let Some(TransportEvent::StreamEnded { song_url }) = event else {
                            debug!("transport event channel closed, stopping loop");
                            break;
                        };
                        if let Err(err) = coordinator.on_stream_end(&song_url).await {
                            warn!(%err, "stream-end handling failed");
                        }
                    }
                }
            }
        })
    }

    /// Connect and start streaming one song; must hold `op_lock`
    async fn begin_stream(&self, song: &Song) -> Result<bool> {
        let source = PlaybackSource::for_song(song);

        let setup = async {
            self.transport.connect().await?;
            self.transport.play(&source, &song.url).await
        };

        match setup.await {
            Ok(()) => {
                self.is_playing.store(true, Ordering::SeqCst);
                self.store.set_status(BotStatus::Playing).await?;
                info!(url = %song.url, title = %song.title, "now playing");
                Ok(true)
            }
            Err(err) => {
                warn!(%err, url = %song.url, "stream setup failed, dropping queue entry");
                self.is_playing.store(false, Ordering::SeqCst);
                self.suppress_end.store(false, Ordering::SeqCst);
                self.store.pop_head_for(&song.url).await?;
                self.store.set_status(BotStatus::Stopped).await?;
                Ok(false)
            }
        }
    }
}
