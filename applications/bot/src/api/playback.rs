/// Playback control API routes
use crate::{
    error::Result,
    middleware::AuthenticatedUser,
    services::jukebox,
    state::AppState,
};
use axum::{extract::State, Json};
use kazoo_core::types::{QueueEntry, Song};
use kazoo_playback::SkipOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub song: Song,
}

#[derive(Debug, Serialize)]
pub struct ControlResponse {
    pub applied: bool,
}

#[derive(Debug, Serialize)]
pub struct SkipResponse {
    pub skipped: Option<Song>,
}

#[derive(Debug, Serialize)]
pub struct ReplayResponse {
    pub replayed: Option<Song>,
}

#[derive(Debug, Serialize)]
pub struct CurrentResponse {
    pub playing: Option<QueueEntry>,
}

/// POST /api/playback/play - Resolve a query and enqueue it
pub async fn play(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<PlayRequest>,
) -> Result<Json<PlayResponse>> {
    let song = jukebox::resolve_and_enqueue(
        app_state.store.as_ref(),
        app_state.resolver.as_ref(),
        &app_state.coordinator,
        &req.query,
        user.username(),
    )
    .await?;

    Ok(Json(PlayResponse { song }))
}

/// POST /api/playback/pause
pub async fn pause(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<ControlResponse>> {
    let applied = app_state.coordinator.pause().await?;
    Ok(Json(ControlResponse { applied }))
}

/// POST /api/playback/resume
pub async fn resume(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<ControlResponse>> {
    let applied = app_state.coordinator.resume().await?;
    Ok(Json(ControlResponse { applied }))
}

/// POST /api/playback/skip
pub async fn skip(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<SkipResponse>> {
    let skipped = match app_state.coordinator.skip().await? {
        SkipOutcome::Skipped(song) => Some(song),
        SkipOutcome::NothingPlaying => None,
    };
    Ok(Json(SkipResponse { skipped }))
}

/// POST /api/playback/replay - Restart the current song
pub async fn replay(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<ReplayResponse>> {
    let replayed = app_state.coordinator.replay().await?;
    Ok(Json(ReplayResponse { replayed }))
}

/// GET /api/playback/current
pub async fn current(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<CurrentResponse>> {
    let playing = app_state.coordinator.now_playing().await?;
    Ok(Json(CurrentResponse { playing }))
}
