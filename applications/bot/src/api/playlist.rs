/// Playlist API routes
use crate::{
    error::Result,
    middleware::AuthenticatedUser,
    services::jukebox,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use kazoo_core::types::Song;
use kazoo_core::SongStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub songs: Vec<Song>,
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub song: Song,
    pub already_saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct RemoveParams {
    pub url: String,
}

/// GET /api/playlist - The authenticated user's saved songs
pub async fn list(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<PlaylistResponse>> {
    let owner = app_state.store.get_or_create_user(user.username()).await?;
    let songs = app_state.store.get_playlist(&owner).await?;
    Ok(Json(PlaylistResponse { songs }))
}

/// POST /api/playlist - Resolve a query and save it to the playlist
pub async fn add(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>> {
    let (song, already_saved) = jukebox::resolve_and_save(
        app_state.store.as_ref(),
        app_state.resolver.as_ref(),
        &req.query,
        user.username(),
    )
    .await?;

    Ok(Json(SaveResponse { song, already_saved }))
}

/// DELETE /api/playlist?url=... - Remove a saved song by URL
pub async fn remove(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<RemoveParams>,
) -> Result<Json<PlaylistResponse>> {
    let owner = app_state.store.get_or_create_user(user.username()).await?;
    app_state.store.remove_from_playlist(&owner, &params.url).await?;

    let songs = app_state.store.get_playlist(&owner).await?;
    Ok(Json(PlaylistResponse { songs }))
}
