/// Queue API routes
use crate::{
    error::Result,
    middleware::AuthenticatedUser,
    services::jukebox,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use kazoo_core::types::{QueueEntry, Song};
use kazoo_core::SongStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct QueueResponse {
    pub entries: Vec<QueueEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub song: Song,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: QueueEntry,
}

/// GET /api/queue - Current queue in play order
pub async fn list(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<QueueResponse>> {
    let entries = app_state.store.list_queue().await?;
    Ok(Json(QueueResponse { entries }))
}

/// POST /api/queue - Resolve a query and append it
pub async fn add(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<AddRequest>,
) -> Result<Json<AddResponse>> {
    let song = jukebox::resolve_and_enqueue(
        app_state.store.as_ref(),
        app_state.resolver.as_ref(),
        &app_state.coordinator,
        &req.query,
        user.username(),
    )
    .await?;

    Ok(Json(AddResponse { song }))
}

/// DELETE /api/queue/:position - Remove the entry at a zero-based position
pub async fn remove(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path(position): Path<usize>,
) -> Result<Json<RemoveResponse>> {
    let removed = app_state.store.remove_position(position).await?;
    Ok(Json(RemoveResponse { removed }))
}
