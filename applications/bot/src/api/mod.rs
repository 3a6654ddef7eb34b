/// HTTP API routes
pub mod auth;
pub mod health;
pub mod playback;
pub mod playlist;
pub mod queue;

use crate::{middleware, services::AuthService, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP facade router
pub fn create_router(app_state: AppState, auth_service: Arc<AuthService>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/auth/login", post(auth::login));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        // Playback control
        .route("/playback/play", post(playback::play))
        .route("/playback/pause", post(playback::pause))
        .route("/playback/resume", post(playback::resume))
        .route("/playback/skip", post(playback::skip))
        .route("/playback/replay", post(playback::replay))
        .route("/playback/current", get(playback::current))
        // Queue
        .route("/queue", get(queue::list))
        .route("/queue", post(queue::add))
        .route("/queue/:position", delete(queue::remove))
        // Playlist
        .route("/playlist", get(playlist::list))
        .route("/playlist", post(playlist::add))
        .route("/playlist", delete(playlist::remove))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
