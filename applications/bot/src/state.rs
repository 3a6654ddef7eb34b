/// Shared application state
use crate::services::AuthService;
use kazoo_playback::Coordinator;
use kazoo_resolver::Resolver;
use kazoo_storage::SqliteSongStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteSongStore>,
    pub coordinator: Arc<Coordinator>,
    pub resolver: Arc<dyn Resolver>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        store: Arc<SqliteSongStore>,
        coordinator: Arc<Coordinator>,
        resolver: Arc<dyn Resolver>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            store,
            coordinator,
            resolver,
            auth_service,
        }
    }
}
